//! Generic utilities with no dependency on the rest of the library.
//!
//! Things here are useful independent of SAT solving and are kept free of `crate::` imports
//! (besides one another) so they could, in principle, be lifted into their own crate.

pub mod index_heap;
pub mod minimal_pcg;
