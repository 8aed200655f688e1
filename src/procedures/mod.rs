/*!
The algorithms that drive a solve, factored out of [context](crate::context) so each can be read
(and tested) independent of how a context wires them together.
*/

pub mod analysis;
pub mod assumptions;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod solve;
