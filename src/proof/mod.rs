/*!
Extracting and checking a resolution proof from the clauses stored during a solve.

Every learnt or simplified clause's [Premise](crate::structures::clause::Premise) records enough
to reconstruct how it was derived; [dag] normalizes that into a [Step] on demand, rather than
maintaining a separate proof structure eagerly during search.
*/

pub mod dag;
pub use dag::{check, expand, unsat_core, ProofNode, Step};
