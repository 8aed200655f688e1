/*!
Provenance of a stored clause.

A [Premise] is the node payload of the proof DAG (see [proof](crate::proof)): it records
how a clause came to exist, in just enough detail that [proof::dag](crate::proof::dag) can
expand it into a derivation step on demand.
*/

use crate::db::ClauseKey;

/// An opaque tag attached to a theory-originated lemma.
///
/// The core never interprets this value; it is handed back to the theory that produced it
/// (e.g. when printing a proof) and otherwise treated as an identifier.
pub type LemmaTag = u32;

/// An opaque tag a caller may attach to a clause added through
/// [assume](crate::context::GenericContext::assume), independent of its [Premise]. The
/// core never interprets this value.
pub type UserTag = u32;

/// How a clause was derived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Premise {
    /// An original clause, given to the solver directly by the caller.
    Hypothesis,

    /// A unit clause local to the current `solve` call, recording one of its assumptions.
    /// Kept distinct from [Hypothesis](Premise::Hypothesis) so proof printing can tag it as
    /// scoped to the assumption layer rather than the formula proper.
    LocalAssumption,

    /// A clause asserted by a theory, carrying the theory's own opaque justification tag.
    TheoryLemma(LemmaTag),

    /// A clause identical to `parent` up to removed duplicate literals.
    Simplified(ClauseKey),

    /// A clause derived by a chain of pairwise resolutions over the given parents, in order.
    History(Vec<ClauseKey>),
}

impl Premise {
    /// A short name for the clause, as used in proof printing: `H<n>` for a hypothesis,
    /// `A<n>` for a local assumption, `T<n>` for a theory lemma, and `C<n>` for anything
    /// derived, chasing `Simplified` links back to their ultimate ancestor.
    pub fn name(&self, index: usize) -> String {
        match self {
            Premise::Hypothesis => format!("H{index}"),
            Premise::LocalAssumption => format!("A{index}"),
            Premise::TheoryLemma(_) => format!("T{index}"),
            Premise::Simplified(_) | Premise::History(_) => format!("C{index}"),
        }
    }

    /// A short tag describing the kind of premise, independent of any index.
    pub fn tag(&self) -> PremiseTag {
        match self {
            Premise::Hypothesis => PremiseTag::Hypothesis,
            Premise::LocalAssumption => PremiseTag::LocalAssumption,
            Premise::TheoryLemma(_) => PremiseTag::TheoryLemma,
            Premise::Simplified(_) => PremiseTag::Simplified,
            Premise::History(_) => PremiseTag::History,
        }
    }
}

/// The kind of a [Premise], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PremiseTag {
    Hypothesis,
    LocalAssumption,
    TheoryLemma,
    Simplified,
    History,
}
