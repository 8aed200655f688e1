use crate::db::ClauseKey;

/// Why an atom was assigned the value it currently holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// The atom was chosen by the decision procedure.
    Decision,

    /// The atom was propagated by the (unique) literal of the named clause, all of whose other
    /// literals were already falsified.
    Propagated(ClauseKey),

    /// The atom was fixed by a local assumption, recorded as a unit clause scoped to the current
    /// `solve` call. Distinguished from [Propagated](Reason::Propagated) so proof printing can
    /// tag the step as a hypothesis local to the assumption layer rather than the formula proper.
    LocalAssumption(ClauseKey),
}

impl Reason {
    /// The clause which explains the assignment, if the assignment was not a decision.
    pub fn clause_key(&self) -> Option<ClauseKey> {
        match self {
            Reason::Decision => None,
            Reason::Propagated(key) | Reason::LocalAssumption(key) => Some(*key),
        }
    }
}
