/*!
A clause as stored in the clause database: the literals themselves, the key used to find it
again, and its [Premise].
*/

use crate::{
    db::ClauseKey,
    structures::clause::{CClause, Clause, Premise, UserTag},
};

/// A clause together with its key and provenance.
#[derive(Clone, Debug)]
pub struct DBClause {
    key: ClauseKey,
    clause: CClause,
    premise: Premise,

    /// Cleared by [mark_dead](Self::mark_dead). Checked before a clause is consulted during BCP
    /// or handed out by [proof](crate::proof) expansion; idempotent, so a double-delete is a
    /// no-op rather than an error.
    active: bool,

    /// An opaque caller-supplied tag, independent of [Premise]; see
    /// [UserTag].
    tag: Option<UserTag>,

    /// Whether the clause is a [Hypothesis](Premise::Hypothesis) added for the life of the
    /// context, as opposed to a non-permanent clause scoped to the local assumption layer the
    /// clause was added under. A non-permanent clause is always [Premise::LocalAssumption], and
    /// is retracted the same way any other local assumption is: by backtracking past the level
    /// it was asserted at, not by being marked dead. This field only records the distinction for
    /// introspection; it plays no role in retraction itself.
    permanent: bool,
}

impl DBClause {
    /// A fresh, permanent, untagged clause record.
    pub fn new(key: ClauseKey, clause: CClause, premise: Premise) -> Self {
        Self {
            key,
            clause,
            premise,
            active: true,
            tag: None,
            permanent: true,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The literals of the clause, mutably.
    pub fn clause_mut(&mut self) -> &mut CClause {
        &mut self.clause
    }

    /// The provenance of the clause.
    pub fn premise(&self) -> &Premise {
        &self.premise
    }

    /// Whether the clause is still active (not marked dead).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the clause dead. Idempotent.
    pub fn mark_dead(&mut self) {
        self.active = false;
    }

    /// The caller-supplied tag, if any.
    pub fn tag(&self) -> Option<UserTag> {
        self.tag
    }

    /// Attaches a caller-supplied tag.
    pub fn set_tag(&mut self, tag: Option<UserTag>) {
        self.tag = tag;
    }

    /// Whether the clause survives a `refresh`.
    pub fn is_permanent(&self) -> bool {
        self.permanent
    }

    /// Marks the clause as scoped to the current solve call rather than permanent.
    pub fn set_non_permanent(&mut self) {
        self.permanent = false;
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} :: {}", self.key, self.clause.as_dimacs(true))
    }
}

impl std::ops::Deref for DBClause {
    type Target = CClause;

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}
