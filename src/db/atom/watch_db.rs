/*!
Watch lists.

Two-watched-literal BCP only ever needs to inspect the clauses watching the literal which has
*just* become false. So, per atom, four lists are kept: positive and negative binary clauses, and
positive and negative long (3+ literal) clauses. Binary clauses need no watch-pointer update (the
other literal is always the thing to check), so they are split from long clauses to avoid
touching the general scan path for the common case.

See Knuth's TAOCP 7.2.2.2 and the Chaff paper (Moskewicz et al., 2001) for the underlying
two-watched-literal scheme.
*/

use crate::db::ClauseKey;
use crate::structures::literal::CLiteral;

/// A watch on a binary clause: the clause's *other* literal, checked directly without touching
/// the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    /// The literal of the clause other than the one being watched.
    pub literal: CLiteral,

    /// The key of the watched clause.
    pub key: ClauseKey,
}

/// A watch on a long (3+ literal) clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongWatch {
    /// The key of the watched clause.
    pub key: ClauseKey,
}

/// The outcome of examining a clause watching a just-falsified literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchStatus {
    /// Some other literal of the clause is already true: the watch is kept as-is.
    Witness,

    /// No other literal is true or false: the watch was moved to that literal.
    None,

    /// Every other literal is false and the remaining watched literal is unassigned: the clause
    /// is unit, asserting the given literal.
    Unit(CLiteral),

    /// Every literal of the clause is false.
    Conflict,
}

/// The four watch lists maintained for a single atom.
#[derive(Clone, Debug, Default)]
pub struct WatchDB {
    /// Binary clauses watching the atom with positive polarity.
    pub positive_binary: Vec<BinaryWatch>,

    /// Binary clauses watching the atom with negative polarity.
    pub negative_binary: Vec<BinaryWatch>,

    /// Long clauses watching the atom with positive polarity.
    pub positive_long: Vec<LongWatch>,

    /// Long clauses watching the atom with negative polarity.
    pub negative_long: Vec<LongWatch>,
}

impl WatchDB {
    /// The binary watch list relevant when the atom is falsified with the given polarity, i.e.
    /// the list of clauses containing the literal of that polarity.
    pub fn binary_watches(&self, polarity: bool) -> &Vec<BinaryWatch> {
        match polarity {
            true => &self.positive_binary,
            false => &self.negative_binary,
        }
    }

    /// As [binary_watches](Self::binary_watches), mutably.
    pub fn binary_watches_mut(&mut self, polarity: bool) -> &mut Vec<BinaryWatch> {
        match polarity {
            true => &mut self.positive_binary,
            false => &mut self.negative_binary,
        }
    }

    /// The long watch list relevant when the atom is falsified with the given polarity.
    pub fn long_watches(&self, polarity: bool) -> &Vec<LongWatch> {
        match polarity {
            true => &self.positive_long,
            false => &self.negative_long,
        }
    }

    /// As [long_watches](Self::long_watches), mutably.
    pub fn long_watches_mut(&mut self, polarity: bool) -> &mut Vec<LongWatch> {
        match polarity {
            true => &mut self.positive_long,
            false => &mut self.negative_long,
        }
    }
}
