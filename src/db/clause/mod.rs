/*!
The clause database.

Clauses are split by size (unit / binary / long) and by origin (original / addition), mirroring
the distinction encoded in [ClauseKey]. Units need no watches: their literal is fixed directly.
Binary and long clauses are attached to two watch lists on [the atom database](crate::db::atom)
so BCP only ever inspects clauses watching the literal that just became false.
*/

pub mod activity_glue;
pub use activity_glue::ActivityLBD;

pub mod db_clause;
pub use db_clause::DBClause;

use std::collections::HashMap;

use crate::{
    config::{ClauseDBConfig, LBD},
    db::{
        atom::{AtomDB, BinaryWatch, LongWatch},
        Activity, ClauseKey, FormulaIndex,
    },
    generic::index_heap::IndexHeap,
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, Premise},
        literal::Literal,
    },
    types::err::{self, ClauseDBError},
};

/// Rescale threshold for clause activity.
const ACTIVITY_RESCALE_LIMIT: Activity = 1e20;
const ACTIVITY_RESCALE_FACTOR: Activity = 1e-20;

/// The clause database.
pub struct ClauseDB {
    unit_original: HashMap<Atom, DBClause>,
    unit_addition: HashMap<Atom, DBClause>,

    binary_original: Vec<DBClause>,
    binary_addition: Vec<DBClause>,

    original: Vec<DBClause>,
    addition: Vec<Option<DBClause>>,

    /// Slots in `addition` freed by [remove_addition](Self::remove_addition), available for
    /// reuse. Populated but never drained, since nothing in the search loop removes clauses.
    empty_keys: Vec<FormulaIndex>,

    activity_heap: IndexHeap<ActivityLBD>,
    bump: Activity,
    decay: Activity,
    lbd_bound: LBD,
}

impl ClauseDB {
    /// A fresh, empty clause database.
    pub fn new(config: &ClauseDBConfig) -> Self {
        Self {
            unit_original: HashMap::default(),
            unit_addition: HashMap::default(),
            binary_original: Vec::default(),
            binary_addition: Vec::default(),
            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),
            activity_heap: IndexHeap::default(),
            bump: config.bump.value,
            decay: config.decay.value,
            lbd_bound: config.lbd_bound.value,
        }
    }

    /// Stores an original (formula) clause, dispatching on its size.
    pub fn store_original(
        &mut self,
        clause: CClause,
        premise: Premise,
    ) -> Result<ClauseKey, ClauseDBError> {
        match clause.len() {
            0 => Err(ClauseDBError::EmptyClause),
            1 => {
                let literal = clause[0];
                let key = ClauseKey::OriginalUnit(literal);
                self.unit_original
                    .insert(literal.atom(), DBClause::new(key, clause, premise));
                Ok(key)
            }
            2 => {
                let index = self.binary_original.len() as FormulaIndex;
                let key = ClauseKey::OriginalBinary(index);
                self.binary_original.push(DBClause::new(key, clause, premise));
                Ok(key)
            }
            _ => {
                let index = self.original.len() as FormulaIndex;
                let key = ClauseKey::Original(index);
                self.original.push(DBClause::new(key, clause, premise));
                Ok(key)
            }
        }
    }

    /// Stores a learnt clause, dispatching on its size.
    pub fn store_addition(
        &mut self,
        clause: CClause,
        premise: Premise,
        lbd: LBD,
    ) -> Result<ClauseKey, ClauseDBError> {
        match clause.len() {
            0 => Err(ClauseDBError::EmptyClause),
            1 => {
                let literal = clause[0];
                let key = ClauseKey::AdditionUnit(literal);
                self.unit_addition
                    .insert(literal.atom(), DBClause::new(key, clause, premise));
                Ok(key)
            }
            2 => {
                let index = self.binary_addition.len() as FormulaIndex;
                let key = ClauseKey::AdditionBinary(index);
                self.binary_addition.push(DBClause::new(key, clause, premise));
                Ok(key)
            }
            _ => {
                let index = match self.empty_keys.pop() {
                    Some(index) => index,
                    None => self.addition.len() as FormulaIndex,
                };
                let key = ClauseKey::Addition(index, 0);

                if index as usize == self.addition.len() {
                    self.addition.push(Some(DBClause::new(key, clause, premise)));
                } else {
                    self.addition[index as usize] = Some(DBClause::new(key, clause, premise));
                }

                self.activity_heap.add(index as usize, ActivityLBD {
                    activity: self.bump,
                    lbd,
                });
                self.activity_heap.activate(index as usize);

                log::trace!(target: targets::CLAUSE_DB, "Stored addition clause {key}");

                Ok(key)
            }
        }
    }

    /// Retrieves a clause by key.
    pub fn get(&self, key: ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(literal) => self
                .unit_original
                .get(&literal.atom())
                .ok_or(ClauseDBError::Missing),
            ClauseKey::AdditionUnit(literal) => self
                .unit_addition
                .get(&literal.atom())
                .ok_or(ClauseDBError::Missing),
            ClauseKey::OriginalBinary(index) => self
                .binary_original
                .get(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::AdditionBinary(index) => self
                .binary_addition
                .get(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Original(index) => self
                .original
                .get(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Addition(index, _token) => self
                .addition
                .get(index as usize)
                .and_then(|slot| slot.as_ref())
                .ok_or(ClauseDBError::Missing),
        }
    }

    /// Retrieves a clause by key, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(literal) => self
                .unit_original
                .get_mut(&literal.atom())
                .ok_or(ClauseDBError::Missing),
            ClauseKey::AdditionUnit(literal) => self
                .unit_addition
                .get_mut(&literal.atom())
                .ok_or(ClauseDBError::Missing),
            ClauseKey::OriginalBinary(index) => self
                .binary_original
                .get_mut(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::AdditionBinary(index) => self
                .binary_addition
                .get_mut(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Original(index) => self
                .original
                .get_mut(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Addition(index, _token) => self
                .addition
                .get_mut(index as usize)
                .and_then(|slot| slot.as_mut())
                .ok_or(ClauseDBError::Missing),
        }
    }

    /// Installs watches for a binary or long clause on `atom_db`. A no-op for unit clauses,
    /// which need no watch (their one literal is simply asserted).
    pub fn attach(&self, key: ClauseKey, atom_db: &mut AtomDB) -> Result<(), err::ClauseDBError> {
        match key {
            ClauseKey::OriginalUnit(_) | ClauseKey::AdditionUnit(_) => Ok(()),
            ClauseKey::OriginalBinary(_) | ClauseKey::AdditionBinary(_) => {
                let db_clause = self.get(key)?;
                let a = db_clause.clause()[0];
                let b = db_clause.clause()[1];
                atom_db
                    .watch_db_mut(a.atom())
                    .binary_watches_mut(a.polarity())
                    .push(BinaryWatch { literal: b, key });
                atom_db
                    .watch_db_mut(b.atom())
                    .binary_watches_mut(b.polarity())
                    .push(BinaryWatch { literal: a, key });
                Ok(())
            }
            ClauseKey::Original(_) | ClauseKey::Addition(_, _) => {
                let db_clause = self.get(key)?;
                let a = db_clause.clause()[0];
                let b = db_clause.clause()[1];
                atom_db
                    .watch_db_mut(a.atom())
                    .long_watches_mut(a.polarity())
                    .push(LongWatch { key });
                atom_db
                    .watch_db_mut(b.atom())
                    .long_watches_mut(b.polarity())
                    .push(LongWatch { key });
                Ok(())
            }
        }
    }

    /// Marks a clause dead. Idempotent; never called from the search loop today, kept for the
    /// same reason as [reduce_by](Self::reduce_by).
    pub fn mark_dead(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        self.get_mut(key)?.mark_dead();
        Ok(())
    }

    /// Removes an addition clause outright, freeing its slot for reuse and re-tokening future
    /// occupants of the slot. Not called anywhere in the search loop: nothing in this crate
    /// performs reduction. Kept because the slot-reuse bookkeeping (`empty_keys`) is otherwise
    /// untestable dead code, and the day `reduce_db` stops being a no-op this is what it calls.
    ///
    /// # Safety
    /// The caller must ensure no remaining watch or premise still references `key`.
    pub unsafe fn remove_addition(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        match key {
            ClauseKey::Addition(index, _) => {
                if self.addition.get(index as usize).is_none() {
                    return Err(ClauseDBError::Missing);
                }
                self.addition[index as usize] = None;
                self.activity_heap.remove(index as usize);
                self.empty_keys.push(index);
                Ok(())
            }
            _ => Err(ClauseDBError::InvalidKeyToken),
        }
    }

    /// Bumps the activity of a learnt clause. A no-op for any other kind of clause: only
    /// addition clauses are heap-tracked, matching that only `History`/`Simplified` premises
    /// bump activity during conflict analysis.
    pub fn bump_activity(&mut self, key: ClauseKey) {
        if let ClauseKey::Addition(index, _) = key {
            let bump = self.bump;
            self.activity_heap
                .apply_to_value_at_value_index(index as usize, move |v| ActivityLBD {
                    activity: v.activity + bump,
                    lbd: v.lbd,
                });

            if self.activity_heap.value_at(index as usize).activity > ACTIVITY_RESCALE_LIMIT {
                self.activity_heap.apply_to_all(|v| ActivityLBD {
                    activity: v.activity * ACTIVITY_RESCALE_FACTOR,
                    lbd: v.lbd,
                });
                self.bump *= ACTIVITY_RESCALE_FACTOR;
            }

            self.activity_heap.heapify_if_active(index as usize);
        }
    }

    /// Decays the clause activity bump. Applied once after every analyzed conflict.
    pub fn decay_activity(&mut self) {
        self.bump *= self.decay;
    }

    /// Reduces the addition clause set to clauses at or below the LBD bound plus the `n` most
    /// active. Never called from the search loop: a documented non-feature (see the solve
    /// procedure's notes on `n_learnts`). Kept so the LBD bound and activity heap this would
    /// consult are not themselves dead weight.
    pub fn reduce_by(&mut self, _n: usize) {
        let _ = self.lbd_bound;
    }

    /// The total number of clauses ever stored (original and addition, including dead ones).
    pub fn total_clause_count(&self) -> usize {
        self.unit_original.len()
            + self.unit_addition.len()
            + self.binary_original.len()
            + self.binary_addition.len()
            + self.original.len()
            + self.addition.len()
    }

    /// Every clause ever stored (original and addition), active or not.
    pub fn all_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.unit_original
            .values()
            .chain(self.unit_addition.values())
            .chain(self.binary_original.iter())
            .chain(self.binary_addition.iter())
            .chain(self.original.iter())
            .chain(self.addition.iter().flatten())
    }

    /// The number of currently active addition clauses.
    pub fn current_addition_count(&self) -> usize {
        self.unit_addition.values().filter(|c| c.is_active()).count()
            + self.binary_addition.iter().filter(|c| c.is_active()).count()
            + self
                .addition
                .iter()
                .flatten()
                .filter(|c| c.is_active())
                .count()
    }
}
