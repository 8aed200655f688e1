/*!
The trail: the sequence of literals assigned so far, in assignment order.

Decision levels are recorded as indices into the trail (`level_indices[L]` is the index of the
first literal assigned at level `L`; level `0`, the base level, starts at index `0` and is never
undone). Two cursors track how much of the trail has been consumed:
- `elt_head` — how far BCP has propagated.
- `th_head` — how far an attached theory has been shown (`th_head <= elt_head`, since a theory
  only ever sees literals BCP has already committed to).

Undoing assignments above some level is a matter of truncating the trail and clearing each
dropped atom's value; no per-assignment allocation is needed; see
[AtomDB::clear_value](crate::db::atom::AtomDB::clear_value).
*/

use crate::db::LevelIndex;
use crate::structures::literal::CLiteral;

/// The trail of assigned literals.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    assignments: Vec<CLiteral>,
    level_indices: Vec<usize>,
    elt_head: usize,
    th_head: usize,
}

impl Trail {
    /// A fresh, empty trail at the base level.
    pub fn new() -> Self {
        Self {
            assignments: Vec::default(),
            level_indices: vec![0],
            elt_head: 0,
            th_head: 0,
        }
    }

    /// The current decision level.
    pub fn current_level(&self) -> LevelIndex {
        (self.level_indices.len() - 1) as LevelIndex
    }

    /// Opens a fresh decision level at the top of the trail.
    pub fn open_level(&mut self) {
        self.level_indices.push(self.assignments.len());
    }

    /// Appends a literal to the top of the trail, returning its trail index.
    pub fn assign(&mut self, literal: CLiteral) -> usize {
        let index = self.assignments.len();
        self.assignments.push(literal);
        index
    }

    /// The full trail, in assignment order.
    pub fn assignments(&self) -> &[CLiteral] {
        &self.assignments
    }

    /// The number of literals on the trail.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// The literals assigned at a given level.
    pub fn level_literals(&self, level: LevelIndex) -> &[CLiteral] {
        let level = level as usize;
        let start = self.level_indices[level];
        let end = self
            .level_indices
            .get(level + 1)
            .copied()
            .unwrap_or(self.assignments.len());
        &self.assignments[start..end]
    }

    /// The index at which a given level begins.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        self.level_indices[level as usize]
    }

    /// BCP's propagation cursor: the trail index of the next literal BCP has yet to propagate
    /// from.
    pub fn elt_head(&self) -> usize {
        self.elt_head
    }

    /// Advances the BCP cursor to the end of the trail.
    pub fn catch_up_elt_head(&mut self) {
        self.elt_head = self.assignments.len();
    }

    /// Advances the BCP cursor past a single literal.
    pub fn advance_elt_head(&mut self) {
        self.elt_head += 1;
    }

    /// The slice of the trail BCP has yet to propagate from.
    pub fn unpropagated(&self) -> &[CLiteral] {
        &self.assignments[self.elt_head..]
    }

    /// An attached theory's cursor: the trail index of the next literal it has yet to see.
    pub fn th_head(&self) -> usize {
        self.th_head
    }

    /// The slice of the trail a theory has not yet been shown, bounded by what BCP has already
    /// committed to.
    pub fn unseen_by_theory(&self) -> &[CLiteral] {
        &self.assignments[self.th_head..self.elt_head]
    }

    /// Advances the theory cursor to the end of what BCP has propagated.
    pub fn catch_up_theory_head(&mut self) {
        self.th_head = self.elt_head;
    }

    /// Unassigns every literal above `level`, returning the literals removed in trail order (not
    /// reversed) so the caller may process them (e.g. to clear atom values, reactivate the
    /// decision heap, and notify a theory) in whichever order it needs.
    pub fn cancel_until(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        let level = level as usize;
        if level + 1 >= self.level_indices.len() {
            return Vec::new();
        }

        let cut = self.level_indices[level + 1];
        self.level_indices.truncate(level + 1);
        let drained = self.assignments.split_off(cut);

        self.elt_head = self.elt_head.min(cut);
        self.th_head = self.th_head.min(cut);

        drained
    }
}
