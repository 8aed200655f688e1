/*!
The atom database.

Stores, per atom: its current (partial) valuation, the decision level at which it was set, the
[Reason] it was set, its last-assigned polarity (for phase saving), and its four watch lists. An
[activity heap](IndexHeap) orders unvalued atoms for the decision procedure.
*/

pub mod reason;
pub use reason::Reason;

pub mod watch_db;
pub use watch_db::{BinaryWatch, LongWatch, WatchDB, WatchStatus};

use crate::{
    config::AtomDBConfig,
    db::{Activity, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
    types::err::{self, AtomDBError},
};

/// Rescale threshold for atom activity: mirrors the Chaff/MiniSAT `var_inc`/`activity` rescale.
const ACTIVITY_RESCALE_LIMIT: Activity = 1e100;
const ACTIVITY_RESCALE_FACTOR: Activity = 1e-100;

/// The atom database.
pub struct AtomDB {
    /// The current (partial) valuation, indexed by atom.
    valuation: Vec<Option<bool>>,

    /// The polarity an atom last held, consulted for phase saving when it is re-decided.
    previous_value: Vec<bool>,

    /// The decision level at which an atom was assigned, meaningless while unassigned.
    level_of: Vec<LevelIndex>,

    /// Why an atom holds its current value, `None` while unassigned.
    reason_of: Vec<Option<Reason>>,

    /// The watch lists of each atom.
    watch_dbs: Vec<WatchDB>,

    /// Marks set during conflict analysis, to avoid revisiting an atom's clause more than once
    /// while walking the trail. Cleared by the analysis procedure before it returns.
    marks: Vec<bool>,

    /// Unvalued atoms ordered by activity; the decision procedure pops the maximum.
    activity_heap: IndexHeap<Activity>,

    /// The current activity bump. Grown after each conflict by `decay`.
    bump: Activity,

    /// The per-conflict growth factor applied to `bump`.
    decay: Activity,
}

impl AtomDB {
    /// A fresh, empty atom database. Atom `0` is reserved (see
    /// [structures::atom](crate::structures::atom)) and is pre-allocated with a fixed value of
    /// `true`.
    pub fn new(config: &AtomDBConfig) -> Self {
        let mut db = Self {
            valuation: Vec::default(),
            previous_value: Vec::default(),
            level_of: Vec::default(),
            reason_of: Vec::default(),
            watch_dbs: Vec::default(),
            marks: Vec::default(),
            activity_heap: IndexHeap::default(),
            bump: config.bump.value,
            decay: config.decay.value,
        };

        db.valuation.push(Some(true));
        db.previous_value.push(true);
        db.level_of.push(0);
        db.reason_of.push(None);
        db.watch_dbs.push(WatchDB::default());
        db.marks.push(false);
        db.activity_heap.add(0, Activity::default());

        db
    }

    /// Adds a fresh atom, returning its id.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let atom = self.valuation.len() as Atom;
        if atom == Atom::MAX {
            return Err(AtomDBError::AtomsExhausted);
        }

        self.valuation.push(None);
        self.previous_value.push(false);
        self.level_of.push(0);
        self.reason_of.push(None);
        self.watch_dbs.push(WatchDB::default());
        self.marks.push(false);
        self.activity_heap.add(atom as usize, Activity::default());
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The number of atoms in the database, including the reserved top atom.
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }

    /// The current value of an atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The full valuation, indexed by atom. Returned as the owning `Vec` (rather than a slice)
    /// so callers can use it directly as a [Valuation](crate::structures::valuation::Valuation)
    /// without an intermediate allocation.
    pub fn valuation(&self) -> &Vec<Option<bool>> {
        &self.valuation
    }

    /// The decision level of an atom. Meaningless while unassigned.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.level_of[atom as usize]
    }

    /// The decision levels of every atom, suitable for passing to
    /// [Clause::lbd](crate::structures::clause::Clause::lbd).
    pub fn levels(&self) -> &[LevelIndex] {
        &self.level_of
    }

    /// The reason an atom holds its current value.
    pub fn reason_of(&self, atom: Atom) -> Option<Reason> {
        self.reason_of[atom as usize]
    }

    /// Assigns `literal.atom()` the value required to satisfy `literal`, at `level`, for `reason`.
    ///
    /// Removes the atom from the activity heap (it is no longer a candidate for decision) and
    /// stashes its previous polarity unchanged, updating it only on [clear](Self::clear).
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Reason) {
        let atom = literal.atom();
        self.valuation[atom as usize] = Some(literal.polarity());
        self.level_of[atom as usize] = level;
        self.reason_of[atom as usize] = Some(reason);
        self.activity_heap.remove(atom as usize);

        log::trace!(target: targets::VALUATION, "Set {literal} at level {level}");
    }

    /// Clears the value of an atom, saving its polarity for phase saving and reactivating it on
    /// the decision heap.
    pub fn clear_value(&mut self, atom: Atom) {
        if let Some(value) = self.valuation[atom as usize] {
            self.previous_value[atom as usize] = value;
        }
        self.valuation[atom as usize] = None;
        self.reason_of[atom as usize] = None;
        self.activity_heap.activate(atom as usize);

        log::trace!(target: targets::VALUATION, "Cleared atom {atom}");
    }

    /// The polarity an atom last held (defaults to `false` if it has never been assigned).
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_value[atom as usize]
    }

    /// The watch lists of an atom.
    pub fn watch_db(&self, atom: Atom) -> &WatchDB {
        &self.watch_dbs[atom as usize]
    }

    /// The watch lists of an atom, mutably.
    pub fn watch_db_mut(&mut self, atom: Atom) -> &mut WatchDB {
        &mut self.watch_dbs[atom as usize]
    }

    /// Whether an atom is marked during the current conflict analysis walk.
    pub fn is_marked(&self, atom: Atom) -> bool {
        self.marks[atom as usize]
    }

    /// Marks an atom.
    pub fn mark(&mut self, atom: Atom) {
        self.marks[atom as usize] = true;
    }

    /// Clears every mark. Conflict analysis calls this before returning so a fresh walk starts
    /// from a clean slate, regardless of how it terminated.
    pub fn clear_marks(&mut self, marked: &[Atom]) {
        for atom in marked {
            self.marks[*atom as usize] = false;
        }
    }

    /// Bumps the activity of an atom by the current bump amount, rescaling every activity (and
    /// the bump itself) if the bumped value would overflow the rescale threshold.
    pub fn bump_activity(&mut self, atom: Atom) {
        let bump = self.bump;
        self.activity_heap
            .apply_to_value_at_value_index(atom as usize, move |v| v + bump);

        if *self.activity_heap.value_at(atom as usize) > ACTIVITY_RESCALE_LIMIT {
            self.activity_heap
                .apply_to_all(|v| v * ACTIVITY_RESCALE_FACTOR);
            self.bump *= ACTIVITY_RESCALE_FACTOR;
        }

        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// Decays the activity bump, applied once after every analyzed conflict.
    pub fn decay_activity(&mut self) {
        self.bump *= self.decay;
    }

    /// Pops the highest-activity unvalued atom, if any remain.
    pub fn next_by_activity(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// Whether every atom (besides the reserved top atom) is assigned a value, i.e. the trail is
    /// a complete valuation and the decision procedure has nothing left to choose.
    pub fn all_assigned(&self) -> bool {
        self.activity_heap.is_empty()
    }
}
