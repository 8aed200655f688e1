/*!
Interleaved theory propagation.

A [Theory] sits behind the trail: once BCP has driven propagation to a fixpoint for the literals
it already knows about, the core hands the theory the slice of the trail it has not yet seen
(`trail[th_head..elt_head]`, see [Trail](crate::db::trail::Trail)). The theory either accepts
those literals or reports a conflict, which the core turns into a [TheoryLemma][pt] clause and
feeds back through ordinary conflict analysis.

[pt]: crate::structures::clause::Premise::TheoryLemma

Grounded on the `Theory: Backtrack + Send + 'static` pattern used to attach decision procedures
to a SAT core in CP/SMT solvers built around a CDCL engine — `create`, `propagate`, `explain`,
and an explicit backtracking hook are the load-bearing pieces any such interface needs; this
trait names them to match the vocabulary used elsewhere in this crate.

A theory is free to construct itself however it likes (`create`, `new`, or similar) and is
attached to a context as a `Box<dyn Theory>`; `Self`-returning constructors are deliberately kept
off the trait, since a trait object could never implement them.
*/

use crate::{
    db::LevelIndex,
    structures::{
        clause::{CClause, LemmaTag},
        literal::CLiteral,
    },
};

/// The outcome of asking a theory to account for newly-assumed literals.
pub enum TheoryResult {
    /// The theory is consistent with everything it has been shown so far.
    Consistent,

    /// The theory found a conflict, explained by the given clause (over trail literals), which
    /// the core stores as a [TheoryLemma](crate::structures::clause::Premise::TheoryLemma) and
    /// hands to conflict analysis exactly as it would an ordinary falsified clause.
    Conflict(CClause),

    /// The theory itself propagates further literals, to be enqueued on the trail as ordinary
    /// consequences (with the given tag recorded as their theory-lemma provenance).
    Propagated(Vec<CLiteral>, LemmaTag),
}

/// A decision procedure interleaved with BCP.
///
/// Every method is called from the single-threaded search loop; nothing here needs to be
/// `Send`/`Sync` on its own account, though a theory attached across threads would need to be.
pub trait Theory {
    /// Opens a local (per-`solve`-call) scope. Facts pushed while a local scope is open are
    /// undone by the next [on_backtrack](Self::on_backtrack) call that crosses the level at
    /// which the scope was opened.
    fn push_local(&mut self);

    /// Commits the theory's current state as surviving any future backtrack, i.e. treats
    /// whatever has been shown so far as a base-level fact.
    fn push_persistent(&mut self);

    /// Accounts for the literals in `trail` (a suffix of the SAT trail not yet shown to the
    /// theory), returning a conflict, any further consequences, or confirmation of consistency.
    fn propagate(&mut self, trail: &[CLiteral]) -> TheoryResult;

    /// Notifies the theory that the SAT trail has been cancelled back to `level`; any local
    /// scope opened above `level` is discarded.
    fn on_backtrack(&mut self, level: LevelIndex);

    /// Whether the theory has no pending local obligations above the base level.
    fn at_level_0(&self) -> bool;

    /// A final check performed over the complete trail before the core reports satisfiability.
    /// Theories whose `propagate` is already exhaustive can simply return `true`.
    fn if_sat(&mut self, trail: &[CLiteral]) -> bool;

    /// Attaches a formula-level clause directly to the theory's own state, independent of the
    /// trail (e.g. a theory axiom supplied alongside the boolean formula).
    fn add_formula(&mut self, clause: &CClause);
}

/// A theory attached to a context, together with the trail cursor it has already seen.
///
/// Thin enough that `Context` could inline it, but kept separate so the trail-cursor bookkeeping
/// (`seen_until`) is not duplicated if a context is ever extended to support more than one
/// attached theory.
pub struct TheorySolver {
    theory: Box<dyn Theory>,
    seen_until: usize,
}

impl TheorySolver {
    /// Attaches a theory.
    pub fn new(theory: Box<dyn Theory>) -> Self {
        Self {
            theory,
            seen_until: 0,
        }
    }

    /// The trail index up to which the theory has been shown literals.
    pub fn seen_until(&self) -> usize {
        self.seen_until
    }

    /// Shows the theory a new suffix of the trail, advancing `seen_until`.
    pub fn propagate(&mut self, trail: &[CLiteral]) -> TheoryResult {
        self.seen_until += trail.len();
        self.theory.propagate(trail)
    }

    /// Forwards to the underlying theory.
    pub fn if_sat(&mut self, trail: &[CLiteral]) -> bool {
        self.theory.if_sat(trail)
    }

    /// Forwards to the underlying theory and rewinds `seen_until` to `level`'s trail start when
    /// the caller knows it (callers pass the trail index the level begins at).
    pub fn on_backtrack(&mut self, level: LevelIndex, trail_index_at_level: usize) {
        self.theory.on_backtrack(level);
        self.seen_until = self.seen_until.min(trail_index_at_level);
    }

    /// Forwards to the underlying theory.
    pub fn at_level_0(&self) -> bool {
        self.theory.at_level_0()
    }

    /// Forwards to the underlying theory.
    pub fn add_formula(&mut self, clause: &CClause) {
        self.theory.add_formula(clause)
    }

    /// Forwards to the underlying theory.
    pub fn push_local(&mut self) {
        self.theory.push_local()
    }

    /// Forwards to the underlying theory.
    pub fn push_persistent(&mut self) {
        self.theory.push_persistent()
    }
}
