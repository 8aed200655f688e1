/*!
The generic context: every piece of state a solve touches, wired together behind the procedures
in [procedures](crate::procedures).

Parameterised over its source of randomness so a caller with its own RNG could substitute it;
[specific] fixes the parameter to [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32) for
ordinary use as [Context](super::Context).
*/

use rand::Rng;

use crate::{
    config::Config,
    context::{callbacks::Callbacks, counters::Counters, ContextState},
    db::{
        atom::{AtomDB, Reason},
        clause::ClauseDB,
        trail::Trail,
        ClauseKey,
    },
    procedures::{
        assumptions, backjump,
        solve::{self, RestartSchedule, SolveOutcome},
    },
    proof,
    reports::Report,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{dedup_or_tautology, CClause, Clause, Premise, UserTag},
        literal::{CLiteral, Literal},
    },
    theory::{Theory, TheorySolver},
    types::err::{BuildError, ClauseDBError, ErrorKind, StateError},
};

/// A generic context, parameterised to a source of randomness.
///
/// The source of randomness must also implement [Default] to keep the theory/restart plumbing
/// free of an explicit seeding step; use [Context::from_config](super::Context::from_config) for
/// the usual case of wanting a specific seed.
pub struct GenericContext<R: Rng + Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters and the source of randomness for this context.
    pub counters: Counters<R>,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The atom database.
    pub atom_db: AtomDB,

    trail: Trail,
    state: ContextState,
    theory: Option<TheorySolver>,
    next_decision: Option<CLiteral>,
    restart: RestartSchedule,
    callbacks: Callbacks,
}

impl<R: Rng + Default> GenericContext<R> {
    /// A fresh context from a given configuration.
    pub fn new(config: Config) -> Self {
        let restart = RestartSchedule::new(&config);
        Self {
            atom_db: AtomDB::new(&config.atom_db),
            clause_db: ClauseDB::new(&config.clause_db),
            config,
            counters: Counters::default(),
            trail: Trail::new(),
            state: ContextState::Input,
            theory: None,
            next_decision: None,
            restart,
            callbacks: Callbacks::default(),
        }
    }

    /// Adds a fresh atom, failing once the atom space is exhausted.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        self.atom_db.fresh_atom().map_err(ErrorKind::from)
    }

    /// Adds a fresh atom, returning [ATOM_MAX] in the (practically unreachable) case the atom
    /// space is exhausted rather than forcing every caller to handle that error.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        self.atom_db.fresh_atom().unwrap_or(ATOM_MAX)
    }

    /// Attaches a theory to the context, to be interleaved with propagation from here on.
    pub fn attach_theory(&mut self, theory: Box<dyn Theory>) {
        self.theory = Some(TheorySolver::new(theory));
    }

    /// The hooks registered on this context.
    pub fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    /// Adds a clause to the formula.
    ///
    /// - An empty clause (after removing duplicates) is a structural contradiction: the context
    ///   moves to [ContextState::Unsatisfiable] with no witnessing key, since none was ever
    ///   stored.
    /// - A tautology (some atom present with both polarities) is dropped silently: it is
    ///   trivially satisfied and contributes nothing to the formula.
    /// - A unit clause already falsified at the base level is stored (so it can anchor a proof)
    ///   and also moves the context to `Unsatisfiable`.
    /// - A unit clause not yet valued is enqueued directly, without waiting for a `solve` call.
    ///
    /// Adding a unit clause once a decision has been made is rejected: the literal would need to
    /// be asserted below the current level, which is exactly what `solve`'s own conflict handling
    /// does, and duplicating that here would fork the asserting logic in two places.
    ///
    /// Equivalent to [assume](Self::assume) with `permanent: true` and no tag.
    pub fn add_clause(&mut self, clause: impl Into<CClause>) -> Result<(), ErrorKind> {
        self.assume(clause, true, None)
    }

    /// Adds a clause to the formula, optionally scoped to the current solve call rather than
    /// permanent, and optionally carrying a caller-supplied [UserTag] independent of its
    /// [Premise].
    ///
    /// `permanent: true` behaves exactly as [add_clause](Self::add_clause) always has. With
    /// `permanent: false`:
    ///
    /// - Only a unit clause can be made non-permanent. A clause of two or more literals is
    ///   rejected with [ClauseDBError::NonPermanentClauseTooLong]: once attached it is registered
    ///   in two watch lists, and safely unregistering those watches when its scope ends is
    ///   unimplemented (the same gap as [ClauseDB::mark_dead](crate::db::clause::ClauseDB::mark_dead)).
    /// - A local scope must already be open (i.e. a prior `solve_assuming` call is still on the
    ///   trail), or the clause is rejected with [StateError::NoOpenScope]: nothing ever backtracks
    ///   past the base level, so a non-permanent clause added there could never be retracted.
    /// - The literal is asserted at the trail's current level with [Premise::LocalAssumption],
    ///   the same provenance and trail treatment `solve_assuming` gives its own assumptions, so
    ///   the existing `cancel_until`/backjump machinery undoes it exactly like any other local
    ///   assumption once that scope ends.
    pub fn assume(
        &mut self,
        clause: impl Into<CClause>,
        permanent: bool,
        tag: Option<UserTag>,
    ) -> Result<(), ErrorKind> {
        let mut clause_vec = clause.into();

        if clause_vec.is_empty() {
            self.state = ContextState::Unsatisfiable(None);
            return Err(BuildError::Unsatisfiable.into());
        }

        if dedup_or_tautology(&mut clause_vec) {
            return Ok(());
        }

        if !permanent {
            if clause_vec.len() != 1 {
                return Err(ClauseDBError::NonPermanentClauseTooLong.into());
            }
            if self.trail.current_level() == assumptions::BASE_LEVEL {
                return Err(StateError::NoOpenScope.into());
            }

            let literal = clause_vec[0];
            let level = self.trail.current_level();
            match self.atom_db.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Ok(()),
                Some(_) => {
                    let key =
                        self.clause_db
                            .store_addition(clause_vec, Premise::LocalAssumption, 1)?;
                    let stored = self.clause_db.get_mut(key)?;
                    stored.set_tag(tag);
                    stored.set_non_permanent();
                    self.state = ContextState::Unsatisfiable(Some(key));
                    return Err(BuildError::Unsatisfiable.into());
                }
                None => {
                    let key =
                        self.clause_db
                            .store_addition(clause_vec, Premise::LocalAssumption, 1)?;
                    let stored = self.clause_db.get_mut(key)?;
                    stored.set_tag(tag);
                    stored.set_non_permanent();
                    self.trail.assign(literal);
                    self.atom_db
                        .set_value(literal, level, Reason::LocalAssumption(key));
                }
            }

            return Ok(());
        }

        if clause_vec.len() == 1 {
            if self.trail.current_level() != 0 {
                return Err(ClauseDBError::DecisionMade.into());
            }

            let literal = clause_vec[0];
            match self.atom_db.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => return Ok(()),
                Some(_) => {
                    let key = self
                        .clause_db
                        .store_original(clause_vec, Premise::Hypothesis)?;
                    self.clause_db.get_mut(key)?.set_tag(tag);
                    self.state = ContextState::Unsatisfiable(Some(key));
                    return Err(BuildError::Unsatisfiable.into());
                }
                None => {
                    let key = self
                        .clause_db
                        .store_original(clause_vec, Premise::Hypothesis)?;
                    self.clause_db.get_mut(key)?.set_tag(tag);
                    self.trail.assign(literal);
                    self.atom_db.set_value(literal, 0, Reason::Propagated(key));
                    if let Some(theory_solver) = self.theory.as_mut() {
                        theory_solver.add_formula(self.clause_db.get(key)?.clause());
                        theory_solver.push_persistent();
                    }
                }
            }
        } else {
            let key = self
                .clause_db
                .store_original(clause_vec, Premise::Hypothesis)?;
            self.clause_db.get_mut(key)?.set_tag(tag);
            self.clause_db.attach(key, &mut self.atom_db)?;
            if let Some(theory_solver) = self.theory.as_mut() {
                theory_solver.add_formula(self.clause_db.get(key)?.clause());
            }
        }

        self.state = ContextState::Input;
        Ok(())
    }

    /// Determines satisfiability of the formula added so far.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        if let ContextState::Unsatisfiable(_) = &self.state {
            return Ok(Report::Unsatisfiable);
        }

        self.counters.solves += 1;
        self.state = ContextState::Solving;

        let outcome = solve::search(
            assumptions::BASE_LEVEL,
            &self.config,
            &mut self.atom_db,
            &mut self.clause_db,
            &mut self.trail,
            &mut self.theory,
            &mut self.next_decision,
            &mut self.counters,
            &mut self.restart,
        )?;

        let report = self.settle(outcome);
        self.callbacks.notify_solve_complete(report);
        Ok(report)
    }

    /// Determines satisfiability under a set of literals local to this call; see
    /// [assumptions](crate::procedures::assumptions).
    ///
    /// Rejected once a prior solve reached `Satisfiable` or `Unsatisfiable`: `refresh` the
    /// context first, matching IPASIR2's incremental contract.
    pub fn solve_assuming(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        if matches!(
            self.state,
            ContextState::Satisfiable | ContextState::Unsatisfiable(_)
        ) {
            return Err(crate::types::err::StateError::SolveConcluded.into());
        }

        self.counters.solves += 1;
        self.state = ContextState::Solving;

        let outcome = assumptions::solve_assuming(
            assumptions,
            &self.config,
            &mut self.atom_db,
            &mut self.clause_db,
            &mut self.trail,
            &mut self.theory,
            &mut self.next_decision,
            &mut self.counters,
            &mut self.restart,
        )?;

        let report = self.settle(outcome);
        self.callbacks.notify_solve_complete(report);
        Ok(report)
    }

    fn settle(&mut self, outcome: SolveOutcome) -> Report {
        match outcome {
            SolveOutcome::Satisfiable => {
                self.state = ContextState::Satisfiable;
                Report::Satisfiable
            }
            SolveOutcome::Unsatisfiable(key) => {
                self.state = ContextState::Unsatisfiable(Some(key));
                Report::Unsatisfiable
            }
        }
    }

    /// The current value of an atom, if any.
    pub fn eval(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The trail of assigned literals, in assignment order.
    pub fn trail(&self) -> &[CLiteral] {
        self.trail.assignments()
    }

    /// The full valuation, as an owned vector so it satisfies
    /// [Valuation](crate::structures::valuation::Valuation) directly.
    pub fn valuation(&self) -> Vec<Option<bool>> {
        self.atom_db.valuation().clone()
    }

    /// The state of the context.
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// The report corresponding to the current state.
    pub fn report(&self) -> Report {
        match &self.state {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Report::Unknown
            }
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable(_) => Report::Unsatisfiable,
        }
    }

    /// Checks every active clause has at least one literal true on the current valuation.
    ///
    /// Meaningful after `solve` reports [Report::Satisfiable]; the first literal of a violating
    /// clause is returned as a witness.
    pub fn check_model(&self) -> Result<(), ErrorKind> {
        let valuation = self.atom_db.valuation();
        for db_clause in self.clause_db.all_clauses() {
            if !db_clause.is_active() {
                continue;
            }
            let satisfied = db_clause.clause().literals().any(|literal| {
                valuation
                    .get(literal.atom() as usize)
                    .copied()
                    .flatten()
                    .is_some_and(|value| value == literal.polarity())
            });
            if !satisfied {
                return Err(ErrorKind::SpecificValuationConflict(
                    db_clause.clause()[0],
                ));
            }
        }
        Ok(())
    }

    /// Extracts the leaves (hypotheses, local assumptions, and theory lemmas) of the proof of
    /// the clause identified as falsified, once the context has reported `Unsatisfiable`.
    pub fn unsat_core(&self) -> Result<Vec<ClauseKey>, ErrorKind> {
        match &self.state {
            ContextState::Unsatisfiable(Some(key)) => {
                proof::unsat_core(*key, &self.clause_db).map_err(ErrorKind::from)
            }
            ContextState::Unsatisfiable(None) => Ok(Vec::new()),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// Undoes every decision and consequent propagation, returning the trail to the base level.
    /// Clauses (original and learnt) are untouched; only assignments made during the last solve
    /// are cleared.
    pub fn refresh(&mut self) {
        backjump::cancel_until(&mut self.trail, &mut self.atom_db, assumptions::BASE_LEVEL);
        if let Some(theory_solver) = self.theory.as_mut() {
            let cut = self.trail.level_start(assumptions::BASE_LEVEL);
            theory_solver.on_backtrack(assumptions::BASE_LEVEL, cut);
        }
        self.next_decision = None;
        if !matches!(self.state, ContextState::Unsatisfiable(_)) {
            self.state = ContextState::Input;
        }
    }
}
