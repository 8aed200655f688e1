/*!
The search controller: the loop that ties BCP, theory propagation, conflict analysis, backjumping,
restarts, and decisions together.
*/

use rand::Rng;

use crate::{
    config::Config,
    context::Counters,
    db::{
        atom::{AtomDB, Reason},
        clause::ClauseDB,
        trail::Trail,
        ClauseKey, LevelIndex,
    },
    misc::log::targets,
    procedures::{analysis, backjump, bcp, decision::{self, Decision}},
    structures::{
        clause::{Clause, Premise},
        literal::{CLiteral, Literal},
    },
    theory::{TheoryResult, TheorySolver},
    types::err::{BCPError, ErrorKind, TheoryError},
};

/// The outcome of a completed search.
pub enum SolveOutcome {
    /// Every atom has a value consistent with every attached clause (and, if present, the
    /// attached theory).
    Satisfiable,

    /// The given clause was found falsified at or below the base level.
    Unsatisfiable(ClauseKey),
}

/// The scheduler state carried between calls to [search], so consecutive `solve` calls continue
/// growing the budget rather than restarting it at `initial_budget`.
///
/// Budget grows geometrically: starts at `config.restart.initial_budget`, and is multiplied by
/// `config.restart.budget_factor` each time a restart is raised.
pub struct RestartSchedule {
    conflicts_since_restart: u32,
    budget: f64,
}

impl Default for RestartSchedule {
    fn default() -> Self {
        Self {
            conflicts_since_restart: 0,
            budget: 100.0,
        }
    }
}

impl RestartSchedule {
    /// A fresh schedule with its first budget taken from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            conflicts_since_restart: 0,
            budget: config.restart.initial_budget.value as f64,
        }
    }

    fn advance(&mut self, config: &Config) {
        self.conflicts_since_restart = 0;
        self.budget *= config.restart.budget_factor.value;
    }
}

/// Runs the search loop from the current trail/database state until a conclusive result, with
/// `base_level` the level below which a conflict is reported as `Unsatisfiable` rather than
/// backjumped past.
#[allow(clippy::too_many_arguments)]
pub fn search<R: Rng>(
    base_level: LevelIndex,
    config: &Config,
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
    trail: &mut Trail,
    theory: &mut Option<TheorySolver>,
    next_decision: &mut Option<CLiteral>,
    counters: &mut Counters<R>,
    schedule: &mut RestartSchedule,
) -> Result<SolveOutcome, ErrorKind> {
    loop {
        match propagate_fixpoint(atom_db, clause_db, trail, theory)? {
            Some(conflict_key) => {
                counters.conflicts += 1;

                if trail.current_level() <= base_level {
                    log::info!(target: targets::ANALYSIS, "Conflict at base level: unsatisfiable");
                    return Ok(SolveOutcome::Unsatisfiable(conflict_key));
                }

                let report = analysis::analyze(conflict_key, trail, atom_db, clause_db)?;

                let backtrack_level = report.backtrack_level.max(base_level);
                backjump::cancel_until(trail, atom_db, backtrack_level);
                if let Some(theory_solver) = theory.as_mut() {
                    let cut = trail.level_start(backtrack_level);
                    theory_solver.on_backtrack(backtrack_level, cut);
                }

                let lbd = report.learnt.lbd(atom_db.levels());
                let uip_literal = report.learnt[0];
                let key = clause_db.store_addition(report.learnt, report.premise, lbd)?;
                clause_db.attach(key, atom_db)?;

                let level = trail.current_level();
                trail.assign(uip_literal);
                atom_db.set_value(uip_literal, level, Reason::Propagated(key));

                schedule.conflicts_since_restart += 1;
                if config.restart_enabled.value
                    && schedule.conflicts_since_restart as f64 >= schedule.budget
                {
                    log::debug!(target: targets::RESTART, "Restart at {} conflicts", schedule.conflicts_since_restart);
                    counters.restarts += 1;
                    backjump::cancel_until(trail, atom_db, base_level);
                    if let Some(theory_solver) = theory.as_mut() {
                        let cut = trail.level_start(base_level);
                        theory_solver.on_backtrack(base_level, cut);
                    }
                    schedule.advance(config);
                }
            }
            None => {
                if atom_db.all_assigned() {
                    if let Some(theory_solver) = theory.as_mut() {
                        if !theory_solver.if_sat(trail.assignments()) {
                            return Err(TheoryError::InconsistentPropagation.into());
                        }
                    }
                    return Ok(SolveOutcome::Satisfiable);
                }

                match decision::decide(atom_db, config, &mut counters.rng, next_decision) {
                    Decision::Made(literal) => {
                        counters.decisions += 1;
                        trail.open_level();
                        let level = trail.current_level();
                        trail.assign(literal);
                        atom_db.set_value(literal, level, Reason::Decision);
                    }
                    Decision::Exhausted => {
                        if let Some(theory_solver) = theory.as_mut() {
                            if !theory_solver.if_sat(trail.assignments()) {
                                return Err(TheoryError::InconsistentPropagation.into());
                            }
                        }
                        return Ok(SolveOutcome::Satisfiable);
                    }
                }
            }
        }
    }
}

/// Drives BCP to a fixpoint, interleaving an attached theory whenever BCP catches up, returning
/// the falsifying clause if a conflict (boolean or theory) was found.
fn propagate_fixpoint(
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
    trail: &mut Trail,
    theory: &mut Option<TheorySolver>,
) -> Result<Option<ClauseKey>, ErrorKind> {
    loop {
        match bcp::propagate(trail, atom_db, clause_db) {
            Ok(()) => {}
            Err(BCPError::Conflict(key)) => return Ok(Some(key)),
            Err(e @ BCPError::CorruptWatch) => return Err(e.into()),
        }

        let Some(theory_solver) = theory.as_mut() else {
            return Ok(None);
        };

        if trail.th_head() >= trail.elt_head() {
            return Ok(None);
        }

        let slice = trail.unseen_by_theory().to_vec();
        match theory_solver.propagate(&slice) {
            TheoryResult::Consistent => {
                trail.catch_up_theory_head();
            }
            TheoryResult::Conflict(clause) => {
                trail.catch_up_theory_head();
                let lbd = clause.lbd(atom_db.levels());
                let key = clause_db.store_addition(clause, Premise::TheoryLemma(0), lbd)?;
                clause_db.attach(key, atom_db)?;
                return Ok(Some(key));
            }
            TheoryResult::Propagated(literals, tag) => {
                trail.catch_up_theory_head();
                for literal in literals {
                    if let Some(value) = atom_db.value_of(literal.atom()) {
                        if value == literal.polarity() {
                            continue;
                        }
                        let unit = vec![literal];
                        let key = clause_db.store_addition(unit, Premise::TheoryLemma(tag), 1)?;
                        clause_db.attach(key, atom_db)?;
                        return Ok(Some(key));
                    }
                    let unit = vec![literal];
                    let key = clause_db.store_addition(unit, Premise::TheoryLemma(tag), 1)?;
                    let level = trail.current_level();
                    trail.assign(literal);
                    atom_db.set_value(literal, level, Reason::Propagated(key));
                }
            }
        }
    }
}
