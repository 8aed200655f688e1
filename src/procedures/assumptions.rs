/*!
The assumption layer: a `solve` call scoped to a set of hypotheses local to that call.

Cancels to the base level (unless `stacked_assumptions` is set, in which case the previous call's
assumptions are left standing), opens one fresh decision level, and enqueues each assumption as an
already-decided literal before handing off to the ordinary search loop. An assumption already
false at the base level is reported `Unsatisfiable` immediately, without entering the loop.
*/

use rand::Rng;

use crate::{
    config::Config,
    context::Counters,
    db::{
        atom::{AtomDB, Reason},
        clause::ClauseDB,
        trail::Trail,
        LevelIndex,
    },
    misc::log::targets,
    procedures::{
        backjump,
        solve::{self, RestartSchedule, SolveOutcome},
    },
    structures::{
        clause::Premise,
        literal::{CLiteral, Literal},
    },
    theory::TheorySolver,
    types::err::ErrorKind,
};

/// The base level: the level at which formula (non-local) clauses live. Always `0`.
pub const BASE_LEVEL: LevelIndex = 0;

/// Solves under the given assumptions, per the base `solve` loop after they are enqueued.
#[allow(clippy::too_many_arguments)]
pub fn solve_assuming<R: Rng>(
    assumptions: Vec<CLiteral>,
    config: &Config,
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
    trail: &mut Trail,
    theory: &mut Option<TheorySolver>,
    next_decision: &mut Option<CLiteral>,
    counters: &mut Counters<R>,
    schedule: &mut RestartSchedule,
) -> Result<SolveOutcome, ErrorKind> {
    if !config.stacked_assumptions.value {
        backjump::cancel_until(trail, atom_db, BASE_LEVEL);
        if let Some(theory_solver) = theory.as_mut() {
            theory_solver.on_backtrack(BASE_LEVEL, trail.level_start(BASE_LEVEL));
        }
    }

    trail.open_level();
    let level = trail.current_level();
    if let Some(theory_solver) = theory.as_mut() {
        theory_solver.push_local();
    }

    for literal in assumptions {
        match atom_db.value_of(literal.atom()) {
            Some(value) if value == literal.polarity() => continue,
            Some(_) => {
                log::info!(target: targets::DECISION, "Assumption {literal} conflicts with the trail");
                let key = clause_db.store_addition(vec![literal], Premise::LocalAssumption, 1)?;
                return Ok(SolveOutcome::Unsatisfiable(key));
            }
            None => {
                let key = clause_db.store_addition(vec![literal], Premise::LocalAssumption, 1)?;
                trail.assign(literal);
                atom_db.set_value(literal, level, Reason::LocalAssumption(key));
            }
        }
    }

    solve::search(
        BASE_LEVEL,
        config,
        atom_db,
        clause_db,
        trail,
        theory,
        next_decision,
        counters,
        schedule,
    )
}
