/*!
Conflict analysis: first unique-implication-point (first-UIP) resolution.

Walks the trail from its top, resolving the conflicting clause against the reason of each
literal assigned at the conflict level in turn, until exactly one literal from that level remains
unresolved — the UIP. Literals from earlier levels are carried into the learnt clause as-is.
*/

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey, LevelIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::{CClause, Clause, Premise, PremiseTag},
        literal::{CLiteral, Literal},
    },
    types::err::AnalysisError,
};

/// The result of a successful conflict analysis.
pub struct ConflictReport {
    /// The learnt clause, sorted by decision level descending (the UIP literal first).
    pub learnt: CClause,

    /// The level to backjump to before adding `learnt` and enqueuing its UIP literal.
    pub backtrack_level: LevelIndex,

    /// Whether the second-highest level in `learnt` differs from the highest (the usual case).
    /// False for a degenerate tie, in which case `backtrack_level` is simply one less than the
    /// conflict level.
    pub is_uip: bool,

    /// The chain of clauses resolved to produce `learnt`, in resolution order: the original
    /// conflicting clause first, then the reason of each literal resolved away.
    pub premise: Premise,
}

/// Analyzes a conflict found while the given clause was falsified, producing a learnt clause.
pub fn analyze(
    conflict_key: ClauseKey,
    trail: &Trail,
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
) -> Result<ConflictReport, AnalysisError> {
    let mut history = vec![conflict_key];
    bump_clause(conflict_key, clause_db);

    let mut resolving_clause = clause_db
        .get(conflict_key)
        .map_err(|_| AnalysisError::NoAssertion)?
        .clause()
        .clone();

    // The maximum decision level among the falsified clause's own literals, not the trail's
    // current level: a theory-supplied conflict clause can be falsified entirely below the
    // current level, and using the trail's level there would inflate `path_c` spuriously.
    let conflict_level = resolving_clause
        .literals()
        .map(|literal| atom_db.level_of(literal.atom()))
        .max()
        .unwrap_or(0);

    let mut marked_atoms: Vec<Atom> = Vec::new();
    let mut learnt: Vec<CLiteral> = Vec::new();
    let mut path_c: usize = 0;
    let mut trail_index = trail.len();

    loop {
        for literal in resolving_clause.literals() {
            if literal.atom() == 0 || atom_db.is_marked(literal.atom()) {
                continue;
            }

            atom_db.mark(literal.atom());
            marked_atoms.push(literal.atom());
            atom_db.bump_activity(literal.atom());

            let level = atom_db.level_of(literal.atom());
            if level == conflict_level {
                path_c += 1;
            } else if level > 0 {
                learnt.push(literal);
            }
        }

        // Find the most recently assigned marked atom.
        loop {
            if trail_index == 0 {
                atom_db.clear_marks(&marked_atoms);
                return Err(AnalysisError::FailedStoppingCriteria);
            }
            trail_index -= 1;
            if atom_db.is_marked(trail.assignments()[trail_index].atom()) {
                break;
            }
        }

        // A conflict clause with no literal at `conflict_level` (possible for a clause supplied
        // directly by a theory rather than found by BCP) leaves `path_c` at 0 here; the atom just
        // found by the backward scan is then already the UIP.
        if path_c > 0 {
            path_c -= 1;
        }
        if path_c == 0 {
            break;
        }

        let pivot_atom = trail.assignments()[trail_index].atom();
        let reason_key = match atom_db.reason_of(pivot_atom).and_then(|r| r.clause_key()) {
            Some(key) => key,
            None => {
                atom_db.clear_marks(&marked_atoms);
                return Err(AnalysisError::NoAssertion);
            }
        };

        history.push(reason_key);
        bump_clause(reason_key, clause_db);

        resolving_clause = clause_db
            .get(reason_key)
            .map_err(|_| AnalysisError::NoAssertion)?
            .clause()
            .clone();
    }

    let uip_literal = trail.assignments()[trail_index].negate();
    learnt.push(uip_literal);

    atom_db.clear_marks(&marked_atoms);
    atom_db.decay_activity();
    clause_db.decay_activity();

    let levels = atom_db.levels().to_vec();
    learnt.sort_by(|a, b| levels[b.atom() as usize].cmp(&levels[a.atom() as usize]));

    if learnt.is_empty() {
        return Err(AnalysisError::EmptyResolution);
    }

    let (backtrack_level, is_uip) = if learnt.len() == 1 {
        (0, false)
    } else {
        let top_level = levels[learnt[0].atom() as usize];
        let second_level = levels[learnt[1].atom() as usize];
        if second_level == top_level {
            (top_level.saturating_sub(1), false)
        } else {
            (second_level, true)
        }
    };

    log::trace!(
        target: targets::ANALYSIS,
        "Learnt clause of size {} backjumping to level {backtrack_level}",
        learnt.len()
    );

    Ok(ConflictReport {
        learnt,
        backtrack_level,
        is_uip,
        premise: Premise::History(history),
    })
}

fn bump_clause(key: ClauseKey, clause_db: &mut ClauseDB) {
    if let Ok(db_clause) = clause_db.get(key) {
        match db_clause.premise().tag() {
            PremiseTag::History | PremiseTag::Simplified => clause_db.bump_activity(key),
            PremiseTag::Hypothesis | PremiseTag::LocalAssumption | PremiseTag::TheoryLemma => {}
        }
    }
}
