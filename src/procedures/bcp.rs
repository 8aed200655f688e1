/*!
Boolean constraint propagation.

Two watched literals are kept per long clause, held at indices `0` and `1`. Binary clauses need
no watch maintenance at all: the other literal is simply checked directly, which is why they are
handled in a separate pass before the general long-clause scan (see the module doc of
[watch_db](crate::db::atom::watch_db)).
*/

use crate::{
    db::{
        atom::{AtomDB, LongWatch, Reason, WatchStatus},
        clause::ClauseDB,
        trail::Trail,
        ClauseKey, LevelIndex,
    },
    misc::log::targets,
    structures::{atom::Atom, literal::Literal},
    types::err::{self, BCPError},
};

/// Propagates consequences of every literal on the trail BCP has not yet examined, until either
/// the trail is exhausted or a conflict is found.
pub fn propagate(
    trail: &mut Trail,
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
) -> Result<(), BCPError> {
    while trail.elt_head() < trail.len() {
        let index = trail.elt_head();
        let literal = trail.assignments()[index];
        trail.advance_elt_head();

        let level = trail.current_level();
        let false_polarity = !literal.polarity();

        propagate_binary(literal.atom(), false_polarity, level, trail, atom_db)?;
        propagate_long(literal.atom(), false_polarity, level, trail, atom_db, clause_db)?;
    }

    Ok(())
}

fn propagate_binary(
    atom: Atom,
    false_polarity: bool,
    level: LevelIndex,
    trail: &mut Trail,
    atom_db: &mut AtomDB,
) -> Result<(), BCPError> {
    let watches = atom_db.watch_db(atom).binary_watches(false_polarity).clone();

    for watch in watches {
        match atom_db.value_of(watch.literal.atom()) {
            Some(value) if value == watch.literal.polarity() => continue,
            Some(_) => return Err(BCPError::Conflict(watch.key)),
            None => {
                atom_db.set_value(watch.literal, level, Reason::Propagated(watch.key));
                trail.assign(watch.literal);
                log::trace!(
                    target: targets::PROPAGATION,
                    "Propagated {} via binary clause {}",
                    watch.literal,
                    watch.key
                );
            }
        }
    }

    Ok(())
}

fn propagate_long(
    atom: Atom,
    false_polarity: bool,
    level: LevelIndex,
    trail: &mut Trail,
    atom_db: &mut AtomDB,
    clause_db: &mut ClauseDB,
) -> Result<(), BCPError> {
    let watches = std::mem::take(
        atom_db
            .watch_db_mut(atom)
            .long_watches_mut(false_polarity),
    );

    let mut retained = Vec::with_capacity(watches.len());
    let mut outcome = Ok(());

    for watch in watches {
        if outcome.is_err() {
            retained.push(watch);
            continue;
        }

        match examine_long_clause(watch.key, atom, false_polarity, clause_db, atom_db) {
            Ok(WatchStatus::Witness) => retained.push(watch),
            Ok(WatchStatus::None) => {
                // The watch has been re-homed onto a different literal by `examine_long_clause`.
            }
            Ok(WatchStatus::Conflict) => {
                retained.push(watch);
                outcome = Err(BCPError::Conflict(watch.key));
            }
            Ok(WatchStatus::Unit(asserted)) => {
                atom_db.set_value(asserted, level, Reason::Propagated(watch.key));
                trail.assign(asserted);
                log::trace!(
                    target: targets::PROPAGATION,
                    "Propagated {} via clause {}",
                    asserted,
                    watch.key
                );
                retained.push(watch);
            }
            Err(_) => {
                retained.push(watch);
                outcome = Err(BCPError::CorruptWatch);
            }
        }
    }

    *atom_db.watch_db_mut(atom).long_watches_mut(false_polarity) = retained;

    outcome
}

/// Examines a single long clause watching `atom` at `false_polarity`, maintaining the two
/// watched literal invariant (watched literals held at indices `0` and `1`).
fn examine_long_clause(
    key: ClauseKey,
    atom: Atom,
    false_polarity: bool,
    clause_db: &mut ClauseDB,
    atom_db: &mut AtomDB,
) -> Result<WatchStatus, err::ClauseDBError> {
    let db_clause = clause_db.get_mut(key)?;
    let clause = db_clause.clause_mut();

    // Ensure the just-falsified literal sits at index 1.
    if clause[0].atom() == atom && clause[0].polarity() == false_polarity {
        clause.swap(0, 1);
    }

    let other_watched = clause[0];
    if let Some(value) = atom_db.value_of(other_watched.atom()) {
        if value == other_watched.polarity() {
            return Ok(WatchStatus::Witness);
        }
    }

    for candidate_index in 2..clause.len() {
        let candidate = clause[candidate_index];
        let is_false = atom_db
            .value_of(candidate.atom())
            .is_some_and(|v| v != candidate.polarity());

        if !is_false {
            clause.swap(1, candidate_index);
            let new_watch = clause[1];
            atom_db
                .watch_db_mut(new_watch.atom())
                .long_watches_mut(new_watch.polarity())
                .push(LongWatch { key });
            return Ok(WatchStatus::None);
        }
    }

    match atom_db.value_of(other_watched.atom()) {
        None => Ok(WatchStatus::Unit(other_watched)),
        Some(_) => Ok(WatchStatus::Conflict),
    }
}
