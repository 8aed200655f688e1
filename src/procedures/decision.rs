/*!
Choosing the next atom to decide on, and which polarity to give it.

Variable selection always consults the activity heap — [AtomDB] does not expose a way to draw a
uniformly random atom from the unassigned set, only the maximum, so `random_decision_bias` (unlike
MiniSAT's variable-frequency knob of the same name) governs polarity only: how often the decision
ignores phase saving and the configured lean in favour of a fair coin. Recorded as a deliberate
simplification, not an oversight.
*/

use rand::Rng;

use crate::{
    config::Config,
    db::atom::AtomDB,
    misc::log::targets,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// The result of consulting the decision procedure.
pub enum Decision {
    /// An atom was chosen, to be enqueued with reason `Decision` at a fresh level.
    Made(CLiteral),

    /// No unassigned atom remains: the trail is a complete valuation.
    Exhausted,
}

/// Chooses the next atom to decide, preferring a pending `next_decision` override (see
/// [solve](crate::procedures::solve)) before falling back to the activity heap.
pub fn decide<R: Rng>(
    atom_db: &mut AtomDB,
    config: &Config,
    rng: &mut R,
    next_decision: &mut Option<CLiteral>,
) -> Decision {
    if let Some(literal) = next_decision.take() {
        if atom_db.value_of(literal.atom()).is_none() {
            log::trace!(target: targets::DECISION, "Using theory-suggested decision {literal}");
            return Decision::Made(literal);
        }
    }

    loop {
        let Some(atom) = atom_db.next_by_activity() else {
            return Decision::Exhausted;
        };

        // A stale entry: the atom was valued by propagation after being queued on the heap but
        // before being popped. Skip and retry.
        if atom_db.value_of(atom).is_some() {
            continue;
        }

        let polarity = choose_polarity(atom, atom_db, config, rng);
        let literal = CLiteral::new(atom, polarity);
        log::trace!(target: targets::DECISION, "Decided {literal}");
        return Decision::Made(literal);
    }
}

fn choose_polarity<R: Rng>(atom: Atom, atom_db: &AtomDB, config: &Config, rng: &mut R) -> bool {
    if rng.random_bool(config.random_decision_bias.value) {
        return rng.random_bool(0.5);
    }

    if config.phase_saving.value {
        atom_db.previous_value_of(atom)
    } else {
        rng.random_bool(config.polarity_lean.value)
    }
}
