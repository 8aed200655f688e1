/*!
Backjumping: undoing trail assignments down to some earlier decision level.
*/

use crate::{
    db::{atom::AtomDB, trail::Trail, LevelIndex},
    misc::log::targets,
    structures::literal::Literal,
};

/// Cancels every assignment above `level`, clearing the relevant atoms and reactivating them on
/// the decision heap. Returns the literals removed, in trail order, so the caller can notify an
/// attached theory of exactly what was undone.
pub fn cancel_until(
    trail: &mut Trail,
    atom_db: &mut AtomDB,
    level: LevelIndex,
) -> Vec<crate::structures::literal::CLiteral> {
    let removed = trail.cancel_until(level);

    for literal in removed.iter().rev() {
        atom_db.clear_value(literal.atom());
    }

    log::trace!(
        target: targets::BACKJUMP,
        "Cancelled {} literals, back to level {level}",
        removed.len()
    );

    removed
}
