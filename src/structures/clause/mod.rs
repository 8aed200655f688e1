/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.

The canonical representation of a clause is as a vector of literals.

```rust
# use cdcl_core::structures::literal::{CLiteral, Literal};
# use cdcl_core::structures::clause::Clause;
let clause = vec![CLiteral::new(23, true),
                  CLiteral::new(41, false),
                  CLiteral::new(3,  false),
                  CLiteral::new(15, true),
                  CLiteral::new(4,  false)];

assert_eq!(clause.size(), 5);

let mut some_valuation = vec![Some(true); 42];

some_valuation[23] = Some(false);
some_valuation[15] = Some(false);
assert!(clause.asserts(&some_valuation).is_none());

some_valuation[41] = None;
assert_eq!(clause.asserts(&some_valuation), Some(CLiteral::new(41, false)));
```

- The empty clause is always false (never true).
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
*/

mod ab_clause;
pub use ab_clause::ABClause;

mod kind;
pub use kind::ClauseKind;

mod premise;
pub use premise::{LemmaTag, Premise, PremiseTag, UserTag};

use crate::{
    config::LBD,
    db::LevelIndex,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// The canonical implementation of a clause.
pub type CClause = ABClause;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts<V: Valuation>(&self, val: &V) -> Option<CLiteral>;

    /// The Literal Block Distance of the clause: the number of distinct decision levels
    /// among the levels of its atoms, found by consulting `levels` (indexed by atom).
    fn lbd(&self, levels: &[LevelIndex]) -> LBD;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Returns whether the clause is unsatisfiable (every literal falsified) on the given valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// Returns the literal at index 'index', if the clause contains at least `index` literals.
    fn literal_at(&self, index: usize) -> Option<CLiteral>;

    /// Returns the literal at `index`, without checking whether the clause contains at least `index` literals.
    ///
    /// # Safety
    /// Well-defined only if the clause contains at least `index` literals.
    unsafe fn literal_at_unchecked(&self, index: usize) -> CLiteral;

    /// Returns the atom at index 'index', if the clause contains at least `index` atoms.
    fn atom_at(&self, index: usize) -> Option<Atom>;

    /// Returns the atom at `index`, without checking whether the clause contains at least `index` atoms.
    ///
    /// # Safety
    /// Well-defined only if the clause contains at least `index` atoms.
    unsafe fn atom_at_unchecked(&self, index: usize) -> Atom;
}

/// Removes duplicate literals in place and reports whether the clause is a tautology
/// (contains some atom with both polarities).
///
/// Grounded on the duplicate/tautology handling a CNF front-end performs before a clause
/// ever reaches the clause database.
pub fn dedup_or_tautology(clause: &mut CClause) -> bool {
    let mut index = 0;
    'scan: while index < clause.len() {
        let literal = clause[index];
        for other_index in 0..index {
            let other = clause[other_index];
            if other.atom() == literal.atom() {
                if other.polarity() == literal.polarity() {
                    clause.swap_remove(index);
                    continue 'scan;
                } else {
                    return true;
                }
            }
        }
        index += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn duplicates_removed() {
        let p = CLiteral::new(1, true);
        let not_q = CLiteral::new(2, false);
        let r = CLiteral::new(3, true);

        let mut clause = vec![p, not_q, r, r, not_q, p];
        assert!(!dedup_or_tautology(&mut clause));
        assert_eq!(clause.len(), 3);
    }

    #[test]
    fn tautology_detected() {
        let p = CLiteral::new(1, true);
        let not_p = CLiteral::new(1, false);

        let mut clause = vec![p, not_p];
        assert!(dedup_or_tautology(&mut clause));
    }
}
