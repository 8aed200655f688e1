//! Implementation of the clause trait for a `Vec` of [ABLiteral]s.

use crate::{
    config::LBD,
    db::LevelIndex,
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{ABLiteral, CLiteral, Literal},
        valuation::Valuation,
    },
};

/// The implementation of a clause as a vector of literals.
#[allow(non_camel_case_types)]
pub type ABClause = Vec<ABLiteral>;

impl Clause for ABClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.literals() {
            match literal.polarity() {
                true => the_string.push_str(format!(" {literal} ").as_str()),
                false => the_string.push_str(format!("{literal} ").as_str()),
            };
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn asserts<V: Valuation>(&self, val: &V) -> Option<CLiteral> {
        let mut the_literal = None;
        for lit in self.literals() {
            if let Some(existing_val) = val.value_of(lit.atom()).flatten() {
                match existing_val == lit.polarity() {
                    true => return None,
                    false => continue,
                }
            } else if the_literal.is_none() {
                the_literal = Some(lit);
            } else {
                return None;
            }
        }
        the_literal
    }

    fn lbd(&self, levels: &[LevelIndex]) -> LBD {
        let mut decision_levels = self
            .iter()
            .map(|literal| levels[literal.atom() as usize])
            .collect::<Vec<_>>();

        decision_levels.sort_unstable();
        decision_levels.dedup();

        decision_levels.len() as LBD
    }

    fn literals(&self) -> impl std::iter::Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> super::CClause {
        self
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.literals().all(|literal| {
            valuation
                .value_of(literal.atom())
                .is_some_and(|value| value.is_some_and(|v| v != literal.polarity()))
        })
    }

    fn literal_at(&self, index: usize) -> Option<CLiteral> {
        self.get(index).copied()
    }

    unsafe fn literal_at_unchecked(&self, index: usize) -> CLiteral {
        unsafe { *self.get_unchecked(index) }
    }

    fn atom_at(&self, index: usize) -> Option<Atom> {
        self.get(index).map(|l| l.atom())
    }

    unsafe fn atom_at_unchecked(&self, index: usize) -> Atom {
        unsafe { self.get_unchecked(index).atom() }
    }
}
