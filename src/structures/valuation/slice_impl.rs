//! Implementation of the valuation trait for any structure which can be dereferenced to a slice of optional booleans.
use crate::structures::{atom::Atom, valuation::Valuation};

impl<T: std::ops::DerefMut<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    unsafe fn value_of_unchecked(&self, atom: Atom) -> Option<bool> {
        unsafe { *self.get_unchecked(atom as usize) }
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, Option<bool>)> {
        self.iter()
            .enumerate()
            .skip(1)
            .map(|(atom, val)| (atom as Atom, *val))
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, val)| val.map(|v| (atom as Atom, v)))
    }

    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, val)| val.map(|_| atom as Atom))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, val)| if val.is_none() { Some(atom as Atom) } else { None })
    }

    fn canonical(&self) -> super::CValuation {
        self.iter().copied().collect()
    }

    fn true_check(&self) -> bool {
        matches!(self.first(), Some(Some(true)))
    }

    unsafe fn clear_value_of(&mut self, atom: Atom) {
        *unsafe { self.get_unchecked_mut(atom as usize) } = None;
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
