//! Local structure queries over one atom's bonds and neighbours.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::bond::BondOrder;
use crate::element::Element;
use crate::hybridization::Hybridization;

use super::context::AtomContext;
use super::{TypeableAtom, TypeableBond};

impl<'d, 'c, A, B> AtomContext<'d, 'c, A, B>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    pub(crate) fn charge(&self) -> Option<i8> {
        self.atom.formal_charge()
    }

    pub(crate) fn charge_or_zero(&self) -> i8 {
        self.charge().unwrap_or(0)
    }

    pub(crate) fn is_charged(&self) -> bool {
        self.charge_or_zero() != 0
    }

    pub(crate) fn hybridization(&self) -> Option<Hybridization> {
        self.atom.hybridization()
    }

    pub(crate) fn is_aromatic(&self) -> bool {
        self.atom.is_aromatic()
    }

    pub(crate) fn implicit_hydrogens(&self) -> usize {
        self.atom.hydrogen_count().map_or(0, usize::from)
    }

    pub(crate) fn neighbour_count(&self) -> usize {
        self.bonds.len()
    }

    pub(crate) fn single_electrons(&self) -> usize {
        self.mol.single_electron_count(self.idx)
    }

    pub(crate) fn is_radical(&self) -> bool {
        self.single_electrons() > 0
    }

    fn neighbour(&self, edge: EdgeIndex) -> Option<NodeIndex> {
        self.mol.other_atom(edge, self.idx)
    }

    fn neighbour_is(&self, edge: EdgeIndex, element: Element) -> bool {
        self.neighbour(edge)
            .is_some_and(|n| self.mol.atom(n).atomic_num() == element.atomic_num())
    }

    /// Highest order among the atom's bonds, never lower than single.
    ///
    /// Unset orders are ignored, so an atom with no bonds (or only
    /// unresolved ones) reports [`BondOrder::Single`].
    pub(crate) fn max_bond_order(&self) -> BondOrder {
        self.bonds
            .iter()
            .map(|&e| self.bond(e).bond_order())
            .fold(BondOrder::Single, BondOrder::max)
    }

    pub(crate) fn count_double_bonds(&self) -> usize {
        self.bonds
            .iter()
            .filter(|&&e| self.bond(e).bond_order() == BondOrder::Double)
            .count()
    }

    pub(crate) fn count_double_bonds_to(&self, element: Element) -> usize {
        self.bonds
            .iter()
            .filter(|&&e| {
                self.bond(e).bond_order() == BondOrder::Double && self.neighbour_is(e, element)
            })
            .count()
    }

    pub(crate) fn has_aromatic_bond(&self) -> bool {
        self.bonds.iter().any(|&e| self.bond(e).is_aromatic())
    }

    pub(crate) fn has_single_or_double_bond(&self) -> bool {
        self.bonds.iter().any(|&e| self.bond(e).is_single_or_double())
    }

    pub(crate) fn explicit_hydrogens(&self) -> usize {
        self.bonds
            .iter()
            .filter(|&&e| self.neighbour_is(e, Element::H))
            .count()
    }

    pub(crate) fn heavy_bond_count(&self) -> usize {
        self.neighbour_count() - self.explicit_hydrogens()
    }

    pub(crate) fn total_hydrogens(&self) -> usize {
        self.explicit_hydrogens() + self.implicit_hydrogens()
    }

    /// Whether every bond to a heavy atom is flagged aromatic.
    pub(crate) fn heavy_bonds_aromatic(&self) -> bool {
        self.bonds
            .iter()
            .filter(|&&e| !self.neighbour_is(e, Element::H))
            .all(|&e| self.bond(e).is_aromatic())
    }

    /// At least two neighbours reached through non-double bonds look sp2:
    /// they carry an sp2 label, an aromatic flag, or a double or aromatic
    /// bond of their own.
    pub(crate) fn both_neighbours_sp2(&self) -> bool {
        self.bonds
            .iter()
            .filter(|&&e| self.bond(e).bond_order() != BondOrder::Double)
            .filter(|&&e| {
                self.neighbour(e)
                    .is_some_and(|n| self.looks_sp2(n, e))
            })
            .count()
            >= 2
    }

    fn looks_sp2(&self, atom: NodeIndex, via: EdgeIndex) -> bool {
        let a = self.mol.atom(atom);
        if a.hybridization() == Some(Hybridization::SP2) || a.is_aromatic() {
            return true;
        }
        self.bonds_of(atom).iter().filter(|&&e| e != via).any(|&e| {
            let bond = self.bond(e);
            bond.bond_order() == BondOrder::Double
                || bond.is_aromatic()
                || bond.is_single_or_double()
        })
    }

    /// Ring-aware planarity test for atoms whose lone pair may join a π
    /// system: exactly two heavy neighbours, both sp2-like, inside a ring.
    pub(crate) fn is_planar_ring_member(&self) -> bool {
        self.heavy_bond_count() == 2 && self.both_neighbours_sp2() && self.is_ring_atom()
    }

    /// Some bonded carbon has exactly one double bond to `hetero`.
    fn bonded_to_carbonyl_like(&self, hetero: Element) -> bool {
        self.bonds.iter().filter_map(|&e| self.neighbour(e)).any(|n| {
            self.mol.atom(n).atomic_num() == Element::C.atomic_num()
                && self.double_bonds_from(n, hetero) == 1
        })
    }

    fn double_bonds_from(&self, atom: NodeIndex, element: Element) -> usize {
        self.bonds_of(atom)
            .iter()
            .filter(|&&e| self.bond(e).bond_order() == BondOrder::Double)
            .filter_map(|&e| self.mol.other_atom(e, atom))
            .filter(|&n| self.mol.atom(n).atomic_num() == element.atomic_num())
            .count()
    }

    pub(crate) fn is_amide(&self) -> bool {
        self.bonded_to_carbonyl_like(Element::O)
    }

    pub(crate) fn is_thioamide(&self) -> bool {
        self.bonded_to_carbonyl_like(Element::S)
    }

    /// The atom is one oxygen of a carboxylate: its single neighbour is a
    /// carbon with exactly one double-bonded oxygen and exactly one
    /// single-bonded oxygen of charge -1.
    pub(crate) fn is_carboxylate(&self) -> bool {
        if self.atom.atomic_num() != Element::O.atomic_num() {
            return false;
        }
        let [edge] = self.bonds else {
            return false;
        };
        let Some(carbon) = self.neighbour(*edge) else {
            return false;
        };
        if self.mol.atom(carbon).atomic_num() != Element::C.atomic_num() {
            return false;
        }
        let mut double_o = 0;
        let mut anionic_o = 0;
        for &e in self.bonds_of(carbon) {
            let Some(other) = self.mol.other_atom(e, carbon) else {
                continue;
            };
            let other_atom = self.mol.atom(other);
            if other_atom.atomic_num() != Element::O.atomic_num() {
                continue;
            }
            match self.bond(e).bond_order() {
                BondOrder::Double => double_o += 1,
                BondOrder::Single if other_atom.formal_charge() == Some(-1) => anionic_o += 1,
                _ => {}
            }
        }
        double_o == 1 && anionic_o == 1
    }
}
