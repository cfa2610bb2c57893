use petgraph::graph::NodeIndex;

use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasHydrogenCount};

/// Sum of the orders of all bonds incident to `atom`.
///
/// Bonds with [`BondOrder::Unset`](crate::BondOrder::Unset) contribute
/// nothing.
pub fn bond_order_sum<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    B: HasBondOrder,
{
    mol.bonds_of(atom)
        .map(|ei| mol.bond(ei).bond_order().numeric())
        .sum()
}

/// Bond-order sum plus implicit hydrogens (an unknown count adds zero).
pub fn total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    bond_order_sum(mol, atom) + mol.atom(atom).hydrogen_count().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};
    use crate::element::Element;

    #[test]
    fn ethene_total_valence() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::new(Element::C).with_hydrogens(2));
        let b = mol.add_atom(Atom::new(Element::C).with_hydrogens(2));
        mol.add_bond(a, b, Bond::double());
        assert_eq!(bond_order_sum(&mol, a), 2);
        assert_eq!(total_valence(&mol, a), 4);
        assert_eq!(total_valence(&mol, b), 4);
    }

    #[test]
    fn unknown_hydrogens_count_as_zero() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::new(Element::C));
        let n = mol.add_atom(Atom::new(Element::N));
        mol.add_bond(c, n, Bond::triple());
        assert_eq!(total_valence(&mol, c), 3);
    }

    #[test]
    fn unset_bonds_contribute_nothing() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::new(Element::C).with_hydrogens(1));
        let b = mol.add_atom(Atom::new(Element::C));
        let c = mol.add_atom(Atom::new(Element::C));
        mol.add_bond(a, b, Bond::single_or_double());
        mol.add_bond(a, c, Bond::new(BondOrder::Single));
        assert_eq!(bond_order_sum(&mol, a), 1);
        assert_eq!(total_valence(&mol, a), 2);
    }

    #[test]
    fn isolated_atom() {
        let mut mol = Mol::<Atom, Bond>::new();
        let o = mol.add_atom(Atom::new(Element::O).with_hydrogens(2));
        assert_eq!(bond_order_sum(&mol, o), 0);
        assert_eq!(total_valence(&mol, o), 2);
    }
}
