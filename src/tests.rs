use crate::*;

#[test]
fn mol_add_atoms_and_bonds() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom::new(Element::C));
    let o = mol.add_atom(Atom::new(Element::O));
    let bond_idx = mol.add_bond(c, o, Bond::double());

    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert_eq!(mol.atom(c).atomic_num, 6);
    assert_eq!(mol.atom(o).atomic_num, 8);
    assert_eq!(mol.bond(bond_idx).order, BondOrder::Double);
}

#[test]
fn mol_neighbors_and_bonds_of() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    mol.add_bond(a, b, Bond::default());
    mol.add_bond(a, c, Bond::default());

    assert_eq!(mol.neighbors(a).count(), 2);
    assert_eq!(mol.bonds_of(a).count(), 2);
    assert_eq!(mol.bonds_of(b).count(), 1);
}

#[test]
fn mol_bond_between_and_endpoints() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert_eq!(mol.bond_between(a, b), Some(e));
    assert_eq!(mol.bond_between(a, c), None);

    let (src, dst) = mol.bond_endpoints(e).unwrap();
    assert!((src == a && dst == b) || (src == b && dst == a));
}

#[test]
fn mol_other_atom() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::default());
    let b = mol.add_atom(Atom::default());
    let c = mol.add_atom(Atom::default());
    let e = mol.add_bond(a, b, Bond::default());

    assert_eq!(mol.other_atom(e, a), Some(b));
    assert_eq!(mol.other_atom(e, b), Some(a));
    assert_eq!(mol.other_atom(e, c), None);
}

#[test]
fn mol_single_electrons() {
    let mut mol = Mol::<Atom, Bond>::new();
    let a = mol.add_atom(Atom::new(Element::C));
    let b = mol.add_atom(Atom::new(Element::O));
    mol.add_single_electron(a);
    mol.add_single_electron(a);
    mol.add_single_electron(b);

    assert_eq!(mol.single_electrons().len(), 3);
    assert_eq!(mol.single_electron_count(a), 2);
    assert_eq!(mol.single_electron_count(b), 1);

    mol.remove_single_electrons(a);
    assert_eq!(mol.single_electron_count(a), 0);
    assert_eq!(mol.single_electrons(), &[SingleElectron { atom: b }]);
}

#[test]
fn mol_iterators() {
    let mut mol = Mol::<Atom, Bond>::new();
    mol.add_atom(Atom::default());
    mol.add_atom(Atom::default());

    assert_eq!(mol.atoms().count(), 2);
    assert_eq!(mol.bonds().count(), 0);
}

#[test]
fn mol_atom_mut() {
    let mut mol = Mol::<Atom, Bond>::new();
    let idx = mol.add_atom(Atom::default());
    mol.atom_mut(idx).atomic_num = 7;
    assert_eq!(mol.atom(idx).atomic_num, 7);
}

#[test]
fn mol_equality_includes_single_electrons() {
    let mut a = Mol::<Atom, Bond>::new();
    let x = a.add_atom(Atom::new(Element::N));
    let b = a.clone();
    assert_eq!(a, b);
    a.add_single_electron(x);
    assert_ne!(a, b);
}

#[test]
fn atom_trait_impls() {
    let atom = Atom::new(Element::C)
        .with_charge(-1)
        .with_hydrogens(3)
        .with_hybridization(Hybridization::SP3)
        .aromatic();

    assert_eq!(HasAtomicNum::atomic_num(&atom), 6);
    assert_eq!(HasFormalCharge::formal_charge(&atom), Some(-1));
    assert_eq!(HasHydrogenCount::hydrogen_count(&atom), Some(3));
    assert_eq!(HasHybridization::hybridization(&atom), Some(Hybridization::SP3));
    assert!(HasAromaticity::is_aromatic(&atom));
    assert_eq!(atom.element(), Some(Element::C));
}

#[test]
fn bond_trait_impls() {
    let bond = Bond::triple();
    assert_eq!(HasBondOrder::bond_order(&bond), BondOrder::Triple);
    assert!(!HasAromaticity::is_aromatic(&bond));
    assert!(!HasSingleOrDouble::is_single_or_double(&bond));

    let bond = Bond::aromatic(BondOrder::Double);
    assert_eq!(HasBondOrder::bond_order(&bond), BondOrder::Double);
    assert!(HasAromaticity::is_aromatic(&bond));
}

#[test]
fn bond_order_default_is_single() {
    assert_eq!(BondOrder::default(), BondOrder::Single);
    assert_eq!(Bond::default(), Bond::single());
}

#[test]
fn atom_default_is_unspecified_placeholder() {
    let atom = Atom::default();
    assert_eq!(atom.atomic_num, 0);
    assert_eq!(atom.formal_charge, None);
    assert_eq!(atom.hydrogen_count, None);
    assert_eq!(atom.hybridization, None);
    assert!(!atom.is_aromatic);
    assert_eq!(atom.element(), None);
    assert_eq!(Atom::placeholder(), atom);
}

#[test]
fn mol_default() {
    let mol = Mol::<Atom, Bond>::default();
    assert_eq!(mol.atom_count(), 0);
    assert_eq!(mol.bond_count(), 0);
    assert!(mol.single_electrons().is_empty());
}

#[test]
fn mol_graph_access() {
    let mut mol = Mol::<Atom, Bond>::new();
    mol.add_atom(Atom::default());
    assert_eq!(mol.graph().node_count(), 1);
}

/// A caller-defined atom: perception only needs the property traits.
#[derive(Debug, Clone)]
struct LabelledAtom {
    label: &'static str,
    atomic_num: u8,
    charge: i8,
    hydrogens: u8,
}

impl HasAtomicNum for LabelledAtom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl HasFormalCharge for LabelledAtom {
    fn formal_charge(&self) -> Option<i8> {
        Some(self.charge)
    }
}

impl HasHydrogenCount for LabelledAtom {
    fn hydrogen_count(&self) -> Option<u8> {
        Some(self.hydrogens)
    }
}

impl HasAromaticity for LabelledAtom {
    fn is_aromatic(&self) -> bool {
        false
    }
}

impl HasHybridization for LabelledAtom {
    fn hybridization(&self) -> Option<Hybridization> {
        None
    }
}

#[test]
fn perception_over_custom_atom_type() {
    let mut mol = Mol::<LabelledAtom, Bond>::new();
    let n = mol.add_atom(LabelledAtom {
        label: "amine",
        atomic_num: 7,
        charge: 0,
        hydrogens: 2,
    });
    let c = mol.add_atom(LabelledAtom {
        label: "methyl",
        atomic_num: 6,
        charge: 0,
        hydrogens: 3,
    });
    mol.add_bond(n, c, Bond::single());

    let perceiver = Perceiver::default();
    let types: Vec<_> = perceiver
        .perceive_all(&mol)
        .zip(mol.atoms())
        .map(|(t, idx)| (mol.atom(idx).label, t.id.as_str()))
        .collect();
    assert_eq!(types, [("amine", "N.sp3"), ("methyl", "C.sp3")]);
}

#[test]
fn valence_helpers_agree_with_perception() {
    let mut mol = Mol::<Atom, Bond>::new();
    let c = mol.add_atom(Atom::new(Element::C).with_hydrogens(2));
    let o = mol.add_atom(Atom::new(Element::O).with_hydrogens(0));
    mol.add_bond(c, o, Bond::double());

    let perceiver = Perceiver::default();
    let ty = perceiver.perceive_one(&mol, c);
    assert_eq!(ty.id, "C.sp2");
    assert!(total_valence(&mol, c) <= ty.valency.unwrap());
    assert_eq!(bond_order_sum(&mol, o), 2);
}
