#![allow(dead_code)]

use serde::Deserialize;
use typecrab::{Atom, Bond, BondOrder, Element, Mol};

#[derive(Deserialize)]
pub struct AtomEntry {
    pub element: String,
    #[serde(default)]
    pub charge: Option<i8>,
    #[serde(default)]
    pub hydrogens: Option<u8>,
    #[serde(default)]
    pub aromatic: bool,
    #[serde(default)]
    pub radicals: usize,
}

#[derive(Deserialize)]
pub struct MolEntry {
    pub name: String,
    pub atoms: Vec<AtomEntry>,
    pub bonds: Vec<(usize, usize, String)>,
    pub types: Vec<String>,
    #[serde(default)]
    pub strict: Option<Vec<String>>,
}

pub fn load() -> Vec<MolEntry> {
    serde_json::from_str(include_str!("../approval_data/atom_types.json")).unwrap()
}

fn parse_bond(s: &str) -> Bond {
    match s {
        "single" => Bond::new(BondOrder::Single),
        "double" => Bond::new(BondOrder::Double),
        "triple" => Bond::new(BondOrder::Triple),
        "aromatic" => Bond::single_or_double(),
        other => panic!("Unknown bond: {other}"),
    }
}

fn parse_atom(a: &AtomEntry) -> Atom {
    let mut atom = match a.element.as_str() {
        "*" => Atom::placeholder(),
        sym => Atom::new(
            Element::from_symbol(sym).unwrap_or_else(|| panic!("Unknown element: {sym}")),
        ),
    };
    atom.formal_charge = a.charge.or(Some(0));
    atom.hydrogen_count = a.hydrogens;
    atom.is_aromatic = a.aromatic;
    atom
}

/// Builds the entry with its atoms added in `order` (a permutation of
/// entry indices). Returns the molecule and, per entry index, the new
/// atom index.
pub fn build_in_order(entry: &MolEntry, order: &[usize]) -> (Mol<Atom, Bond>, Vec<usize>) {
    let mut mol = Mol::new();
    let mut position = vec![0; entry.atoms.len()];
    for &i in order {
        position[i] = mol.add_atom(parse_atom(&entry.atoms[i])).index();
    }
    let node = |i: usize| petgraph::graph::NodeIndex::new(position[i]);
    for (a, b, bond) in &entry.bonds {
        mol.add_bond(node(*a), node(*b), parse_bond(bond));
    }
    for (i, a) in entry.atoms.iter().enumerate() {
        for _ in 0..a.radicals {
            mol.add_single_electron(node(i));
        }
    }
    (mol, position)
}

pub fn build(entry: &MolEntry) -> Mol<Atom, Bond> {
    let order: Vec<usize> = (0..entry.atoms.len()).collect();
    build_in_order(entry, &order).0
}
