//! Atom type perception.
//!
//! A [`Perceiver`] assigns every atom of a [`Mol`] one [`AtomType`] from its
//! [`TypeDictionary`]. Each element has a classifier that walks a fixed
//! order of branches (radical, explicit hybridization, charged, neutral)
//! and proposes candidate types; a candidate is only returned if the atom
//! satisfies its contract (see [`Rejection`] for the checks). When an
//! element's classifier finds nothing, the fallback families (halogens,
//! common salts, organometallics, noble gases) get a turn, and the unknown
//! type `X` is the final answer.
//!
//! ```
//! use typecrab::{Atom, Bond, Element, Mol, Perceiver, PerceptionMode};
//!
//! let mut mol = Mol::new();
//! let c = mol.add_atom(Atom::new(Element::C).with_hydrogens(2));
//! let o = mol.add_atom(Atom::new(Element::O).with_hydrogens(0));
//! mol.add_bond(c, o, Bond::double());
//!
//! let perceiver = Perceiver::new(PerceptionMode::default());
//! let ids: Vec<&str> = perceiver.perceive_all(&mol).map(|t| t.id.as_str()).collect();
//! assert_eq!(ids, ["C.sp2", "O.sp2"]);
//! ```

mod carbon;
mod context;
mod fallback;
mod hydrogen;
mod main_group;
mod metals;
mod nitrogen;
mod oracle;
mod oxygen;
mod phosphorus;
mod query;
mod sulfur;
mod table;
mod validate;

use std::sync::{Arc, OnceLock};

use log::debug;
use petgraph::graph::NodeIndex;
use serde::Deserialize;

use crate::dictionary::{AtomType, DictionaryError, TypeDictionary};
use crate::element::Element;
use crate::mol::Mol;
use crate::rings::{RingMembership, RingSearch, Sssr};
use crate::traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasHydrogenCount,
    HasSingleOrDouble,
};

use context::{AtomContext, BondCache};

pub use oracle::RingOracle;
pub use validate::Rejection;

/// Atom properties perception reads.
pub trait TypeableAtom:
    HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasAromaticity + HasHybridization
{
}

impl<T> TypeableAtom for T where
    T: HasAtomicNum + HasFormalCharge + HasHydrogenCount + HasAromaticity + HasHybridization
{
}

/// Bond properties perception reads.
pub trait TypeableBond: HasBondOrder + HasAromaticity + HasSingleOrDouble {}

impl<T> TypeableBond for T where T: HasBondOrder + HasAromaticity + HasSingleOrDouble {}

/// How the neighbour count of a candidate type is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionMode {
    /// Bonded neighbours plus implicit hydrogens may not exceed the type's
    /// count. Atoms with an unknown hydrogen count skip the check.
    #[default]
    ImplicitHydrogenTolerant,
    /// Bonded neighbours alone must equal the type's count.
    StrictNeighbours,
}

/// Assigns atom types using a dictionary, a neighbour-count mode and a
/// ring search.
#[derive(Debug, Clone)]
pub struct Perceiver<R = Sssr> {
    dictionary: Arc<TypeDictionary>,
    mode: PerceptionMode,
    ring_search: R,
}

impl Perceiver<Sssr> {
    /// A perceiver over the built-in dictionary.
    pub fn new(mode: PerceptionMode) -> Self {
        Self {
            dictionary: TypeDictionary::builtin(),
            mode,
            ring_search: Sssr,
        }
    }

    /// A perceiver over a custom dictionary.
    ///
    /// The dictionary must define every type the built-in one does, since
    /// the classifiers may return any of them.
    pub fn with_dictionary(
        dictionary: Arc<TypeDictionary>,
        mode: PerceptionMode,
    ) -> Result<Self, DictionaryError> {
        let builtin = TypeDictionary::builtin();
        dictionary.require(builtin.iter().map(|t| t.id.as_str()))?;
        Ok(Self {
            dictionary,
            mode,
            ring_search: Sssr,
        })
    }

    /// Process-wide perceiver for `mode`, created on first use.
    pub fn shared(mode: PerceptionMode) -> &'static Perceiver {
        static SHARED: [OnceLock<Perceiver>; 2] = [OnceLock::new(), OnceLock::new()];
        let slot = match mode {
            PerceptionMode::ImplicitHydrogenTolerant => &SHARED[0],
            PerceptionMode::StrictNeighbours => &SHARED[1],
        };
        slot.get_or_init(|| Perceiver::new(mode))
    }
}

impl Default for Perceiver<Sssr> {
    fn default() -> Self {
        Self::new(PerceptionMode::default())
    }
}

impl<R: RingSearch> Perceiver<R> {
    /// Replaces the ring search used for ring-aware rules.
    pub fn with_ring_search<S: RingSearch>(self, ring_search: S) -> Perceiver<S> {
        Perceiver {
            dictionary: self.dictionary,
            mode: self.mode,
            ring_search,
        }
    }

    pub fn mode(&self) -> PerceptionMode {
        self.mode
    }

    pub fn dictionary(&self) -> &TypeDictionary {
        &self.dictionary
    }

    /// Types of all atoms, in atom index order.
    ///
    /// Atoms are typed lazily as the iterator advances. Ring perception runs
    /// at most once, and only if some atom's rules ask for ring membership.
    /// Every call starts a fresh pass. The returned types borrow from the
    /// perceiver, not the molecule.
    pub fn perceive_all<'p, 'm, A, B>(&'p self, mol: &'m Mol<A, B>) -> AtomTypes<'p, 'm, A, B, R>
    where
        'p: 'm,
        A: TypeableAtom,
        B: TypeableBond,
    {
        AtomTypes {
            perceiver: self,
            mol,
            bonds: BondCache::new(mol),
            rings: RingOracle::new(mol, &self.ring_search),
            next: 0,
        }
    }

    /// Collects [`perceive_all`](Self::perceive_all).
    pub fn assign_types<'p, 'm, A, B>(&'p self, mol: &'m Mol<A, B>) -> Vec<&'p AtomType>
    where
        'p: 'm,
        A: TypeableAtom,
        B: TypeableBond,
    {
        self.perceive_all(mol).collect()
    }

    /// Type of a single atom.
    pub fn perceive_one<A, B>(&self, mol: &Mol<A, B>, atom: NodeIndex) -> &AtomType
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        let bonds = BondCache::new(mol);
        let rings = RingOracle::new(mol, &self.ring_search);
        self.perceive_atom(mol, atom, &bonds, &rings)
    }

    /// Checks `atom` against the contract of the type named `id`.
    ///
    /// Returns `None` if the dictionary has no such type.
    pub fn check_type<A, B>(
        &self,
        mol: &Mol<A, B>,
        atom: NodeIndex,
        id: &str,
    ) -> Option<Result<(), Rejection>>
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        let ty = self.dictionary.get(id)?;
        let bonds = BondCache::new(mol);
        let rings = RingOracle::new(mol, &self.ring_search);
        let ctx = AtomContext::new(mol, atom, &bonds, &rings, &self.dictionary, self.mode);
        Some(validate::check(&ctx, ty))
    }

    fn perceive_atom<A, B>(
        &self,
        mol: &Mol<A, B>,
        atom: NodeIndex,
        bonds: &BondCache,
        rings: &dyn RingMembership,
    ) -> &AtomType
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        let atomic_num = mol.atom(atom).atomic_num();
        let Some(element) = Element::from_atomic_num(atomic_num) else {
            if atomic_num != 0 {
                debug!("atom {}: atomic number {} is out of range", atom.index(), atomic_num);
            }
            return self.dictionary.unknown();
        };
        let ctx = AtomContext::new(mol, atom, bonds, rings, &self.dictionary, self.mode);
        match classify(&ctx, element).or_else(|| fallback::perceive(&ctx, element)) {
            Some(found) => found,
            None => {
                debug!("atom {} ({}): no type matched, using X", atom.index(), element);
                self.dictionary.unknown()
            }
        }
    }
}

/// Runs the rules registered for `element`, if any.
fn classify<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>, element: Element) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match element {
        Element::C => carbon::perceive(ctx),
        Element::H => hydrogen::perceive(ctx),
        Element::N => nitrogen::perceive(ctx),
        Element::O => oxygen::perceive(ctx),
        Element::S => sulfur::perceive(ctx),
        Element::P => phosphorus::perceive(ctx),
        _ => main_group::rules_for(element)
            .or_else(|| metals::rules_for(element))
            .and_then(|rows| table::classify(ctx, rows)),
    }
}

/// Iterator returned by [`Perceiver::perceive_all`].
pub struct AtomTypes<'p, 'm, A, B, R: RingSearch> {
    perceiver: &'p Perceiver<R>,
    mol: &'m Mol<A, B>,
    bonds: BondCache,
    rings: RingOracle<'m, A, B, R>,
    next: usize,
}

impl<'p, A, B, R> Iterator for AtomTypes<'p, '_, A, B, R>
where
    A: TypeableAtom,
    B: TypeableBond,
    R: RingSearch,
{
    type Item = &'p AtomType;

    fn next(&mut self) -> Option<&'p AtomType> {
        if self.next >= self.mol.atom_count() {
            return None;
        }
        let atom = NodeIndex::new(self.next);
        self.next += 1;
        Some(self.perceiver.perceive_atom(self.mol, atom, &self.bonds, &self.rings))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.mol.atom_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<A, B, R> ExactSizeIterator for AtomTypes<'_, '_, A, B, R>
where
    A: TypeableAtom,
    B: TypeableBond,
    R: RingSearch,
{
}
