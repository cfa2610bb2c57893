use log::trace;
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::dictionary::{AtomType, TypeDictionary};
use crate::mol::Mol;
use crate::rings::RingMembership;

use super::validate;
use super::{PerceptionMode, TypeableAtom, TypeableBond};

/// Incident bond lists for every atom, built once per molecule.
pub(crate) struct BondCache {
    incident: Vec<Vec<EdgeIndex>>,
}

impl BondCache {
    pub(crate) fn new<A, B>(mol: &Mol<A, B>) -> Self {
        let mut incident = vec![Vec::new(); mol.atom_count()];
        for edge in mol.bonds() {
            if let Some((a, b)) = mol.bond_endpoints(edge) {
                incident[a.index()].push(edge);
                if a != b {
                    incident[b.index()].push(edge);
                }
            }
        }
        Self { incident }
    }

    pub(crate) fn bonds_of(&self, atom: NodeIndex) -> &[EdgeIndex] {
        self.incident
            .get(atom.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Everything a classifier may read while typing one atom.
///
/// `'d` is the lifetime of the dictionary the returned types borrow from;
/// `'c` covers the molecule and the per-molecule caches.
pub(crate) struct AtomContext<'d, 'c, A, B> {
    pub(crate) mol: &'c Mol<A, B>,
    pub(crate) idx: NodeIndex,
    pub(crate) atom: &'c A,
    pub(crate) bonds: &'c [EdgeIndex],
    cache: &'c BondCache,
    rings: &'c dyn RingMembership,
    dictionary: &'d TypeDictionary,
    mode: PerceptionMode,
}

impl<'d, 'c, A, B> AtomContext<'d, 'c, A, B>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    pub(crate) fn new(
        mol: &'c Mol<A, B>,
        idx: NodeIndex,
        cache: &'c BondCache,
        rings: &'c dyn RingMembership,
        dictionary: &'d TypeDictionary,
        mode: PerceptionMode,
    ) -> Self {
        Self {
            mol,
            idx,
            atom: mol.atom(idx),
            bonds: cache.bonds_of(idx),
            cache,
            rings,
            dictionary,
            mode,
        }
    }

    pub(crate) fn mode(&self) -> PerceptionMode {
        self.mode
    }

    pub(crate) fn bond(&self, edge: EdgeIndex) -> &'c B {
        self.mol.bond(edge)
    }

    /// Bonds incident to any atom of the molecule.
    pub(crate) fn bonds_of(&self, atom: NodeIndex) -> &'c [EdgeIndex] {
        self.cache.bonds_of(atom)
    }

    pub(crate) fn is_ring_atom(&self) -> bool {
        self.rings.is_ring_atom(self.idx)
    }

    /// Looks up a type the classifiers reference.
    ///
    /// # Panics
    ///
    /// Panics if `id` is absent. Perceivers only accept dictionaries that
    /// carry every referenced identifier, so this indicates a library bug.
    pub(crate) fn lookup(&self, id: &str) -> &'d AtomType {
        match self.dictionary.get(id) {
            Some(ty) => ty,
            None => panic!(
                "atom type '{id}' is referenced by a classifier but absent from the dictionary"
            ),
        }
    }

    /// The named type if the atom satisfies its contract.
    pub(crate) fn accept(&self, id: &str) -> Option<&'d AtomType> {
        let ty = self.lookup(id);
        match validate::check(self, ty) {
            Ok(()) => Some(ty),
            Err(reason) => {
                trace!("atom {}: {} rejected: {}", self.idx.index(), id, reason);
                None
            }
        }
    }

    /// The first of `ids` that the atom satisfies.
    pub(crate) fn first_accepted(&self, ids: &[&str]) -> Option<&'d AtomType> {
        ids.iter().find_map(|id| self.accept(id))
    }
}
