use std::cell::OnceCell;

use log::trace;
use petgraph::graph::NodeIndex;

use crate::mol::Mol;
use crate::rings::{RingMembership, RingSearch};

/// Ring membership answered on demand.
///
/// The ring search runs on the first query and its result is reused for
/// every later query against the same molecule. Molecules whose atoms never
/// ask never pay for it.
pub struct RingOracle<'a, A, B, R: RingSearch> {
    mol: &'a Mol<A, B>,
    search: &'a R,
    rings: OnceCell<R::Rings>,
}

impl<'a, A, B, R: RingSearch> RingOracle<'a, A, B, R> {
    pub fn new(mol: &'a Mol<A, B>, search: &'a R) -> Self {
        Self {
            mol,
            search,
            rings: OnceCell::new(),
        }
    }

    /// Whether the ring search has run yet.
    pub fn is_computed(&self) -> bool {
        self.rings.get().is_some()
    }

    fn rings(&self) -> &R::Rings {
        self.rings.get_or_init(|| {
            trace!("running ring search over {} atoms", self.mol.atom_count());
            self.search.find_rings(self.mol)
        })
    }
}

impl<A, B, R: RingSearch> RingMembership for RingOracle<'_, A, B, R> {
    fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings().is_ring_atom(atom)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::element::Element;
    use crate::rings::{RingInfo, Sssr};

    #[derive(Default)]
    struct CountingSearch {
        calls: AtomicUsize,
    }

    impl RingSearch for CountingSearch {
        type Rings = RingInfo;

        fn find_rings<A, B>(&self, mol: &Mol<A, B>) -> RingInfo {
            self.calls.fetch_add(1, Ordering::Relaxed);
            RingInfo::sssr(mol)
        }
    }

    fn cyclopropane_with_tail() -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        let atoms: Vec<_> = (0..4)
            .map(|_| mol.add_atom(Atom::new(Element::C)))
            .collect();
        mol.add_bond(atoms[0], atoms[1], Bond::single());
        mol.add_bond(atoms[1], atoms[2], Bond::single());
        mol.add_bond(atoms[2], atoms[0], Bond::single());
        mol.add_bond(atoms[2], atoms[3], Bond::single());
        mol
    }

    #[test]
    fn search_is_lazy() {
        let mol = cyclopropane_with_tail();
        let search = CountingSearch::default();
        let oracle = RingOracle::new(&mol, &search);
        assert!(!oracle.is_computed());
        assert_eq!(search.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn search_runs_once() {
        let mol = cyclopropane_with_tail();
        let search = CountingSearch::default();
        let oracle = RingOracle::new(&mol, &search);
        assert!(oracle.is_ring_atom(NodeIndex::new(0)));
        assert!(oracle.is_ring_atom(NodeIndex::new(2)));
        assert!(!oracle.is_ring_atom(NodeIndex::new(3)));
        assert_eq!(search.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn default_search() {
        let mol = cyclopropane_with_tail();
        let oracle = RingOracle::new(&mol, &Sssr);
        assert!(oracle.is_ring_atom(NodeIndex::new(1)));
        assert!(oracle.is_computed());
    }
}
