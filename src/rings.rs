//! Ring perception.
//!
//! [`RingInfo::sssr`] computes a smallest set of smallest rings from Horton
//! candidate cycles, keeping those that are linearly independent over GF(2)
//! in the bond space. Perception only needs ring *membership*, which it asks
//! for through the [`RingMembership`] trait; [`RingSearch`] is the factory
//! that builds a membership answer for one molecule.

use std::collections::VecDeque;

use petgraph::algo::connected_components;
use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Answers "does this atom sit on a cycle?".
pub trait RingMembership {
    fn is_ring_atom(&self, atom: NodeIndex) -> bool;
}

/// Builds ring membership for a whole molecule.
///
/// Implementations are run at most once per perception call.
pub trait RingSearch {
    type Rings: RingMembership;

    fn find_rings<A, B>(&self, mol: &Mol<A, B>) -> Self::Rings;
}

/// The default ring search: SSSR via [`RingInfo::sssr`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sssr;

impl RingSearch for Sssr {
    type Rings = RingInfo;

    fn find_rings<A, B>(&self, mol: &Mol<A, B>) -> RingInfo {
        RingInfo::sssr(mol)
    }
}

#[derive(Debug, Clone)]
pub struct RingInfo {
    rings: Vec<Vec<NodeIndex>>,
    in_ring: Vec<bool>,
}

impl RingInfo {
    pub fn sssr<A, B>(mol: &Mol<A, B>) -> Self {
        let num_expected = Self::expected_ring_count(mol);
        if num_expected == 0 {
            return Self::from_rings(vec![], mol.atom_count());
        }

        let num_edges = mol.bond_count();
        let candidates = horton_candidates(mol);
        let rings = select_independent_rings(&candidates, num_expected, num_edges, mol);

        Self::from_rings(rings, mol.atom_count())
    }

    fn from_rings(rings: Vec<Vec<NodeIndex>>, atom_count: usize) -> Self {
        let mut in_ring = vec![false; atom_count];
        for atom in rings.iter().flatten() {
            in_ring[atom.index()] = true;
        }
        Self { rings, in_ring }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn rings(&self) -> &[Vec<NodeIndex>] {
        &self.rings
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.in_ring.get(atom.index()).copied().unwrap_or(false)
    }

    pub fn smallest_ring_size(&self, atom: NodeIndex) -> Option<usize> {
        self.rings
            .iter()
            .filter(|ring| ring.contains(&atom))
            .map(|ring| ring.len())
            .min()
    }

    /// Cyclomatic number: bonds − atoms + connected components.
    pub fn expected_ring_count<A, B>(mol: &Mol<A, B>) -> usize {
        let v = mol.atom_count();
        let e = mol.bond_count();
        let c = connected_components(mol.graph());
        (e + c).saturating_sub(v)
    }
}

impl RingMembership for RingInfo {
    fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        RingInfo::is_ring_atom(self, atom)
    }
}

fn horton_candidates<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let dist = all_pairs_bfs(mol, n);
    let pred = all_pairs_predecessors(mol, n, &dist);

    let mut candidates: Vec<Vec<NodeIndex>> = Vec::new();

    for edge in mol.bonds() {
        let (u, v) = match mol.bond_endpoints(edge) {
            Some(pair) => pair,
            None => continue,
        };
        for w_idx in 0..n {
            let w = NodeIndex::new(w_idx);
            let du = dist[w_idx][u.index()];
            let dv = dist[w_idx][v.index()];
            if du == u32::MAX || dv == u32::MAX {
                continue;
            }
            if du as usize + dv as usize + 1 < 3 {
                continue;
            }
            let path_u = reconstruct_path(&pred, w, u);
            let path_v = reconstruct_path(&pred, w, v);
            if path_u.is_empty() || path_v.is_empty() {
                continue;
            }
            if paths_share_internal_node(&path_u, &path_v) {
                continue;
            }
            let mut ring = path_u;
            ring.extend(path_v[1..].iter().rev());
            candidates.push(ring);
        }
    }

    candidates.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    candidates.dedup();
    candidates
}

fn all_pairs_bfs<A, B>(mol: &Mol<A, B>, n: usize) -> Vec<Vec<u32>> {
    let mut dist = vec![vec![u32::MAX; n]; n];
    for (src_idx, row) in dist.iter_mut().enumerate() {
        row[src_idx] = 0;
        let mut queue = VecDeque::from([NodeIndex::new(src_idx)]);
        while let Some(cur) = queue.pop_front() {
            let d = row[cur.index()];
            for nb in mol.neighbors(cur) {
                if row[nb.index()] == u32::MAX {
                    row[nb.index()] = d + 1;
                    queue.push_back(nb);
                }
            }
        }
    }
    dist
}

fn all_pairs_predecessors<A, B>(
    mol: &Mol<A, B>,
    n: usize,
    dist: &[Vec<u32>],
) -> Vec<Vec<Option<NodeIndex>>> {
    let mut pred = vec![vec![None; n]; n];
    for (src_idx, row) in pred.iter_mut().enumerate() {
        let mut visited = vec![false; n];
        visited[src_idx] = true;
        let mut queue = VecDeque::from([NodeIndex::new(src_idx)]);
        while let Some(cur) = queue.pop_front() {
            for nb in mol.neighbors(cur) {
                if !visited[nb.index()]
                    && dist[src_idx][nb.index()] == dist[src_idx][cur.index()] + 1
                {
                    visited[nb.index()] = true;
                    row[nb.index()] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
    }
    pred
}

fn reconstruct_path(
    pred: &[Vec<Option<NodeIndex>>],
    src: NodeIndex,
    dst: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![dst];
    let mut cur = dst;
    while cur != src {
        match pred[src.index()][cur.index()] {
            Some(p) => {
                path.push(p);
                cur = p;
            }
            None => return vec![],
        }
    }
    path.reverse();
    path
}

fn paths_share_internal_node(path_u: &[NodeIndex], path_v: &[NodeIndex]) -> bool {
    if path_u.len() < 2 || path_v.len() < 2 {
        return false;
    }
    path_u[1..].iter().any(|node| path_v[1..].contains(node))
}

fn ring_to_edge_bitvector<A, B>(
    ring: &[NodeIndex],
    num_edges: usize,
    mol: &Mol<A, B>,
) -> Vec<u64> {
    let mut bv = vec![0u64; num_edges.div_ceil(64)];
    let len = ring.len();
    for i in 0..len {
        if let Some(edge) = mol.bond_between(ring[i], ring[(i + 1) % len]) {
            let idx = edge.index();
            bv[idx / 64] |= 1u64 << (idx % 64);
        }
    }
    bv
}

fn select_independent_rings<A, B>(
    candidates: &[Vec<NodeIndex>],
    num_needed: usize,
    num_edges: usize,
    mol: &Mol<A, B>,
) -> Vec<Vec<NodeIndex>> {
    let mut result = Vec::with_capacity(num_needed);
    let mut basis: Vec<Vec<u64>> = Vec::with_capacity(num_needed);

    for ring in candidates {
        if result.len() >= num_needed {
            break;
        }
        let bv = ring_to_edge_bitvector(ring, num_edges, mol);
        if bv.iter().all(|&w| w == 0) {
            continue;
        }
        if try_add_to_basis(&mut basis, bv) {
            result.push(normalize_ring(ring));
        }
    }

    result.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    result
}

fn try_add_to_basis(basis: &mut Vec<Vec<u64>>, candidate: Vec<u64>) -> bool {
    let mut v = candidate;
    for row in basis.iter() {
        if let Some(p) = leading_bit(row) {
            if v[p / 64] & (1u64 << (p % 64)) != 0 {
                xor_into(&mut v, row);
            }
        }
    }
    if v.iter().all(|&w| w == 0) {
        return false;
    }
    basis.push(v);
    true
}

fn leading_bit(bv: &[u64]) -> Option<usize> {
    bv.iter()
        .enumerate()
        .find(|&(_, &word)| word != 0)
        .map(|(i, &word)| i * 64 + word.trailing_zeros() as usize)
}

fn xor_into(a: &mut [u64], b: &[u64]) {
    for (aw, bw) in a.iter_mut().zip(b.iter()) {
        *aw ^= *bw;
    }
}

/// Rotate so the lowest index comes first, then fix the direction.
fn normalize_ring(ring: &[NodeIndex]) -> Vec<NodeIndex> {
    let Some(min_pos) = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, idx)| idx)
        .map(|(i, _)| i)
    else {
        return vec![];
    };

    let len = ring.len();
    let mut normalized: Vec<NodeIndex> = (0..len).map(|i| ring[(min_pos + i) % len]).collect();

    if len > 2 && normalized[1] > normalized[len - 1] {
        normalized[1..].reverse();
    }

    normalized
}
