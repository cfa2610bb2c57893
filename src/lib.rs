pub mod atom;
pub mod bond;
pub mod dictionary;
pub mod element;
pub mod hybridization;
pub mod mol;
pub mod perception;
pub mod rings;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use dictionary::{AtomType, DictionaryError, TypeDictionary, UNKNOWN_TYPE};
pub use element::Element;
pub use hybridization::Hybridization;
pub use mol::{Mol, SingleElectron};
pub use perception::{
    AtomTypes, PerceptionMode, Perceiver, Rejection, RingOracle, TypeableAtom, TypeableBond,
};
pub use rings::{RingInfo, RingMembership, RingSearch, Sssr};
pub use traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization, HasHydrogenCount,
    HasSingleOrDouble,
};
pub use valence::{bond_order_sum, total_valence};

#[cfg(test)]
mod tests;
