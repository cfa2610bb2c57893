use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

/// Formal charge, or `None` when the charge was never specified.
///
/// An unspecified charge is not the same as an explicit zero: the acceptance
/// check only compares charges when one is present.
pub trait HasFormalCharge {
    fn formal_charge(&self) -> Option<i8>;
}

/// Implicit (suppressed) hydrogen count, or `None` when unknown.
pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> Option<u8>;
}

pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Option<Hybridization>;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

/// Marks bonds whose order could only be narrowed to "single or double".
pub trait HasSingleOrDouble {
    fn is_single_or_double(&self) -> bool;
}
