use serde::Deserialize;

/// Bond multiplicity.
///
/// Variants are ordered by multiplicity so `max` over a bond list gives
/// the highest order; `Unset` sorts below everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondOrder {
    Unset,
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
}

impl BondOrder {
    /// Contribution of this order to an atom's bond-order sum.
    pub fn numeric(self) -> u8 {
        match self {
            BondOrder::Unset => 0,
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Quadruple => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub order: BondOrder,
    pub is_aromatic: bool,
    /// Set when the order is unresolved but known to be single or double.
    pub is_single_or_double: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            is_aromatic: false,
            is_single_or_double: false,
        }
    }

    pub fn single() -> Self {
        Self::new(BondOrder::Single)
    }

    pub fn double() -> Self {
        Self::new(BondOrder::Double)
    }

    pub fn triple() -> Self {
        Self::new(BondOrder::Triple)
    }

    /// An aromatic bond with a concrete Kekulé order.
    pub fn aromatic(order: BondOrder) -> Self {
        Self {
            order,
            is_aromatic: true,
            is_single_or_double: false,
        }
    }

    /// An aromatic bond whose Kekulé order was never assigned.
    pub fn single_or_double() -> Self {
        Self {
            order: BondOrder::Unset,
            is_aromatic: true,
            is_single_or_double: true,
        }
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self::single()
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasAromaticity for Bond {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::HasSingleOrDouble for Bond {
    fn is_single_or_double(&self) -> bool {
        self.is_single_or_double
    }
}
