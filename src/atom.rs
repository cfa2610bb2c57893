use crate::element::Element;
use crate::hybridization::Hybridization;

/// Default atom type for a molecular graph node.
///
/// Everything the perception engine reads off an atom lives here. Optional
/// fields distinguish "not specified" from a concrete value: an atom with
/// `formal_charge: None` is never rejected on charge, while
/// `Some(0)` demands a neutral type.
///
/// Atomic number `0` marks a placeholder (pseudo) atom.
///
/// # Examples
///
/// ```
/// use typecrab::{Atom, Element, Hybridization};
///
/// let carbon = Atom::new(Element::C)
///     .with_charge(0)
///     .with_hydrogens(2)
///     .with_hybridization(Hybridization::SP2);
/// assert_eq!(carbon.atomic_num, 6);
/// assert_eq!(carbon.hydrogen_count, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `0` is a placeholder atom.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units, if specified.
    pub formal_charge: Option<i8>,
    /// Number of implicit hydrogens, if known.
    pub hydrogen_count: Option<u8>,
    /// Hybridization, if already assigned.
    pub hybridization: Option<Hybridization>,
    /// Whether the atom is flagged aromatic.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            ..Self::default()
        }
    }

    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn with_charge(mut self, charge: i8) -> Self {
        self.formal_charge = Some(charge);
        self
    }

    pub fn with_hydrogens(mut self, count: u8) -> Self {
        self.hydrogen_count = Some(count);
        self
    }

    pub fn with_hybridization(mut self, hybridization: Hybridization) -> Self {
        self.hybridization = Some(hybridization);
        self
    }

    pub fn aromatic(mut self) -> Self {
        self.is_aromatic = true;
        self
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_num(self.atomic_num)
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> Option<i8> {
        self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> Option<u8> {
        self.hydrogen_count
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }
}
