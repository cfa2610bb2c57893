//! Metal typing: the type is fixed by formal charge and neighbour count.

use crate::bond::BondOrder::Double;
use crate::element::Element;

use super::table::{row, Pattern, Row};

const P: Pattern = Pattern::ANY;

const fn ion(charge: i8, neighbours: usize) -> Pattern {
    P.charge(charge).neighbours(neighbours)
}

const SODIUM: &[Row] = &[
    row(ion(1, 0), &["Na.plus"]),
    row(ion(0, 0), &["Na.neutral"]),
    row(ion(0, 1), &["Na"]),
];

const POTASSIUM: &[Row] = &[
    row(ion(1, 0), &["K.plus"]),
    row(ion(0, 0), &["K.metallic"]),
    row(ion(0, 1), &["K.neutral"]),
];

const RUBIDIUM: &[Row] = &[
    row(ion(1, 0), &["Rb.plus"]),
    row(ion(0, 0), &["Rb.neutral"]),
];

const MAGNESIUM: &[Row] = &[
    row(ion(2, 0), &["Mg.2plus"]),
    row(ion(0, 0), &["Mg.neutral"]),
    row(ion(0, 1), &["Mg.neutral.1"]),
    row(ion(0, 2), &["Mg.neutral.2"]),
];

const CALCIUM: &[Row] = &[
    row(ion(2, 0), &["Ca.2plus"]),
    row(ion(0, 0), &["Ca.metallic"]),
    row(ion(0, 1), &["Ca.1"]),
    row(ion(0, 2), &["Ca.2"]),
];

const STRONTIUM: &[Row] = &[row(ion(2, 0), &["Sr.2plus"])];

const BARIUM: &[Row] = &[
    row(ion(2, 0), &["Ba.2plus"]),
    row(ion(0, 0), &["Ba"]),
];

const RADIUM: &[Row] = &[row(ion(0, 0), &["Ra.neutral"])];

const TITANIUM: &[Row] = &[
    row(ion(-3, 6), &["Ti.3minus"]),
    row(ion(0, 4), &["Ti.sp3"]),
    row(ion(0, 2), &["Ti.2"]),
];

const VANADIUM: &[Row] = &[
    row(ion(-3, 6), &["V.3minus"]),
    row(ion(-3, 4), &["V.3minus.4"]),
];

const CHROMIUM: &[Row] = &[
    row(ion(0, 0), &["Cr.neutral"]),
    row(ion(3, 0), &["Cr.3plus"]),
    row(ion(6, 0), &["Cr.6plus"]),
    row(ion(0, 4), &["Cr.4"]),
    row(ion(0, 6), &["Cr"]),
];

const MANGANESE: &[Row] = &[
    row(ion(0, 0), &["Mn.metallic"]),
    row(ion(2, 0), &["Mn.2plus"]),
    row(ion(3, 0), &["Mn.3plus"]),
    row(ion(0, 2), &["Mn.2"]),
];

const IRON: &[Row] = &[
    row(ion(0, 0), &["Fe.metallic"]),
    row(ion(1, 0), &["Fe.plus"]),
    row(ion(2, 0), &["Fe.2plus"]),
    row(ion(3, 0), &["Fe.3plus"]),
    row(ion(-3, 6), &["Fe.3minus"]),
    row(ion(-4, 6), &["Fe.4minus"]),
    row(ion(0, 2), &["Fe.2"]),
    row(ion(0, 3), &["Fe.3"]),
    row(ion(0, 4), &["Fe.4"]),
    row(ion(0, 5), &["Fe.5"]),
    row(ion(0, 6), &["Fe.6"]),
];

const COBALT: &[Row] = &[
    row(ion(0, 0), &["Co.metallic"]),
    row(ion(2, 0), &["Co.2plus"]),
    row(ion(3, 0), &["Co.3plus"]),
    row(ion(0, 2), &["Co.2"]),
    row(ion(0, 4), &["Co.4"]),
    row(ion(0, 6), &["Co.6"]),
];

const NICKEL: &[Row] = &[
    row(ion(0, 0), &["Ni.metallic"]),
    row(ion(2, 0), &["Ni.2plus"]),
    row(ion(1, 1), &["Ni.plus"]),
    row(ion(0, 2), &["Ni"]),
];

const COPPER: &[Row] = &[
    row(ion(0, 0), &["Cu.metallic"]),
    row(ion(1, 0), &["Cu.plus"]),
    row(ion(2, 0), &["Cu.2plus"]),
    row(ion(0, 1), &["Cu.1"]),
];

const ZINC: &[Row] = &[
    row(ion(0, 0), &["Zn.metallic"]),
    row(ion(2, 0), &["Zn.2plus"]),
    row(ion(0, 1).max_order(Double), &["Zn.1"]),
    row(ion(0, 2), &["Zn"]),
];

const MOLYBDENUM: &[Row] = &[
    row(ion(0, 0), &["Mo.metallic"]),
    row(ion(0, 4), &["Mo.4"]),
];

const RUTHENIUM: &[Row] = &[
    row(ion(0, 6), &["Ru.6"]),
    row(ion(-2, 6), &["Ru.2minus.6"]),
    row(ion(-3, 6), &["Ru.3minus.6"]),
];

const SILVER: &[Row] = &[
    row(ion(0, 0), &["Ag.neutral"]),
    row(ion(1, 0), &["Ag.plus"]),
    row(ion(0, 1), &["Ag.1"]),
];

const CADMIUM: &[Row] = &[
    row(ion(0, 0), &["Cd.metallic"]),
    row(ion(2, 0), &["Cd.2plus"]),
    row(ion(0, 2), &["Cd.2"]),
];

const PLATINUM: &[Row] = &[
    row(ion(2, 0), &["Pt.2plus"]),
    row(ion(0, 2), &["Pt.2"]),
    row(ion(0, 4), &["Pt.4"]),
];

const GOLD: &[Row] = &[
    row(ion(0, 0), &["Au.metallic"]),
    row(ion(0, 1), &["Au.1"]),
];

const MERCURY: &[Row] = &[
    row(ion(0, 0), &["Hg.metallic"]),
    row(ion(2, 0), &["Hg.2plus"]),
    row(ion(1, 1), &["Hg.plus"]),
    row(ion(0, 1).max_order(Double), &["Hg.1"]),
    row(ion(0, 2), &["Hg.2"]),
];

const GADOLINIUM: &[Row] = &[row(ion(3, 0), &["Gd.3plus"])];

const THORIUM: &[Row] = &[row(ion(0, 0), &["Th"])];

const PLUTONIUM: &[Row] = &[row(ion(0, 0), &["Pu"])];

/// Table for `element`, if it is one of the metals with dedicated rules.
pub(super) fn rules_for(element: Element) -> Option<&'static [Row]> {
    let rows = match element {
        Element::Na => SODIUM,
        Element::K => POTASSIUM,
        Element::Rb => RUBIDIUM,
        Element::Mg => MAGNESIUM,
        Element::Ca => CALCIUM,
        Element::Sr => STRONTIUM,
        Element::Ba => BARIUM,
        Element::Ra => RADIUM,
        Element::Ti => TITANIUM,
        Element::V => VANADIUM,
        Element::Cr => CHROMIUM,
        Element::Mn => MANGANESE,
        Element::Fe => IRON,
        Element::Co => COBALT,
        Element::Ni => NICKEL,
        Element::Cu => COPPER,
        Element::Zn => ZINC,
        Element::Mo => MOLYBDENUM,
        Element::Ru => RUTHENIUM,
        Element::Ag => SILVER,
        Element::Cd => CADMIUM,
        Element::Pt => PLATINUM,
        Element::Au => GOLD,
        Element::Hg => MERCURY,
        Element::Gd => GADOLINIUM,
        Element::Th => THORIUM,
        Element::Pu => PLUTONIUM,
        _ => return None,
    };
    Some(rows)
}
