//! Typing rules for the lighter s- and p-block elements outside CHNOPS.

use crate::bond::BondOrder::{Double, Single, Triple};
use crate::element::Element;

use super::table::{row, Pattern, Row};

const P: Pattern = Pattern::ANY;

const LITHIUM: &[Row] = &[
    row(P.charge(1).neighbours(0), &["Li.plus"]),
    row(P.charge(0).neighbours(0), &["Li.neutral", "Li"]),
    row(P.charge(0).neighbours(1), &["Li"]),
];

const BERYLLIUM: &[Row] = &[
    row(P.charge(-2).neighbours(4), &["Be.2minus"]),
    row(P.charge(0).neighbours(0), &["Be.neutral"]),
];

const BORON: &[Row] = &[
    row(P.charge(-1).at_most(4), &["B.minus"]),
    row(P.charge(3).neighbours(4), &["B.3plus"]),
    row(P.charge(0).at_most(3), &["B"]),
];

const ALUMINIUM: &[Row] = &[
    row(P.charge(3).neighbours(0), &["Al.3plus"]),
    row(P.charge(-3).neighbours(6), &["Al.3minus"]),
    row(P.charge(0).at_most(3), &["Al"]),
];

const SILICON: &[Row] = &[
    row(P.charge(-2).neighbours(6), &["Si.2minus.six"]),
    row(P.charge(0).max_order(Triple), &["Si.sp"]),
    row(P.charge(0).max_order(Double), &["Si.sp2"]),
    row(P.charge(0).at_most(4).max_order(Single), &["Si.sp3"]),
];

const GALLIUM: &[Row] = &[
    row(P.charge(3).neighbours(0), &["Ga.3plus"]),
    row(P.charge(0).at_most(3), &["Ga"]),
];

const GERMANIUM: &[Row] = &[
    row(P.charge(0).max_order(Double), &["Ge.3"]),
    row(P.charge(0).at_most(4), &["Ge"]),
];

const ARSENIC: &[Row] = &[
    row(P.charge(1).neighbours(4).max_order(Single), &["As.plus"]),
    row(P.charge(-1).neighbours(6), &["As.minus"]),
    row(P.charge(3).neighbours(0), &["As.3plus"]),
    row(P.charge(0).neighbours(4).doubles(1), &["As.5"]),
    row(P.charge(0).at_most(2).max_order(Double), &["As.2"]),
    row(P.charge(0).at_most(3).max_order(Single), &["As"]),
];

const SELENIUM: &[Row] = &[
    row(P.charge(-2).neighbours(0), &["Se.2minus"]),
    row(P.charge(0).at_most(2).max_order(Single), &["Se.3"]),
    row(P.charge(0).neighbours(1).max_order(Double), &["Se.1"]),
    row(P.charge(0).neighbours(2).max_order(Double), &["Se.sp2.2"]),
    row(P.charge(0).neighbours(3), &["Se.sp3.3"]),
    row(P.charge(0).neighbours(4).max_order(Single), &["Se.sp3.4"]),
    row(P.charge(0).neighbours(4).max_order(Double), &["Se.sp3d1.4"]),
    row(P.charge(0).neighbours(5), &["Se.5"]),
];

const INDIUM: &[Row] = &[
    row(P.charge(3).neighbours(0), &["In.3plus"]),
    row(P.charge(0).neighbours(0), &["In", "In.3"]),
    row(P.charge(0).at_most(3).max_order(Single), &["In.3"]),
];

const TIN: &[Row] = &[
    row(P.charge(2).neighbours(0), &["Sn.2plus"]),
];

const ANTIMONY: &[Row] = &[
    row(P.charge(0).at_most(3).max_order(Single), &["Sb.3"]),
    row(P.charge(0).neighbours(4).max_order(Double), &["Sb.4"]),
];

const TELLURIUM: &[Row] = &[
    row(P.charge(4).neighbours(0), &["Te.4plus"]),
    row(P.charge(0).at_most(2).max_order(Single), &["Te.3"]),
];

const THALLIUM: &[Row] = &[
    row(P.charge(1).neighbours(0), &["Tl.plus"]),
    row(P.charge(0).neighbours(0), &["Tl"]),
    row(P.charge(0).neighbours(1), &["Tl.1"]),
];

const LEAD: &[Row] = &[
    row(P.charge(2).neighbours(0), &["Pb.2plus"]),
    row(P.charge(0).neighbours(0), &["Pb.neutral"]),
    row(P.charge(0).neighbours(1).max_order(Double), &["Pb.1"]),
    row(P.charge(0).at_most(4).max_order(Single), &["Pb.sp3"]),
];

const BISMUTH: &[Row] = &[
    row(P.charge(3).neighbours(0), &["Bi.3plus"]),
    row(P.charge(0).at_most(3).max_order(Single), &["Bi.3"]),
];

/// Table for `element`, if it is handled here.
pub(super) fn rules_for(element: Element) -> Option<&'static [Row]> {
    let rows = match element {
        Element::Li => LITHIUM,
        Element::Be => BERYLLIUM,
        Element::B => BORON,
        Element::Al => ALUMINIUM,
        Element::Si => SILICON,
        Element::Ga => GALLIUM,
        Element::Ge => GERMANIUM,
        Element::As => ARSENIC,
        Element::Se => SELENIUM,
        Element::In => INDIUM,
        Element::Sn => TIN,
        Element::Sb => ANTIMONY,
        Element::Te => TELLURIUM,
        Element::Tl => THALLIUM,
        Element::Pb => LEAD,
        Element::Bi => BISMUTH,
        _ => return None,
    };
    Some(rows)
}
