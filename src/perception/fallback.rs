//! Families consulted, in order, after an element's own rules give up.
//!
//! Halogens, a few salt-forming metals, organometallic centres and the
//! noble gases. Anything that survives all four becomes the unknown type.

use crate::bond::BondOrder::{Double, Single};
use crate::dictionary::AtomType;
use crate::element::Element;

use super::context::AtomContext;
use super::table::{self, row, Pattern, Row};
use super::{TypeableAtom, TypeableBond};

const P: Pattern = Pattern::ANY;

const fn ion(charge: i8, neighbours: usize) -> Pattern {
    P.charge(charge).neighbours(neighbours)
}

const FLUORINE: &[Row] = &[
    row(ion(-1, 0), &["F.minus"]),
    row(P.charge(1).max_order(Double), &["F.plus.sp2"]),
    row(ion(1, 2), &["F.plus.sp3"]),
    row(P.charge(0).at_most(1), &["F"]),
];

const CHLORINE: &[Row] = &[
    row(ion(-1, 0), &["Cl.minus"]),
    row(P.charge(1).max_order(Double), &["Cl.plus.sp2"]),
    row(ion(1, 2), &["Cl.plus.sp3"]),
    row(ion(3, 4), &["Cl.perchlorate.charged"]),
    row(P.charge(0).at_most(1), &["Cl"]),
    row(ion(0, 3).doubles(2), &["Cl.chlorate"]),
    row(ion(0, 4).doubles(3), &["Cl.perchlorate"]),
];

const BROMINE: &[Row] = &[
    row(ion(-1, 0), &["Br.minus"]),
    row(P.charge(1).max_order(Double), &["Br.plus.sp2"]),
    row(ion(1, 2), &["Br.plus.sp3"]),
    row(P.charge(0).at_most(1), &["Br"]),
    row(ion(0, 3).max_order(Single), &["Br.3"]),
];

const IODINE: &[Row] = &[
    row(ion(-1, 0), &["I.minus"]),
    row(P.charge(1).max_order(Double), &["I.plus.sp2"]),
    row(ion(1, 2), &["I.plus.sp3"]),
    row(P.charge(0).at_most(1), &["I"]),
    row(ion(0, 3).max_order(Single), &["I.3"]),
    row(ion(0, 3).doubles(2), &["I.5"]),
];

const COMMON_SALTS: &[(Element, &[Row])] = &[
    (Element::Mg, &[row(ion(0, 4), &["Mg.neutral.4"])]),
    (
        Element::Co,
        &[
            row(ion(1, 0), &["Co.plus"]),
            row(ion(1, 1), &["Co.plus.1"]),
            row(ion(1, 2), &["Co.plus.2"]),
            row(ion(1, 4), &["Co.plus.4"]),
            row(ion(1, 5), &["Co.plus.5"]),
            row(ion(1, 6), &["Co.plus.6"]),
            row(ion(0, 1), &["Co.1"]),
        ],
    ),
    (Element::W, &[row(ion(0, 0), &["W.metallic"])]),
];

const ORGANOMETALLIC: &[(Element, &[Row])] = &[
    (Element::Po, &[row(ion(0, 2), &["Po"])]),
    (Element::Sn, &[row(P.charge(0).at_most(4).max_order(Single), &["Sn.sp3"])]),
    (Element::Sc, &[row(ion(-3, 6), &["Sc.3minus"])]),
];

pub(super) fn perceive<'d, A, B>(
    ctx: &AtomContext<'d, '_, A, B>,
    element: Element,
) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    halogen(ctx, element)
        .or_else(|| lookup(ctx, element, COMMON_SALTS))
        .or_else(|| lookup(ctx, element, ORGANOMETALLIC))
        .or_else(|| noble_gas(ctx, element))
}

fn halogen<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>, element: Element) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let (rows, radical) = match element {
        Element::F => (FLUORINE, "F.radical"),
        Element::Cl => (CHLORINE, "Cl.radical"),
        Element::Br => (BROMINE, "Br.radical"),
        Element::I => (IODINE, "I.radical"),
        _ => return None,
    };
    if ctx.is_radical() {
        return if ctx.neighbour_count() == 0 {
            ctx.accept(radical)
        } else {
            None
        };
    }
    table::classify(ctx, rows)
}

fn lookup<'d, A, B>(
    ctx: &AtomContext<'d, '_, A, B>,
    element: Element,
    family: &[(Element, &[Row])],
) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let (_, rows) = family.iter().find(|(e, _)| *e == element)?;
    table::classify(ctx, rows)
}

fn noble_gas<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>, element: Element) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if !element.is_noble_gas() || ctx.is_radical() {
        return None;
    }
    ctx.accept(element.symbol())
}
