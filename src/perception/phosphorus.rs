use crate::bond::BondOrder::{Double, Single, Triple};
use crate::dictionary::AtomType;

use super::context::AtomContext;
use super::table::{self, row, Pattern, Row};
use super::{TypeableAtom, TypeableBond};

const P: Pattern = Pattern::ANY;

const RULES: &[Row] = &[
    row(P.charge(0).neighbours(0), &["P.ine"]),
    row(P.charge(0).neighbours(1).max_order(Triple), &["P.ide"]),
    row(P.charge(0).neighbours(1).max_order(Double), &["P.irane"]),
    row(P.charge(0).neighbours(1), &["P.ine"]),
    row(P.charge(1).neighbours(2).max_order(Double), &["P.sp1.plus"]),
    row(P.neighbours(2).max_order(Double), &["P.irane"]),
    row(P.neighbours(2).max_order(Single), &["P.ine"]),
    row(P.charge(1).neighbours(3), &["P.anium"]),
    row(P.neighbours(3).doubles(1), &["P.ate"]),
    row(P.neighbours(3).max_order(Single), &["P.ine"]),
    row(P.charge(1).neighbours(4).max_order(Single), &["P.ate.charged"]),
    row(P.neighbours(4).doubles(1), &["P.ate"]),
    row(P.charge(0).neighbours(5).max_order(Single), &["P.ane"]),
];

pub(super) fn perceive<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match ctx.single_electrons() {
        0 => table::classify(ctx, RULES),
        3 => ctx.accept("P.se.3"),
        _ => None,
    }
}
