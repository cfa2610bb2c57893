use crate::bond::BondOrder::{Double, Single};
use crate::dictionary::AtomType;
use crate::hybridization::Hybridization;

use super::context::AtomContext;
use super::table::{self, row, Pattern, Row};
use super::{TypeableAtom, TypeableBond};

const P: Pattern = Pattern::ANY;

const CHARGED: &[Row] = &[
    row(P.charge(-1).at_most(1), &["S.minus"]),
    row(P.charge(-2).neighbours(0), &["S.2minus"]),
    row(P.charge(1).neighbours(2).max_order(Double), &["S.plus"]),
    row(P.charge(1).at_most(3).max_order(Single), &["S.inyl.charged"]),
    row(P.charge(2).neighbours(4), &["S.onyl.charged"]),
];

const NEUTRAL: &[Row] = &[
    row(P.neighbours(0), &["S.3"]),
    row(P.neighbours(1).max_order(Double), &["S.2"]),
    row(P.neighbours(1).max_order(Single), &["S.3"]),
    row(P.neighbours(2).max_order(Single), &["S.3"]),
    row(P.neighbours(2).doubles_to_o(2), &["S.oxide"]),
    row(P.neighbours(2).doubles(2), &["S.inyl.2"]),
    row(P.neighbours(3).doubles(3), &["S.trioxide"]),
    row(P.neighbours(3).doubles(1), &["S.inyl"]),
    row(P.neighbours(3).max_order(Single), &["S.anyl"]),
    row(P.neighbours(4).doubles_to_o_or_n(2), &["S.onyl"]),
    row(P.neighbours(4).doubles_to_s(1).doubles_to_o(1), &["S.thionyl"]),
    row(P.neighbours(4).max_order(Single), &["S.anyl"]),
    row(P.neighbours(4).doubles(1), &["S.sp3d1"]),
    row(P.neighbours(4).doubles(2), &["S.sp3.4"]),
    row(P.neighbours(5).max_order(Double), &["S.sp3d1"]),
    row(P.neighbours(5).max_order(Single), &["S.octahedral"]),
    row(P.neighbours(6).max_order(Single), &["S.octahedral"]),
];

pub(super) fn perceive<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_radical() {
        return None;
    }
    if ctx.is_charged() {
        return table::classify(ctx, CHARGED);
    }
    let planar = match ctx.hybridization() {
        Some(Hybridization::Planar3) => true,
        Some(Hybridization::SP2) => ctx.neighbour_count() == 2 && ctx.is_ring_atom(),
        _ => ctx.count_double_bonds() == 0 && ctx.is_planar_ring_member(),
    };
    if planar {
        if let Some(found) = ctx.accept("S.planar3") {
            return Some(found);
        }
    }
    table::classify(ctx, NEUTRAL)
}
