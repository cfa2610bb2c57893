use crate::bond::BondOrder;
use crate::dictionary::AtomType;
use crate::hybridization::Hybridization;

use super::context::AtomContext;
use super::{TypeableAtom, TypeableBond};

type Ctx<'d, 'c, A, B> = AtomContext<'d, 'c, A, B>;

pub(super) fn perceive<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_radical() {
        return radical(ctx);
    }
    match ctx.hybridization() {
        Some(hybridization) if !ctx.is_charged() => labelled(ctx, hybridization),
        _ if ctx.is_charged() => charged(ctx),
        _ => neutral(ctx),
    }
}

fn radical<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.neighbour_count() > 3 {
        return None;
    }
    match ctx.max_bond_order() {
        BondOrder::Single => ctx.accept("C.radical.planar"),
        BondOrder::Double => ctx.accept("C.radical.sp2"),
        BondOrder::Triple => ctx.accept("C.radical.sp1"),
        _ => None,
    }
}

fn labelled<'d, A, B>(ctx: &Ctx<'d, '_, A, B>, hybridization: Hybridization) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match hybridization {
        Hybridization::SP3 => ctx.accept("C.sp3"),
        Hybridization::SP2 => ctx.accept("C.sp2"),
        Hybridization::SP if ctx.max_bond_order() == BondOrder::Triple => ctx.accept("C.sp"),
        Hybridization::SP => ctx.accept("C.allene"),
        _ => None,
    }
}

fn charged<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    match (ctx.charge_or_zero(), ctx.max_bond_order()) {
        (1, BondOrder::Triple) => ctx.accept("C.plus.sp1"),
        (1, BondOrder::Double) => ctx.accept("C.plus.sp2"),
        (1, BondOrder::Single) if n <= 3 => ctx.accept("C.plus.planar"),
        (-1, BondOrder::Triple) if n <= 1 => ctx.accept("C.minus.sp1"),
        (-1, BondOrder::Double) if n <= 2 => ctx.accept("C.minus.sp2"),
        (-1, BondOrder::Single) if n <= 3 => {
            if ctx.is_planar_ring_member() {
                if let Some(found) = ctx.accept("C.minus.planar") {
                    return Some(found);
                }
            }
            ctx.accept("C.minus.sp3")
        }
        _ => None,
    }
}

fn neutral<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_aromatic() || ctx.has_single_or_double_bond() {
        return ctx.accept("C.sp2");
    }
    if ctx.neighbour_count() > 4 {
        return None;
    }
    match ctx.max_bond_order() {
        BondOrder::Triple => ctx.accept("C.sp"),
        BondOrder::Double => match ctx.count_double_bonds() {
            1 => ctx.accept("C.sp2"),
            2 => ctx.accept("C.allene"),
            _ => None,
        },
        BondOrder::Single if ctx.has_aromatic_bond() => ctx.first_accepted(&["C.sp2", "C.sp3"]),
        BondOrder::Single => ctx.accept("C.sp3"),
        _ => None,
    }
}
