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
    let n = ctx.neighbour_count();
    match (ctx.charge_or_zero(), ctx.max_bond_order()) {
        (0, BondOrder::Single) if n <= 1 => ctx.accept("O.radical"),
        (1, BondOrder::Single) if n <= 2 => ctx.accept("O.plus.radical"),
        (1, BondOrder::Double) if n <= 1 => ctx.accept("O.plus.sp2.radical"),
        _ => None,
    }
}

fn labelled<'d, A, B>(ctx: &Ctx<'d, '_, A, B>, hybridization: Hybridization) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (hybridization, ctx.neighbour_count()) {
        (Hybridization::SP2, 0 | 1) => carbonyl(ctx),
        (Hybridization::SP2, 2) | (Hybridization::Planar3, _) => ctx.accept("O.planar3"),
        (Hybridization::SP3, _) => ctx.accept("O.sp3"),
        _ => None,
    }
}

fn carbonyl<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_carboxylate() {
        ctx.first_accepted(&["O.sp2.co2", "O.sp2"])
    } else {
        ctx.accept("O.sp2")
    }
}

fn charged<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    match ctx.charge_or_zero() {
        -1 if n <= 1 => {
            if ctx.is_carboxylate() {
                ctx.first_accepted(&["O.minus.co2", "O.minus"])
            } else {
                ctx.accept("O.minus")
            }
        }
        -2 if n == 0 => ctx.accept("O.minus2"),
        1 => match ctx.max_bond_order() {
            BondOrder::Triple => ctx.accept("O.plus.sp1"),
            BondOrder::Double => ctx.accept("O.plus.sp2"),
            BondOrder::Single => ctx.accept("O.plus"),
            _ => None,
        },
        _ => None,
    }
}

fn neutral<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    if n > 2 {
        return None;
    }
    if n == 0 {
        return ctx.accept("O.sp3");
    }
    match ctx.max_bond_order() {
        BondOrder::Double => carbonyl(ctx),
        BondOrder::Single => {
            if ctx.heavy_bond_count() == 1 && ctx.is_carboxylate() {
                if let Some(found) = ctx.accept("O.sp2.co2") {
                    return Some(found);
                }
            }
            if ctx.is_planar_ring_member() {
                if let Some(found) = ctx.accept("O.planar3") {
                    return Some(found);
                }
            }
            ctx.accept("O.sp3")
        }
        _ => None,
    }
}
