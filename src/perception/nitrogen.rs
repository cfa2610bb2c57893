use crate::bond::BondOrder;
use crate::dictionary::AtomType;
use crate::element::Element;
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
        (0, BondOrder::Single) if n <= 2 => ctx.accept("N.sp3.radical"),
        (0, BondOrder::Double) if n <= 1 => ctx.accept("N.sp2.radical"),
        (1, BondOrder::Single) if n <= 3 => ctx.accept("N.plus.sp3.radical"),
        (1, BondOrder::Double) if n <= 2 => ctx.accept("N.plus.sp2.radical"),
        _ => None,
    }
}

fn labelled<'d, A, B>(ctx: &Ctx<'d, '_, A, B>, hybridization: Hybridization) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match hybridization {
        Hybridization::SP if ctx.neighbour_count() > 1 => ctx.accept("N.sp1.2"),
        Hybridization::SP => ctx.accept("N.sp1"),
        Hybridization::SP2 => labelled_sp2(ctx),
        Hybridization::SP3 => ctx.accept("N.sp3"),
        Hybridization::Planar3 => {
            if ctx.neighbour_count() == 3
                && ctx.max_bond_order() == BondOrder::Double
                && ctx.count_double_bonds_to(Element::O) == 2
            {
                if let Some(found) = ctx.accept("N.nitro") {
                    return Some(found);
                }
            }
            ctx.accept("N.planar3")
        }
        _ => None,
    }
}

fn labelled_sp2<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if let Some(found) = amide_like(ctx) {
        return Some(found);
    }
    let n = ctx.neighbour_count();
    let max = ctx.max_bond_order();
    if n == 4 && max == BondOrder::Double {
        if let Some(found) = ctx.accept("N.oxide") {
            return Some(found);
        }
    } else if n > 1 && ctx.both_neighbours_sp2() && ctx.is_ring_atom() {
        let ring_type = match (n, max) {
            (3, BondOrder::Double) => Some("N.sp2.3"),
            (3, BondOrder::Single) => Some("N.planar3"),
            (2, BondOrder::Single) if ctx.atom.hydrogen_count() == Some(1) => Some("N.planar3"),
            (2, _) => Some("N.sp2"),
            _ => None,
        };
        if let Some(found) = ring_type.and_then(|id| ctx.accept(id)) {
            return Some(found);
        }
    }
    ctx.accept("N.sp2")
}

fn amide_like<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_amide() {
        ctx.accept("N.amide")
    } else if ctx.is_thioamide() {
        ctx.accept("N.thioamide")
    } else {
        None
    }
}

fn charged<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    match (ctx.charge_or_zero(), ctx.max_bond_order()) {
        (1, BondOrder::Single) => {
            let sp2_like = ctx.is_aromatic() || ctx.hybridization() == Some(Hybridization::SP2);
            if sp2_like {
                if let Some(found) = ctx.accept("N.plus.sp2") {
                    return Some(found);
                }
            }
            ctx.accept("N.plus")
        }
        (1, BondOrder::Double) => match ctx.count_double_bonds() {
            1 => ctx.accept("N.plus.sp2"),
            2 => ctx.accept("N.plus.sp1"),
            _ => None,
        },
        (1, BondOrder::Triple) if n <= 2 => ctx.accept("N.plus.sp1"),
        (-1, BondOrder::Single) => {
            if ctx.is_planar_ring_member() {
                if let Some(found) = ctx.accept("N.minus.planar3") {
                    return Some(found);
                }
            }
            if n <= 2 {
                ctx.accept("N.minus.sp3")
            } else {
                None
            }
        }
        (-1, BondOrder::Double) if n <= 1 => ctx.accept("N.minus.sp2"),
        _ => None,
    }
}

fn neutral<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    if n > 3 {
        return if n == 4 && ctx.count_double_bonds() == 1 {
            ctx.accept("N.oxide")
        } else {
            None
        };
    }
    if n == 0 {
        return ctx.accept("N.sp3");
    }
    if ctx.is_aromatic() {
        return ctx.first_accepted(&["N.sp2", "N.planar3"]);
    }
    if ctx.has_single_or_double_bond() {
        if n + ctx.implicit_hydrogens() == 3 {
            if let Some(found) = ctx.accept("N.planar3") {
                return Some(found);
            }
        }
        return ctx.accept("N.sp2");
    }
    match ctx.max_bond_order() {
        BondOrder::Single => single_bonded(ctx),
        BondOrder::Double if n == 3 => {
            if ctx.count_double_bonds_to(Element::O) == 2 {
                ctx.accept("N.nitro")
            } else if ctx.count_double_bonds() == 1 {
                ctx.accept("N.sp2.3")
            } else {
                None
            }
        }
        BondOrder::Double => ctx.accept("N.sp2"),
        BondOrder::Triple if n > 1 => ctx.accept("N.sp1.2"),
        BondOrder::Triple => ctx.accept("N.sp1"),
        _ => None,
    }
}

fn single_bonded<'d, A, B>(ctx: &Ctx<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if let Some(found) = amide_like(ctx) {
        return Some(found);
    }
    let heavy = ctx.heavy_bond_count();
    let planar_ring = heavy >= 2 && ctx.both_neighbours_sp2() && ctx.is_ring_atom();
    if heavy == 2 && ctx.heavy_bonds_aromatic() {
        let aromatic_type = match ctx.total_hydrogens() {
            0 => Some("N.sp2"),
            1 => Some("N.planar3"),
            _ => None,
        };
        if let Some(found) = aromatic_type.and_then(|id| ctx.accept(id)) {
            return Some(found);
        }
    } else if (heavy == 2 || heavy == 3) && planar_ring {
        if let Some(found) = ctx.accept("N.planar3") {
            return Some(found);
        }
    }
    ctx.accept("N.sp3")
}
