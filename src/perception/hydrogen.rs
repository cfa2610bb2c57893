use crate::dictionary::AtomType;

use super::context::AtomContext;
use super::{TypeableAtom, TypeableBond};

pub(super) fn perceive<'d, A, B>(ctx: &AtomContext<'d, '_, A, B>) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let n = ctx.neighbour_count();
    if ctx.is_radical() {
        return match (ctx.charge_or_zero(), n) {
            (0, 0) => ctx.accept("H.radical"),
            _ => None,
        };
    }
    match (ctx.charge_or_zero(), n) {
        (1, 0) => ctx.accept("H.plus"),
        (-1, 0) => ctx.accept("H.minus"),
        (0, 0 | 1) => ctx.accept("H"),
        _ => None,
    }
}
