use thiserror::Error;

use crate::bond::BondOrder;
use crate::dictionary::AtomType;

use super::context::AtomContext;
use super::{PerceptionMode, TypeableAtom, TypeableBond};

/// Why an atom does not satisfy a candidate type's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{actual} bonded neighbours, type requires exactly {expected}")]
    NeighbourMismatch { actual: usize, expected: u8 },

    #[error("{actual} neighbours including implicit hydrogens, type allows {expected}")]
    TooManyNeighbours { actual: usize, expected: u8 },

    #[error("bond of order {order:?} exceeds ceiling {ceiling:?}")]
    BondOrderTooHigh { order: BondOrder, ceiling: BondOrder },

    #[error("unresolved bond order cannot satisfy ceiling {ceiling:?}")]
    UnresolvedBondOrder { ceiling: BondOrder },

    #[error("valence {actual} exceeds valency {valency}")]
    ValencyExceeded { actual: usize, valency: u8 },

    #[error("formal charge {actual}, type requires {expected}")]
    ChargeMismatch { actual: i8, expected: i8 },

    #[error("{actual} single electrons, type requires {expected}")]
    SingleElectronMismatch { actual: usize, expected: u8 },
}

/// Checks an atom against a type's contract. Constraints the type leaves
/// unset are skipped.
pub(crate) fn check<A, B>(ctx: &AtomContext<'_, '_, A, B>, ty: &AtomType) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    check_neighbours(ctx, ty)?;
    check_bond_orders(ctx, ty)?;
    check_valency(ctx, ty)?;
    check_charge(ctx, ty)?;
    check_single_electrons(ctx, ty)
}

fn check_neighbours<A, B>(ctx: &AtomContext<'_, '_, A, B>, ty: &AtomType) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let Some(expected) = ty.formal_neighbour_count else {
        return Ok(());
    };
    let bonded = ctx.neighbour_count();
    match ctx.mode() {
        PerceptionMode::StrictNeighbours if bonded != usize::from(expected) => {
            Err(Rejection::NeighbourMismatch {
                actual: bonded,
                expected,
            })
        }
        PerceptionMode::ImplicitHydrogenTolerant => match ctx.atom.hydrogen_count() {
            Some(h) if bonded + usize::from(h) > usize::from(expected) => {
                Err(Rejection::TooManyNeighbours {
                    actual: bonded + usize::from(h),
                    expected,
                })
            }
            _ => Ok(()),
        },
        PerceptionMode::StrictNeighbours => Ok(()),
    }
}

fn check_bond_orders<A, B>(ctx: &AtomContext<'_, '_, A, B>, ty: &AtomType) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let ceiling = match ty.max_bond_order {
        None | Some(BondOrder::Unset) => return Ok(()),
        Some(ceiling) => ceiling,
    };
    for &edge in ctx.bonds {
        let bond = ctx.bond(edge);
        match bond.bond_order() {
            BondOrder::Unset => {
                let resolvable = bond.is_single_or_double()
                    && matches!(ceiling, BondOrder::Single | BondOrder::Double);
                if !resolvable {
                    return Err(Rejection::UnresolvedBondOrder { ceiling });
                }
            }
            order if order > ceiling => {
                return Err(Rejection::BondOrderTooHigh { order, ceiling });
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_valency<A, B>(ctx: &AtomContext<'_, '_, A, B>, ty: &AtomType) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let Some(valency) = ty.valency else {
        return Ok(());
    };
    let order_sum: usize = ctx
        .bonds
        .iter()
        .map(|&e| usize::from(ctx.bond(e).bond_order().numeric()))
        .sum();
    let actual = order_sum + ctx.implicit_hydrogens();
    if actual > usize::from(valency) {
        return Err(Rejection::ValencyExceeded { actual, valency });
    }
    Ok(())
}

fn check_charge<A, B>(ctx: &AtomContext<'_, '_, A, B>, ty: &AtomType) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match (ctx.charge(), ty.formal_charge) {
        (Some(actual), Some(expected)) if actual != expected => {
            Err(Rejection::ChargeMismatch { actual, expected })
        }
        _ => Ok(()),
    }
}

fn check_single_electrons<A, B>(
    ctx: &AtomContext<'_, '_, A, B>,
    ty: &AtomType,
) -> Result<(), Rejection>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let Some(expected) = ty.single_electrons else {
        return Ok(());
    };
    let actual = ctx.single_electrons();
    if actual != usize::from(expected) {
        return Err(Rejection::SingleElectronMismatch { actual, expected });
    }
    Ok(())
}
