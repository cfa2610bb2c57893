//! First-match decision tables.
//!
//! Elements whose typing is a pure function of a handful of counts are
//! described as ordered [`Row`]s instead of branching code. The first row
//! whose [`Pattern`] matches picks the candidate list; the first candidate
//! that validates wins. A matching row with no valid candidate ends the
//! search; later rows are not consulted.

use crate::bond::BondOrder;
use crate::dictionary::AtomType;
use crate::element::Element;

use super::context::AtomContext;
use super::{TypeableAtom, TypeableBond};

/// Counts read off an atom once and matched against every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Features {
    pub charge: i8,
    pub neighbours: usize,
    pub max_order: BondOrder,
    pub doubles: usize,
    pub doubles_to_o: usize,
    pub doubles_to_n: usize,
    pub doubles_to_s: usize,
}

impl Features {
    pub(crate) fn of<A, B>(ctx: &AtomContext<'_, '_, A, B>) -> Self
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        Self {
            charge: ctx.charge_or_zero(),
            neighbours: ctx.neighbour_count(),
            max_order: ctx.max_bond_order(),
            doubles: ctx.count_double_bonds(),
            doubles_to_o: ctx.count_double_bonds_to(Element::O),
            doubles_to_n: ctx.count_double_bonds_to(Element::N),
            doubles_to_s: ctx.count_double_bonds_to(Element::S),
        }
    }
}

/// A conjunction of optional constraints; `None` fields match anything.
///
/// An absent formal charge is matched as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pattern {
    charge: Option<i8>,
    neighbours: Option<usize>,
    max_neighbours: Option<usize>,
    max_order: Option<BondOrder>,
    doubles: Option<usize>,
    doubles_to_o: Option<usize>,
    doubles_to_s: Option<usize>,
    doubles_to_o_or_n: Option<usize>,
}

impl Pattern {
    pub(crate) const ANY: Pattern = Pattern {
        charge: None,
        neighbours: None,
        max_neighbours: None,
        max_order: None,
        doubles: None,
        doubles_to_o: None,
        doubles_to_s: None,
        doubles_to_o_or_n: None,
    };

    pub(crate) const fn charge(mut self, charge: i8) -> Self {
        self.charge = Some(charge);
        self
    }

    pub(crate) const fn neighbours(mut self, count: usize) -> Self {
        self.neighbours = Some(count);
        self
    }

    pub(crate) const fn at_most(mut self, count: usize) -> Self {
        self.max_neighbours = Some(count);
        self
    }

    pub(crate) const fn max_order(mut self, order: BondOrder) -> Self {
        self.max_order = Some(order);
        self
    }

    pub(crate) const fn doubles(mut self, count: usize) -> Self {
        self.doubles = Some(count);
        self
    }

    pub(crate) const fn doubles_to_o(mut self, count: usize) -> Self {
        self.doubles_to_o = Some(count);
        self
    }

    pub(crate) const fn doubles_to_s(mut self, count: usize) -> Self {
        self.doubles_to_s = Some(count);
        self
    }

    pub(crate) const fn doubles_to_o_or_n(mut self, count: usize) -> Self {
        self.doubles_to_o_or_n = Some(count);
        self
    }

    pub(crate) fn matches(&self, f: &Features) -> bool {
        fn eq<T: PartialEq>(want: Option<T>, got: T) -> bool {
            want.map_or(true, |w| w == got)
        }
        eq(self.charge, f.charge)
            && eq(self.neighbours, f.neighbours)
            && self.max_neighbours.map_or(true, |m| f.neighbours <= m)
            && eq(self.max_order, f.max_order)
            && eq(self.doubles, f.doubles)
            && eq(self.doubles_to_o, f.doubles_to_o)
            && eq(self.doubles_to_s, f.doubles_to_s)
            && eq(self.doubles_to_o_or_n, f.doubles_to_o + f.doubles_to_n)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Row {
    pub pattern: Pattern,
    pub types: &'static [&'static str],
}

pub(crate) const fn row(pattern: Pattern, types: &'static [&'static str]) -> Row {
    Row { pattern, types }
}

/// Runs `rows` against an atom. Radicals never match a table.
pub(crate) fn classify<'d, A, B>(
    ctx: &AtomContext<'d, '_, A, B>,
    rows: &[Row],
) -> Option<&'d AtomType>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if ctx.is_radical() {
        return None;
    }
    let features = Features::of(ctx);
    let row = rows.iter().find(|r| r.pattern.matches(&features))?;
    ctx.first_accepted(row.types)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> Features {
        Features {
            charge: 0,
            neighbours: 4,
            max_order: BondOrder::Double,
            doubles: 2,
            doubles_to_o: 1,
            doubles_to_n: 1,
            doubles_to_s: 0,
        }
    }

    #[test]
    fn any_matches_everything() {
        assert!(Pattern::ANY.matches(&features()));
    }

    #[test]
    fn each_constraint_filters() {
        let f = features();
        assert!(Pattern::ANY.neighbours(4).charge(0).matches(&f));
        assert!(!Pattern::ANY.neighbours(3).matches(&f));
        assert!(!Pattern::ANY.charge(1).matches(&f));
        assert!(Pattern::ANY.at_most(4).matches(&f));
        assert!(!Pattern::ANY.at_most(3).matches(&f));
        assert!(!Pattern::ANY.max_order(BondOrder::Single).matches(&f));
        assert!(Pattern::ANY.doubles(2).doubles_to_o(1).matches(&f));
        assert!(!Pattern::ANY.doubles_to_o(2).matches(&f));
        assert!(!Pattern::ANY.doubles_to_s(1).matches(&f));
    }

    #[test]
    fn oxygen_or_nitrogen_doubles_are_summed() {
        let f = features();
        assert!(Pattern::ANY.doubles_to_o_or_n(2).matches(&f));
        assert!(!Pattern::ANY.doubles_to_o_or_n(1).matches(&f));
    }

    #[test]
    fn const_rows() {
        const ROWS: &[Row] = &[
            row(Pattern::ANY.neighbours(1), &["A"]),
            row(Pattern::ANY.neighbours(4).doubles(2), &["B", "C"]),
        ];
        let f = features();
        let hit = ROWS.iter().find(|r| r.pattern.matches(&f)).unwrap();
        assert_eq!(hit.types, &["B", "C"]);
    }
}
