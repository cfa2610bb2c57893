use std::fmt;

macro_rules! elements {
    ($($sym:ident = $num:literal),+ $(,)?) => {
        /// Chemical elements 1–118, keyed by atomic number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Element {
            $($sym = $num,)+
        }

        const ALL: &[Element] = &[$(Element::$sym,)+];

        impl Element {
            pub fn symbol(self) -> &'static str {
                match self {
                    $(Element::$sym => stringify!($sym),)+
                }
            }
        }
    };
}

elements! {
    H = 1, He = 2, Li = 3, Be = 4, B = 5, C = 6, N = 7, O = 8, F = 9, Ne = 10,
    Na = 11, Mg = 12, Al = 13, Si = 14, P = 15, S = 16, Cl = 17, Ar = 18,
    K = 19, Ca = 20, Sc = 21, Ti = 22, V = 23, Cr = 24, Mn = 25, Fe = 26,
    Co = 27, Ni = 28, Cu = 29, Zn = 30, Ga = 31, Ge = 32, As = 33, Se = 34,
    Br = 35, Kr = 36, Rb = 37, Sr = 38, Y = 39, Zr = 40, Nb = 41, Mo = 42,
    Tc = 43, Ru = 44, Rh = 45, Pd = 46, Ag = 47, Cd = 48, In = 49, Sn = 50,
    Sb = 51, Te = 52, I = 53, Xe = 54, Cs = 55, Ba = 56, La = 57, Ce = 58,
    Pr = 59, Nd = 60, Pm = 61, Sm = 62, Eu = 63, Gd = 64, Tb = 65, Dy = 66,
    Ho = 67, Er = 68, Tm = 69, Yb = 70, Lu = 71, Hf = 72, Ta = 73, W = 74,
    Re = 75, Os = 76, Ir = 77, Pt = 78, Au = 79, Hg = 80, Tl = 81, Pb = 82,
    Bi = 83, Po = 84, At = 85, Rn = 86, Fr = 87, Ra = 88, Ac = 89, Th = 90,
    Pa = 91, U = 92, Np = 93, Pu = 94, Am = 95, Cm = 96, Bk = 97, Cf = 98,
    Es = 99, Fm = 100, Md = 101, No = 102, Lr = 103, Rf = 104, Db = 105,
    Sg = 106, Bh = 107, Hs = 108, Mt = 109, Ds = 110, Rg = 111, Cn = 112,
    Nh = 113, Fl = 114, Mc = 115, Lv = 116, Ts = 117, Og = 118,
}

impl Element {
    pub fn from_atomic_num(n: u8) -> Option<Element> {
        // ALL is laid out in atomic-number order starting at H = 1.
        n.checked_sub(1).and_then(|i| ALL.get(i as usize)).copied()
    }

    pub fn from_symbol(s: &str) -> Option<Element> {
        ALL.iter().copied().find(|e| e.symbol() == s)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn is_noble_gas(self) -> bool {
        matches!(
            self,
            Element::He | Element::Ne | Element::Ar | Element::Kr | Element::Xe | Element::Rn
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_atomic_num_round_trip() {
        for n in 1u8..=118 {
            let e = Element::from_atomic_num(n).unwrap();
            assert_eq!(e.atomic_num(), n);
        }
    }

    #[test]
    fn from_atomic_num_boundaries() {
        assert!(Element::from_atomic_num(0).is_none());
        assert!(Element::from_atomic_num(119).is_none());
        assert!(Element::from_atomic_num(255).is_none());
        assert_eq!(Element::from_atomic_num(1), Some(Element::H));
        assert_eq!(Element::from_atomic_num(118), Some(Element::Og));
    }

    #[test]
    fn from_symbol_is_case_sensitive() {
        assert_eq!(Element::from_symbol("Fe"), Some(Element::Fe));
        assert!(Element::from_symbol("fe").is_none());
        assert!(Element::from_symbol("FE").is_none());
        assert!(Element::from_symbol("").is_none());
        assert!(Element::from_symbol("Xx").is_none());
    }

    #[test]
    fn symbol_round_trip() {
        for &e in ALL {
            assert_eq!(Element::from_symbol(e.symbol()), Some(e));
        }
    }

    #[test]
    fn noble_gases() {
        assert!(Element::Xe.is_noble_gas());
        assert!(Element::Rn.is_noble_gas());
        assert!(!Element::N.is_noble_gas());
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Element::Sn.to_string(), "Sn");
    }
}
