use serde::Deserialize;

/// Orbital-geometry label carried by an atom or an atom type.
///
/// `Planar3` is the trigonal-planar state of an atom whose lone pair takes
/// part in a π system (pyrrole nitrogen, furan oxygen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hybridization {
    S,
    SP,
    SP2,
    SP3,
    Planar3,
    SP3D,
    SP3D2,
    Other,
}
