//! The atom type dictionary.
//!
//! Every type the perception engine can return is an [`AtomType`] looked up
//! by identifier. The built-in dictionary is embedded in the crate as TOML
//! and parsed once on first use; custom dictionaries use the same format:
//!
//! ```toml
//! [[type]]
//! id = "C.sp2"
//! element = "C"
//! neighbours = 3
//! max_bond_order = "double"
//! valency = 4
//! hybridization = "sp2"
//! ```
//!
//! `charge` defaults to `0` when omitted. Every dictionary must contain the
//! unknown type [`UNKNOWN_TYPE`].

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

const BUILTIN_TOML: &str = include_str!("../resources/atom_types.toml");

static BUILTIN: OnceLock<Arc<TypeDictionary>> = OnceLock::new();

/// Identifier of the type assigned when no rule matches, and of placeholder atoms.
pub const UNKNOWN_TYPE: &str = "X";

/// Errors produced while loading an atom type dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The TOML source could not be parsed.
    #[error("failed to parse atom type dictionary: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries share an identifier.
    #[error("duplicate atom type '{0}'")]
    DuplicateType(String),

    /// An identifier the perception rules depend on is absent.
    #[error("atom type '{0}' is required but missing from the dictionary")]
    MissingType(String),
}

/// A named contract describing the bonding environment of an atom.
///
/// Optional fields impose no constraint when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomType {
    pub id: String,
    /// Element symbol; absent for the unknown type.
    pub element: Option<String>,
    /// Expected number of neighbours, implicit hydrogens included.
    #[serde(rename = "neighbours")]
    pub formal_neighbour_count: Option<u8>,
    /// Highest bond order any single bond may have.
    ///
    /// `Some(BondOrder::Unset)` is treated the same as `None`.
    pub max_bond_order: Option<BondOrder>,
    /// Ceiling on the bond-order sum plus implicit hydrogens.
    pub valency: Option<u8>,
    #[serde(rename = "charge", default = "neutral")]
    pub formal_charge: Option<i8>,
    pub single_electrons: Option<u8>,
    pub hybridization: Option<Hybridization>,
}

fn neutral() -> Option<i8> {
    Some(0)
}

impl AtomType {
    pub fn is_unknown(&self) -> bool {
        self.id == UNKNOWN_TYPE
    }
}

#[derive(Deserialize)]
struct DictionaryFile {
    #[serde(rename = "type")]
    types: Vec<AtomType>,
}

/// Read-only lookup from identifier to [`AtomType`].
#[derive(Debug, Clone)]
pub struct TypeDictionary {
    types: Vec<AtomType>,
    index: HashMap<String, usize>,
    unknown: usize,
}

impl TypeDictionary {
    /// The dictionary shipped with the crate, parsed on first access.
    pub fn builtin() -> Arc<TypeDictionary> {
        BUILTIN
            .get_or_init(|| {
                let dictionary = TypeDictionary::from_toml(BUILTIN_TOML).expect(
                    "Failed to parse embedded atom type dictionary. This is a library bug.",
                );
                Arc::new(dictionary)
            })
            .clone()
    }

    pub fn from_toml(source: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile = toml::from_str(source)?;
        let dictionary = Self::from_types(file.types)?;
        debug!("loaded atom type dictionary with {} types", dictionary.len());
        Ok(dictionary)
    }

    pub fn from_types(types: Vec<AtomType>) -> Result<Self, DictionaryError> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.id.clone(), i).is_some() {
                return Err(DictionaryError::DuplicateType(ty.id.clone()));
            }
        }
        let unknown = *index
            .get(UNKNOWN_TYPE)
            .ok_or_else(|| DictionaryError::MissingType(UNKNOWN_TYPE.to_string()))?;
        Ok(Self {
            types,
            index,
            unknown,
        })
    }

    pub fn get(&self, id: &str) -> Option<&AtomType> {
        self.index.get(id).map(|&i| &self.types[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The sentinel returned when perception finds no type.
    pub fn unknown(&self) -> &AtomType {
        &self.types[self.unknown]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomType> + '_ {
        self.types.iter()
    }

    /// Fails with the first identifier of `required` this dictionary lacks.
    pub fn require<'r>(
        &self,
        required: impl IntoIterator<Item = &'r str>,
    ) -> Result<(), DictionaryError> {
        match required.into_iter().find(|id| !self.contains(id)) {
            Some(missing) => Err(DictionaryError::MissingType(missing.to_string())),
            None => Ok(()),
        }
    }
}
