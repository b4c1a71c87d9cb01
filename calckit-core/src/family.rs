//! Conversion families.

use crate::error::CalcError;
use core::fmt;
use core::str::FromStr;

/// Marker trait for **conversion families** (Length, Weight, Energy …).
///
/// A family is the category that distinguishes a metre from a joule: only units of the same family convert into
/// each other. Model each family as an empty enum:
///
/// ```rust
/// use calckit_core::{Family, FamilyId};
/// #[derive(Debug)]
/// pub enum Length {}
/// impl Family for Length {
///     const ID: FamilyId = FamilyId::Length;
/// }
/// ```
pub trait Family {
    /// Runtime identifier of this family.
    const ID: FamilyId;
}

/// Runtime identifier of a conversion family, used by the registry and by callers that pick units from strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FamilyId {
    /// Base unit: metre.
    Length,
    /// Base unit: kilogram.
    Weight,
    /// Base unit: metre per second.
    Speed,
    /// Base unit: bit.
    DataStorage,
    /// Base unit: joule.
    Energy,
    /// Base unit: watt.
    Power,
    /// Base unit: hertz.
    Frequency,
}

impl FamilyId {
    /// Every linear family, in display order.
    pub const ALL: [FamilyId; 7] = [
        FamilyId::Length,
        FamilyId::Weight,
        FamilyId::Speed,
        FamilyId::DataStorage,
        FamilyId::Energy,
        FamilyId::Power,
        FamilyId::Frequency,
    ];

    /// Lower-case name, also accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            FamilyId::Length => "length",
            FamilyId::Weight => "weight",
            FamilyId::Speed => "speed",
            FamilyId::DataStorage => "data",
            FamilyId::Energy => "energy",
            FamilyId::Power => "power",
            FamilyId::Frequency => "frequency",
        }
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "distance" => Ok(FamilyId::Length),
            "weight" | "mass" => Ok(FamilyId::Weight),
            "speed" | "velocity" => Ok(FamilyId::Speed),
            "data" | "data_storage" | "storage" => Ok(FamilyId::DataStorage),
            "energy" => Ok(FamilyId::Energy),
            "power" => Ok(FamilyId::Power),
            "frequency" => Ok(FamilyId::Frequency),
            other => Err(CalcError::configuration(format!(
                "unknown conversion family '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for id in FamilyId::ALL {
            assert_eq!(id.as_str().parse::<FamilyId>().unwrap(), id);
        }
    }

    #[test]
    fn aliases_are_accepted() {
        assert_eq!("Mass".parse::<FamilyId>().unwrap(), FamilyId::Weight);
        assert_eq!(" storage ".parse::<FamilyId>().unwrap(), FamilyId::DataStorage);
        assert!("temperature".parse::<FamilyId>().is_err());
    }
}
