//! Central unit registry.
//!
//! Maps every [`FamilyId`] to its canonical [`UnitFactorTable`] and implements conversion between unit ids whose
//! family is not known in advance.
//!
//! # Conversion Formula
//!
//! ```text
//! v_base = v_src * src.factor
//! v_dst  = v_base / dst.factor
//! ```
//!
//! Both ids must resolve to the same family; otherwise the request is a configuration error.

use crate::error::{CalcError, Result};
use crate::family::FamilyId;
use crate::table::{UnitEntry, UnitFactorTable};
use crate::units::{data, energy, frequency, length, power, speed, weight};

/// Returns the canonical table of `family`.
#[inline]
pub fn table(family: FamilyId) -> &'static UnitFactorTable {
    match family {
        FamilyId::Length => &length::TABLE,
        FamilyId::Weight => &weight::TABLE,
        FamilyId::Speed => &speed::TABLE,
        FamilyId::DataStorage => &data::TABLE,
        FamilyId::Energy => &energy::TABLE,
        FamilyId::Power => &power::TABLE,
        FamilyId::Frequency => &frequency::TABLE,
    }
}

/// Iterates over every family together with its table.
pub fn tables() -> impl Iterator<Item = (FamilyId, &'static UnitFactorTable)> {
    FamilyId::ALL.into_iter().map(|f| (f, table(f)))
}

/// Finds a unit across all families.
///
/// Symbols are tried first in every family (case-sensitive), then long names (case-insensitive), so `"mm"` is
/// always the millimetre even though a name could in principle collide.
pub fn lookup(id: &str) -> Option<(FamilyId, &'static UnitEntry)> {
    let id = id.trim();
    tables()
        .find_map(|(f, t)| t.entries().iter().find(|e| e.symbol == id).map(|e| (f, e)))
        .or_else(|| {
            tables().find_map(|(f, t)| {
                t.entries()
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(id))
                    .map(|e| (f, e))
            })
        })
}

/// Returns the family of `id`.
///
/// Returns `None` if the unit id is not recognized.
#[inline]
pub fn family_of(id: &str) -> Option<FamilyId> {
    lookup(id).map(|(f, _)| f)
}

/// Checks if two units are compatible (same family).
///
/// Also returns `false` if either unit is not recognized.
#[inline]
pub fn compatible(a: &str, b: &str) -> bool {
    match (family_of(a), family_of(b)) {
        (Some(fa), Some(fb)) => fa == fb,
        _ => false,
    }
}

/// Converts `value` between two unit ids, inferring the family from the ids.
///
/// # Errors
///
/// * [`CalcError::Configuration`] when an id is unknown or the ids belong to different families.
/// * Anything [`UnitFactorTable::convert`] reports.
///
/// ```rust
/// use calckit_core::registry;
///
/// let kwh = registry::convert(3_600_000.0, "J", "kWh").unwrap();
/// assert!((kwh - 1.0).abs() < 1e-12);
/// assert!(registry::convert(1.0, "m", "kg").is_err());
/// ```
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let (src_family, src) = lookup(from)
        .ok_or_else(|| CalcError::configuration(format!("unknown unit '{from}'")))?;
    let (dst_family, dst) =
        lookup(to).ok_or_else(|| CalcError::configuration(format!("unknown unit '{to}'")))?;

    if src_family != dst_family {
        return Err(CalcError::configuration(format!(
            "cannot convert {src_family} unit '{}' to {dst_family} unit '{}'",
            src.symbol, dst.symbol
        )));
    }

    log::debug!("convert {value} {} -> {} ({src_family})", src.symbol, dst.symbol);
    table(src_family).convert(value, src.symbol, dst.symbol)
}

/// Converts `value` within a known family, so ids only need to be unique inside that family.
pub fn convert_in(family: FamilyId, value: f64, from: &str, to: &str) -> Result<f64> {
    log::debug!("convert {value} {from} -> {to} ({family})");
    table(family).convert(value, from, to)
}
