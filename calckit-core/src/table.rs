//! Table-driven linear conversion.
//!
//! A [`UnitFactorTable`] maps unit ids to a multiplicative factor relative to a fixed base unit. Conversion is
//!
//! ```text
//! v_base = v_src * src.factor
//! v_dst  = v_base / dst.factor
//! ```
//!
//! Temperature is affine rather than linear and lives in [`crate::temperature`] instead.

use crate::error::{CalcError, Result};
use crate::unit::Unit;
use crate::validate;
use std::borrow::Cow;

/// One row of a [`UnitFactorTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnitEntry {
    /// Short id, matched case-sensitively (`"Mb"` and `"MB"` are different units).
    pub symbol: &'static str,
    /// Long id, matched case-insensitively.
    pub name: &'static str,
    /// Multiplicative factor to the table's base unit.
    pub factor: f64,
}

impl UnitEntry {
    /// Creates an entry from its parts.
    pub const fn new(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        Self {
            symbol,
            name,
            factor,
        }
    }

    /// Creates the entry describing a typed unit.
    pub const fn of<U: Unit>() -> Self {
        Self::new(U::SYMBOL, U::NAME, U::RATIO)
    }

    /// Whether `id` names this unit, either by symbol or by long name.
    pub fn matches(&self, id: &str) -> bool {
        self.symbol == id || self.name.eq_ignore_ascii_case(id)
    }
}

/// Mapping from unit id to a factor relative to a base unit.
///
/// The built-in tables are `static` and defined once per family (see [`crate::registry`]); callers can also build
/// their own with [`UnitFactorTable::new`], which checks the invariants up front.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitFactorTable {
    base: &'static str,
    entries: Cow<'static, [UnitEntry]>,
}

impl UnitFactorTable {
    /// Wraps a static entry list without checking it.
    ///
    /// Used by the built-in family tables, whose invariants are covered by tests.
    pub const fn from_static(base: &'static str, entries: &'static [UnitEntry]) -> Self {
        Self {
            base,
            entries: Cow::Borrowed(entries),
        }
    }

    /// Builds a table, checking that:
    ///
    /// - `base` is present with a factor of exactly `1.0`,
    /// - every factor is finite and not negative,
    /// - no id resolves to two units, whether symbol against symbol, name against name, or one unit's symbol
    ///   against another's name.
    pub fn new(base: &'static str, entries: Vec<UnitEntry>) -> Result<Self> {
        let table = Self {
            base,
            entries: Cow::Owned(entries),
        };
        table.check()?;
        Ok(table)
    }

    /// Re-checks the invariants listed on [`UnitFactorTable::new`].
    pub fn check(&self) -> Result<()> {
        let base = self.get(self.base).ok_or_else(|| {
            CalcError::configuration(format!("base unit '{}' is not in the table", self.base))
        })?;
        if base.factor != 1.0 {
            return Err(CalcError::configuration(format!(
                "base unit '{}' must have factor 1, found {}",
                self.base, base.factor
            )));
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if !entry.factor.is_finite() || entry.factor < 0.0 {
                return Err(CalcError::configuration(format!(
                    "unit '{}' has an invalid factor {}",
                    entry.symbol, entry.factor
                )));
            }
            let clash = self.entries[i + 1..].iter().find(|other| {
                other.matches(entry.symbol)
                    || entry.matches(other.symbol)
                    || other.name.eq_ignore_ascii_case(entry.name)
            });
            if let Some(other) = clash {
                return Err(CalcError::configuration(format!(
                    "units '{}' ({}) and '{}' ({}) share an id",
                    entry.symbol, entry.name, other.symbol, other.name
                )));
            }
        }

        Ok(())
    }

    /// Symbol of the base unit.
    pub fn base_symbol(&self) -> &'static str {
        self.base
    }

    /// All units, in definition order.
    pub fn entries(&self) -> &[UnitEntry] {
        &self.entries
    }

    /// Finds a unit by symbol first, then by long name.
    pub fn get(&self, id: &str) -> Option<&UnitEntry> {
        let id = id.trim();
        self.entries
            .iter()
            .find(|e| e.symbol == id)
            .or_else(|| self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(id)))
    }

    /// Whether `id` names a unit of this table.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Factor of `id`, or a configuration error when the id is unknown.
    pub fn factor(&self, id: &str) -> Result<f64> {
        self.get(id)
            .map(|e| e.factor)
            .ok_or_else(|| CalcError::configuration(format!("unknown unit '{id}'")))
    }

    /// Converts `value` from unit `from` to unit `to`.
    ///
    /// # Errors
    ///
    /// * [`CalcError::Validation`] when `value` is not finite.
    /// * [`CalcError::Configuration`] when either id is unknown.
    /// * [`CalcError::Domain`] when the target factor is zero.
    /// * [`CalcError::Overflow`] when the result is not representable.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64> {
        let value = validate::finite("value", value)?;
        let src = self
            .get(from)
            .ok_or_else(|| CalcError::configuration(format!("unknown unit '{from}'")))?;
        let dst = self
            .get(to)
            .ok_or_else(|| CalcError::configuration(format!("unknown unit '{to}'")))?;

        if dst.factor == 0.0 {
            return Err(CalcError::domain(format!(
                "unit '{}' has a zero factor and cannot be a conversion target",
                dst.symbol
            )));
        }

        if src == dst {
            return Ok(value);
        }

        validate::finite_result("converted value", value * src.factor / dst.factor)
    }
}

/// Converts `value` between two units of `table`.
///
/// Shorthand for [`UnitFactorTable::convert`].
///
/// ```rust
/// use calckit_core::{convert, length};
///
/// let ft = convert(1.0, "m", "ft", &length::TABLE).unwrap();
/// assert!((ft - 3.280839895013123).abs() < 1e-12);
/// ```
pub fn convert(value: f64, from: &str, to: &str, table: &UnitFactorTable) -> Result<f64> {
    table.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    fn sample() -> Vec<UnitEntry> {
        vec![
            UnitEntry::new("u", "unit", 1.0),
            UnitEntry::new("du", "dozen", 12.0),
            UnitEntry::new("gr", "gross", 144.0),
        ]
    }

    #[test]
    fn custom_table_converts() {
        let table = UnitFactorTable::new("u", sample()).unwrap();
        assert_relative_eq!(table.convert(2.0, "gr", "du").unwrap(), 24.0);
        assert_relative_eq!(table.convert(6.0, "unit", "DOZEN").unwrap(), 0.5);
    }

    #[test]
    fn missing_base_is_rejected() {
        let err = UnitFactorTable::new("x", sample()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn base_must_have_factor_one() {
        let mut entries = sample();
        entries[0].factor = 2.0;
        assert!(UnitFactorTable::new("u", entries).is_err());
    }

    #[test]
    fn duplicates_and_bad_factors_are_rejected() {
        let mut dup = sample();
        dup.push(UnitEntry::new("dz", "Dozen", 12.0));
        assert!(UnitFactorTable::new("u", dup).is_err());

        let mut symbol_is_name = sample();
        symbol_is_name.push(UnitEntry::new("GROSS", "great gross", 1728.0));
        let err = UnitFactorTable::new("u", symbol_is_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let mut name_is_symbol = sample();
        name_is_symbol.insert(0, UnitEntry::new("h", "du", 100.0));
        assert!(UnitFactorTable::new("u", name_is_symbol).is_err());

        let mut neg = sample();
        neg.push(UnitEntry::new("neg", "negative", -1.0));
        assert!(UnitFactorTable::new("u", neg).is_err());

        let mut nan = sample();
        nan.push(UnitEntry::new("nan", "not a number", f64::NAN));
        assert!(UnitFactorTable::new("u", nan).is_err());
    }

    #[test]
    fn zero_target_factor_is_a_domain_error() {
        let mut entries = sample();
        entries.push(UnitEntry::new("z", "zero", 0.0));
        let table = UnitFactorTable::new("u", entries).unwrap();
        let err = table.convert(1.0, "u", "z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn unknown_unit_is_a_configuration_error() {
        let table = UnitFactorTable::new("u", sample()).unwrap();
        let err = convert(1.0, "u", "score", &table).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(table.factor("score").is_err());
    }

    #[test]
    fn non_finite_input_is_a_validation_error() {
        let table = UnitFactorTable::new("u", sample()).unwrap();
        let err = table.convert(f64::NAN, "u", "du").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn overflowing_result_is_reported() {
        let table = UnitFactorTable::new("u", sample()).unwrap();
        let err = table.convert(f64::MAX, "gr", "u").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn same_unit_is_identity() {
        let table = UnitFactorTable::new("u", sample()).unwrap();
        assert_eq!(table.convert(0.1, "du", "dozen").unwrap(), 0.1);
    }
}
