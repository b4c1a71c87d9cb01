//! Frequency units.
//!
//! The base unit for this family is [`Hertz`]. Revolutions per minute count as a frequency (`1 rpm = 1/60 Hz`).

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for frequency.
#[derive(Debug)]
pub enum Frequency {}
impl Family for Frequency {
    const ID: FamilyId = FamilyId::Frequency;
}

/// Marker trait for frequency units.
pub trait FrequencyUnit: Unit<Fam = Frequency> {}
impl<T: Unit<Fam = Frequency>> FrequencyUnit for T {}

/// Hertz (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", name = "hertz", family = Frequency, ratio = 1.0)]
pub struct Hertz;
/// A frequency in hertz.
pub type Hertzes = Quantity<Hertz>;

/// Kilohertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", name = "kilohertz", family = Frequency, ratio = 1e3)]
pub struct Kilohertz;
/// A frequency in kilohertz.
pub type Kilohertzes = Quantity<Kilohertz>;

/// Megahertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MHz", name = "megahertz", family = Frequency, ratio = 1e6)]
pub struct Megahertz;
/// A frequency in megahertz.
pub type Megahertzes = Quantity<Megahertz>;

/// Gigahertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "GHz", name = "gigahertz", family = Frequency, ratio = 1e9)]
pub struct Gigahertz;
/// A frequency in gigahertz.
pub type Gigahertzes = Quantity<Gigahertz>;

/// Terahertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "THz", name = "terahertz", family = Frequency, ratio = 1e12)]
pub struct Terahertz;
/// A frequency in terahertz.
pub type Terahertzes = Quantity<Terahertz>;

/// Revolution per minute.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", name = "revolution per minute", family = Frequency, ratio = 1.0 / 60.0)]
pub struct RevolutionPerMinute;
/// A rotation rate in revolutions per minute.
pub type RevolutionsPerMinute = Quantity<RevolutionPerMinute>;

crate::unit_table!(
    /// Canonical frequency table (base: hertz).
    pub static TABLE,
    base = Hertz,
    [Hertz, Kilohertz, Megahertz, Gigahertz, Terahertz, RevolutionPerMinute]
);

crate::impl_unit_conversions!(
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
    Terahertz,
    RevolutionPerMinute,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn table_is_well_formed() {
        TABLE.check().unwrap();
    }

    #[test]
    fn rpm_to_hertz() {
        let hz: Hertzes = RevolutionsPerMinute::new(3_000.0).into();
        assert_abs_diff_eq!(hz.value(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn clock_speeds() {
        assert_abs_diff_eq!(Gigahertzes::new(3.2).to::<Megahertz>().value(), 3_200.0, epsilon = 1e-9);
    }
}
