//! Speed units.
//!
//! The base unit for this family is [`MeterPerSecond`]. Speed is modelled as a family of its own rather than as
//! `Length / Time`, because the calculators only ever convert between speed units.

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for speed.
#[derive(Debug)]
pub enum Speed {}
impl Family for Speed {
    const ID: FamilyId = FamilyId::Speed;
}

/// Marker trait for speed units.
pub trait SpeedUnit: Unit<Fam = Speed> {}
impl<T: Unit<Fam = Speed>> SpeedUnit for T {}

/// Metre per second (base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", name = "meter per second", family = Speed, ratio = 1.0)]
pub struct MeterPerSecond;
/// A speed in metres per second.
pub type MetersPerSecond = Quantity<MeterPerSecond>;

/// Kilometre per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", name = "kilometer per hour", family = Speed, ratio = 1_000.0 / 3_600.0)]
pub struct KilometerPerHour;
/// A speed in kilometres per hour.
pub type KilometersPerHour = Quantity<KilometerPerHour>;

/// Statute mile per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mph", name = "mile per hour", family = Speed, ratio = 1_609.344 / 3_600.0)]
pub struct MilePerHour;
/// A speed in miles per hour.
pub type MilesPerHour = Quantity<MilePerHour>;

/// Foot per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft/s", name = "foot per second", family = Speed, ratio = 0.3048)]
pub struct FootPerSecond;
/// A speed in feet per second.
pub type FeetPerSecond = Quantity<FootPerSecond>;

/// Knot: one nautical mile per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kn", name = "knot", family = Speed, ratio = 1_852.0 / 3_600.0)]
pub struct Knot;
/// A speed in knots.
pub type Knots = Quantity<Knot>;

crate::unit_table!(
    /// Canonical speed table (base: metre per second).
    pub static TABLE,
    base = MeterPerSecond,
    [MeterPerSecond, KilometerPerHour, MilePerHour, FootPerSecond, Knot]
);

crate::impl_unit_conversions!(MeterPerSecond, KilometerPerHour, MilePerHour, FootPerSecond, Knot);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn table_is_well_formed() {
        TABLE.check().unwrap();
    }

    #[test]
    fn highway_speeds() {
        let kmh = MilesPerHour::new(60.0).to::<KilometerPerHour>();
        assert_abs_diff_eq!(kmh.value(), 96.56064, epsilon = 1e-9);
        let ms: MetersPerSecond = KilometersPerHour::new(36.0).into();
        assert_abs_diff_eq!(ms.value(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn knot_is_nautical_mile_per_hour() {
        assert_abs_diff_eq!(TABLE.convert(1.0, "knot", "km/h").unwrap(), 1.852, epsilon = 1e-12);
    }
}
