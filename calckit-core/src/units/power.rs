//! Power units.
//!
//! The base unit for this family is [`Watt`] (`Watt::RATIO == 1.0`).
//!
//! - Mechanical horsepower is `550 ft·lbf/s ≈ 745.69987158 W`; metric horsepower (PS) is `75 kgf·m/s = 735.49875 W`.
//! - `BTU/h` uses the International Table BTU.
//!
//! ```rust
//! use calckit_core::power::{Horsepowers, Kilowatt};
//!
//! let hp = Horsepowers::new(100.0);
//! assert!((hp.to::<Kilowatt>().value() - 74.569987158227022).abs() < 1e-9);
//! ```

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for power.
#[derive(Debug)]
pub enum Power {}
impl Family for Power {
    const ID: FamilyId = FamilyId::Power;
}

/// Marker trait for power units.
pub trait PowerUnit: Unit<Fam = Power> {}
impl<T: Unit<Fam = Power>> PowerUnit for T {}

macro_rules! si_watt {
    ($name:ident, $sym:literal, $long:literal, $ratio:expr, $qty:ident) => {
        #[doc = concat!("SI-prefixed watt unit (", stringify!($ratio), " W).")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, name = $long, family = Power, ratio = $ratio)]
        pub struct $name;
        #[doc = concat!("A quantity measured in ", $long, "s.")]
        pub type $qty = Quantity<$name>;
    };
}

si_watt!(Milliwatt, "mW", "milliwatt", 1e-3, Milliwatts);
si_watt!(Watt, "W", "watt", 1.0, Watts);
si_watt!(Kilowatt, "kW", "kilowatt", 1e3, Kilowatts);
si_watt!(Megawatt, "MW", "megawatt", 1e6, Megawatts);
si_watt!(Gigawatt, "GW", "gigawatt", 1e9, Gigawatts);

/// Mechanical (imperial) horsepower.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hp", name = "horsepower", family = Power, ratio = 745.699_871_582_270_22)]
pub struct Horsepower;
/// A quantity measured in mechanical horsepower.
pub type Horsepowers = Quantity<Horsepower>;

/// Metric horsepower (PS).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "PS", name = "metric horsepower", family = Power, ratio = 735.498_75)]
pub struct MetricHorsepower;
/// A quantity measured in metric horsepower.
pub type MetricHorsepowers = Quantity<MetricHorsepower>;

/// BTU per hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "BTU/h", name = "btu per hour", family = Power, ratio = 1_055.055_852_62 / 3_600.0)]
pub struct BtuPerHour;
/// A quantity measured in BTU per hour.
pub type BtusPerHour = Quantity<BtuPerHour>;

/// Foot-pound force per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft-lbf/s", name = "foot pound per second", family = Power, ratio = 1.355_817_948_331_400_4)]
pub struct FootPoundPerSecond;
/// A quantity measured in foot-pounds per second.
pub type FootPoundsPerSecond = Quantity<FootPoundPerSecond>;

crate::unit_table!(
    /// Canonical power table (base: watt).
    pub static TABLE,
    base = Watt,
    [
        Milliwatt,
        Watt,
        Kilowatt,
        Megawatt,
        Gigawatt,
        Horsepower,
        MetricHorsepower,
        BtuPerHour,
        FootPoundPerSecond,
    ]
);

crate::impl_unit_conversions!(
    Milliwatt,
    Watt,
    Kilowatt,
    Megawatt,
    Gigawatt,
    Horsepower,
    MetricHorsepower,
    BtuPerHour,
    FootPoundPerSecond,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn table_is_well_formed() {
        TABLE.check().unwrap();
    }

    #[test]
    fn horsepower_is_550_foot_pounds_per_second() {
        let ftlbf: FootPoundsPerSecond = Horsepowers::new(1.0).into();
        assert_relative_eq!(ftlbf.value(), 550.0, max_relative = 1e-9);
    }

    #[test]
    fn milliwatt_and_megawatt_are_distinct() {
        assert_abs_diff_eq!(TABLE.convert(1.0, "MW", "mW").unwrap(), 1e9, epsilon = 1e-3);
    }
}
