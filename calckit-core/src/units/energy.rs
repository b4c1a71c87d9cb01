//! Energy units.
//!
//! The base unit for this family is [`Joule`].
//!
//! - The calorie is the thermochemical calorie, `4.184 J`; the food "Calorie" is [`Kilocalorie`].
//! - The BTU is the International Table BTU, `1055.05585262 J`; the therm is `100 000 BTU`.
//! - The electronvolt uses the exact SI 2019 elementary charge.

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for energy.
#[derive(Debug)]
pub enum Energy {}
impl Family for Energy {
    const ID: FamilyId = FamilyId::Energy;
}

/// Marker trait for energy units.
pub trait EnergyUnit: Unit<Fam = Energy> {}
impl<T: Unit<Fam = Energy>> EnergyUnit for T {}

const BTU_J: f64 = 1_055.055_852_62;

/// Joule (SI derived unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", name = "joule", family = Energy, ratio = 1.0)]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules = Quantity<Joule>;

/// Kilojoule.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kJ", name = "kilojoule", family = Energy, ratio = 1e3)]
pub struct Kilojoule;
/// A quantity measured in kilojoules.
pub type Kilojoules = Quantity<Kilojoule>;

/// Megajoule.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MJ", name = "megajoule", family = Energy, ratio = 1e6)]
pub struct Megajoule;
/// A quantity measured in megajoules.
pub type Megajoules = Quantity<Megajoule>;

/// Thermochemical calorie.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cal", name = "calorie", family = Energy, ratio = 4.184)]
pub struct Calorie;
/// A quantity measured in calories.
pub type Calories = Quantity<Calorie>;

/// Kilocalorie (food Calorie).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kcal", name = "kilocalorie", family = Energy, ratio = 4_184.0)]
pub struct Kilocalorie;
/// A quantity measured in kilocalories.
pub type Kilocalories = Quantity<Kilocalorie>;

/// Watt-hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wh", name = "watt hour", family = Energy, ratio = 3_600.0)]
pub struct WattHour;
/// A quantity measured in watt-hours.
pub type WattHours = Quantity<WattHour>;

/// Kilowatt-hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kWh", name = "kilowatt hour", family = Energy, ratio = 3.6e6)]
pub struct KilowattHour;
/// A quantity measured in kilowatt-hours.
pub type KilowattHours = Quantity<KilowattHour>;

/// Electronvolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV", name = "electronvolt", family = Energy, ratio = 1.602_176_634e-19)]
pub struct Electronvolt;
/// A quantity measured in electronvolts.
pub type Electronvolts = Quantity<Electronvolt>;

/// International Table British thermal unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "BTU", name = "british thermal unit", family = Energy, ratio = BTU_J)]
pub struct Btu;
/// A quantity measured in BTU.
pub type Btus = Quantity<Btu>;

/// Foot-pound force.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft-lbf", name = "foot pound", family = Energy, ratio = 1.355_817_948_331_400_4)]
pub struct FootPound;
/// A quantity measured in foot-pounds.
pub type FootPounds = Quantity<FootPound>;

/// Therm (`100 000 BTU`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "thm", name = "therm", family = Energy, ratio = BTU_J * 1e5)]
pub struct Therm;
/// A quantity measured in therms.
pub type Therms = Quantity<Therm>;

crate::unit_table!(
    /// Canonical energy table (base: joule).
    pub static TABLE,
    base = Joule,
    [
        Joule,
        Kilojoule,
        Megajoule,
        Calorie,
        Kilocalorie,
        WattHour,
        KilowattHour,
        Electronvolt,
        Btu,
        FootPound,
        Therm,
    ]
);

crate::impl_unit_conversions!(
    Joule,
    Kilojoule,
    Megajoule,
    Calorie,
    Kilocalorie,
    WattHour,
    KilowattHour,
    Electronvolt,
    Btu,
    FootPound,
    Therm,
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
    fn kilowatt_hour_in_megajoules() {
        assert_abs_diff_eq!(KilowattHours::new(1.0).to::<Megajoule>().value(), 3.6, epsilon = 1e-12);
    }

    #[test]
    fn food_calories() {
        let kj: Kilojoules = Kilocalories::new(100.0).into();
        assert_abs_diff_eq!(kj.value(), 418.4, epsilon = 1e-9);
    }

    #[test]
    fn therm_in_btu() {
        assert_relative_eq!(TABLE.convert(1.0, "therm", "BTU").unwrap(), 1e5, max_relative = 1e-12);
    }
}
