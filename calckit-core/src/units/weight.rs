//! Weight (mass) units.
//!
//! The base unit for this family is [`Kilogram`] (`Kilogram::RATIO == 1.0`).
//!
//! - **Metric**: microgram through tonne.
//! - **Avoirdupois**: ounce, pound, stone, short ton and long ton, all derived from the exact pound
//!   `1 lb = 0.45359237 kg`.
//! - **Carat**: `0.2 g` (exact).
//!
//! ```rust
//! use calckit_core::weight::{Pounds, Kilogram};
//!
//! let lb = Pounds::new(1.0);
//! assert!((lb.to::<Kilogram>().value() - 0.45359237).abs() < 1e-15);
//! ```

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for weight.
#[derive(Debug)]
pub enum Weight {}
impl Family for Weight {
    const ID: FamilyId = FamilyId::Weight;
}

/// Marker trait for any [`Unit`] whose family is [`Weight`].
pub trait WeightUnit: Unit<Fam = Weight> {}
impl<T: Unit<Fam = Weight>> WeightUnit for T {}

const POUND_KG: f64 = 0.453_592_37;

/// Helper macro to declare a metric weight unit together with its quantity alias.
macro_rules! metric {
    ($name:ident, $sym:literal, $long:literal, $ratio:expr, $qty:ident) => {
        #[doc = concat!("Metric weight unit `", $sym, "` (`", stringify!($ratio), " kg`).")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, name = $long, family = Weight, ratio = $ratio)]
        pub struct $name;

        #[doc = concat!("A quantity measured in ", $long, "s.")]
        pub type $qty = Quantity<$name>;
    };
}

metric!(Microgram, "ug", "microgram", 1e-9, Micrograms);
metric!(Milligram, "mg", "milligram", 1e-6, Milligrams);
metric!(Gram, "g", "gram", 1e-3, Grams);
metric!(Kilogram, "kg", "kilogram", 1.0, Kilograms);
metric!(Tonne, "t", "tonne", 1_000.0, Tonnes);

/// Carat: `1 ct = 0.2 g` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ct", name = "carat", family = Weight, ratio = 2e-4)]
pub struct Carat;
/// A quantity measured in carats.
pub type Carats = Quantity<Carat>;

/// Avoirdupois ounce: `1/16 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", name = "ounce", family = Weight, ratio = POUND_KG / 16.0)]
pub struct Ounce;
/// A quantity measured in ounces.
pub type Ounces = Quantity<Ounce>;

/// Avoirdupois pound: `0.45359237 kg` (exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", name = "pound", family = Weight, ratio = POUND_KG)]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds = Quantity<Pound>;

/// Stone: `14 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "st", name = "stone", family = Weight, ratio = POUND_KG * 14.0)]
pub struct Stone;
/// A quantity measured in stones.
pub type Stones = Quantity<Stone>;

/// US short ton: `2000 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ton_us", name = "short ton", family = Weight, ratio = POUND_KG * 2_000.0)]
pub struct ShortTon;
/// A quantity measured in short tons.
pub type ShortTons = Quantity<ShortTon>;

/// Imperial long ton: `2240 lb`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ton_uk", name = "long ton", family = Weight, ratio = POUND_KG * 2_240.0)]
pub struct LongTon;
/// A quantity measured in long tons.
pub type LongTons = Quantity<LongTon>;

crate::unit_table!(
    /// Canonical weight table (base: kilogram).
    pub static TABLE,
    base = Kilogram,
    [
        Microgram, Milligram, Gram, Kilogram, Tonne, Carat, Ounce, Pound, Stone, ShortTon, LongTon,
    ]
);

crate::impl_unit_conversions!(
    Microgram, Milligram, Gram, Kilogram, Tonne, Carat, Ounce, Pound, Stone, ShortTon, LongTon,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn table_is_well_formed() {
        TABLE.check().unwrap();
        assert_eq!(TABLE.base_symbol(), "kg");
    }

    #[test]
    fn avoirdupois_relationships() {
        assert_abs_diff_eq!(Pounds::new(1.0).to::<Ounce>().value(), 16.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Stones::new(1.0).to::<Pound>().value(), 14.0, epsilon = 1e-12);
        assert_relative_eq!(ShortTons::new(1.0).to::<Kilogram>().value(), 907.18474, max_relative = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        assert_abs_diff_eq!(Tonnes::new(1.0).to::<Gram>().value(), 1e6, epsilon = 1e-6);
        assert_abs_diff_eq!(Carats::new(5.0).to::<Gram>().value(), 1.0, epsilon = 1e-12);
        let mg: Milligrams = Grams::new(2.0).into();
        assert_abs_diff_eq!(mg.value(), 2_000.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_pound_kilogram_roundtrip(v in 1e-6..1e6f64) {
            let kg = TABLE.convert(v, "lb", "kg").unwrap();
            let back = TABLE.convert(kg, "kg", "lb").unwrap();
            prop_assert!((back - v).abs() < 1e-9 * v.max(1.0));
        }
    }
}
