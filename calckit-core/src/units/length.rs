//! Length units.
//!
//! The base unit for this family is [`Meter`] (`Meter::RATIO == 1.0`). Imperial and nautical units follow the
//! international definitions (the inch is exactly `0.0254 m`, the nautical mile exactly `1852 m`).
//!
//! ```rust
//! use calckit_core::length::{Miles, Kilometer};
//!
//! let mi = Miles::new(1.0);
//! assert!((mi.to::<Kilometer>().value() - 1.609344).abs() < 1e-12);
//! ```

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for length.
#[derive(Debug)]
pub enum Length {}
impl Family for Length {
    const ID: FamilyId = FamilyId::Length;
}

/// Marker trait for any [`Unit`] whose family is [`Length`].
pub trait LengthUnit: Unit<Fam = Length> {}
impl<T: Unit<Fam = Length>> LengthUnit for T {}

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", name = "nanometer", family = Length, ratio = 1e-9)]
pub struct Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "um", name = "micrometer", family = Length, ratio = 1e-6)]
pub struct Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", name = "millimeter", family = Length, ratio = 1e-3)]
pub struct Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", name = "centimeter", family = Length, ratio = 1e-2)]
pub struct Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Centimeter>;

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", name = "meter", family = Length, ratio = 1.0)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", name = "kilometer", family = Length, ratio = 1_000.0)]
pub struct Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;

/// International inch (`0.0254 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", name = "inch", family = Length, ratio = 0.0254)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// International foot (`12 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", name = "foot", family = Length, ratio = 0.3048)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// International yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", name = "yard", family = Length, ratio = 0.9144)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;

/// Statute mile (`5280 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", name = "mile", family = Length, ratio = 1_609.344)]
pub struct Mile;
/// A quantity measured in statute miles.
pub type Miles = Quantity<Mile>;

/// International nautical mile (`1852 m`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nmi", name = "nautical mile", family = Length, ratio = 1_852.0)]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles = Quantity<NauticalMile>;

crate::unit_table!(
    /// Canonical length table (base: metre).
    pub static TABLE,
    base = Meter,
    [
        Nanometer,
        Micrometer,
        Millimeter,
        Centimeter,
        Meter,
        Kilometer,
        Inch,
        Foot,
        Yard,
        Mile,
        NauticalMile,
    ]
);

crate::impl_unit_conversions!(
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
);
