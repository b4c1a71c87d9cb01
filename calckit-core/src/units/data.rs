//! Data storage units.
//!
//! The base unit for this family is [`Bit`]. Both prefix systems are provided and kept apart:
//!
//! - **SI (decimal)**: `kB = 1000 B`, `MB = 1000 kB`, … and the bit multiples `kb`, `Mb`, …
//! - **IEC (binary)**: `KiB = 1024 B`, `MiB = 1024 KiB`, …
//!
//! Symbols are case-sensitive: `Mb` is a megabit and `MB` a megabyte.
//!
//! ```rust
//! use calckit_core::data::{Gibibytes, Gigabyte};
//!
//! let gib = Gibibytes::new(1.0);
//! assert!((gib.to::<Gigabyte>().value() - 1.073741824).abs() < 1e-12);
//! ```

use crate::{Family, FamilyId, Quantity, Unit};
use calckit_derive::Unit;

/// Family tag for data storage.
#[derive(Debug)]
pub enum DataStorage {}
impl Family for DataStorage {
    const ID: FamilyId = FamilyId::DataStorage;
}

/// Marker trait for data storage units.
pub trait DataUnit: Unit<Fam = DataStorage> {}
impl<T: Unit<Fam = DataStorage>> DataUnit for T {}

/// Helper macro to declare a data unit, its quantity alias and a doc line.
macro_rules! data_unit {
    ($name:ident, $sym:literal, $long:literal, $ratio:expr, $qty:ident) => {
        #[doc = concat!("Data storage unit `", $sym, "` (`", stringify!($ratio), "` bits).")]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
        #[unit(symbol = $sym, name = $long, family = DataStorage, ratio = $ratio)]
        pub struct $name;

        #[doc = concat!("A quantity measured in ", $long, "s.")]
        pub type $qty = Quantity<$name>;
    };
}

const BYTE: f64 = 8.0;
const KI: f64 = 1_024.0;

data_unit!(Bit, "b", "bit", 1.0, Bits);
data_unit!(Byte, "B", "byte", BYTE, Bytes);

data_unit!(Kilobit, "kb", "kilobit", 1e3, Kilobits);
data_unit!(Megabit, "Mb", "megabit", 1e6, Megabits);
data_unit!(Gigabit, "Gb", "gigabit", 1e9, Gigabits);
data_unit!(Terabit, "Tb", "terabit", 1e12, Terabits);

data_unit!(Kilobyte, "kB", "kilobyte", BYTE * 1e3, Kilobytes);
data_unit!(Megabyte, "MB", "megabyte", BYTE * 1e6, Megabytes);
data_unit!(Gigabyte, "GB", "gigabyte", BYTE * 1e9, Gigabytes);
data_unit!(Terabyte, "TB", "terabyte", BYTE * 1e12, Terabytes);
data_unit!(Petabyte, "PB", "petabyte", BYTE * 1e15, Petabytes);

data_unit!(Kibibyte, "KiB", "kibibyte", BYTE * KI, Kibibytes);
data_unit!(Mebibyte, "MiB", "mebibyte", BYTE * KI * KI, Mebibytes);
data_unit!(Gibibyte, "GiB", "gibibyte", BYTE * KI * KI * KI, Gibibytes);
data_unit!(Tebibyte, "TiB", "tebibyte", BYTE * KI * KI * KI * KI, Tebibytes);
data_unit!(Pebibyte, "PiB", "pebibyte", BYTE * KI * KI * KI * KI * KI, Pebibytes);

crate::unit_table!(
    /// Canonical data storage table (base: bit).
    pub static TABLE,
    base = Bit,
    [
        Bit, Byte, Kilobit, Megabit, Gigabit, Terabit, Kilobyte, Megabyte, Gigabyte, Terabyte,
        Petabyte, Kibibyte, Mebibyte, Gibibyte, Tebibyte, Pebibyte,
    ]
);

crate::impl_unit_conversions!(
    Bit, Byte, Kilobit, Megabit, Gigabit, Terabit, Kilobyte, Megabyte, Gigabyte, Terabyte, Petabyte,
    Kibibyte, Mebibyte, Gibibyte, Tebibyte, Pebibyte,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn table_is_well_formed() {
        TABLE.check().unwrap();
        assert_eq!(TABLE.entries().len(), 16);
    }

    #[test]
    fn symbols_are_case_sensitive() {
        assert_abs_diff_eq!(TABLE.convert(1.0, "MB", "Mb").unwrap(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(TABLE.convert(8.0, "Mb", "MB").unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn binary_prefixes() {
        assert_abs_diff_eq!(Mebibytes::new(1.0).to::<Kibibyte>().value(), 1_024.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Kibibytes::new(1.0).to::<Byte>().value(), 1_024.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Bytes::new(1.0).to::<Bit>().value(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn bandwidth_style_conversion() {
        // 100 megabit per second line fills 12.5 megabytes per second
        let mb: Megabytes = Megabits::new(100.0).into();
        assert_abs_diff_eq!(mb.value(), 12.5, epsilon = 1e-12);
    }
}
