//! Unit types and traits.

use crate::family::Family;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the multiplicative factor from this unit to the *base unit* of the same family.
///   Example: metres are the length base (`Meter::RATIO == 1.0`), so kilometres use `Kilometer::RATIO == 1000.0`
///   because `1 km = 1000 m`.
///
/// * `SYMBOL` is the short id and printable string (e.g. `"m"` or `"km"`).
///
/// * `NAME` is the long id (e.g. `"kilometer"`).
///
/// * `Fam` ties the unit to its conversion [`Family`].
///
/// # Invariants
///
/// - Implementations are zero-sized marker types.
/// - `RATIO` is finite and strictly positive; the base unit of a family has `RATIO == 1.0`.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-base conversion factor.
    const RATIO: f64;

    /// Family to which this unit belongs.
    type Fam: Family;

    /// Short id, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Long, human readable id.
    const NAME: &'static str;
}
