//! Unit conversion engine and shared error taxonomy for `calckit`.
//!
//! `calckit-core` provides two views of the same unit data:
//!
//! - A *typed* view: each unit is a zero-sized marker implementing [`Unit`], a value tagged with a unit is a
//!   [`Quantity<U>`], and [`Quantity::to`] converts between units of one family with the family checked at compile
//!   time.
//! - A *runtime* view: every family publishes one canonical [`UnitFactorTable`] built from its typed units, so
//!   string unit ids coming from a UI or a command line convert through the same factors. The [`registry`]
//!   resolves ids across families.
//!
//! Temperature is affine and handled separately in [`temperature`].
//!
//! Most users should depend on `calckit` (the facade crate), which re-exports everything here.
//!
//! # Quick start
//!
//! ```rust
//! use calckit_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Converting from runtime ids:
//!
//! ```rust
//! use calckit_core::registry;
//!
//! let lb = registry::convert(1.0, "kg", "lb").unwrap();
//! assert!((lb - 2.204622621848776).abs() < 1e-12);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: serialization for [`Quantity<U>`] (raw `f64`), [`serde_with_unit`] for `{value, unit}`, and
//!   `Serialize` for result types such as [`UnitEntry`] and [`ErrorKind`].
//!
//! # Errors
//!
//! Fallible operations return [`Result<T>`] with a [`CalcError`]. Typed conversions through [`Quantity::to`] are
//! plain `f64` arithmetic and do not fail.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod family;
mod macros;
mod quantity;
mod table;
mod unit;

pub mod registry;
pub mod temperature;
pub mod validate;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{CalcError, ErrorKind, Result};
pub use family::{Family, FamilyId};
pub use quantity::Quantity;
pub use table::{convert, UnitEntry, UnitFactorTable};
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by family)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by family).
pub mod units;

pub use units::data;
pub use units::energy;
pub use units::frequency;
pub use units::length;
pub use units::power;
pub use units::speed;
pub use units::weight;
