//! Predefined unit modules grouped by conversion family.
//!
//! Each module defines its typed units and publishes one canonical `TABLE` built from them.
//!
//! ## Modules
//!
//! - [`length`]: metre is the base unit.
//! - [`weight`]: kilogram is the base unit.
//! - [`speed`]: metre per second is the base unit.
//! - [`data`]: bit is the base unit; SI and IEC prefixes.
//! - [`energy`]: joule is the base unit.
//! - [`power`]: watt is the base unit.
//! - [`frequency`]: hertz is the base unit.

pub mod data;
pub mod energy;
pub mod frequency;
pub mod length;
pub mod power;
pub mod speed;
pub mod weight;
