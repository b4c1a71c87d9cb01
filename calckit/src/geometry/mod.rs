//! Closed-form geometry.
//!
//! Every dimension must be strictly positive; anything else is a
//! [`CalcError::Validation`](crate::CalcError::Validation).

mod plane;
mod solid;

pub use plane::{Circle, CircleInput, Rectangle, Rhombus};
pub use solid::{volume_by_tag, Cylinder, Solid, SolidKind, Sphere};
