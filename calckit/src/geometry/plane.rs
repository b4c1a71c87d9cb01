//! Plane figures: circle, rectangle, rhombus.

use crate::{validate, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// The one circle measurement a caller knows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "given", content = "value", rename_all = "snake_case")]
pub enum CircleInput {
    /// Radius.
    Radius(f64),
    /// Diameter.
    Diameter(f64),
    /// Circumference.
    Circumference(f64),
    /// Area.
    Area(f64),
}

/// Every measurement of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    /// Radius.
    pub radius: f64,
    /// `2r`.
    pub diameter: f64,
    /// `2πr`.
    pub circumference: f64,
    /// `πr²`.
    pub area: f64,
}

impl Circle {
    /// Solves a circle from any one of its measurements.
    ///
    /// The radius is derived first, then all four outputs from the radius.
    ///
    /// ```rust
    /// use calckit::geometry::{Circle, CircleInput};
    ///
    /// let c = Circle::solve(CircleInput::Area(std::f64::consts::PI)).unwrap();
    /// assert!((c.radius - 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(input: CircleInput) -> Result<Self> {
        let radius = match input {
            CircleInput::Radius(r) => validate::positive("radius", r)?,
            CircleInput::Diameter(d) => validate::positive("diameter", d)? / 2.0,
            CircleInput::Circumference(c) => validate::positive("circumference", c)? / (2.0 * PI),
            CircleInput::Area(a) => (validate::positive("area", a)? / PI).sqrt(),
        };
        Self::from_radius(radius)
    }

    /// Solves a circle from its radius.
    pub fn from_radius(radius: f64) -> Result<Self> {
        let radius = validate::positive("radius", radius)?;
        Ok(Self {
            radius,
            diameter: 2.0 * radius,
            circumference: 2.0 * PI * radius,
            area: validate::finite_result("area", PI * radius * radius)?,
        })
    }
}

/// Area, perimeter and diagonal of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Length.
    pub length: f64,
    /// Width.
    pub width: f64,
    /// `l·w`.
    pub area: f64,
    /// `2(l + w)`.
    pub perimeter: f64,
    /// `√(l² + w²)`.
    pub diagonal: f64,
}

impl Rectangle {
    /// Measures a rectangle.
    pub fn new(length: f64, width: f64) -> Result<Self> {
        let length = validate::positive("length", length)?;
        let width = validate::positive("width", width)?;
        Ok(Self {
            length,
            width,
            area: validate::finite_result("area", length * width)?,
            perimeter: 2.0 * (length + width),
            diagonal: length.hypot(width),
        })
    }
}

/// A rhombus described by its diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rhombus {
    /// First diagonal.
    pub d1: f64,
    /// Second diagonal.
    pub d2: f64,
    /// `d1·d2 / 2`.
    pub area: f64,
    /// `√((d1/2)² + (d2/2)²)`.
    pub side: f64,
    /// `4·side`.
    pub perimeter: f64,
}

impl Rhombus {
    /// Measures a rhombus from its two diagonals.
    pub fn from_diagonals(d1: f64, d2: f64) -> Result<Self> {
        let d1 = validate::positive("first diagonal", d1)?;
        let d2 = validate::positive("second diagonal", d2)?;
        let side = (d1 / 2.0).hypot(d2 / 2.0);
        Ok(Self {
            d1,
            d2,
            area: validate::finite_result("area", d1 * d2 / 2.0)?,
            side,
            perimeter: 4.0 * side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn circle_from_each_input_agrees() {
        let by_radius = Circle::solve(CircleInput::Radius(2.0)).unwrap();
        for input in [
            CircleInput::Diameter(by_radius.diameter),
            CircleInput::Circumference(by_radius.circumference),
            CircleInput::Area(by_radius.area),
        ] {
            let c = Circle::solve(input).unwrap();
            assert_relative_eq!(c.radius, 2.0, max_relative = 1e-12);
            assert_relative_eq!(c.area, 4.0 * PI, max_relative = 1e-12);
        }
    }

    #[test]
    fn circle_needs_a_positive_measurement() {
        let err = Circle::solve(CircleInput::Diameter(0.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(Circle::solve(CircleInput::Area(-3.0)).is_err());
    }

    #[test]
    fn rectangle_three_four_five() {
        let r = Rectangle::new(3.0, 4.0).unwrap();
        assert_eq!(r.area, 12.0);
        assert_eq!(r.perimeter, 14.0);
        assert_relative_eq!(r.diagonal, 5.0);
        assert!(Rectangle::new(3.0, 0.0).is_err());
    }

    #[test]
    fn rhombus_from_diagonals() {
        let r = Rhombus::from_diagonals(6.0, 8.0).unwrap();
        assert_eq!(r.area, 24.0);
        assert_relative_eq!(r.side, 5.0);
        assert_relative_eq!(r.perimeter, 20.0);
    }
}
