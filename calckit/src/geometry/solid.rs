//! Solids and the volume dispatcher.

use crate::{validate, CalcError, Result};
use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Volume and surface area of a right circular cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cylinder {
    /// Radius of the base.
    pub radius: f64,
    /// Height.
    pub height: f64,
    /// `πr²h`.
    pub volume: f64,
    /// `2πrh`.
    pub lateral_area: f64,
    /// `2πr(r + h)`.
    pub surface_area: f64,
}

impl Cylinder {
    /// Measures a cylinder.
    pub fn new(radius: f64, height: f64) -> Result<Self> {
        let radius = validate::positive("radius", radius)?;
        let height = validate::positive("height", height)?;
        let volume = validate::finite_result("volume", PI * radius * radius * height)?;
        Ok(Self {
            radius,
            height,
            volume,
            lateral_area: 2.0 * PI * radius * height,
            surface_area: 2.0 * PI * radius * (radius + height),
        })
    }
}

/// Volume and surface area of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sphere {
    /// Radius.
    pub radius: f64,
    /// `4/3·πr³`.
    pub volume: f64,
    /// `4πr²`.
    pub surface_area: f64,
}

impl Sphere {
    /// Measures a sphere.
    pub fn new(radius: f64) -> Result<Self> {
        let radius = validate::positive("radius", radius)?;
        Ok(Self {
            radius,
            volume: validate::finite_result("volume", 4.0 / 3.0 * PI * radius.powi(3))?,
            surface_area: 4.0 * PI * radius * radius,
        })
    }
}

/// A solid with its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Solid {
    /// Cube with edge `side`.
    Cube {
        /// Edge length.
        side: f64,
    },
    /// Box with three edge lengths.
    RectangularPrism {
        /// Length.
        length: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Right circular cylinder.
    Cylinder {
        /// Base radius.
        radius: f64,
        /// Height.
        height: f64,
    },
    /// Sphere.
    Sphere {
        /// Radius.
        radius: f64,
    },
    /// Right circular cone.
    Cone {
        /// Base radius.
        radius: f64,
        /// Height.
        height: f64,
    },
}

impl Solid {
    /// The shape tag of this solid.
    pub fn kind(&self) -> SolidKind {
        match self {
            Solid::Cube { .. } => SolidKind::Cube,
            Solid::RectangularPrism { .. } => SolidKind::RectangularPrism,
            Solid::Cylinder { .. } => SolidKind::Cylinder,
            Solid::Sphere { .. } => SolidKind::Sphere,
            Solid::Cone { .. } => SolidKind::Cone,
        }
    }

    /// Volume. Every dimension must be strictly positive.
    pub fn volume(&self) -> Result<f64> {
        let v = match *self {
            Solid::Cube { side } => validate::positive("side", side)?.powi(3),
            Solid::RectangularPrism {
                length,
                width,
                height,
            } => {
                validate::positive("length", length)?
                    * validate::positive("width", width)?
                    * validate::positive("height", height)?
            }
            Solid::Cylinder { radius, height } => Cylinder::new(radius, height)?.volume,
            Solid::Sphere { radius } => Sphere::new(radius)?.volume,
            Solid::Cone { radius, height } => {
                let r = validate::positive("radius", radius)?;
                PI * r * r * validate::positive("height", height)? / 3.0
            }
        };
        validate::finite_result("volume", v)
    }
}

/// Shape tag for [`Solid`], parsed from strings such as `"cube"` or `"rectangular-prism"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolidKind {
    /// `cube`: one dimension (side).
    Cube,
    /// `rectangular-prism`: length, width, height.
    RectangularPrism,
    /// `cylinder`: radius, height.
    Cylinder,
    /// `sphere`: radius.
    Sphere,
    /// `cone`: radius, height.
    Cone,
}

impl SolidKind {
    /// Every tag.
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Cube,
        SolidKind::RectangularPrism,
        SolidKind::Cylinder,
        SolidKind::Sphere,
        SolidKind::Cone,
    ];

    /// Canonical tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            SolidKind::Cube => "cube",
            SolidKind::RectangularPrism => "rectangular-prism",
            SolidKind::Cylinder => "cylinder",
            SolidKind::Sphere => "sphere",
            SolidKind::Cone => "cone",
        }
    }

    /// Names of the dimensions [`SolidKind::with_dimensions`] expects, in order.
    pub const fn dimensions(self) -> &'static [&'static str] {
        match self {
            SolidKind::Cube => &["side"],
            SolidKind::RectangularPrism => &["length", "width", "height"],
            SolidKind::Cylinder | SolidKind::Cone => &["radius", "height"],
            SolidKind::Sphere => &["radius"],
        }
    }

    /// Pairs this tag with positional dimensions.
    ///
    /// A wrong number of dimensions is a [`CalcError::Configuration`]; the values themselves are checked by
    /// [`Solid::volume`].
    pub fn with_dimensions(self, dims: &[f64]) -> Result<Solid> {
        let expected = self.dimensions();
        if dims.len() != expected.len() {
            return Err(CalcError::configuration(format!(
                "{self} takes {} dimension(s) ({}), got {}",
                expected.len(),
                expected.join(", "),
                dims.len()
            )));
        }
        Ok(match self {
            SolidKind::Cube => Solid::Cube { side: dims[0] },
            SolidKind::RectangularPrism => Solid::RectangularPrism {
                length: dims[0],
                width: dims[1],
                height: dims[2],
            },
            SolidKind::Cylinder => Solid::Cylinder {
                radius: dims[0],
                height: dims[1],
            },
            SolidKind::Sphere => Solid::Sphere { radius: dims[0] },
            SolidKind::Cone => Solid::Cone {
                radius: dims[0],
                height: dims[1],
            },
        })
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolidKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "cube" => Ok(SolidKind::Cube),
            "rectangular-prism" | "box" | "cuboid" => Ok(SolidKind::RectangularPrism),
            "cylinder" => Ok(SolidKind::Cylinder),
            "sphere" => Ok(SolidKind::Sphere),
            "cone" => Ok(SolidKind::Cone),
            other => Err(CalcError::configuration(format!("unknown shape '{other}'"))),
        }
    }
}

/// Volume by shape tag, for callers that hold the shape as a string.
///
/// ```rust
/// use calckit::geometry::volume_by_tag;
///
/// assert_eq!(volume_by_tag("cube", &[3.0]).unwrap(), 27.0);
/// assert!(volume_by_tag("torus", &[1.0, 2.0]).is_err());
/// ```
pub fn volume_by_tag(tag: &str, dims: &[f64]) -> Result<f64> {
    let kind: SolidKind = tag.parse()?;
    log::debug!("volume dispatch: {kind} {dims:?}");
    kind.with_dimensions(dims)?.volume()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_and_sphere() {
        let c = Cylinder::new(1.0, 2.0).unwrap();
        assert_relative_eq!(c.volume, 2.0 * PI);
        assert_relative_eq!(c.surface_area, 6.0 * PI);

        let s = Sphere::new(3.0).unwrap();
        assert_relative_eq!(s.volume, 36.0 * PI, max_relative = 1e-12);
        assert_relative_eq!(s.surface_area, 36.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn every_solid_volume() {
        assert_eq!(Solid::Cube { side: 2.0 }.volume().unwrap(), 8.0);
        let prism = Solid::RectangularPrism {
            length: 2.0,
            width: 3.0,
            height: 4.0,
        };
        assert_eq!(prism.volume().unwrap(), 24.0);
        let cone = Solid::Cone {
            radius: 3.0,
            height: 4.0,
        };
        assert_relative_eq!(cone.volume().unwrap(), 12.0 * PI, max_relative = 1e-12);
    }

    #[test]
    fn invalid_dimensions_are_validation_errors() {
        let err = Solid::Sphere { radius: 0.0 }.volume().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn tags_parse_and_round_trip() {
        for kind in SolidKind::ALL {
            assert_eq!(kind.as_str().parse::<SolidKind>().unwrap(), kind);
        }
        assert_eq!("Rectangular Prism".parse::<SolidKind>().unwrap(), SolidKind::RectangularPrism);
    }

    #[test]
    fn unknown_tag_and_wrong_arity_are_configuration_errors() {
        assert_eq!(
            volume_by_tag("pyramid", &[1.0]).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            volume_by_tag("cylinder", &[1.0]).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_relative_eq!(volume_by_tag("cylinder", &[1.0, 1.0]).unwrap(), PI);
    }
}
