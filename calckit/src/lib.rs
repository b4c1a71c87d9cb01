//! Numeric formula toolkit.
//!
//! `calckit` is the user-facing crate in this workspace. It re-exports the unit engine from `calckit-core` and adds
//! independent families of calculators:
//!
//! - [`finance`]: compound interest, loans and amortization, ROI, pricing, sales tax, rent affordability.
//! - [`geometry`]: circles, rectangles, rhombi and common solids.
//! - [`numtheory`]: GCD/LCM, prime factorization, big factorials, quadratic roots.
//! - [`scalers`]: pet age, BMR/TDEE and BMI.
//! - [`expr`]: a safe scientific-expression parser and evaluator.
//!
//! Every calculator is a pure function over validated inputs. Bad inputs come back as a [`CalcError`]; no public
//! function returns NaN or an infinity as a "result".
//!
//! # Quick start
//!
//! ```rust
//! use calckit::finance::LoanTerms;
//! use calckit::registry;
//!
//! let miles = registry::convert(10.0, "km", "mi").unwrap();
//! assert!((miles - 6.213711922373339).abs() < 1e-12);
//!
//! let loan = LoanTerms::from_years(200_000.0, 0.06, 30, 12).unwrap();
//! assert!((loan.payment().unwrap() - 1199.10).abs() < 0.01);
//! ```
//!
//! Typed units convert with the family checked at compile time:
//!
//! ```rust
//! use calckit::weight::{Kilogram, Pounds};
//!
//! let kg = Pounds::new(220.0).to::<Kilogram>();
//! assert!((kg.value() - 99.79032140000001).abs() < 1e-9);
//! ```
//!
//! # Reporting
//!
//! Front ends that want usage telemetry pass results through [`report::observe`] with an [`report::EventSink`].
//! The sink only sees what ran and how it ended.
//!
//! # Configuration
//!
//! [`config::ToolkitConfig`] reads `calckit.toml` for input ceilings, the default angle mode and display precision.
#![forbid(unsafe_code)]

pub use calckit_core::*;

pub mod config;
pub mod expr;
pub mod finance;
pub mod geometry;
pub mod numtheory;
pub mod report;
pub mod scalers;
