//! Runs one parsed command and renders its result.

use crate::{CircleGiven, Command, PetCommand};
use anyhow::{Context as _, Result};
use calckit::config::ToolkitConfig;
use calckit::finance::{self, LoanTerms};
use calckit::geometry::{self, Circle, CircleInput, Rectangle, Rhombus};
use calckit::numtheory::{self, QuadraticRoots};
use calckit::report::{observe, EventSink};
use calckit::scalers::{self, Body};
use calckit::temperature;
use calckit::{expr, registry, ErrorKind, FamilyId};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Write as _;

/// What a command needs besides its own arguments.
pub struct Context<'a> {
    pub config: &'a ToolkitConfig,
    pub sink: &'a dyn EventSink,
}

/// A result in both output forms.
#[derive(Debug)]
pub struct Rendered {
    pub text: String,
    pub json: Value,
}

impl Rendered {
    fn new<T: Serialize>(value: &T, text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            json: serde_json::to_value(value).context("Failed to serialize result")?,
        })
    }
}

impl Context<'_> {
    /// Reports `result` to the sink and attaches the calculator name to an error.
    fn calc<T, E>(&self, calculator: &str, result: std::result::Result<T, E>) -> Result<T>
    where
        E: std::error::Error + Send + Sync + 'static,
        for<'e> &'e E: Into<ErrorKind>,
    {
        observe(self.sink, calculator, result).with_context(|| format!("{calculator} could not be computed"))
    }

    fn num(&self, x: f64) -> String {
        format!("{:.*}", self.config.display.precision, x)
    }

    fn pct(&self, fraction: f64) -> String {
        format!("{:.*}%", self.config.display.precision.min(4), fraction * 100.0)
    }
}

pub fn run(command: &Command, ctx: &Context<'_>) -> Result<Rendered> {
    log::debug!("running {command:?}");
    match command {
        Command::Convert { value, from, to } => {
            let result = ctx.calc("convert", registry::convert(*value, from, to))?;
            Rendered::new(
                &json!({ "value": value, "from": from, "to": to, "result": result }),
                format!("{} {from} = {} {to}", value, ctx.num(result)),
            )
        }

        Command::Units { family } => {
            let families: Vec<FamilyId> = match family {
                Some(f) => vec![*f],
                None => FamilyId::ALL.to_vec(),
            };
            let mut text = String::new();
            let mut listing = serde_json::Map::new();
            for id in families {
                let table = registry::table(id);
                let _ = writeln!(text, "{id} (base {})", table.base_symbol());
                for entry in table.entries() {
                    let _ = writeln!(text, "  {:<8} {:<28} {}", entry.symbol, entry.name, entry.factor);
                }
                listing.insert(id.to_string(), serde_json::to_value(table.entries())?);
            }
            Rendered::new(&listing, text.trim_end())
        }

        Command::Temp {
            value,
            from,
            to,
            checked,
        } => {
            let result = if *checked {
                temperature::convert_temperature_checked(*value, *from, *to)
            } else {
                temperature::convert_temperature(*value, *from, *to)
            };
            let result = ctx.calc("temperature", result)?;
            Rendered::new(
                &json!({ "value": value, "from": from, "to": to, "result": result }),
                format!("{value} {from} = {} {to}", ctx.num(result)),
            )
        }

        Command::Interest {
            principal,
            rate,
            years,
            periods,
        } => {
            let ci = ctx.calc(
                "compound-interest",
                finance::compound_interest(*principal, *rate, *periods, *years),
            )?;
            Rendered::new(
                &ci,
                format!(
                    "Future value: {}\nInterest earned: {}",
                    ctx.num(ci.future_value),
                    ctx.num(ci.interest)
                ),
            )
        }

        Command::Apy { rate, compounding } => {
            let apy = ctx.calc("apy", finance::apy(*rate, *compounding))?;
            Rendered::new(
                &json!({ "nominal_rate": rate, "compounding": compounding, "apy": apy }),
                format!("APY: {}", ctx.pct(apy)),
            )
        }

        Command::Inflation { amount, rate, years } => {
            let future_cost = ctx.calc("inflation", finance::inflation_future_cost(*amount, *rate, *years))?;
            let purchasing_power = ctx.calc("inflation", finance::purchasing_power(*amount, *rate, *years))?;
            Rendered::new(
                &json!({ "future_cost": future_cost, "purchasing_power": purchasing_power }),
                format!(
                    "Future cost: {}\nPurchasing power: {}",
                    ctx.num(future_cost),
                    ctx.num(purchasing_power)
                ),
            )
        }

        Command::Loan {
            principal,
            rate,
            payments,
            per_year,
            schedule,
        } => run_loan(ctx, *principal, *rate, *payments, *per_year, *schedule),

        Command::Roi {
            invested,
            returned,
            years,
        } => {
            let roi = ctx.calc("roi", finance::roi(*invested, *returned))?;
            let annualized = years
                .map(|y| ctx.calc("roi", finance::annualized_roi(*invested, *returned, y)))
                .transpose()?;
            let mut text = format!("ROI: {}", ctx.pct(roi));
            if let Some(a) = annualized {
                let _ = write!(text, "\nAnnualized: {}", ctx.pct(a));
            }
            Rendered::new(&json!({ "roi": roi, "annualized": annualized }), text)
        }

        Command::Margin { cost, revenue } => {
            let b = ctx.calc("margin", finance::breakdown(*cost, *revenue))?;
            Rendered::new(
                &b,
                format!(
                    "Profit: {}\nMargin: {}\nMarkup: {}",
                    ctx.num(b.profit),
                    ctx.pct(b.margin),
                    ctx.pct(b.markup)
                ),
            )
        }

        Command::Tax {
            amount,
            rate,
            reverse,
        } => {
            let tax = if *reverse {
                finance::remove_sales_tax(*amount, *rate)
            } else {
                finance::add_sales_tax(*amount, *rate)
            };
            let tax = ctx.calc("sales-tax", tax)?;
            Rendered::new(
                &tax,
                format!(
                    "Net: {}\nTax: {}\nGross: {}",
                    ctx.num(tax.net),
                    ctx.num(tax.tax),
                    ctx.num(tax.gross)
                ),
            )
        }

        Command::Rent { income, debts } => {
            let r = ctx.calc("rent", finance::rent_affordability(*income, *debts))?;
            Rendered::new(
                &r,
                format!(
                    "Recommended rent: {}\nMaximum by debt-to-income: {}\nAnnual income needed: {}",
                    ctx.num(r.recommended_rent),
                    ctx.num(r.max_rent_by_dti),
                    ctx.num(r.annual_income_needed)
                ),
            )
        }

        Command::Circle { given, value } => {
            let input = match given {
                CircleGiven::Radius => CircleInput::Radius(*value),
                CircleGiven::Diameter => CircleInput::Diameter(*value),
                CircleGiven::Circumference => CircleInput::Circumference(*value),
                CircleGiven::Area => CircleInput::Area(*value),
            };
            let c = ctx.calc("circle", Circle::solve(input))?;
            Rendered::new(
                &c,
                format!(
                    "Radius: {}\nDiameter: {}\nCircumference: {}\nArea: {}",
                    ctx.num(c.radius),
                    ctx.num(c.diameter),
                    ctx.num(c.circumference),
                    ctx.num(c.area)
                ),
            )
        }

        Command::Rect { length, width } => {
            let r = ctx.calc("rectangle", Rectangle::new(*length, *width))?;
            Rendered::new(
                &r,
                format!(
                    "Area: {}\nPerimeter: {}\nDiagonal: {}",
                    ctx.num(r.area),
                    ctx.num(r.perimeter),
                    ctx.num(r.diagonal)
                ),
            )
        }

        Command::Rhombus { d1, d2 } => {
            let r = ctx.calc("rhombus", Rhombus::from_diagonals(*d1, *d2))?;
            Rendered::new(
                &r,
                format!(
                    "Area: {}\nSide: {}\nPerimeter: {}",
                    ctx.num(r.area),
                    ctx.num(r.side),
                    ctx.num(r.perimeter)
                ),
            )
        }

        Command::Volume { shape, dims } => {
            let volume = ctx.calc("volume", geometry::volume_by_tag(shape, dims))?;
            Rendered::new(
                &json!({ "shape": shape, "dimensions": dims, "volume": volume }),
                format!("Volume: {}", ctx.num(volume)),
            )
        }

        Command::Gcd { values } => {
            let g = ctx.calc("gcd", numtheory::gcd_of(values))?;
            Rendered::new(&json!({ "values": values, "gcd": g }), format!("GCD: {g}"))
        }

        Command::Lcm { values } => {
            let l = ctx.calc("lcm", numtheory::lcm_of(values))?;
            Rendered::new(&json!({ "values": values, "lcm": l }), format!("LCM: {l}"))
        }

        Command::Factorize { n } => {
            let f = ctx.calc("factorize", numtheory::factorize_with(*n, &ctx.config.limits))?;
            let text = if f.is_prime() {
                format!("{n} is prime")
            } else {
                format!("{n} = {f}")
            };
            Rendered::new(&f, text)
        }

        Command::Factorial { n, summary } => {
            let value = ctx.calc("factorial", numtheory::factorial_with(*n, &ctx.config.limits))?;
            let digits = numtheory::digit_count(&value);
            let zeros = numtheory::factorial_trailing_zeros(n.unsigned_abs());
            let value = value.to_string();
            let text = if *summary {
                format!("{n}! has {digits} digits and {zeros} trailing zeros")
            } else {
                format!("{n}! = {value}")
            };
            Rendered::new(
                &json!({ "n": n, "value": value, "digits": digits, "trailing_zeros": zeros }),
                text,
            )
        }

        Command::Quadratic { a, b, c } => {
            let roots = ctx.calc("quadratic", numtheory::solve_quadratic(*a, *b, *c))?;
            let text = match roots {
                QuadraticRoots::TwoReal { x1, x2 } => format!("x1 = {}\nx2 = {}", ctx.num(x1), ctx.num(x2)),
                QuadraticRoots::Repeated { x } => format!("x = {} (repeated root)", ctx.num(x)),
                QuadraticRoots::Complex { re, im } => format!("x = {} ± {}i", ctx.num(re), ctx.num(im)),
                QuadraticRoots::Linear { x } => format!("x = {} (linear)", ctx.num(x)),
                QuadraticRoots::NoSolution => "no solution".to_string(),
            };
            Rendered::new(&roots, text)
        }

        Command::PetAge(PetCommand::Cat { years, months }) => {
            let age = ctx.calc("cat-age", scalers::cat_age(*years, *months))?;
            Rendered::new(
                &json!({ "pet": "cat", "years": years, "months": months, "human_years": age }),
                format!("Human age: {}", ctx.num(age)),
            )
        }

        Command::PetAge(PetCommand::Dog { years, months, size }) => {
            let age = ctx.calc("dog-age", scalers::dog_age(*years, *months, *size))?;
            Rendered::new(
                &json!({ "pet": "dog", "size": size, "years": years, "months": months, "human_years": age }),
                format!("Human age: {}", ctx.num(age)),
            )
        }

        Command::Bmr {
            weight,
            height,
            age,
            sex,
            activity,
        } => {
            let body = ctx.calc("bmr", Body::new(*weight, *height, *age, *sex))?;
            let bmr = scalers::bmr(&body);
            let tdee = activity
                .map(|level| ctx.calc("tdee", scalers::tdee(bmr.mifflin_st_jeor, level)))
                .transpose()?;
            let mut text = format!(
                "BMR (Mifflin-St Jeor): {} kcal/day\nBMR (Harris-Benedict): {} kcal/day",
                ctx.num(bmr.mifflin_st_jeor),
                ctx.num(bmr.harris_benedict)
            );
            if let Some(t) = tdee {
                let _ = write!(text, "\nDaily expenditure: {} kcal/day", ctx.num(t));
            }
            Rendered::new(&json!({ "bmr": bmr, "tdee": tdee }), text)
        }

        Command::Bmi {
            weight,
            height,
            imperial,
        } => {
            let bmi = if *imperial {
                scalers::bmi_imperial(*weight, *height)
            } else {
                scalers::bmi_metric(*weight, *height)
            };
            let bmi = ctx.calc("bmi", bmi)?;
            Rendered::new(
                &bmi,
                format!("BMI: {} ({})", ctx.num(bmi.value), bmi.category),
            )
        }

        Command::Eval { expression, angle } => {
            let mode = angle.unwrap_or(ctx.config.expression.angle_mode);
            let value = ctx.calc("expression", expr::evaluate(expression, mode))?;
            Rendered::new(
                &json!({ "expression": expression, "angle_mode": mode, "value": value }),
                ctx.num(value),
            )
        }
    }
}

fn run_loan(
    ctx: &Context<'_>,
    principal: f64,
    rate: f64,
    payments: u32,
    per_year: u32,
    with_schedule: bool,
) -> Result<Rendered> {
    let terms = ctx.calc("loan", LoanTerms::new(principal, rate, payments, per_year))?;
    let summary = ctx.calc("loan", terms.summary())?;
    let mut text = format!(
        "Payment: {}\nPayments: {}\nTotal paid: {}\nTotal interest: {}",
        ctx.num(summary.payment),
        summary.payments,
        ctx.num(summary.total_paid),
        ctx.num(summary.total_interest)
    );

    let schedule = if with_schedule {
        let rows = ctx.calc("amortization", terms.schedule())?;
        let _ = write!(
            text,
            "\n\n{:>6} {:>14} {:>14} {:>14} {:>16}",
            "period", "payment", "principal", "interest", "balance"
        );
        for row in &rows {
            let _ = write!(
                text,
                "\n{:>6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                row.period, row.payment, row.principal, row.interest, row.balance
            );
        }
        Some(rows)
    } else {
        None
    };

    Rendered::new(&json!({ "summary": summary, "schedule": schedule }), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calckit::report::{CalcEvent, NullSink, Outcome};
    use calckit::scalers::{ActivityLevel, Sex};
    use std::cell::RefCell;

    fn run_default(command: Command) -> Result<Rendered> {
        let config = ToolkitConfig::default();
        run(
            &command,
            &Context {
                config: &config,
                sink: &NullSink,
            },
        )
    }

    #[test]
    fn test_convert_renders_text_and_json() {
        let out = run_default(Command::Convert {
            value: 10.0,
            from: "km".into(),
            to: "mi".into(),
        })
        .unwrap();
        assert_eq!(out.text, "10 km = 6.213712 mi");
        assert_eq!(out.json["to"], "mi");
    }

    #[test]
    fn test_loan_with_schedule() {
        let out = run_default(Command::Loan {
            principal: 10_000.0,
            rate: 0.06,
            payments: 60,
            per_year: 12,
            schedule: true,
        })
        .unwrap();
        assert!(out.text.starts_with("Payment: 193.32"));
        assert_eq!(out.json["schedule"].as_array().unwrap().len(), 60);
        assert_eq!(out.json["summary"]["payments"], 60);
    }

    #[test]
    fn test_quadratic_json_is_tagged() {
        let out = run_default(Command::Quadratic { a: 1.0, b: 0.0, c: 1.0 }).unwrap();
        assert_eq!(out.json["kind"], "complex");
        assert_eq!(out.text, "x = 0.000000 ± 1.000000i");
    }

    #[test]
    fn test_factorize_prime_and_composite() {
        assert_eq!(run_default(Command::Factorize { n: 17 }).unwrap().text, "17 is prime");
        assert_eq!(run_default(Command::Factorize { n: 84 }).unwrap().text, "84 = 2^2 × 3 × 7");
    }

    #[test]
    fn test_factorial_respects_configured_limit() {
        let mut config = ToolkitConfig::default();
        config.limits.max_factorial = 10;
        let ctx = Context {
            config: &config,
            sink: &NullSink,
        };
        assert!(run(&Command::Factorial { n: 10, summary: false }, &ctx).is_ok());
        assert!(run(&Command::Factorial { n: 11, summary: false }, &ctx).is_err());
    }

    #[test]
    fn test_bmr_without_activity() {
        let out = run_default(Command::Bmr {
            weight: 70.0,
            height: 175.0,
            age: 30.0,
            sex: Sex::Male,
            activity: None,
        })
        .unwrap();
        assert!(out.text.contains("1648.750000"));
        assert!(!out.text.contains("Daily expenditure"));
        assert!(out.json["tdee"].is_null());
    }

    #[test]
    fn test_bmr_with_activity() {
        let out = run_default(Command::Bmr {
            weight: 70.0,
            height: 175.0,
            age: 30.0,
            sex: Sex::Male,
            activity: Some(ActivityLevel::Moderate),
        })
        .unwrap();
        assert!(out
            .text
            .ends_with("Daily expenditure: 2555.562500 kcal/day"));
        let tdee = out.json["tdee"].as_f64().unwrap();
        assert!((tdee - 1648.75 * 1.55).abs() < 1e-9);
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<CalcEvent>>);

    impl EventSink for Recorder {
        fn record(&self, event: &CalcEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_failures_are_reported_with_context() {
        let config = ToolkitConfig::default();
        let sink = Recorder::default();
        let ctx = Context {
            config: &config,
            sink: &sink,
        };

        let err = run(
            &Command::Eval {
                expression: "log(0)".into(),
                angle: None,
            },
            &ctx,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "expression could not be computed");

        let events = sink.0.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].calculator, "expression");
        assert_eq!(events[0].outcome, Outcome::Failed(ErrorKind::Domain));
    }
}
