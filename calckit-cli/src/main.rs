use anyhow::{Context, Result};
use calckit::config::ToolkitConfig;
use calckit::expr::AngleMode;
use calckit::finance::Compounding;
use calckit::report::LogSink;
use calckit::scalers::{ActivityLevel, DogSize, Sex};
use calckit::temperature::TemperatureScale;
use calckit::FamilyId;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

mod commands;

use commands::Context as RunContext;

/// Unit, finance, geometry and number-theory calculators
#[derive(Debug, Parser)]
#[command(name = "calckit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: calckit.toml in ., config/ or ..)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places, overriding the configuration
    #[arg(long, global = true, value_name = "N")]
    precision: Option<usize>,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert between units of one family (length, weight, speed, data, energy, power, frequency)
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit symbol or name, e.g. km or kilometer
        from: String,
        /// Target unit symbol or name
        to: String,
    },

    /// List the units the converter knows
    Units {
        /// Only this family
        family: Option<FamilyId>,
    },

    /// Convert a temperature between C, F and K
    Temp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: TemperatureScale,
        to: TemperatureScale,
        /// Reject results below absolute zero
        #[arg(long)]
        checked: bool,
    },

    /// Compound interest: A = P(1 + r/n)^(nt)
    Interest {
        principal: f64,
        /// Annual rate as a fraction (0.05 = 5%)
        rate: f64,
        /// Years
        years: f64,
        /// Compounding periods per year
        #[arg(short = 'n', long, default_value_t = 12)]
        periods: u32,
    },

    /// Annual percentage yield of a nominal rate
    Apy {
        /// Nominal annual rate as a fraction
        rate: f64,
        /// Periods per year, or monthly, daily, continuous
        #[arg(short, long, default_value = "monthly", value_parser = parse_compounding)]
        compounding: Compounding,
    },

    /// Future cost and purchasing power under inflation
    Inflation {
        amount: f64,
        /// Annual inflation rate as a fraction
        rate: f64,
        years: f64,
    },

    /// Amortized loan payment and totals
    Loan {
        principal: f64,
        /// Annual rate as a fraction
        rate: f64,
        /// Number of payments
        payments: u32,
        /// Payments per year
        #[arg(long, default_value_t = 12)]
        per_year: u32,
        /// Print the full amortization schedule
        #[arg(long)]
        schedule: bool,
    },

    /// Return on investment, optionally annualized
    Roi {
        invested: f64,
        #[arg(allow_negative_numbers = true)]
        returned: f64,
        /// Holding period in years
        #[arg(long)]
        years: Option<f64>,
    },

    /// Margin and markup for a cost and selling price
    Margin { cost: f64, revenue: f64 },

    /// Add sales tax to a net price, or take it out of a gross one
    Tax {
        amount: f64,
        /// Tax rate as a fraction (0.085 = 8.5%)
        rate: f64,
        /// Treat the amount as tax-inclusive
        #[arg(long)]
        reverse: bool,
    },

    /// Rent a monthly income supports
    Rent {
        /// Gross monthly income
        income: f64,
        /// Existing monthly debt payments
        #[arg(long, default_value_t = 0.0)]
        debts: f64,
    },

    /// Solve a circle from one measurement
    Circle { given: CircleGiven, value: f64 },

    /// Area, perimeter and diagonal of a rectangle
    Rect { length: f64, width: f64 },

    /// Area, side and perimeter of a rhombus from its diagonals
    Rhombus { d1: f64, d2: f64 },

    /// Volume of a solid: cube, rectangular-prism, cylinder, sphere, cone
    Volume {
        shape: String,
        /// Dimensions in the order the shape expects
        #[arg(required = true)]
        dims: Vec<f64>,
    },

    /// Greatest common divisor of a set
    Gcd {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Least common multiple of a set
    Lcm {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Prime factorization
    Factorize {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Exact factorial
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Print only the digit count and trailing zeros
        #[arg(long)]
        summary: bool,
    },

    /// Roots of ax² + bx + c = 0
    Quadratic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },

    /// Pet age in human years
    #[command(subcommand)]
    PetAge(PetCommand),

    /// Basal metabolic rate (and daily expenditure with --activity)
    Bmr {
        /// Weight in kg
        weight: f64,
        /// Height in cm
        height: f64,
        /// Age in years
        age: f64,
        sex: Sex,
        /// sedentary, light, moderate, active, very-active
        #[arg(long)]
        activity: Option<ActivityLevel>,
    },

    /// Body mass index
    Bmi {
        /// Weight (kg, or lb with --imperial)
        weight: f64,
        /// Height (cm, or in with --imperial)
        height: f64,
        #[arg(long)]
        imperial: bool,
    },

    /// Evaluate a scientific expression, e.g. "2sin(pi/6) + sqrt(16)"
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,
        /// radians or degrees, overriding the configuration
        #[arg(long)]
        angle: Option<AngleMode>,
    },
}

#[derive(Debug, Subcommand)]
enum PetCommand {
    /// Cat age
    Cat {
        years: u32,
        #[arg(default_value_t = 0)]
        months: u32,
    },
    /// Dog age
    Dog {
        years: u32,
        #[arg(default_value_t = 0)]
        months: u32,
        /// small, medium, large, giant
        #[arg(long, default_value = "medium")]
        size: DogSize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CircleGiven {
    Radius,
    Diameter,
    Circumference,
    Area,
}

fn parse_compounding(s: &str) -> std::result::Result<Compounding, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "continuous" => Ok(Compounding::Continuous),
        "monthly" => Ok(Compounding::MONTHLY),
        "daily" => Ok(Compounding::DAILY),
        "annually" | "yearly" => Ok(Compounding::Periodic(1)),
        "quarterly" => Ok(Compounding::Periodic(4)),
        other => other
            .parse::<u32>()
            .map(Compounding::Periodic)
            .map_err(|_| format!("expected a number of periods or monthly/daily/continuous, got '{other}'")),
    }
}

fn load_config(path: Option<&Path>) -> Result<ToolkitConfig> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => ToolkitConfig::find_default(),
    };
    match path {
        Some(p) => ToolkitConfig::from_file(&p)
            .with_context(|| format!("Failed to load configuration from {}", p.display())),
        None => {
            log::debug!("no configuration file found, using defaults");
            Ok(ToolkitConfig::default())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(precision) = cli.precision {
        config.display.precision = precision;
        config.validate().context("Invalid --precision")?;
    }

    let ctx = RunContext {
        config: &config,
        sink: &LogSink,
    };
    let rendered = commands::run(&cli.command, &ctx)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendered.json)?);
    } else {
        println!("{}", rendered.text);
    }
    Ok(())
}
