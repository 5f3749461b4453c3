use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use irpef_core::{
    EmploymentType, ForfettarioInput, InpsPath, OrdinaryTaxInput, QUICK_COEFFICIENTS,
    calculate_forfettario, calculate_ordinary,
};

mod input;
mod render;

use input::{parse_amount, parse_optional_amount};
use render::{ForfettarioReport, OrdinaryReport};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Italian income tax estimator.
///
/// Computes a full liability breakdown under either the ordinary
/// progressive regime (IRPEF, regional/municipal surtaxes, INPS
/// contributions, credits) or the flat-rate forfettario regime.
///
/// Amounts and rates accept both `.` and `,` as decimal separators;
/// empty fields default to zero.
#[derive(Debug, Parser)]
#[command(name = "irpef")]
struct Cli {
    /// Emit the breakdown as JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ordinary progressive regime (employees, freelancers, self-employed).
    Ordinary(OrdinaryArgs),
    /// Flat-rate forfettario regime for small businesses and freelancers.
    Forfettario(ForfettarioArgs),
}

#[derive(Debug, Args)]
struct OrdinaryArgs {
    /// Annual gross income in EUR.
    #[arg(long)]
    gross_income: String,

    /// Employment category: employee, freelancer_gestione_separata or
    /// self_employed.
    #[arg(long, default_value = "employee")]
    employment_type: String,

    /// INPS rate override, percentage in [0, 100]. Defaults by category.
    #[arg(long)]
    inps_rate: Option<String>,

    /// Deductible pension contributions in EUR.
    #[arg(long, default_value = "")]
    pension_contributions: String,

    /// Other tax credits (detrazioni) in EUR.
    #[arg(long, default_value = "")]
    other_credits: String,

    /// Regional surtax rate percentage (e.g. 1.73).
    #[arg(long, default_value = "")]
    regional_rate: String,

    /// Municipal surtax rate percentage (e.g. 0.8).
    #[arg(long, default_value = "")]
    municipal_rate: String,

    /// Apply the approximate employee tax credit.
    #[arg(long)]
    employee_credit: bool,

    /// Apply the 1,200 EUR trattamento integrativo.
    #[arg(long)]
    trattamento_integrativo: bool,
}

#[derive(Debug, Args)]
struct ForfettarioArgs {
    /// Annual revenues in EUR.
    #[arg(long, default_value = "")]
    revenues: String,

    /// Revenue coefficient percentage (e.g. 78).
    #[arg(long, default_value = "")]
    coefficient: String,

    /// Contribution path: gestione_separata (or gs) /
    /// ivs_artigiani_commercianti (or ivs).
    #[arg(long, default_value = "gestione_separata")]
    inps_path: String,

    /// Gestione Separata rate override percentage.
    #[arg(long)]
    gs_rate: Option<String>,

    /// IVS annual contributions in EUR (default 4000).
    #[arg(long)]
    ivs_contributions: Option<String>,

    /// Apply the 35% IVS contribution reduction.
    #[arg(long)]
    ivs_35_reduction: bool,

    /// Use the 5% startup substitute-tax rate instead of 15%.
    #[arg(long)]
    startup_five_pct: bool,

    /// Print the common revenue coefficients and exit.
    #[arg(long)]
    list_coefficients: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── subcommands ─────────────────────────────────────────────────────────────

fn run_ordinary(
    args: OrdinaryArgs,
    json: bool,
) -> anyhow::Result<()> {
    let Some(employment_type) = EmploymentType::parse(&args.employment_type) else {
        bail!(
            "unknown employment type '{}' (expected employee, \
             freelancer_gestione_separata or self_employed)",
            args.employment_type
        );
    };

    let input = OrdinaryTaxInput {
        gross_income: parse_amount(&args.gross_income).context("--gross-income")?,
        employment_type,
        inps_rate_pct: parse_optional_amount(args.inps_rate.as_deref()).context("--inps-rate")?,
        deductible_pension_contributions: parse_amount(&args.pension_contributions)
            .context("--pension-contributions")?,
        other_tax_credits: parse_amount(&args.other_credits).context("--other-credits")?,
        regional_rate_pct: parse_amount(&args.regional_rate).context("--regional-rate")?,
        municipal_rate_pct: parse_amount(&args.municipal_rate).context("--municipal-rate")?,
        apply_employee_credit: args.employee_credit,
        trattamento_integrativo_eligible: args.trattamento_integrativo,
    };

    let breakdown = calculate_ordinary(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", OrdinaryReport(&breakdown));
    }
    Ok(())
}

fn run_forfettario(
    args: ForfettarioArgs,
    json: bool,
) -> anyhow::Result<()> {
    if args.list_coefficients {
        for coefficient in QUICK_COEFFICIENTS {
            println!("{:<24}{}%", coefficient.label, coefficient.value_pct);
        }
        return Ok(());
    }

    let inps_path = match args.inps_path.as_str() {
        "gestione_separata" | "gs" => InpsPath::GestioneSeparata {
            rate_override: parse_optional_amount(args.gs_rate.as_deref()).context("--gs-rate")?,
        },
        "ivs_artigiani_commercianti" | "ivs" => InpsPath::IvsArtigianiCommercianti {
            annual_contributions: parse_optional_amount(args.ivs_contributions.as_deref())
                .context("--ivs-contributions")?,
            apply_35_reduction: args.ivs_35_reduction,
        },
        other => bail!(
            "unknown INPS path '{other}' (expected gestione_separata or \
             ivs_artigiani_commercianti)"
        ),
    };

    let input = ForfettarioInput {
        revenues: parse_amount(&args.revenues).context("--revenues")?,
        coefficient_pct: parse_amount(&args.coefficient).context("--coefficient")?,
        inps_path,
        startup_five_pct: args.startup_five_pct,
    };

    let breakdown = calculate_forfettario(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print!("{}", ForfettarioReport(&breakdown));
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Ordinary(args) => run_ordinary(args, cli.json),
        Command::Forfettario(args) => run_forfettario(args, cli.json),
    }
}
