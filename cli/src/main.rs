use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use study_cost_core_rs::{build_projection, currency_symbol, Catalog, ScenarioParams};

#[derive(Parser, Debug)]
#[command(
    name = "study-cost",
    about = "12-month cash-flow projection for studying abroad."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported countries
    Countries,

    /// List cities for a country
    Cities {
        /// Country name, as listed by `countries`
        country: String,
    },

    /// Project a scenario month by month
    Project(ProjectArgs),
}

#[derive(Args, Debug)]
struct ProjectArgs {
    /// Destination country
    #[arg(long)]
    country: String,

    /// Destination city
    #[arg(long)]
    city: String,

    /// Housing type: single, shared, or dorm
    #[arg(long, default_value = "shared")]
    rent_type: String,

    /// Part-time hours per week; 0 means no job
    #[arg(long, default_value_t = 0.0)]
    hours: f64,

    /// Hourly wage, local currency
    #[arg(long, default_value_t = 0.0)]
    wage: f64,

    /// Savings at the start of September, local currency
    #[arg(long)]
    deposit: f64,

    /// Full-year tuition bill, local currency
    #[arg(long)]
    tuition: f64,

    /// Payment mode: lumpSum or installment
    #[arg(long, default_value = "installment")]
    payment: String,

    /// Print the full projection as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Countries => {
            for country in Catalog::global().countries() {
                println!("{}", country);
            }
        }
        Command::Cities { country } => {
            let catalog = Catalog::global();
            let cities = catalog.cities(&country);
            if cities.is_empty() {
                bail!(
                    "unknown country '{}'; supported countries: {}",
                    country,
                    catalog.countries().join(", ")
                );
            }
            for city in cities {
                println!("{}", city);
            }
        }
        Command::Project(args) => run_projection(args)?,
    }
    Ok(())
}

fn run_projection(args: ProjectArgs) -> Result<()> {
    let params = ScenarioParams {
        country: args.country,
        city: args.city,
        rent_type: args.rent_type,
        has_job: args.hours > 0.0,
        weekly_hours: args.hours,
        hourly_wage: args.wage,
        initial_deposit: args.deposit,
        tuition_total: args.tuition,
        tuition_payment: args.payment,
    };

    let projection = build_projection(params, Catalog::global())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    let scenario = &projection.scenario;
    let summary = &projection.summary;
    let sym = currency_symbol(&scenario.currency);

    println!(
        "{}, {} - {} housing, {} tuition",
        scenario.city,
        scenario.country,
        scenario.rent_type.tag(),
        scenario.tuition_schedule.tag()
    );
    println!("Monthly income:    {}{:.2}", sym, summary.monthly_income);
    println!("Base expense:      {}{:.2}", sym, summary.monthly_base_expense);
    if summary.monthly_tuition_share > 0.0 {
        println!("Tuition share:     {}{:.2}", sym, summary.monthly_tuition_share);
    }

    println!();
    println!(
        "{:<6} {:>14} {:>14} {:>16}",
        "Month", "Income", "Expense", "Balance"
    );
    for row in &projection.ledger {
        println!(
            "{:<6} {:>14.2} {:>14.2} {:>16.2}",
            row.month, row.income, row.expense, row.balance
        );
    }

    println!();
    println!("Final balance:     {}{:.2}", sym, summary.final_balance);
    println!("Minimum balance:   {}{:.2}", sym, summary.min_balance);
    if summary.critical_months.is_empty() {
        println!("The year stays solvent in every month.");
    } else {
        println!(
            "Critical months:   {}",
            summary.critical_months.join(", ")
        );
        println!("Support needed:    {}{:.2}", sym, summary.need_support);
    }

    Ok(())
}
