use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use cc_paydown_rs::{
    calendar, create_payment_schedule, report, sources, Money, PlannerConfig, Rate,
    SafeTimeProvider, TimeSource,
};

#[derive(Parser)]
#[command(
    name = "cc-paydown",
    version,
    about = "Credit card debt paydown planner using the debt snowball method",
    long_about = "Builds a month-by-month payment plan that pays minimums on every \
                  card and sends the rest of the budget at the smallest balance, \
                  rolling each cleared card's payment onto the next one."
)]
struct Cli {
    /// CSV or JSON file containing credit card details
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Monthly budget for credit card payments
    #[arg(short, long)]
    budget: Option<Decimal>,

    /// Save the card data to a JSON file for future runs
    #[arg(short, long, value_name = "FILE")]
    save_to_file: Option<PathBuf>,

    /// Show a calendar of payment due dates for the current month
    #[arg(short, long)]
    calendar: bool,

    /// Show the due-date calendar for a specific month
    #[arg(long, value_name = "YYYY-MM")]
    calendar_month: Option<String>,

    /// APR applied to cards that do not specify one
    #[arg(long, value_name = "PERCENT", default_value = "18.0")]
    default_apr: Decimal,

    /// Always print the month-by-month schedule
    #[arg(short, long)]
    detailed: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let config =
        PlannerConfig::default().with_default_apr(Rate::from_percentage(cli.default_apr));

    println!("Credit Card Debt Paydown Planner");
    println!("{}", report::double_separator(40));
    println!("Creates a payment plan with the debt snowball method");
    println!("(paying off smallest balances first).");

    let cards = match &cli.file {
        Some(path) => {
            println!("\nReading credit card data from {}", path.display());
            let cards = sources::load_cards(path, &config)?;
            println!("Loaded {} credit cards from file.", cards.len());
            cards
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            sources::collect_cards(&mut input, &mut output, &config)?
        }
    };
    if cards.is_empty() {
        anyhow::bail!("no credit cards entered");
    }

    // calendar-only mode
    if cli.calendar || cli.calendar_month.is_some() {
        let (year, month) = match &cli.calendar_month {
            Some(raw) => calendar::parse_calendar_month(raw)?,
            None => {
                let time = SafeTimeProvider::new(TimeSource::System);
                calendar::current_month(&time)
            }
        };
        let renderer = calendar::default_renderer();
        print!("{}", renderer.render(&cards, year, month)?);
        return Ok(());
    }

    print!("{}", report::card_summary(&cards));

    let required = cards
        .iter()
        .map(|c| c.effective_minimum())
        .fold(Money::ZERO, |acc, m| acc + m);
    let budget = match cli.budget {
        Some(amount) => Money::from_decimal(amount),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            sources::prompt_budget(&mut input, &mut output, required)?
        }
    };

    let schedule = create_payment_schedule(&cards, budget)?;
    print!("{}", report::schedule_overview(&schedule, budget));

    if !schedule.months.is_empty() {
        let show_detail = cli.detailed
            || (io::stdin().is_terminal() && {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut output = io::stdout();
                sources::confirm(&mut input, &mut output, "Show detailed month-by-month schedule?")?
            });
        if show_detail {
            print!("{}", report::detailed_schedule(&schedule));
        }
    }

    if let Some(path) = &cli.save_to_file {
        let saved = sources::save_cards_to_json(&cards, path)?;
        println!("\nCredit card data saved to {}", saved.display());
    }

    Ok(())
}
