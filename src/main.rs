//! Financial Calculator CLI
//!
//! Runs a single calculation from the command line. Pass --json to get the
//! result as JSON instead of text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use financial_calculator::{
    calculate_compound_interest, calculate_investment_returns, calculate_loan_payment,
    calculate_profit_margin, calculate_total, Number, DEFAULT_COMPOUNDS_PER_YEAR,
};
use rust_decimal::Decimal;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "fincalc", version, about = "Everyday financial calculations")]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum numbers, optionally scaled by a multiplier
    Total {
        /// Amounts to sum; values with a decimal point are summed exactly
        #[arg(required = true, allow_negative_numbers = true, value_parser = parse_number)]
        numbers: Vec<Number>,

        #[arg(long)]
        multiplier: Option<f64>,
    },
    /// Monthly payment for a fixed-rate loan
    Loan {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Annual rate as a percentage
        #[arg(allow_negative_numbers = true)]
        annual_rate: f64,
        #[arg(allow_negative_numbers = true)]
        years: i32,
    },
    /// Growth of an investment with yearly contributions
    Invest {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        #[arg(allow_negative_numbers = true)]
        annual_contribution: f64,
        /// Annual return as a percentage
        #[arg(allow_negative_numbers = true)]
        annual_rate: f64,
        #[arg(allow_negative_numbers = true)]
        years: i32,
    },
    /// Profit margin as a percentage of revenue
    Margin {
        #[arg(allow_negative_numbers = true)]
        revenue: f64,
        #[arg(allow_negative_numbers = true)]
        costs: f64,
    },
    /// Value after compound interest
    Compound {
        #[arg(allow_negative_numbers = true)]
        principal: f64,
        /// Annual rate as a percentage
        #[arg(allow_negative_numbers = true)]
        rate: f64,
        #[arg(allow_negative_numbers = true)]
        years: i32,
        #[arg(long, default_value_t = DEFAULT_COMPOUNDS_PER_YEAR)]
        compounds_per_year: u32,
    },
    /// Sum 1..=5 with a multiplier of 2.0
    Example,
}

/// Integers stay integers, anything with a decimal point becomes an exact decimal
fn parse_number(raw: &str) -> std::result::Result<Number, String> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::Int(i));
    }
    raw.parse::<Decimal>()
        .map(Number::Decimal)
        .map_err(|e| format!("invalid number '{}': {}", raw, e))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("running {:?}", cli.command);

    match cli.command {
        Command::Total { numbers, multiplier } => {
            let total = calculate_total(Some(&numbers), multiplier)
                .context("Failed to calculate total")?;
            emit(cli.json, json!({ "total": total }), format!("The total is: {}", total));
        }
        Command::Loan {
            principal,
            annual_rate,
            years,
        } => {
            let payment = calculate_loan_payment(principal, annual_rate, years)
                .context("Failed to calculate loan payment")?;
            emit(
                cli.json,
                json!({ "monthly_payment": payment }),
                format!("Monthly payment: ${:.2}", payment),
            );
        }
        Command::Invest {
            principal,
            annual_contribution,
            annual_rate,
            years,
        } => {
            let returns = calculate_investment_returns(principal, annual_contribution, annual_rate, years)
                .context("Failed to calculate investment returns")?;
            emit(
                cli.json,
                serde_json::to_value(returns)?,
                format!(
                    "Total value: ${:.2}\nTotal contributions: ${:.2}\nTotal earnings: ${:.2}",
                    returns.total_value, returns.total_contributions, returns.total_earnings
                ),
            );
        }
        Command::Margin { revenue, costs } => {
            let margin = calculate_profit_margin(revenue, costs)
                .context("Failed to calculate profit margin")?;
            emit(
                cli.json,
                json!({ "profit_margin_pct": margin }),
                format!("Profit margin: {:.2}%", margin),
            );
        }
        Command::Compound {
            principal,
            rate,
            years,
            compounds_per_year,
        } => {
            let value = calculate_compound_interest(principal, rate, years, compounds_per_year)
                .context("Failed to calculate compound interest")?;
            emit(
                cli.json,
                json!({ "final_value": value }),
                format!("Final value: ${:.2}", value),
            );
        }
        Command::Example => {
            let sample_numbers: Vec<Number> = (1..=5).map(Number::from).collect();
            let result = calculate_total(Some(&sample_numbers), Some(2.0))
                .context("Failed to calculate total")?;
            emit(cli.json, json!({ "total": result }), format!("The total is: {}", result));
        }
    }

    Ok(())
}

fn emit(as_json: bool, value: serde_json::Value, text: String) {
    if as_json {
        println!("{}", value);
    } else {
        println!("{}", text);
    }
}
