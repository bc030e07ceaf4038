use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::calculator::{calculate, CalculationResult};
use crate::form::{FormValues, MortgageType};
use crate::ui::group_thousands;
use crate::validate::validate;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Mortgage repayment calculator.
///
/// Without a subcommand, opens the interactive form.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Currency symbol shown next to amounts.
    #[arg(long, default_value = "₹", global = true)]
    pub currency: String,

    /// Append log records to this file while the form is open.
    /// Level is taken from `RUST_LOG` (default `info`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute repayments once and print them.
    Quote(QuoteArgs),
}

#[derive(Debug, clap::Args)]
pub struct QuoteArgs {
    /// Amount borrowed.
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// Term in whole years.
    #[arg(long, allow_hyphen_values = true)]
    pub years: String,

    /// Annual interest rate in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub rate: String,

    /// Repayment type.
    #[arg(long = "type", value_enum)]
    pub mortgage_type: TypeArg,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeArg {
    Repayment,
    InterestOnly,
}

impl From<TypeArg> for MortgageType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Repayment => MortgageType::Repayment,
            TypeArg::InterestOnly => MortgageType::InterestOnly,
        }
    }
}

// ─── quote ───────────────────────────────────────────────────────────────────

impl QuoteArgs {
    pub fn values(&self) -> FormValues {
        FormValues {
            amount: self.amount.clone(),
            years: self.years.clone(),
            interest_rate: self.rate.clone(),
            mortgage_type: Some(self.mortgage_type.into()),
        }
    }
}

/// Validates and computes a quote, returning the text to print.
pub fn run_quote(args: &QuoteArgs, currency: &str) -> Result<String> {
    let values = args.values();
    let validation = validate(&values);
    if !validation.is_valid {
        let errors = &validation.errors;
        let messages = [
            &errors.amount,
            &errors.years,
            &errors.interest_rate,
            &errors.mortgage_type,
        ]
        .into_iter()
        .filter(|m| !m.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>();
        bail!("{}", messages.join("; "));
    }

    let result = calculate(&values)?;
    tracing::info!(?result, "quote computed");

    if args.json {
        return Ok(serde_json::to_string_pretty(&result)?);
    }
    Ok(format_quote(args.mortgage_type.into(), &result, currency))
}

fn format_quote(kind: MortgageType, result: &CalculationResult, currency: &str) -> String {
    let (monthly_label, total_label) = match kind {
        MortgageType::Repayment => ("Monthly repayment", "Total repayment"),
        MortgageType::InterestOnly => ("Monthly interest", "Total interest"),
    };
    format!(
        "{:<18} {} {}\n{:<18} {} {}",
        format!("{monthly_label}:"),
        currency,
        group_thousands(result.monthly_repayment),
        format!("{total_label}:"),
        currency,
        group_thousands(result.total_repayment),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mortgage-calculator").chain(args.iter().copied()))
            .unwrap()
    }

    fn quote_args(cli: Cli) -> QuoteArgs {
        match cli.command {
            Some(Command::Quote(args)) => args,
            None => panic!("expected quote subcommand"),
        }
    }

    #[test]
    fn no_subcommand_opens_the_form() {
        let cli = parse(&[]);

        assert!(cli.command.is_none());
        assert_eq!(cli.currency, "₹");
    }

    #[test]
    fn quote_prints_labelled_text() {
        let cli = parse(&[
            "quote", "--amount", "120000", "--years", "25", "--rate", "6", "--type", "repayment",
            "--currency", "£",
        ]);
        let currency = cli.currency.clone();

        let output = run_quote(&quote_args(cli), &currency).unwrap();

        assert_eq!(
            output,
            "Monthly repayment: £ 773\nTotal repayment:   £ 231,900"
        );
    }

    #[test]
    fn quote_prints_json() {
        let cli = parse(&[
            "quote", "--amount", "100000", "--years", "10", "--rate", "5", "--type",
            "interest-only", "--json",
        ]);

        let output = run_quote(&quote_args(cli), "$").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["monthlyRepayment"], 417);
        assert_eq!(value["totalRepayment"], 50040);
    }

    #[test]
    fn quote_reports_missing_and_bad_input() {
        let empty = quote_args(parse(&[
            "quote", "--amount", "", "--years", "10", "--rate", "5", "--type", "repayment",
        ]));
        let negative = quote_args(parse(&[
            "quote", "--amount", "1000", "--years", "10", "--rate", "-5", "--type", "repayment",
        ]));

        let empty_err = run_quote(&empty, "$").unwrap_err().to_string();
        let negative_err = run_quote(&negative, "$").unwrap_err().to_string();

        assert_eq!(empty_err, "Please enter a mortgage amount");
        assert_eq!(negative_err, "interest rate cannot be negative");
    }
}
