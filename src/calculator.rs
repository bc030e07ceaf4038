//! Monthly and total repayment for repayment and interest-only mortgages.
//!
//! Inputs come straight from the form as text. Parsing happens here so a
//! value that passed the presence check but isn't a number ends up as a
//! [`CalculationError`] rather than a silent NaN.
//!
//! # Example
//!
//! ```
//! use mortgage_calculator::calculator::calculate;
//! use mortgage_calculator::form::{FormValues, MortgageType};
//!
//! let values = FormValues {
//!     amount: "100000".to_string(),
//!     years: "10".to_string(),
//!     interest_rate: "5".to_string(),
//!     mortgage_type: Some(MortgageType::InterestOnly),
//! };
//!
//! let result = calculate(&values).unwrap();
//! assert_eq!(result.monthly_repayment, 417);
//! assert_eq!(result.total_repayment, 50040);
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::form::{FormValues, MortgageType};

/// Errors raised while turning form text into a repayment figure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("mortgage amount must be a number, got '{0}'")]
    InvalidAmount(String),

    #[error("mortgage term must be a whole number of years, got '{0}'")]
    InvalidTerm(String),

    #[error("interest rate must be a number, got '{0}'")]
    InvalidRate(String),

    #[error("mortgage amount cannot be negative")]
    NegativeAmount,

    #[error("interest rate cannot be negative")]
    NegativeRate,

    #[error("mortgage term must be at least one year")]
    ZeroTerm,

    #[error("mortgage term cannot exceed {} years", MAX_YEARS)]
    TermTooLong,

    #[error("repayment is too large to represent")]
    OutOfRange,
}

/// Longest term whose month count still fits in a `u32`.
pub const MAX_YEARS: u32 = u32::MAX / 12;

/// Repayment figures in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub monthly_repayment: u64,
    pub total_repayment: u64,
}

/// Parsed loan terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    pub principal: f64,
    pub years: u32,
    /// Annual rate as a percentage, e.g. `6.0` for 6%.
    pub interest_rate: f64,
}

impl Loan {
    pub fn parse(values: &FormValues) -> Result<Self, CalculationError> {
        let principal = parse_number(&values.amount)
            .ok_or_else(|| CalculationError::InvalidAmount(values.amount.clone()))?;
        let years = values
            .years
            .trim()
            .parse::<u32>()
            .map_err(|_| CalculationError::InvalidTerm(values.years.clone()))?;
        let interest_rate = parse_number(&values.interest_rate)
            .ok_or_else(|| CalculationError::InvalidRate(values.interest_rate.clone()))?;

        if principal < 0.0 {
            return Err(CalculationError::NegativeAmount);
        }
        if interest_rate < 0.0 {
            return Err(CalculationError::NegativeRate);
        }
        if years == 0 {
            return Err(CalculationError::ZeroTerm);
        }
        if years > MAX_YEARS {
            return Err(CalculationError::TermTooLong);
        }

        Ok(Loan {
            principal,
            years,
            interest_rate,
        })
    }

    pub fn months(&self) -> u32 {
        self.years * 12
    }

    fn annual_rate(&self) -> f64 {
        self.interest_rate / 100.0
    }

    /// Unrounded monthly payment for an amortizing loan.
    pub fn amortized_payment(&self) -> f64 {
        let months = f64::from(self.months());
        let monthly_interest = self.annual_rate() / 12.0;
        // 1 - (1 + r)^-n, without losing r to cancellation when it is tiny.
        let discount = -f64::exp_m1(-months * monthly_interest.ln_1p());
        if !(discount.is_finite() && discount > 0.0) {
            debug!("negligible interest rate, spreading principal evenly");
            return self.principal / months;
        }
        (self.principal * monthly_interest) / discount
    }

    /// Unrounded monthly payment when only interest is paid.
    pub fn interest_only_payment(&self) -> f64 {
        self.principal * self.annual_rate() / 12.0
    }

    pub fn quote(&self, kind: MortgageType) -> Result<CalculationResult, CalculationError> {
        let monthly = match kind {
            MortgageType::Repayment => self.amortized_payment(),
            MortgageType::InterestOnly => self.interest_only_payment(),
        }
        .round();
        // u64::MAX as f64 rounds up to 2^64, so equality is out of range too.
        if !monthly.is_finite() || monthly >= u64::MAX as f64 {
            return Err(CalculationError::OutOfRange);
        }
        let monthly_repayment = monthly as u64;
        // Total is what the borrower pays: the rounded instalment, every month.
        let total_repayment = monthly_repayment
            .checked_mul(u64::from(self.months()))
            .ok_or(CalculationError::OutOfRange)?;
        Ok(CalculationResult {
            monthly_repayment,
            total_repayment,
        })
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Computes the repayment figures for a validated form.
///
/// With no mortgage type selected both figures are zero.
pub fn calculate(values: &FormValues) -> Result<CalculationResult, CalculationError> {
    let loan = Loan::parse(values)?;
    Ok(match values.mortgage_type {
        Some(kind) => loan.quote(kind)?,
        None => CalculationResult::default(),
    })
}
