use serde::Serialize;
use std::fmt;

/// How the loan is paid back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MortgageType {
    /// Amortizing loan: each payment covers interest and principal.
    Repayment,
    /// Each payment covers accrued interest only; the principal is unchanged.
    InterestOnly,
}

impl MortgageType {
    pub fn label(self) -> &'static str {
        match self {
            MortgageType::Repayment => "Repayment",
            MortgageType::InterestOnly => "Interest Only",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Years,
    InterestRate,
    MortgageType,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Amount,
        Field::Years,
        Field::InterestRate,
        Field::MortgageType,
    ];
}

/// Raw form contents. Numeric fields stay as typed text until a calculation
/// asks for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub amount: String,
    pub years: String,
    pub interest_rate: String,
    pub mortgage_type: Option<MortgageType>,
}

impl FormValues {
    pub fn is_present(&self, field: Field) -> bool {
        match field {
            Field::Amount => !self.amount.is_empty(),
            Field::Years => !self.years.is_empty(),
            Field::InterestRate => !self.interest_rate.is_empty(),
            Field::MortgageType => self.mortgage_type.is_some(),
        }
    }

    /// Mutable access to a text field. `None` for the mortgage type, which is
    /// a selection rather than text.
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Amount => Some(&mut self.amount),
            Field::Years => Some(&mut self.years),
            Field::InterestRate => Some(&mut self.interest_rate),
            Field::MortgageType => None,
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Amount => Some(&self.amount),
            Field::Years => Some(&self.years),
            Field::InterestRate => Some(&self.interest_rate),
            Field::MortgageType => None,
        }
    }

    pub fn apply(&mut self, edit: FormEdit) {
        match edit {
            FormEdit::Amount(value) => self.amount = value,
            FormEdit::Years(value) => self.years = value,
            FormEdit::InterestRate(value) => self.interest_rate = value,
            FormEdit::MortgageType(kind) => self.mortgage_type = Some(kind),
        }
    }
}

/// A single change to one field of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Amount(String),
    Years(String),
    InterestRate(String),
    MortgageType(MortgageType),
}

impl FormEdit {
    pub fn field(&self) -> Field {
        match self {
            FormEdit::Amount(_) => Field::Amount,
            FormEdit::Years(_) => Field::Years,
            FormEdit::InterestRate(_) => Field::InterestRate,
            FormEdit::MortgageType(_) => Field::MortgageType,
        }
    }

    /// Builds a text edit for `field`. Returns `None` for the mortgage type.
    pub fn text(field: Field, value: String) -> Option<FormEdit> {
        match field {
            Field::Amount => Some(FormEdit::Amount(value)),
            Field::Years => Some(FormEdit::Years(value)),
            Field::InterestRate => Some(FormEdit::InterestRate(value)),
            Field::MortgageType => None,
        }
    }
}

/// Per-field messages. An empty string means the field has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub amount: String,
    pub years: String,
    pub interest_rate: String,
    pub mortgage_type: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Amount => &self.amount,
            Field::Years => &self.years,
            Field::InterestRate => &self.interest_rate,
            Field::MortgageType => &self.mortgage_type,
        }
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let slot = match field {
            Field::Amount => &mut self.amount,
            Field::Years => &mut self.years,
            Field::InterestRate => &mut self.interest_rate,
            Field::MortgageType => &mut self.mortgage_type,
        };
        *slot = message.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, String::new());
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
