//! Presence checks for the mortgage form.
//!
//! Only emptiness is checked here. Whether the text is actually a number is
//! left to [`crate::calculator`].

use crate::form::{Field, FieldErrors, FormValues};

pub const AMOUNT_REQUIRED: &str = "Please enter a mortgage amount";
pub const TERM_REQUIRED: &str = "Please enter a mortgage term";
pub const RATE_REQUIRED: &str = "Please enter an interest rate";
pub const TYPE_REQUIRED: &str = "Please select a mortgage type";

/// Outcome of a validation pass. `errors` is a complete record, meant to
/// replace whatever the form showed before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: FieldErrors,
    pub is_valid: bool,
}

pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Amount => AMOUNT_REQUIRED,
        Field::Years => TERM_REQUIRED,
        Field::InterestRate => RATE_REQUIRED,
        Field::MortgageType => TYPE_REQUIRED,
    }
}

pub fn validate(values: &FormValues) -> Validation {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if !values.is_present(field) {
            errors.set(field, required_message(field));
        }
    }
    let is_valid = errors.is_empty();
    Validation { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::MortgageType;

    fn complete() -> FormValues {
        FormValues {
            amount: "250000".to_string(),
            years: "30".to_string(),
            interest_rate: "4.25".to_string(),
            mortgage_type: Some(MortgageType::Repayment),
        }
    }

    #[test]
    fn empty_form_reports_every_field() {
        let validation = validate(&FormValues::default());

        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            FieldErrors {
                amount: AMOUNT_REQUIRED.to_string(),
                years: TERM_REQUIRED.to_string(),
                interest_rate: RATE_REQUIRED.to_string(),
                mortgage_type: TYPE_REQUIRED.to_string(),
            }
        );
    }

    #[test]
    fn complete_form_is_valid() {
        let validation = validate(&complete());

        assert!(validation.is_valid);
        assert_eq!(validation.errors, FieldErrors::default());
    }

    #[test]
    fn each_missing_field_is_reported_alone() {
        for field in Field::ALL {
            let mut values = complete();
            if field == Field::MortgageType {
                values.mortgage_type = None;
            } else if let Some(text) = values.text_mut(field) {
                text.clear();
            }

            let validation = validate(&values);

            assert!(!validation.is_valid);
            for other in Field::ALL {
                let expected = if other == field {
                    required_message(field)
                } else {
                    ""
                };
                assert_eq!(validation.errors.get(other), expected);
            }
        }
    }

    #[test]
    fn non_numeric_text_counts_as_present() {
        let values = FormValues {
            amount: "abc".to_string(),
            years: "-3".to_string(),
            ..complete()
        };

        assert!(validate(&values).is_valid);
    }
}
