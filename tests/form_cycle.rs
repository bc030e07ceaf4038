use pretty_assertions::assert_eq;

use mortgage_calculator::calculator::{calculate, CalculationResult};
use mortgage_calculator::form::{Field, FieldErrors, FormEdit, FormValues, MortgageType};
use mortgage_calculator::state::{update, Action, FormState, Phase, Quote};
use mortgage_calculator::validate::{validate, TYPE_REQUIRED};

fn edit(state: FormState, edit: FormEdit) -> FormState {
    update(state, Action::Edit(edit))
}

#[test]
fn edit_submit_fix_resubmit_clear() {
    let state = FormState::default();
    let state = edit(state, FormEdit::Amount("120000".to_string()));
    let state = edit(state, FormEdit::Years("25".to_string()));
    let state = edit(state, FormEdit::InterestRate("6".to_string()));

    let state = update(state, Action::Submit);
    assert_eq!(state.phase, Phase::Editing);
    assert_eq!(state.quote, None);
    assert_eq!(
        state.errors,
        FieldErrors {
            mortgage_type: TYPE_REQUIRED.to_string(),
            ..Default::default()
        }
    );

    let state = edit(state, FormEdit::MortgageType(MortgageType::Repayment));
    assert!(state.errors.is_empty());

    let state = update(state, Action::Submit);
    assert_eq!(state.phase, Phase::Displaying);
    assert_eq!(
        state.quote,
        Some(Quote {
            mortgage_type: MortgageType::Repayment,
            result: CalculationResult {
                monthly_repayment: 773,
                total_repayment: 231900,
            },
        })
    );

    let state = update(state, Action::ClearAll);
    assert_eq!(state.values, FormValues::default());
    assert_eq!(state.errors, FieldErrors::default());
    assert_eq!(state.quote, None);
    assert_eq!(state.phase, Phase::Editing);
}

#[test]
fn resubmitting_replaces_the_previous_quote() {
    let state = [
        FormEdit::Amount("100000".to_string()),
        FormEdit::Years("10".to_string()),
        FormEdit::InterestRate("5".to_string()),
        FormEdit::MortgageType(MortgageType::InterestOnly),
    ]
    .into_iter()
    .fold(FormState::default(), edit);
    let state = update(state, Action::Submit);

    let state = edit(state, FormEdit::InterestRate("0".to_string()));
    let state = update(state, Action::Submit);

    assert_eq!(
        state.quote.map(|q| q.result),
        Some(CalculationResult::default())
    );
}

#[test]
fn validate_then_calculate_directly() {
    let values = FormValues {
        amount: "250000".to_string(),
        years: "30".to_string(),
        interest_rate: "0".to_string(),
        mortgage_type: Some(MortgageType::Repayment),
    };

    let validation = validate(&values);
    assert!(validation.is_valid);
    assert_eq!(validation.errors.get(Field::Amount), "");

    let result = calculate(&values).unwrap();
    assert_eq!(result.monthly_repayment, 694);
    assert_eq!(result.total_repayment, 694 * 360);
}
