//! Form state and the transitions between edits, submits and clears.

use tracing::{debug, info, warn};

use crate::calculator::{calculate, CalculationResult};
use crate::form::{FieldErrors, FormEdit, FormValues, MortgageType};
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Displaying,
}

/// A computed result together with the mortgage type it was computed for,
/// so labels stay correct even if the selection changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub mortgage_type: MortgageType,
    pub result: CalculationResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub quote: Option<Quote>,
    pub phase: Phase,
    /// Set when the inputs were present but could not be computed.
    pub calculation_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Edit(FormEdit),
    Submit,
    ClearAll,
}

pub fn update(state: FormState, action: Action) -> FormState {
    match action {
        Action::Edit(edit) => apply_edit(state, edit),
        Action::Submit => submit(state),
        Action::ClearAll => {
            info!("form cleared");
            FormState::default()
        }
    }
}

fn apply_edit(mut state: FormState, edit: FormEdit) -> FormState {
    let field = edit.field();
    debug!(?field, "field edited");
    state.values.apply(edit);
    state.errors.clear(field);
    state.calculation_error = None;
    state.phase = Phase::Editing;
    state
}

fn submit(mut state: FormState) -> FormState {
    let validation = validate(&state.values);
    state.errors = validation.errors;
    state.calculation_error = None;
    if !validation.is_valid {
        warn!(errors = ?state.errors, "submit rejected, missing fields");
        state.phase = Phase::Editing;
        return state;
    }

    state.phase = Phase::Submitting;
    match calculate(&state.values) {
        Ok(result) => {
            // Validation guarantees a selection; calculate() already returned
            // zeros if there were none.
            if let Some(mortgage_type) = state.values.mortgage_type {
                info!(
                    %mortgage_type,
                    monthly = result.monthly_repayment,
                    total = result.total_repayment,
                    "repayments calculated"
                );
                state.quote = Some(Quote {
                    mortgage_type,
                    result,
                });
            }
            state.phase = Phase::Displaying;
        }
        Err(error) => {
            warn!(%error, "submit rejected, calculation failed");
            state.calculation_error = Some(error.to_string());
            state.phase = Phase::Editing;
        }
    }
    state
}
