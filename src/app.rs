use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::{Field, FormEdit, MortgageType};
use crate::state::{update, Action, FormState};

/// The widget that currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Amount,
    Years,
    InterestRate,
    Repayment,
    InterestOnly,
    Calculate,
    ClearAll,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Amount,
        Focus::Years,
        Focus::InterestRate,
        Focus::Repayment,
        Focus::InterestOnly,
        Focus::Calculate,
        Focus::ClearAll,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The text field behind this focus, if it is one.
    pub fn text_field(self) -> Option<Field> {
        match self {
            Focus::Amount => Some(Field::Amount),
            Focus::Years => Some(Field::Years),
            Focus::InterestRate => Some(Field::InterestRate),
            _ => None,
        }
    }

    pub fn option(self) -> Option<MortgageType> {
        match self {
            Focus::Repayment => Some(MortgageType::Repayment),
            Focus::InterestOnly => Some(MortgageType::InterestOnly),
            _ => None,
        }
    }
}

pub struct App {
    pub form: FormState,
    pub focus: Focus,
    pub currency: String,
}

impl App {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            form: FormState::default(),
            focus: Focus::Amount,
            currency: currency.into(),
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let form = std::mem::take(&mut self.form);
        self.form = update(form, action);
    }

    fn push_char(&mut self, field: Field, c: char) {
        if let Some(text) = self.form.values.text(field) {
            let mut value = text.to_string();
            value.push(c);
            self.edit_text(field, value);
        }
    }

    fn pop_char(&mut self, field: Field) {
        if let Some(text) = self.form.values.text(field) {
            let mut value = text.to_string();
            if value.pop().is_some() {
                self.edit_text(field, value);
            }
        }
    }

    fn edit_text(&mut self, field: Field, value: String) {
        if let Some(edit) = FormEdit::text(field, value) {
            self.dispatch(Action::Edit(edit));
        }
    }

    fn clear_all(&mut self) {
        self.dispatch(Action::ClearAll);
        self.focus = Focus::Amount;
    }
}

/// Handles one key press. Returns `true` when the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('l') => app.clear_all(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Tab | KeyCode::Down => app.focus = app.focus.next(),
        KeyCode::BackTab | KeyCode::Up => app.focus = app.focus.prev(),
        _ => match app.focus.text_field() {
            Some(field) => handle_text_input(app, field, key),
            None => return handle_control_input(app, key),
        },
    }
    false
}

fn handle_text_input(app: &mut App, field: Field, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            app.push_char(field, c);
        }
        KeyCode::Backspace => app.pop_char(field),
        KeyCode::Enter => app.dispatch(Action::Submit),
        _ => {}
    }
}

fn handle_control_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            Focus::Calculate => app.dispatch(Action::Submit),
            Focus::ClearAll => app.clear_all(),
            focus => {
                if let Some(kind) = focus.option() {
                    app.dispatch(Action::Edit(FormEdit::MortgageType(kind)));
                }
            }
        },
        KeyCode::Left | KeyCode::Right if app.focus.option().is_some() => {
            app.focus = match app.focus {
                Focus::Repayment => Focus::InterestOnly,
                _ => Focus::Repayment,
            };
        }
        _ => {}
    }
    false
}
