use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::form::{Field, MortgageType};
use crate::state::Quote;

const ACCENT: Color = Color::LightGreen;

pub fn ui(f: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)].as_ref())
        .split(f.size());

    render_form(f, app, columns[0]);
    render_results(f, app, columns[1]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Length(2),
                Constraint::Min(1),
            ]
            .as_ref(),
        )
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Mortgage Calculator",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        button("Clear All", app.focus == Focus::ClearAll),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    render_text_field(
        f,
        app,
        Field::Amount,
        "Mortgage Amount",
        format!("{} {}", app.currency, app.form.values.amount),
        chunks[1],
    );
    render_text_field(
        f,
        app,
        Field::Years,
        "Mortgage Term",
        format!("{} years", app.form.values.years),
        chunks[2],
    );
    render_text_field(
        f,
        app,
        Field::InterestRate,
        "Interest Rate",
        format!("{} %", app.form.values.interest_rate),
        chunks[3],
    );
    render_mortgage_type(f, app, chunks[4]);

    let calculate = Paragraph::new(Line::from(button(
        "Calculate Repayments",
        app.focus == Focus::Calculate,
    )));
    f.render_widget(calculate, chunks[5]);

    let mut footer = Vec::new();
    if let Some(message) = &app.form.calculation_error {
        footer.push(Line::from(message.as_str()).style(Style::default().fg(Color::Red)));
    }
    footer.push(
        Line::from("Tab/↓: next | Shift-Tab/↑: back | Space: select | Enter: calculate | Ctrl-L: clear | Esc: quit")
            .style(Style::default().fg(Color::DarkGray)),
    );
    let help = Paragraph::new(footer).wrap(Wrap { trim: true });
    f.render_widget(help, chunks[6]);
}

fn render_text_field(f: &mut Frame, app: &App, field: Field, label: &str, value: String, area: Rect) {
    let focused = app.focus.text_field() == Some(field);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)].as_ref())
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(label.to_string());
    let input = Paragraph::new(value)
        .style(Style::default().fg(Color::Yellow))
        .block(input_block);
    f.render_widget(input, rows[0]);

    render_error(f, app, field, rows[1]);
}

fn render_mortgage_type(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1)].as_ref())
        .split(area);

    let selected = app.form.values.mortgage_type;
    let options = [
        (MortgageType::Repayment, Focus::Repayment),
        (MortgageType::InterestOnly, Focus::InterestOnly),
    ]
    .into_iter()
    .map(|(kind, focus)| {
        let marker = if selected == Some(kind) { "(●)" } else { "( )" };
        let style = if app.focus == focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if selected == Some(kind) {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(format!("{} {}", marker, kind.label())).style(style)
    })
    .collect::<Vec<_>>();

    let focused = app.focus.option().is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title("Mortgage Type");
    f.render_widget(Paragraph::new(options).block(block), rows[0]);

    render_error(f, app, Field::MortgageType, rows[1]);
}

fn render_error(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let message = app.form.errors.get(field);
    if !message.is_empty() {
        let error = Paragraph::new(message).style(Style::default().fg(Color::Red));
        f.render_widget(error, area);
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = match &app.form.quote {
        Some(quote) => result_lines(quote, &app.currency),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Results shown here",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(
                "Complete the form and click \"calculate repayments\" to see what your monthly repayments would be.",
            )
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        ],
    };

    let results = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(results, area);
}

fn result_lines(quote: &Quote, currency: &str) -> Vec<Line<'static>> {
    let (monthly_label, total_label) = match quote.mortgage_type {
        MortgageType::Repayment => ("Your monthly repayments", "Total you'll repay over the term"),
        MortgageType::InterestOnly => ("Monthly Interest", "Total Interest"),
    };

    vec![
        Line::from(Span::styled(
            "Your Results",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Your results are shown below based on the information you provided. To adjust the results, edit the form and click \"calculate repayments\" again.",
        )
        .style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from(monthly_label).style(Style::default().fg(Color::Gray)),
        Line::from(Span::styled(
            format!("{} {}", currency, group_thousands(quote.result.monthly_repayment)),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(total_label).style(Style::default().fg(Color::Gray)),
        Line::from(Span::styled(
            format!("{} {}", currency, group_thousands(quote.result.total_repayment)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ]
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Formats a whole amount with comma separators, e.g. `231900` as `231,900`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
