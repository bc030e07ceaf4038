//! Mortgage repayment calculator.
//!
//! [`validate`] checks the form for missing fields, [`calculator`] turns the
//! raw text into monthly and total repayments, and [`state`] ties the two
//! together behind a single `update` function that the terminal front end
//! in [`app`] and [`ui`] drives.

pub mod app;
pub mod calculator;
pub mod cli;
pub mod form;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod validate;
