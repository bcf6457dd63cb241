//! Donation form: institution picker, donor form and submission flow.

pub mod controller;
pub mod ui;
