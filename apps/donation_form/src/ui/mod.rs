//! Frontend glue: the terminal rendering of the donation form.

pub mod terminal;
