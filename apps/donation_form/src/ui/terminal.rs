use std::io::{self, BufRead, Write};

use shared::domain::PaymentOption;

use crate::controller::{
    events::{NoticeLevel, UserNotice},
    form::FormInput,
    institutions::InstitutionPanel,
};

/// Line-oriented prompt/response frontend over any reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn render_panel(&mut self, panel: &InstitutionPanel) -> io::Result<()> {
        writeln!(self.output, "Institutions")?;
        if let Some(message) = panel.status_message() {
            writeln!(self.output, "  {message}")?;
        }
        for (i, card) in panel.cards().iter().enumerate() {
            let marker = if card.selected { '*' } else { ' ' };
            writeln!(
                self.output,
                "{marker} [{}] {} ({})",
                i + 1,
                card.display_name,
                card.image_url
            )?;
        }
        Ok(())
    }

    pub fn render_notice(&mut self, notice: &UserNotice) -> io::Result<()> {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
        };
        writeln!(self.output, "[{tag}] {}", notice.message)
    }

    /// Reads one line. An empty answer keeps `default`.
    pub fn prompt(&mut self, label: &str, default: &str) -> io::Result<String> {
        if default.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{default}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Asks for a 1-based card number; returns the 0-based index, or `None`
    /// when the answer is blank or not a number.
    pub fn choose_institution(&mut self, panel: &InstitutionPanel) -> io::Result<Option<usize>> {
        let current = panel
            .cards()
            .iter()
            .position(|card| card.selected)
            .map(|i| (i + 1).to_string())
            .unwrap_or_default();
        let answer = self.prompt("Institution number", &current)?;
        Ok(answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1)))
    }

    pub fn choose_payment_option(&mut self, current: Option<&str>) -> io::Result<Option<String>> {
        writeln!(self.output, "Payment options")?;
        for (i, option) in PaymentOption::ALL.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", i + 1, option.label())?;
        }
        let current_number = current
            .and_then(|value| {
                PaymentOption::ALL
                    .iter()
                    .position(|option| option.value() == value)
            })
            .map(|i| (i + 1).to_string())
            .unwrap_or_default();
        let answer = self.prompt("Payment option", &current_number)?;
        Ok(answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| PaymentOption::ALL.get(i))
            .map(|option| option.value().to_string()))
    }

    /// Fills every form field, offering `previous` values as defaults.
    pub fn fill_form(&mut self, previous: &FormInput, default_date: &str) -> io::Result<FormInput> {
        let date_default = if previous.date.is_empty() {
            default_date
        } else {
            &previous.date
        };
        Ok(FormInput {
            name: self.prompt("Name", &previous.name)?,
            email: self.prompt("Email", &previous.email)?,
            phone: self.prompt("Phone", &previous.phone)?,
            cpf: self.prompt("CPF", &previous.cpf)?,
            amount: self.prompt("Amount", &previous.amount)?,
            date: self.prompt("Donation date", date_default)?,
            payment_option: self.choose_payment_option(previous.payment_option.as_deref())?,
        })
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{question} (y/n)"), "n")?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
