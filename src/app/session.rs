use crate::app::page::{empty_vin_message, Page, DECODING};
use crate::core::lookup::LookupEngine;
use crate::core::{LookupOutcome, VinDecoder};
use crate::domain::model::{StatusKind, StatusMessage};
use crate::utils::error::{Result, VinError};
use std::io::{BufRead, Write};

pub fn normalize_vin_input(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "exit")
}

pub struct Session<D: VinDecoder> {
    engine: LookupEngine<D>,
    page: Page,
    username: String,
}

impl<D: VinDecoder> Session<D> {
    pub fn new(engine: LookupEngine<D>, page: Page, username: impl Into<String>) -> Self {
        Self {
            engine,
            page,
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, name: impl Into<String>) {
        self.username = name.into();
    }

    /// One "Decode VIN" click. Write failures are the only `Err`.
    pub async fn submit<W: Write>(&self, out: &mut W, raw_vin: &str) -> Result<LookupOutcome> {
        let vin_input = normalize_vin_input(raw_vin);

        if vin_input.is_empty() {
            let status = StatusMessage::new(StatusKind::Error, empty_vin_message(&self.username));
            self.page.render_status(out, &status)?;
            return Ok(LookupOutcome::Failed(VinError::EmptyVinError));
        }

        let vin = match self.engine.validate(&vin_input) {
            Ok(vin) => vin,
            Err(e) => {
                let outcome = LookupOutcome::Failed(e);
                self.page.render_outcome(out, &outcome, &self.username)?;
                return Ok(outcome);
            }
        };

        self.page
            .render_status(out, &StatusMessage::new(StatusKind::Info, DECODING))?;
        out.flush()?;

        let outcome = self.engine.lookup(&vin).await;
        self.page.render_outcome(out, &outcome, &self.username)?;
        Ok(outcome)
    }

    /// Header, greeting, one lookup, footer.
    pub async fn run_once<W: Write>(&self, out: &mut W, raw_vin: &str) -> Result<LookupOutcome> {
        self.page.render_header(out)?;
        self.page.render_greeting(out, &self.username)?;
        let outcome = self.submit(out, raw_vin).await?;
        self.page.render_footer(out)?;
        Ok(outcome)
    }

    /// Prompts until EOF or `quit`; returns how many VINs were submitted.
    pub async fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<usize> {
        self.page.render_header(out)?;

        if self.username.is_empty() {
            write!(out, "Enter your name: ")?;
            out.flush()?;
            let mut name = String::new();
            if input.read_line(&mut name)? == 0 {
                self.page.render_footer(out)?;
                return Ok(0);
            }
            self.set_username(name.trim());
        }
        self.page.render_greeting(out, &self.username)?;

        let mut submitted = 0;
        loop {
            write!(out, "Enter VIN: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 || is_quit(&line) {
                break;
            }

            let outcome = self.submit(out, &line).await?;
            tracing::debug!("Lookup finished: decoded={}", outcome.is_decoded());
            submitted += 1;
            writeln!(out)?;
        }

        self.page.render_footer(out)?;
        Ok(submitted)
    }
}
