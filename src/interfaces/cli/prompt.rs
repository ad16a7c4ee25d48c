use crate::error::{CostError, Result};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// Default number of tries a user gets per field.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Line-oriented prompter over any reader/writer pair.
///
/// Each `ask_*` call re-prompts on unparsable or out-of-range input, at most
/// `max_attempts` times, then gives up with [`CostError::TooManyAttempts`].
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Writes a line of text to the output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self, prompt: &str, field: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CostError::InputClosed {
                field: field.to_string(),
            });
        }
        Ok(line.trim().to_string())
    }

    /// Reads a free-text answer. Never re-prompts.
    pub fn ask_text(&mut self, prompt: &str, field: &str) -> Result<String> {
        self.read_line(prompt, field)
    }

    /// Reads a value of type `T` within `[min, max]`.
    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        field: &str,
        kind: &str,
        min: T,
        max: Option<T>,
    ) -> Result<T>
    where
        T: FromStr + PartialOrd + Copy + std::fmt::Display,
    {
        for attempt in 1..=self.max_attempts {
            let answer = self.read_line(prompt, field)?;
            let complaint = match answer.parse::<T>() {
                Ok(value) if value < min || max.is_some_and(|max| value > max) => match max {
                    Some(max) => format!("Please enter a value between {min} and {max}."),
                    None => format!("Please enter a value of at least {min}."),
                },
                Ok(value) => return Ok(value),
                Err(_) => format!("Please enter a valid {kind}."),
            };
            warn!(field, attempt, answer = %answer, "rejected input");
            self.say(&complaint)?;
        }
        Err(CostError::TooManyAttempts {
            field: field.to_string(),
        })
    }

    /// Reads a decimal number within `[min, max]`; no upper bound when `max`
    /// is `None`.
    pub fn ask_decimal(
        &mut self,
        prompt: &str,
        field: &str,
        min: Decimal,
        max: Option<Decimal>,
    ) -> Result<Decimal> {
        self.ask_parsed(prompt, field, "decimal number", min, max)
    }

    /// Reads a whole number within `[min, max]`; no upper bound when `max` is
    /// `None`.
    pub fn ask_u32(&mut self, prompt: &str, field: &str, min: u32, max: Option<u32>) -> Result<u32> {
        self.ask_parsed(prompt, field, "whole number", min, max)
    }

    /// Reads a yes/no answer; anything starting with `y` or `n` counts.
    pub fn ask_yes_no(&mut self, prompt: &str, field: &str) -> Result<bool> {
        for attempt in 1..=self.max_attempts {
            let answer = self.read_line(prompt, field)?.to_lowercase();
            if answer.starts_with('y') {
                return Ok(true);
            }
            if answer.starts_with('n') {
                return Ok(false);
            }
            warn!(field, attempt, answer = %answer, "rejected input");
            self.say("Please enter 'y' for yes or 'n' for no.")?;
        }
        Err(CostError::TooManyAttempts {
            field: field.to_string(),
        })
    }
}
