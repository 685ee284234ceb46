use std::io::{stdin, stdout, BufRead, StdinLock, StdoutLock, Write};

use bcrypt_gen_core::Cost;
use tracing::{debug, instrument};

use crate::err::{Error, Result};

// Consts

const QUESTION_PASSWORD: &str = "Enter the password to generate the hash: ";

// Traits

pub trait Prompter {
    fn ask(&mut self, question: &str) -> std::io::Result<String>;
}

// LinePrompter

pub struct LinePrompter<IN: BufRead, OUT: Write> {
    input: IN,
    output: OUT,
}

impl LinePrompter<StdinLock<'static>, StdoutLock<'static>> {
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout().lock())
    }
}

impl<IN: BufRead, OUT: Write> LinePrompter<IN, OUT> {
    pub fn new(input: IN, output: OUT) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> OUT {
        self.output
    }
}

impl<IN: BufRead, OUT: Write> Prompter for LinePrompter<IN, OUT> {
    fn ask(&mut self, question: &str) -> std::io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(len);
        Ok(answer)
    }
}

// Functions

/// Asks for the password then the cost; `prompter` is released before returning, whatever the outcome.
#[instrument(skip(prompter, default_cost))]
pub fn ask_password_and_cost<PROMPTER: Prompter>(
    mut prompter: PROMPTER,
    default_cost: Cost,
) -> Result<(String, Cost)> {
    debug!("asking password");
    let password = prompter.ask(QUESTION_PASSWORD)?;
    if password.is_empty() {
        return Err(Error::MissingArgument("a password"));
    }
    debug!("asking cost");
    let question = format!(
        "Enter the number of salt rounds (or press Enter for default {}): ",
        default_cost.get()
    );
    let cost = prompter.ask(&question)?;
    let cost = Cost::parse_or_default(&cost, default_cost);
    Ok((password, cost))
}

// Tests
