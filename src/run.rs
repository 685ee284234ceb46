use std::io::Write;

use bcrypt_gen_core::{Cost, HashArtifact, HashEngine};
use tracing::{debug, instrument};

use crate::{
    err::{Error, Result},
    mode::Mode,
    prompt::{ask_password_and_cost, Prompter},
};

// Outcome

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Generated(HashArtifact),
    Matched,
    Mismatched,
}

// Consts

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_SUCCESS: u8 = 0;

// Runner

pub struct Runner<ENGINE: HashEngine, OUT: Write, ERR: Write> {
    default_cost: Cost,
    engine: ENGINE,
    err: ERR,
    out: OUT,
}

impl<ENGINE: HashEngine, OUT: Write, ERR: Write> Runner<ENGINE, OUT, ERR> {
    pub fn new(engine: ENGINE, default_cost: Cost, out: OUT, err: ERR) -> Self {
        Self {
            default_cost,
            engine,
            err,
            out,
        }
    }

    /// Runs a single operation. The prompter is only built, then dropped, in interactive mode.
    pub async fn run<PROMPTER: Prompter, NEW: FnOnce() -> PROMPTER>(
        &mut self,
        mode: Mode,
        new_prompter: NEW,
    ) -> Result<Outcome> {
        match mode {
            Mode::Generate { cost, password } => self.generate(password, cost).await,
            Mode::Interactive => {
                let (password, cost) = ask_password_and_cost(new_prompter(), self.default_cost)?;
                self.generate(password, cost).await
            }
            Mode::Verify { hash, password } => self.verify(hash, password).await,
        }
    }

    #[instrument(skip(self, password, cost), fields(hash.cost = cost.get()))]
    async fn generate(&mut self, password: String, cost: Cost) -> Result<Outcome> {
        let artifact = self.engine.generate(password, cost).await?;
        writeln!(self.out, "Generated hash: {artifact}")?;
        debug!("hash generated");
        Ok(Outcome::Generated(artifact))
    }

    #[instrument(skip(self, hash, password))]
    async fn verify(&mut self, hash: String, password: String) -> Result<Outcome> {
        if self.engine.verify(hash, password).await {
            writeln!(self.out, " ✅ Success - Password matches the hash.")?;
            debug!("password matches");
            Ok(Outcome::Matched)
        } else {
            writeln!(self.err, "❌ Error - Password does not match the hash.")?;
            debug!("password doesn't match");
            Ok(Outcome::Mismatched)
        }
    }
}

// Functions

/// Reports the result of a run on `err` and returns the process exit code.
///
/// A completed verification exits successfully whether the password matched or not.
pub fn report<ERR: Write>(res: Result<Outcome>, err: &mut ERR) -> u8 {
    match res {
        Ok(outcome) => {
            debug!(?outcome, "run completed");
            EXIT_SUCCESS
        }
        Err(error) => {
            debug!("{error:?}");
            writeln!(err, "Error: {error}").ok();
            if matches!(error, Error::MissingArgument(_)) {
                writeln!(err, "Use -h for help.").ok();
            }
            EXIT_FAILURE
        }
    }
}

// Tests
