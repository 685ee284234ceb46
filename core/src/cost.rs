use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use tracing::{debug, warn};

use crate::err::{Error, Result};

// Cost

/// Cost factor: the hash key setup runs `2^cost` rounds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cost(u32);

impl Cost {
    pub const DEFAULT: Self = Self(10);
    pub const MAX: Self = Self(31);
    pub const MIN: Self = Self(4);

    pub fn new(cost: u32) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&cost) {
            Ok(Self(cost))
        } else {
            Err(Error::InvalidConfiguration(format!(
                "cost must be between {} and {}, got {cost}",
                Self::MIN.0,
                Self::MAX.0
            )))
        }
    }

    /// Lenient parsing for interactive input: blank or invalid input yields `default`.
    ///
    /// Input is never partially read, `12abc` is invalid as a whole.
    pub fn parse_or_default(input: &str, default: Self) -> Self {
        let input = input.trim();
        if input.is_empty() {
            debug!(cost = default.0, "no cost provided, using default");
            return default;
        }
        match input.parse() {
            Ok(cost) => cost,
            Err(err) => {
                warn!(cost = default.0, "{err}, using default");
                default
            }
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Cost {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let cost = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfiguration(format!("`{s}` is not a valid cost")))?;
        Self::new(cost)
    }
}

// Tests
