use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
    sync::OnceLock,
};

use bcrypt::Version;
use regex::Regex;

use crate::{
    cost::Cost,
    err::{Error, Result},
};

// Consts

const ARTIFACT_PATTERN: &str =
    r"^\$(2[aby])\$([0-9]{2})\$([./A-Za-z0-9]{22})([./A-Za-z0-9]{31})$";

// Scheme

/// bcrypt format revision written in the hash prefix.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Scheme {
    TwoA,
    #[default]
    TwoB,
    TwoY,
}

impl Scheme {
    /// Recognizes the scheme marker (`$2a$`, `$2b$` or `$2y$`) at the start of `hash`.
    pub fn of(hash: &str) -> Option<Self> {
        [Self::TwoA, Self::TwoB, Self::TwoY]
            .into_iter()
            .find(|scheme| {
                hash.strip_prefix('$')
                    .and_then(|hash| hash.strip_prefix(scheme.as_str()))
                    .is_some_and(|hash| hash.starts_with('$'))
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwoA => "2a",
            Self::TwoB => "2b",
            Self::TwoY => "2y",
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Scheme> for Version {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::TwoA => Self::TwoA,
            Scheme::TwoB => Self::TwoB,
            Scheme::TwoY => Self::TwoY,
        }
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2a" => Ok(Self::TwoA),
            "2b" => Ok(Self::TwoB),
            "2y" => Ok(Self::TwoY),
            _ => Err(Error::InvalidConfiguration(format!(
                "`{s}` is not a supported scheme (expected 2a, 2b or 2y)"
            ))),
        }
    }
}

// HashArtifact

/// Canonical `$<scheme>$<cost>$<salt><digest>` string.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HashArtifact {
    cost: Cost,
    digest: String,
    salt: String,
    scheme: Scheme,
}

impl HashArtifact {
    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    fn regex() -> &'static Regex {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        REGEX.get_or_init(|| Regex::new(ARTIFACT_PATTERN).unwrap())
    }
}

impl Display for HashArtifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}${}${}{}",
            self.scheme, self.cost, self.salt, self.digest
        )
    }
}

impl FromStr for HashArtifact {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = Self::regex().captures(s).ok_or(Error::InvalidHashFormat)?;
        let scheme = caps[1].parse().map_err(|_| Error::InvalidHashFormat)?;
        let cost = caps[2].parse().map_err(|_| Error::InvalidHashFormat)?;
        Ok(Self {
            cost,
            digest: caps[4].into(),
            salt: caps[3].into(),
            scheme,
        })
    }
}

// Tests
