//! Hash engine behind `bcrypt-gen`.
//!
//! A [`HashArtifact`] is self-describing: its scheme, cost and salt are
//! recovered from the string itself, so verifying it later needs nothing but
//! the candidate password.

pub use self::{
    artifact::{HashArtifact, Scheme},
    cost::Cost,
    engine::{BcryptHashEngine, HashEngine},
    err::{Error, Result},
};

#[cfg(feature = "mock")]
pub use self::engine::MockHashEngine;

// Mods

pub mod artifact;
pub mod cost;
pub mod engine;
pub mod err;
pub mod tracer;

// Tests
