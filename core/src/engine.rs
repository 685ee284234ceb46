use std::future::Future;

use tokio::task::spawn_blocking;
use tracing::{debug, error, instrument, warn};

use crate::{
    artifact::{HashArtifact, Scheme},
    cost::Cost,
    err::{Error, Result},
};

// Traits

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HashEngine: Send + Sync {
    /// Hashes `password` with a fresh random salt.
    fn generate(
        &self,
        password: String,
        cost: Cost,
    ) -> impl Future<Output = Result<HashArtifact>> + Send;

    /// Checks `password` against `hash`, reporting why the check could not be done.
    fn try_verify(&self, hash: String, password: String)
        -> impl Future<Output = Result<bool>> + Send;

    /// Same as [`HashEngine::try_verify`] but every failure is logged and reported as a mismatch.
    fn verify(&self, hash: String, password: String) -> impl Future<Output = bool> + Send {
        async move {
            match self.try_verify(hash, password).await {
                Ok(matched) => matched,
                Err(Error::InvalidHashFormat) => {
                    warn!("{}", Error::InvalidHashFormat);
                    false
                }
                Err(err) => {
                    error!("failed to verify password: {err}");
                    false
                }
            }
        }
    }
}

// BcryptHashEngine

#[derive(Clone, Copy, Debug, Default)]
pub struct BcryptHashEngine {
    scheme: Scheme,
}

impl BcryptHashEngine {
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }
}

impl HashEngine for BcryptHashEngine {
    #[instrument("generate_hash", skip(self, password, cost), fields(hash.cost = cost.get(), hash.scheme = %self.scheme))]
    async fn generate(&self, password: String, cost: Cost) -> Result<HashArtifact> {
        let scheme = self.scheme;
        debug!("hashing password");
        let hash = spawn_blocking(move || {
            bcrypt::hash_with_result(password, cost.get())
                .map(|parts| parts.format_for_version(scheme.into()))
        })
        .await??;
        debug!("password hashed");
        hash.parse()
    }

    #[instrument("verify_hash", skip(self, hash, password))]
    async fn try_verify(&self, hash: String, password: String) -> Result<bool> {
        if Scheme::of(&hash).is_none() {
            debug!("hash doesn't start with a known scheme marker");
            return Err(Error::InvalidHashFormat);
        }
        let artifact: HashArtifact = hash.parse()?;
        debug!(
            hash.cost = artifact.cost().get(),
            hash.scheme = %artifact.scheme(),
            "verifying password"
        );
        let matched = spawn_blocking(move || bcrypt::verify(password, &artifact.to_string()))
            .await??;
        debug!(matched, "password verified");
        Ok(matched)
    }
}

// Tests
