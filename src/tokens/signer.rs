//! A signer bound once to a key and MAC algorithm.

use crate::errors::GenericError;
use crate::mac::MacAlgorithm;
use crate::tokens::{issue_token, parse_token, TimeBackend};

use serde::de::DeserializeOwned;
use serde::Serialize;

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

/// Signs and parses tokens carrying payloads of type `P`.
pub trait TokenSigner<P> {
  /// Signs `payload` without an expiration.
  fn sign(&self, payload: &P) -> Result<String, GenericError>;

  /// Signs `payload` so that it is accepted for `ttl` from now.
  fn sign_temporary(&self, payload: &P, ttl: Duration) -> Result<String, GenericError>;

  /// Verifies `token` and returns its payload.
  fn parse(&self, token: &str) -> Result<P, GenericError>;
}

/// Issues and verifies tokens with a fixed key and algorithm.
///
/// The key is never changed after construction, so a signer can be shared freely
/// between threads by reference or inside an `Arc`.
pub struct Signer<P> {
  /// The key used for signing and verifying.
  signing_key: Vec<u8>,
  /// The MAC algorithm used for both directions.
  algorithm: MacAlgorithm,
  /// The clock used for expirations.
  time_backend: TimeBackend,
  payload: PhantomData<fn() -> P>,
}

impl<P> Signer<P> {
  /// Creates a signer using HMAC-SHA1.
  pub fn new(signing_key: impl Into<Vec<u8>>) -> Self {
    Self::with_algorithm(signing_key, MacAlgorithm::HmacSha1)
  }

  /// Creates a signer using HMAC-SHA256.
  pub fn new256(signing_key: impl Into<Vec<u8>>) -> Self {
    Self::with_algorithm(signing_key, MacAlgorithm::HmacSha256)
  }

  pub fn with_algorithm(signing_key: impl Into<Vec<u8>>, algorithm: MacAlgorithm) -> Self {
    Signer {
      signing_key: signing_key.into(),
      algorithm,
      time_backend: TimeBackend::default(),
      payload: PhantomData,
    }
  }

  /// Replaces the clock used when issuing and checking expirations.
  pub fn with_time_backend(mut self, time_backend: TimeBackend) -> Self {
    self.time_backend = time_backend;
    self
  }

  pub fn algorithm(&self) -> MacAlgorithm {
    self.algorithm
  }

  pub fn time_backend(&self) -> TimeBackend {
    self.time_backend
  }
}

impl<P> Signer<P>
where
  P: Serialize + DeserializeOwned,
{
  pub fn sign(&self, payload: &P) -> Result<String, GenericError> {
    issue_token(payload, None, &self.signing_key, self.algorithm, self.time_backend.now())
  }

  pub fn sign_temporary(&self, payload: &P, ttl: Duration) -> Result<String, GenericError> {
    issue_token(payload, Some(ttl), &self.signing_key, self.algorithm, self.time_backend.now())
  }

  pub fn parse(&self, token: &str) -> Result<P, GenericError> {
    parse_token(token, &self.signing_key, self.algorithm, self.time_backend.now())
  }
}

impl<P> TokenSigner<P> for Signer<P>
where
  P: Serialize + DeserializeOwned,
{
  fn sign(&self, payload: &P) -> Result<String, GenericError> {
    Signer::sign(self, payload)
  }

  fn sign_temporary(&self, payload: &P, ttl: Duration) -> Result<String, GenericError> {
    Signer::sign_temporary(self, payload, ttl)
  }

  fn parse(&self, token: &str) -> Result<P, GenericError> {
    Signer::parse(self, token)
  }
}

impl<P> Clone for Signer<P> {
  fn clone(&self) -> Self {
    Signer {
      signing_key: self.signing_key.clone(),
      algorithm: self.algorithm,
      time_backend: self.time_backend,
      payload: PhantomData,
    }
  }
}

// Keeps the key out of logs.
impl<P> fmt::Debug for Signer<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Signer")
      .field("signing_key", &"<redacted>")
      .field("algorithm", &self.algorithm)
      .field("time_backend", &self.time_backend)
      .finish()
  }
}
