use crate::errors::GenericError;
use crate::mac::MacAlgorithm;
use crate::tokens::signer::Signer;
use crate::tokens::TimeBackend;

/// A signer builder.
#[derive(Default)]
pub struct SignerBuilder {
  /// The key to sign and verify with. Required.
  signing_key: Option<Vec<u8>>,
  /// The MAC algorithm, HMAC-SHA1 unless set.
  algorithm: MacAlgorithm,
  /// The clock used for expirations.
  time_backend: TimeBackend,
}

impl SignerBuilder {
  /// Creates a new signer builder.
  pub fn new() -> SignerBuilder {
    SignerBuilder::default()
  }

  /// Builds a signer for payloads of type `P`.
  pub fn build<P>(self) -> Result<Signer<P>, GenericError> {
    match self.signing_key {
      Some(signing_key) if !signing_key.is_empty() => {
        Ok(Signer::with_algorithm(signing_key, self.algorithm).with_time_backend(self.time_backend))
      }
      _ => Err(GenericError::NoKeyProvided),
    }
  }

  /// Sets the signing key.
  pub fn set_signing_key(mut self, signing_key: impl Into<Vec<u8>>) -> Self {
    self.signing_key = Some(signing_key.into());
    self
  }

  /// Sets the MAC algorithm.
  pub fn set_algorithm(mut self, algorithm: MacAlgorithm) -> Self {
    self.algorithm = algorithm;
    self
  }

  /// Sets the clock.
  ///
  /// time_backend defaults to: TimeBackend::default();
  pub fn set_time_backend(mut self, time_backend: TimeBackend) -> Self {
    self.time_backend = time_backend;
    self
  }
}
