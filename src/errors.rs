use thiserror::Error;

/// Failures of the keyed MAC primitive.
#[derive(Error, Debug)]
pub enum MacErrors {
  #[error("invalid signature")]
  InvalidSignature,
  #[error("error calculating hmac")]
  ComputationError,
}

/// The specific reason a token was rejected while parsing.
#[derive(Error, Debug)]
pub enum TokenRejection {
  #[error("could not decode token segment")]
  Decode(#[source] base64::DecodeError),
  #[error("signature does not match token claims")]
  InvalidSignature(#[source] MacErrors),
  #[error("could not deserialize token claims")]
  Deserialize(#[source] serde_json::Error),
  #[error("token expired at {expires_at}, current time is {now}")]
  TokenExpired { expires_at: i64, now: i64 },
}

#[derive(Error, Debug)]
pub enum GenericError {
  #[error("No signing key was provided")]
  NoKeyProvided,
  #[error("invalid token format")]
  InvalidTokenFormat,
  #[error("invalid token")]
  InvalidToken(#[from] TokenRejection),
  #[error("failed to marshal token claims")]
  ClaimsSerialization(#[source] serde_json::Error),
  #[error("error calculating signature")]
  SignatureComputation(#[source] MacErrors),
}

impl GenericError {
  /// The token could not be split, decoded, or deserialized.
  pub fn is_malformed(&self) -> bool {
    matches!(
      self,
      GenericError::InvalidTokenFormat
        | GenericError::InvalidToken(TokenRejection::Decode(_))
        | GenericError::InvalidToken(TokenRejection::Deserialize(_))
    )
  }

  /// The token was well formed but its signature did not verify.
  pub fn is_tampered(&self) -> bool {
    matches!(self, GenericError::InvalidToken(TokenRejection::InvalidSignature(_)))
  }

  pub fn is_expired(&self) -> bool {
    matches!(self, GenericError::InvalidToken(TokenRejection::TokenExpired { .. }))
  }

  /// The rejection cause, when this is an `InvalidToken` error.
  pub fn rejection(&self) -> Option<&TokenRejection> {
    match self {
      GenericError::InvalidToken(rejection) => Some(rejection),
      _ => None,
    }
  }
}
