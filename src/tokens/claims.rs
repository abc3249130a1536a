//! The signed envelope carried in the first token segment.

use serde::{Deserialize, Serialize};

/// A payload together with its optional expiration, in Unix seconds.
///
/// Serializes as `{"p": <payload>, "e": <expires_at>}`, leaving `"e"` out entirely when
/// there is no expiration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims<P> {
  #[serde(rename = "p")]
  pub payload: P,
  #[serde(rename = "e", default, skip_serializing_if = "Option::is_none")]
  pub expires_at: Option<i64>,
}

impl<P> Claims<P> {
  pub fn new(payload: P, expires_at: Option<i64>) -> Self {
    Claims { payload, expires_at }
  }

  /// The expiration to enforce. Zero is treated the same as absent.
  pub fn expiration(&self) -> Option<i64> {
    self.expires_at.filter(|expires_at| *expires_at != 0)
  }

  /// Whether these claims have lapsed at `now`. A token stays valid through the second
  /// equal to its expiration.
  pub fn is_expired_at(&self, now: i64) -> bool {
    match self.expiration() {
      Some(expires_at) => now > expires_at,
      None => false,
    }
  }

  pub fn into_payload(self) -> P {
    self.payload
  }
}
