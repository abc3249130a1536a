//! Compact, URL safe tokens that carry a serde payload signed with HMAC-SHA1 or
//! HMAC-SHA256, optionally expiring.
//!
//! ```
//! use signed_token::Signer;
//! use std::time::Duration;
//!
//! let signer = Signer::<String>::new256("signing-key");
//! let token = signer.sign_temporary(&String::from("user-42"), Duration::from_secs(300))?;
//! assert_eq!("user-42", signer.parse(&token)?);
//! # Ok::<(), signed_token::errors::GenericError>(())
//! ```
//!
//! Payloads are signed, not encrypted. Anyone holding a token can read what it carries.

#[cfg(not(any(feature = "chrono", feature = "time")))]
compile_error!("either the `chrono` or the `time` feature must be enabled");

pub mod encoding;
pub mod errors;
pub mod mac;
pub mod tokens;

pub use self::errors::{GenericError, MacErrors, TokenRejection};
pub use self::mac::MacAlgorithm;
pub use self::tokens::*;
