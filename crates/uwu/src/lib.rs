//! BaseUwU, a binary to text encoding with a two token alphabet
//!
//! Every bit of the input becomes one three character token, `OwO` for a `0`
//! bit and `UwU` for a `1` bit. Tokens are written most significant bit first,
//! bytes in input order, without separators. One input byte therefore takes
//! exactly 24 characters of text.
//!
//! # Example
//!
//! ```
//! let text = base_uwu::encode(b"Hi").unwrap();
//! assert_eq!(text.len(), 48);
//! assert!(base_uwu::validate(&text));
//!
//! let bytes = base_uwu::decode(&text).unwrap();
//! assert_eq!(bytes, b"Hi");
//! ```
//!
//! # Format
//!
//! ```text
//! token    := "OwO" | "UwU"
//! document := token*
//! ```
//!
//! There is no header, length prefix or checksum. Text is recognized only by
//! its token structure and by its length being a multiple of 24.
//!
//! # Architecture
//!
//! - [`codec`]: [`encode`], [`validate`] and [`decode`], plus variants writing
//!   into a caller supplied [`bytes::BufMut`]
//! - [`token`]: the [`Token`] type and format constants
//! - [`error`]: [`UwuError`] and the [`Violation`] a rejected text carries
//!
//! # Error Handling
//!
//! [`validate`] is a plain predicate and never fails. [`encode`] and
//! [`decode`] return [`UwuError`]:
//!
//! - [`UwuError::InvalidFormat`]: the text given to [`decode`] is not valid
//! - [`UwuError::Allocation`]: the output buffer could not be allocated
//!
//! A failed [`decode`] never hands out partially decoded bytes.
//!
//! # Logging
//!
//! Operations emit `tracing` events (`trace` on entry, `debug` for rejected
//! text, `error` for failed allocations). Installing a subscriber is left to
//! the application.

pub mod codec;
pub mod error;
pub mod token;

mod utils;
pub(crate) use utils::ensure;

pub use codec::{check, decode, decode_into, decoded_len, encode, encode_into, encoded_len, validate};
pub use error::{UwuError, Violation};
pub use token::{BITS_PER_BYTE, GROUP_LEN, TOKEN_LEN, Token};
