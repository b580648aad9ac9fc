//! Encoding, validation and decoding of BaseUwU text.
//!
//! All functions work on whole buffers: the complete input is given up front
//! and the complete output is produced in one call. Output buffers are sized
//! exactly once, [`encoded_len`] characters for encoding and [`decoded_len`]
//! bytes for decoding, so they never grow while being written.
//!
//! # Validation
//!
//! Text is valid BaseUwU when:
//!
//! 1. its length is a multiple of [`GROUP_LEN`],
//! 2. the middle character of every token is `w`,
//! 3. the outer characters of every token are both `O` or both `U`.
//!
//! The rules are checked in that order over the whole text, the first broken
//! one is reported by [`check`]. [`decode`] never produces output for text
//! that breaks any of them.

use bytes::BufMut;
use tracing::{debug, error, trace};

use crate::ensure;
use crate::error::{UwuError, Violation};
use crate::token::{BITS_PER_BYTE, GROUP_LEN, ONE_EYE, SEPARATOR, TOKEN_LEN, Token};

/// Length of the text encoding `input_len` bytes, `None` if it overflows `usize`.
#[must_use]
pub const fn encoded_len(input_len: usize) -> Option<usize> {
    input_len.checked_mul(GROUP_LEN)
}

/// Number of bytes `text_len` characters decode to, `None` if `text_len` is
/// not a multiple of [`GROUP_LEN`].
#[must_use]
pub const fn decoded_len(text_len: usize) -> Option<usize> {
    if text_len % GROUP_LEN == 0 { Some(text_len / GROUP_LEN) } else { None }
}

/// Encodes `input` into a newly allocated string.
///
/// # Errors
///
/// Returns [`UwuError::Allocation`] if the output string cannot be allocated.
/// No input is rejected otherwise.
///
/// # Example
///
/// ```
/// assert_eq!(base_uwu::encode([0x0Fu8]).unwrap(), "OwOOwOOwOOwOUwUUwUUwUUwU");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> Result<String, UwuError> {
    let input = input.as_ref();
    trace!(input_len = input.len(), "encoding");

    // saturate so an overflowing length fails the reservation below
    let requested = input.len().saturating_mul(GROUP_LEN);
    let mut output = String::new();
    output.try_reserve_exact(requested).map_err(|e| {
        error!(requested, cause = %e, "failed to allocate encode buffer");
        UwuError::allocation(requested, e)
    })?;

    for token in tokens(input) {
        output.push_str(token.as_str());
    }
    Ok(output)
}

/// Appends the encoded form of `input` to `dst`.
///
/// Writes the same bytes [`encode`] returns. `dst` is not reserved up front,
/// callers wanting a single allocation can reserve [`encoded_len`] themselves.
pub fn encode_into<B: BufMut>(input: &[u8], dst: &mut B) {
    trace!(input_len = input.len(), "encoding into buffer");
    for token in tokens(input) {
        dst.put_slice(token.as_bytes());
    }
}

/// Returns whether `input` is well formed BaseUwU text.
///
/// Never fails and never allocates, any text or byte string may be passed.
///
/// ```
/// assert!(base_uwu::validate(""));
/// assert!(base_uwu::validate("UwUUwUOwOUwUUwUOwOOwOUwU"));
/// assert!(!base_uwu::validate("UwUUwUOwO"));
/// ```
#[must_use]
pub fn validate(input: impl AsRef<[u8]>) -> bool {
    check(input).is_ok()
}

/// Like [`validate`], but tells which rule is broken and where.
///
/// # Errors
///
/// Returns the first [`Violation`] found, rules being checked in order.
pub fn check(input: impl AsRef<[u8]>) -> Result<(), Violation> {
    let input = input.as_ref();
    ensure!(input.len() % GROUP_LEN == 0, Violation::Length { len: input.len() });

    let (triplets, _) = input.as_chunks::<TOKEN_LEN>();

    for (index, triplet) in triplets.iter().enumerate() {
        let middle = triplet[1];
        ensure!(middle == SEPARATOR, Violation::Separator { offset: index * TOKEN_LEN + 1, found: middle });
    }

    // separators are known good here, so only the eyes can fail
    for (index, triplet) in triplets.iter().enumerate() {
        Token::from_triplet(*triplet, index * TOKEN_LEN)?;
    }

    Ok(())
}

/// Decodes `input` into a newly allocated byte vector.
///
/// # Errors
///
/// Returns [`UwuError::InvalidFormat`] if `input` is not valid BaseUwU, and
/// [`UwuError::Allocation`] if the output cannot be allocated.
///
/// # Example
///
/// ```
/// let text = base_uwu::encode(b"Hewwo! :3").unwrap();
/// assert_eq!(base_uwu::decode(&text).unwrap(), b"Hewwo! :3");
/// assert!(base_uwu::decode("OwU").unwrap_err().is_invalid_format());
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, UwuError> {
    let input = input.as_ref();
    trace!(input_len = input.len(), "decoding");
    ensure_valid(input)?;

    let requested = input.len() / GROUP_LEN;
    let mut output = Vec::new();
    output.try_reserve_exact(requested).map_err(|e| {
        error!(requested, cause = %e, "failed to allocate decode buffer");
        UwuError::allocation(requested, e)
    })?;

    output.extend(bytes(input));
    Ok(output)
}

/// Appends the bytes `input` decodes to onto `dst`.
///
/// # Errors
///
/// Returns [`UwuError::InvalidFormat`] if `input` is not valid BaseUwU, in
/// which case nothing is written to `dst`.
pub fn decode_into<B: BufMut>(input: impl AsRef<[u8]>, dst: &mut B) -> Result<(), UwuError> {
    let input = input.as_ref();
    trace!(input_len = input.len(), "decoding into buffer");
    ensure_valid(input)?;

    for byte in bytes(input) {
        dst.put_u8(byte);
    }
    Ok(())
}

fn ensure_valid(input: &[u8]) -> Result<(), UwuError> {
    check(input).map_err(|violation| {
        debug!(%violation, input_len = input.len(), "rejecting malformed uwu text");
        UwuError::invalid_format(violation)
    })
}

/// Tokens for every bit of `input`, most significant bit first.
fn tokens(input: &[u8]) -> impl Iterator<Item = Token> + '_ {
    input
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| Token::from_bit((byte >> shift) & 1 == 1)))
}

/// Reassembles bytes from text that already passed [`check`].
fn bytes(input: &[u8]) -> impl Iterator<Item = u8> + '_ {
    input.chunks_exact(GROUP_LEN).map(|group| {
        group.chunks_exact(TOKEN_LEN).fold(0u8, |byte, token| (byte << 1) | u8::from(token[0] == ONE_EYE))
    })
}
