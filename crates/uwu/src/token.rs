//! The two tokens of the BaseUwU alphabet.
//!
//! Every bit of the input is written as one three character token:
//!
//! - `OwO` for a `0` bit
//! - `UwU` for a `1` bit
//!
//! The middle character of a token is always `w`, the outer characters (the
//! "eyes") are equal and either both `O` or both `U`. Tokens are concatenated
//! without separators, most significant bit first, so every input byte
//! occupies exactly [`GROUP_LEN`] characters of encoded text.

use std::fmt;
use std::str::FromStr;

use crate::error::Violation;

/// Number of characters in a single token.
pub const TOKEN_LEN: usize = 3;

/// Number of tokens needed for one input byte.
pub const BITS_PER_BYTE: usize = 8;

/// Number of encoded characters per input byte.
pub const GROUP_LEN: usize = TOKEN_LEN * BITS_PER_BYTE;

pub(crate) const ZERO_EYE: u8 = b'O';
pub(crate) const ONE_EYE: u8 = b'U';
pub(crate) const SEPARATOR: u8 = b'w';

/// A single encoded bit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `OwO`, a `0` bit.
    OwO,
    /// `UwU`, a `1` bit.
    UwU,
}

impl Token {
    /// Returns the token representing `bit`.
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit { Self::UwU } else { Self::OwO }
    }

    /// Returns the bit this token stands for.
    #[must_use]
    pub const fn bit(self) -> bool {
        matches!(self, Self::UwU)
    }

    /// The outer character of the token, `O` or `U`.
    #[must_use]
    pub const fn eye(self) -> u8 {
        match self {
            Self::OwO => ZERO_EYE,
            Self::UwU => ONE_EYE,
        }
    }

    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8; TOKEN_LEN] {
        match self {
            Self::OwO => b"OwO",
            Self::UwU => b"UwU",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OwO => "OwO",
            Self::UwU => "UwU",
        }
    }

    /// Parses a three character triplet found at `offset` of some larger text.
    ///
    /// The `offset` is only used to position the returned [`Violation`], the
    /// separator offset saturates at `usize::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::Separator`] when the middle character is not `w`,
    /// and [`Violation::Eyes`] when the outer characters are not both `O` or
    /// both `U`.
    pub const fn from_triplet(triplet: [u8; TOKEN_LEN], offset: usize) -> Result<Self, Violation> {
        if triplet[1] != SEPARATOR {
            return Err(Violation::Separator { offset: offset.saturating_add(1), found: triplet[1] });
        }
        match (triplet[0], triplet[2]) {
            (ZERO_EYE, ZERO_EYE) => Ok(Self::OwO),
            (ONE_EYE, ONE_EYE) => Ok(Self::UwU),
            _ => Err(Violation::Eyes { offset }),
        }
    }
}

impl From<bool> for Token {
    fn from(bit: bool) -> Self {
        Self::from_bit(bit)
    }
}

impl From<Token> for bool {
    fn from(token: Token) -> Self {
        token.bit()
    }
}

impl TryFrom<[u8; TOKEN_LEN]> for Token {
    type Error = Violation;

    fn try_from(triplet: [u8; TOKEN_LEN]) -> Result<Self, Self::Error> {
        Self::from_triplet(triplet, 0)
    }
}

impl FromStr for Token {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Ok(triplet) = <[u8; TOKEN_LEN]>::try_from(s.as_bytes()) else {
            return Err(Violation::Length { len: s.len() });
        };
        Self::try_from(triplet)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mapping() {
        assert_eq!(Token::from_bit(false), Token::OwO);
        assert_eq!(Token::from_bit(true), Token::UwU);
        assert!(!Token::OwO.bit());
        assert!(Token::UwU.bit());
        assert!(bool::from(Token::from(true)));
    }

    #[test]
    fn test_shape() {
        for token in [Token::OwO, Token::UwU] {
            let bytes = token.as_bytes();
            assert_eq!(bytes.len(), TOKEN_LEN);
            assert_eq!(bytes[1], b'w');
            assert_eq!(bytes[0], bytes[2]);
            assert_eq!(bytes[0], token.eye());
            assert_eq!(token.as_str().as_bytes(), bytes);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("OwO".parse::<Token>(), Ok(Token::OwO));
        assert_eq!("UwU".parse::<Token>(), Ok(Token::UwU));
        assert_eq!(Token::UwU.to_string(), "UwU");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("OwU".parse::<Token>(), Err(Violation::Eyes { offset: 0 }));
        assert_eq!("AwA".parse::<Token>(), Err(Violation::Eyes { offset: 0 }));
        assert_eq!("UaU".parse::<Token>(), Err(Violation::Separator { offset: 1, found: b'a' }));
        assert_eq!("UwUU".parse::<Token>(), Err(Violation::Length { len: 4 }));
        assert_eq!("".parse::<Token>(), Err(Violation::Length { len: 0 }));
    }

    #[test]
    fn test_triplet_offset() {
        assert_eq!(Token::from_triplet(*b"OxO", 21), Err(Violation::Separator { offset: 22, found: b'x' }));
        assert_eq!(Token::from_triplet(*b"UwO", 21), Err(Violation::Eyes { offset: 21 }));
        assert_eq!(Token::try_from(*b"UwU"), Ok(Token::UwU));
    }

    #[test]
    fn test_triplet_offset_saturates() {
        assert_eq!(Token::from_triplet(*b"OxO", usize::MAX), Err(Violation::Separator { offset: usize::MAX, found: b'x' }));
        assert_eq!(Token::from_triplet(*b"OwU", usize::MAX), Err(Violation::Eyes { offset: usize::MAX }));
    }
}
