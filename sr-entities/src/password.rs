use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

const MIN_LENGTH: usize = 6;

/// A salted hash of a user password.
///
/// Plaintext passwords never leave the constructor.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Password(String);

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    /// Wrap an already hashed password, e.g. loaded from the database.
    pub const fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.len() < MIN_LENGTH || plain.chars().all(char::is_whitespace) {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(plain).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}
