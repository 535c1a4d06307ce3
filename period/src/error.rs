use std::fmt;

use thiserror::Error;

/// A single malformed token or name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("syntax error in {token:?}: {message}")]
    Syntax { token: String, message: String },
    #[error("invalid instant {value:?} in {token:?}")]
    InvalidInstant { token: String, value: String },
    #[error("{sentinel} cannot be the {side} bound in {token:?}")]
    MisplacedInfinity { token: String, sentinel: &'static str, side: &'static str },
    #[error("unknown period relation: {0}")]
    UnknownRelation(String),
}

impl ParseError {
    /// The offending token, when the error came from a serialized Period.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Syntax { token, .. } | Self::InvalidInstant { token, .. } | Self::MisplacedInfinity { token, .. } => Some(token),
            Self::UnknownRelation(_) => None,
        }
    }
}

/// Every error found while parsing a batch of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ParseError> { self.0.iter() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

impl From<ParseError> for ParseErrors {
    fn from(error: ParseError) -> Self { ParseErrors(vec![error]) }
}

impl IntoIterator for ParseErrors {
    type Item = ParseError;
    type IntoIter = std::vec::IntoIter<ParseError>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}
