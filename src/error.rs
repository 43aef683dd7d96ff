use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the postfix crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression text was empty
    InvalidInput(String),
    /// The token sequence can not be converted, e.g. unbalanced parenthesis
    MalformedExpression(String),
}

impl Error {
    pub(crate) fn empty_input() -> Self {
        Self::InvalidInput("expression must be non-empty".into())
    }

    pub(crate) fn mismatched_parenthesis(detail: &str) -> Self {
        Self::MalformedExpression(format!("mismatched parenthesis: {}", detail))
    }
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::InvalidInput(ref message) => write!(fmt, "InvalidInputError: {}", message),
            Self::MalformedExpression(ref message) => {
                write!(fmt, "MalformedExpressionError: {}", message)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Self::InvalidInput(_) | Self::MalformedExpression(_) => None,
        }
    }
}
