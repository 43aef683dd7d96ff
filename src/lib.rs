#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Postfix, a crate converting mathematical expressions from infix to
//! postfix (reverse polish) notation.
//!
//! The easiest way to use this crate is with the
//! [`infix_to_postfix`](fn.infix_to_postfix.html) function:
//!
//! ```
//! assert_eq!(postfix::infix_to_postfix("3 + 5 * 2"), Ok("3 5 2 * +".to_string()));
//! assert_eq!(
//!     postfix::infix_to_postfix("5x^2 / sin(x)"),
//!     Ok("5 x 2 ^ / x sin /".to_string())
//! );
//! ```
//!
//! The two stages can also be used separately. [`tokenize`](fn.tokenize.html)
//! splits the text into [`Token`](enum.Token.html)s, and
//! [`convert`](fn.convert.html) reorders them. The result stays a sequence of
//! typed tokens, ready for a stack based evaluator.
//!
//! ```
//! use postfix::{convert, tokenize, Op, Token};
//!
//! let tokens = convert(tokenize("a - b").unwrap()).unwrap();
//! assert_eq!(tokens[2], Token::Op(Op::Minus));
//! ```
//!
//! # Language definition
//!
//! The input can contain the following elements:
//!
//! - integer literals: a run of digits such as `42`. There is no sign and no
//!   decimal point;
//! - variables: a run of lowercase letters or a run of uppercase letters,
//!   `x`, `abc`, `XY`. Changing case starts a new token, so `aB` is two
//!   variables;
//! - left and right parenthesis;
//! - mathematical operators: `+`, `-`, `*`, `/` and `^`. `^` binds tighter
//!   than `*` and `/`, which bind tighter than `+` and `-`. `^` is right
//!   associative, all others are left associative;
//! - function calls: `sin(a)`, `COS(b)`, `tan(c)`. Function names are case
//!   insensitive and take a single argument.
//!
//! Any other character, whitespace included, is ignored. Nothing is inserted
//! between juxtaposed operands: `5x` is the two tokens `5` and `x`.
//!
//! Conversion fails with [`Error::MalformedExpression`](enum.Error.html) when
//! the parenthesis are unbalanced, and with
//! [`Error::InvalidInput`](enum.Error.html) on empty input.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod convert;
mod error;
mod functions;
mod lexer;
mod postfix;
mod token;

pub use crate::postfix::Postfix;
pub use convert::{convert, render};
pub use error::Error;
pub use functions::{is_function, Function, FUNCTIONS};
pub use lexer::tokenize;
pub use token::{Associativity, Op, Token};

/// Convert an infix `expression` to its postfix form, with tokens separated
/// by single spaces.
///
/// # Example
///
/// ```
/// # use postfix::infix_to_postfix;
/// assert_eq!(infix_to_postfix("2^3^4"), Ok("2 3 4 ^ ^".to_string()));
/// assert!(infix_to_postfix("(2 + 3").is_err());
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<String, Error> {
    Postfix::parse(expression).map(|expr| expr.to_string())
}
