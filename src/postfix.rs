use crate::convert::{convert, render};
use crate::error::Error;
use crate::lexer::tokenize;
use crate::token::Token;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A mathematical expression converted to postfix order.
///
/// # Examples
/// ```
/// # use postfix::Postfix;
/// let expr = Postfix::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.to_string(), "3 5 2 * +");
/// assert_eq!(expr.len(), 5);
///
/// let expr: Postfix = "sin(a) ^ b".parse().unwrap();
/// assert_eq!(expr.to_string(), "a sin b ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Tokenize and convert the given infix `expression`.
    ///
    /// # Examples
    /// ```
    /// # use postfix::Postfix;
    /// // A valid expression
    /// assert!(Postfix::parse("(3 + 5) * 2").is_ok());
    /// // invalid expressions
    /// assert!(Postfix::parse("(3 + 5 * 2").is_err());
    /// assert!(Postfix::parse("").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = convert(tokenize(expression)?)?;
        Ok(Self { tokens })
    }

    /// The tokens in postfix order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take the tokens out, in postfix order
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Number of tokens, parenthesis excluded
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the expression holds no token at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the numbers and variables, in order of appearance
    pub fn operands(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_operand())
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&render(&self.tokens))
    }
}

impl FromStr for Postfix {
    type Err = Error;

    fn from_str(expression: &str) -> Result<Self, Error> {
        Self::parse(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::Postfix;
    use crate::token::{Op, Token};

    #[test]
    fn parse() {
        let valid_expressions = [
            "3 + 5",
            "(3 + 5)*45",
            "(3 +\t5)*\n45",
            "sin(34) ^ cos(28)",
            "5x^2 / sin(x)",
        ];
        for expr in &valid_expressions {
            assert!(Postfix::parse(expr).is_ok());
        }

        let invalid_expressions = ["", "(3", "3)", "((3)", "sin(x))"];
        for expr in &invalid_expressions {
            assert!(Postfix::parse(expr).is_err());
        }
    }

    #[test]
    fn operands() {
        let expr = Postfix::parse("(a + 12) * b").unwrap();
        let operands: Vec<String> = expr.operands().map(ToString::to_string).collect();
        assert_eq!(operands, ["a", "12", "b"]);
    }

    #[test]
    fn tokens() {
        let expr = Postfix::parse("a-b").unwrap();
        assert_eq!(
            expr.tokens(),
            &[
                Token::Identifier("a".into()),
                Token::Identifier("b".into()),
                Token::Op(Op::Minus),
            ]
        );
        assert!(!expr.is_empty());
        assert_eq!(expr.clone().into_tokens(), expr.tokens());
    }

    #[test]
    fn error_message() {
        let result = Postfix::parse("(2+3");
        assert_eq!(
            result.err().unwrap().to_string(),
            "MalformedExpressionError: mismatched parenthesis: unclosed '('"
        );
        let result = Postfix::parse("");
        assert_eq!(
            result.err().unwrap().to_string(),
            "InvalidInputError: expression must be non-empty"
        );
    }
}
