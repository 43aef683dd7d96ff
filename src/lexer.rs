use crate::error::Error;
use crate::functions::Function;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Split `expression` into tokens.
///
/// Numbers are runs of digits, identifiers are runs of letters of the same
/// case, and `+ - * / ^ ( )` are single character tokens. Any other character
/// is skipped.
///
/// # Examples
///
/// ```
/// # use postfix::{tokenize, Op, Token};
/// let tokens = tokenize("12 * ab").unwrap();
/// assert_eq!(tokens, vec![
///     Token::Number("12".into()),
///     Token::Op(Op::Mul),
///     Token::Identifier("ab".into()),
/// ]);
///
/// assert!(tokenize("").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, Error> {
    if expression.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(Lexer::new(expression).collect())
}

/// Iterator over the tokens of an expression, skipping ignored characters
pub(crate) struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str) -> Self {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Consume the characters following `first` while they match `class`
    fn run(&mut self, first: char, class: fn(&char) -> bool) -> String {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.input.next_if(class) {
            text.push(c);
        }
        text
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(c) = self.input.next() {
            let token = match c {
                c if c.is_ascii_digit() => Token::Number(self.run(c, char::is_ascii_digit)),
                c if c.is_ascii_lowercase() => identifier(self.run(c, char::is_ascii_lowercase)),
                c if c.is_ascii_uppercase() => identifier(self.run(c, char::is_ascii_uppercase)),
                '(' => Token::LParen,
                ')' => Token::RParen,
                c => match Op::from_char(c) {
                    Some(op) => Token::Op(op),
                    None => continue,
                },
            };
            return Some(token);
        }
        None
    }
}

fn identifier(name: String) -> Token {
    match Function::from_name(&name) {
        Some(function) => Token::Function(function, name),
        None => Token::Identifier(name),
    }
}
