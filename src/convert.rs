use crate::error::Error;
use crate::token::Token;

/// Reorder `tokens` from infix to postfix order, using the shunting-yard
/// algorithm.
///
/// Operands are emitted as they come, operators wait on a stack until an
/// operator with lower precedence (or the end of their parenthesized group)
/// shows up. A function is emitted right after the group holding its
/// argument. Parenthesis are consumed and never appear in the output.
///
/// Returns `Error::MalformedExpression` if the parenthesis are not balanced.
///
/// # Examples
///
/// ```
/// # use postfix::{convert, render, tokenize};
/// let tokens = convert(tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(render(&tokens), "2 3 4 * +");
///
/// assert!(convert(tokenize("2 + 3)").unwrap()).is_err());
/// ```
pub fn convert<I>(tokens: I) -> Result<Vec<Token>, Error>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Function(..) | Token::LParen => operators.push(token),
            Token::Number(_) | Token::Identifier(_) => output.push(token),
            Token::Op(incoming) => {
                while let Some(&Token::Op(top)) = operators.last() {
                    if !top.pops_before(incoming) {
                        break;
                    }
                    operators.pop();
                    trace!("emit {} before {}", top.symbol(), incoming.symbol());
                    output.push(Token::Op(top));
                }
                operators.push(token);
            }
            Token::RParen => {
                close_group(&mut operators, &mut output)?;
                if let Some(Token::Function(..)) = operators.last() {
                    if let Some(function) = operators.pop() {
                        trace!("emit function {}", function);
                        output.push(function);
                    }
                }
            }
        }
    }

    while let Some(token) = operators.pop() {
        if let Token::LParen = token {
            debug!("unclosed '(' left after {} tokens of output", output.len());
            return Err(Error::mismatched_parenthesis("unclosed '('"));
        }
        output.push(token);
    }

    debug!("converted expression into {} postfix tokens", output.len());
    Ok(output)
}

/// Pop operators and functions into `output` up to the nearest `(`, which is
/// discarded.
fn close_group(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<(), Error> {
    while let Some(token) = operators.pop() {
        if let Token::LParen = token {
            return Ok(());
        }
        output.push(token);
    }
    debug!("')' without matching '(' after {} tokens of output", output.len());
    Err(Error::mismatched_parenthesis("')' without matching '('"))
}

/// Render tokens as their text, separated by single spaces.
///
/// ```
/// # use postfix::{render, Op, Token};
/// let tokens = [Token::Number("1".into()), Token::Number("2".into()), Token::Op(Op::Plus)];
/// assert_eq!(render(&tokens), "1 2 +");
/// ```
pub fn render(tokens: &[Token]) -> String {
    let mut rendered = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            rendered.push(' ');
        }
        rendered.push_str(&token.to_string());
    }
    rendered
}
