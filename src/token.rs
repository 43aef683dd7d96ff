use crate::functions::Function;
use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in an expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of digits
    Number(String),
    /// A run of same-case letters naming a variable
    Identifier(String),
    /// A recognized function, with its name as written in the input
    Function(Function, String),
    /// A binary operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Token {
    /// Check if the token is a number or a variable
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Identifier(_))
    }

    /// Check if the token is a parenthesis
    pub fn is_paren(&self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(ref text) | Self::Identifier(ref text) | Self::Function(_, ref text) => {
                fmt.write_str(text)
            }
            Self::Op(op) => write!(fmt, "{}", op.symbol()),
            Self::LParen => fmt.write_str("("),
            Self::RParen => fmt.write_str(")"),
        }
    }
}

/// Grouping direction of operators with the same precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`
    Right,
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator for `c`, if any
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// The character used for this operator
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Get the grouping direction for chains of this operator
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Associativity::Left,
            Self::Exp => Associativity::Right,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        self.associativity() == Associativity::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Check if `self`, sitting on top of the operator stack, must be emitted
    /// before `incoming` is pushed.
    ///
    /// ```
    /// # use postfix::Op;
    /// assert!(Op::Mul.pops_before(Op::Plus));
    /// assert!(Op::Minus.pops_before(Op::Plus));
    /// assert!(!Op::Plus.pops_before(Op::Mul));
    /// assert!(!Op::Exp.pops_before(Op::Exp));
    /// ```
    pub fn pops_before(self, incoming: Self) -> bool {
        if self.precedence() == incoming.precedence() {
            self.is_left_associative()
        } else {
            self.precedence() > incoming.precedence()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Op, Token};
    use crate::functions::Function;
    use test_case::test_case;

    #[test_case(Op::Plus, Op::Plus => true ; "equal left associative pops")]
    #[test_case(Op::Plus, Op::Minus => true ; "plus yields to minus")]
    #[test_case(Op::Div, Op::Mul => true ; "div yields to mul")]
    #[test_case(Op::Mul, Op::Minus => true ; "higher weight pops")]
    #[test_case(Op::Exp, Op::Div => true ; "exp pops before div")]
    #[test_case(Op::Plus, Op::Exp => false ; "lower weight stays")]
    #[test_case(Op::Div, Op::Exp => false ; "div stays below exp")]
    #[test_case(Op::Exp, Op::Exp => false ; "right associative stays")]
    fn pops_before(top: Op, incoming: Op) -> bool {
        top.pops_before(incoming)
    }

    #[test]
    fn symbols() {
        for op in &[Op::Plus, Op::Minus, Op::Mul, Op::Div, Op::Exp] {
            assert_eq!(Op::from_char(op.symbol()), Some(*op));
        }
        assert_eq!(Op::from_char('('), None);
        assert_eq!(Op::from_char('%'), None);
    }

    #[test]
    fn display() {
        assert_eq!(Token::Number("42".into()).to_string(), "42");
        assert_eq!(Token::Identifier("xy".into()).to_string(), "xy");
        assert_eq!(Token::Function(Function::Sin, "SIN".into()).to_string(), "SIN");
        assert_eq!(Token::Op(Op::Exp).to_string(), "^");
        assert_eq!(Token::LParen.to_string(), "(");
        assert_eq!(Token::RParen.to_string(), ")");
    }
}
