use crate::lexer::token::Token;
use itertools::Itertools;
use std::{fmt, fmt::Display};

/// The AST root: an ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", Statement::token_literal)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let {
        token: Token,
        name: Ident,
        value: Option<Expr>,
    },
    Return {
        token: Token,
        return_value: Option<Expr>,
    },
    Expression {
        token: Token,
        expression: Option<Expr>,
    },
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.literal,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = ", token.literal, name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Return {
                token,
                return_value,
            } => {
                write!(f, "{} ", token.literal)?;
                if let Some(return_value) = return_value {
                    write!(f, "{}", return_value)?;
                }
                write!(f, ";")
            }
            Statement::Expression { expression, .. } => match expression {
                Some(expression) => write!(f, "{}", expression),
                None => Ok(()),
            },
        }
    }
}

/// Brace-delimited statement list; the token is the opening `{`. Blocks
/// only occur as the arms of `if` expressions and function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub token: Token,
    pub value: String,
}

impl Ident {
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    IntegerLiteral {
        token: Token,
        value: i64,
    },
    Boolean {
        token: Token,
        value: bool,
    },
    Prefix {
        token: Token,
        operator: Prefix,
        right: Box<Expr>,
    },
    Infix {
        token: Token,
        operator: Infix,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    Function {
        token: Token,
        parameters: Vec<Ident>,
        body: Block,
    },
    Call {
        token: Token,
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        match self {
            Expr::Ident(ident) => ident.token_literal(),
            Expr::IntegerLiteral { token, .. }
            | Expr::Boolean { token, .. }
            | Expr::Prefix { token, .. }
            | Expr::Infix { token, .. }
            | Expr::If { token, .. }
            | Expr::Function { token, .. }
            | Expr::Call { token, .. } => &token.literal,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{}", ident),
            // Integers and booleans render their source text.
            Expr::IntegerLiteral { token, .. } | Expr::Boolean { token, .. } => {
                write!(f, "{}", token.literal)
            }
            Expr::Prefix {
                operator, right, ..
            } => write!(f, "({}{})", operator, right),
            Expr::Infix {
                operator,
                left,
                right,
                ..
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else {}", alternative)?;
                }
                Ok(())
            }
            Expr::Function {
                token,
                parameters,
                body,
            } => write!(
                f,
                "{}({}) {}",
                token.literal,
                parameters.iter().join(", "),
                body
            ),
            Expr::Call {
                function,
                arguments,
                ..
            } => write!(f, "{}({})", function, arguments.iter().join(", ")),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Prefix {
    Minus,
    Bang,
}

impl Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Minus => write!(f, "-"),
            Prefix::Bang => write!(f, "!"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Infix {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
}

impl Display for Infix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infix::Plus => write!(f, "+"),
            Infix::Minus => write!(f, "-"),
            Infix::Multiply => write!(f, "*"),
            Infix::Divide => write!(f, "/"),
            Infix::Equal => write!(f, "=="),
            Infix::NotEqual => write!(f, "!="),
            Infix::GreaterThan => write!(f, ">"),
            Infix::LessThan => write!(f, "<"),
        }
    }
}

#[derive(Debug, PartialOrd, PartialEq, Clone, Copy)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::token::TokenKind;

    fn ident(name: &str) -> Ident {
        Ident {
            token: Token::new(TokenKind::Ident, name, 1),
            value: name.to_string(),
        }
    }

    #[test]
    fn program_display() {
        let program = Program {
            statements: vec![Statement::Let {
                token: Token::new(TokenKind::Let, "let", 1),
                name: ident("myVar"),
                value: Some(Expr::Ident(ident("anotherVar"))),
            }],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn valueless_statements_display() {
        let program = Program {
            statements: vec![
                Statement::Let {
                    token: Token::new(TokenKind::Let, "let", 1),
                    name: ident("x"),
                    value: None,
                },
                Statement::Return {
                    token: Token::new(TokenKind::Return, "return", 1),
                    return_value: None,
                },
            ],
        };

        assert_eq!(program.to_string(), "let x = ;return ;");
    }

    #[test]
    fn empty_program_token_literal() {
        assert_eq!(Program::default().token_literal(), "");
    }
}
