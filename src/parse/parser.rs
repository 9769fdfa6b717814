use super::lexer::*;
use crate::common::Int;
use crate::roll::Mode;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

/// One line of input to the roll prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Roll,
    /// Change the target; `None` selects the default.
    SetBound(Option<Int>),
    SetMode(Mode),
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: Option<TokenKind>,
        expected: Vec<TokenKind>,
    },
    UnexpectedString {
        expected: Vec<TokenKind>,
    },
    TrailingInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken {
                found: Some(found),
                expected,
            } => {
                write!(f, "unexpected {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedToken {
                found: None,
                expected,
            } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedString { expected } => {
                write!(f, "expected ")?;
                fmt_expected(expected, f)
            }
            Self::TrailingInput => write!(f, "nothing may follow this command"),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expected {
        [] => Ok(()),
        [a] => f.write_str(a.as_str()),
        [a, b] => write!(f, "{} or {}", a, b),
        [init @ .., last] => {
            for exp in init {
                write!(f, "{}, ", exp)?;
            }
            write!(f, "or {}", last)
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const COMMANDS: &'static [TokenKind] = &[
        TokenKind::Roll,
        TokenKind::Bound,
        TokenKind::Integer(0),
        TokenKind::Mode,
        TokenKind::Help,
        TokenKind::Quit,
    ];

    const MODES: &'static [TokenKind] = &[TokenKind::Exact, TokenKind::Ceiling];

    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    /// An empty line counts as a roll.
    pub fn parse(mut self) -> PResult<Command> {
        let command = match self.advance() {
            None | Some(TokenKind::Roll) => Command::Roll,
            Some(TokenKind::Integer(n)) => Command::SetBound(Some(n)),
            Some(TokenKind::Bound) => Command::SetBound(self.parse_bound_value()),
            Some(TokenKind::Mode) => Command::SetMode(self.parse_mode()?),
            Some(TokenKind::Help) => Command::Help,
            Some(TokenKind::Quit) => Command::Quit,
            Some(found) => return self.unexpected(found, Self::COMMANDS),
        };
        self.finish()?;
        Ok(command)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn parse_bound_value(&mut self) -> Option<Int> {
        match self.lexer.peek() {
            Some(&TokenKind::Integer(n)) => {
                self.advance();
                Some(n)
            }
            _ => None,
        }
    }

    fn parse_mode(&mut self) -> PResult<Mode> {
        match self.advance() {
            Some(TokenKind::Exact) => Ok(Mode::Exact),
            Some(TokenKind::Ceiling) => Ok(Mode::Ceiling),
            Some(found) => self.unexpected(found, Self::MODES),
            None => self.error(ParseErrorKind::UnexpectedToken {
                found: None,
                expected: Self::MODES.to_vec(),
            }),
        }
    }

    fn finish(&mut self) -> PResult<()> {
        match self.advance() {
            None => Ok(()),
            Some(_) => self.error(ParseErrorKind::TrailingInput),
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected<T>(&mut self, found: TokenKind, expected: &[TokenKind]) -> PResult<T> {
        let expected = expected.to_vec();
        if found == TokenKind::Error {
            self.error(ParseErrorKind::UnexpectedString { expected })
        } else {
            self.error(ParseErrorKind::UnexpectedToken {
                found: Some(found),
                expected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str, expected: Command) {
        assert_eq!(Parser::new(s).parse(), Ok(expected));
    }

    fn check_err(s: &str, kind: ParseErrorKind, span: Range<usize>) {
        let err = Parser::new(s).parse().unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(err.span, span);
    }

    #[test]
    fn test_parse_commands() {
        check("", Command::Roll);
        check("   ", Command::Roll);
        check("roll", Command::Roll);
        check("r", Command::Roll);
        check("13", Command::SetBound(Some(13)));
        check("bound 20", Command::SetBound(Some(20)));
        check("b", Command::SetBound(None));
        check("bound -1", Command::SetBound(Some(-1)));
        check("mode exact", Command::SetMode(Mode::Exact));
        check("mode ceiling", Command::SetMode(Mode::Ceiling));
        check("help", Command::Help);
        check("quit", Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        check_err(
            "mode roll",
            ParseErrorKind::UnexpectedToken {
                found: Some(TokenKind::Roll),
                expected: vec![TokenKind::Exact, TokenKind::Ceiling],
            },
            5..9,
        );
        check_err("roll 3", ParseErrorKind::TrailingInput, 5..6);
        check_err("bound x", ParseErrorKind::TrailingInput, 6..7);
        check_err(
            "x",
            ParseErrorKind::UnexpectedString {
                expected: Parser::COMMANDS.to_vec(),
            },
            0..1,
        );
    }

    #[test]
    fn test_error_message() {
        let err = Parser::new("mode").parse().unwrap_err();
        assert_eq!(
            err.kind.to_string(),
            "unexpected end of input, expected 'exact' or 'ceiling'"
        );
        let err = Parser::new("mode help").parse().unwrap_err();
        assert_eq!(
            err.to_string(),
            "error at position 5 (\"help\"): unexpected 'help', expected 'exact' or 'ceiling'"
        );
    }
}
