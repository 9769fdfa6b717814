use crate::common::Int;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer<'_> {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[token("roll")]
    #[token("r")]
    Roll,
    #[token("bound")]
    #[token("b")]
    Bound,
    #[token("mode")]
    Mode,
    #[token("exact")]
    Exact,
    #[token("ceiling")]
    Ceiling,
    #[token("help")]
    #[token("?")]
    Help,
    #[token("quit")]
    #[token("exit")]
    #[token("q")]
    Quit,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Integer(_) => "<integer>",
            Roll => "'roll'",
            Bound => "'bound'",
            Mode => "'mode'",
            Exact => "'exact'",
            Ceiling => "'ceiling'",
            Help => "'help'",
            Quit => "'quit'",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
