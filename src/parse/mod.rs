mod lexer;
mod parser;

pub use lexer::TokenKind;
pub use parser::{Command, ParseError, ParseErrorKind};

/// Reads one line typed at the roll prompt.
///
/// ```
/// use target_dice::parse::{parse_command, Command};
///
/// assert_eq!(parse_command("bound 13").unwrap(), Command::SetBound(Some(13)));
/// assert_eq!(parse_command("").unwrap(), Command::Roll);
/// ```
pub fn parse_command(s: &str) -> Result<Command, ParseError> {
    parser::Parser::new(s).parse()
}
