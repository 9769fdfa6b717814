use crate::common::{Int, UInt};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RollError {
    #[error("please enter a number greater than 0 (got {0})")]
    InvalidInput(Int),
    #[error("target {bound} is too large; the largest target is {max}")]
    TooManyDice { bound: Int, max: UInt },
    #[error("{0}")]
    ParseError(#[from] crate::parse::ParseError),
}
