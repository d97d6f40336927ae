#![no_std]
extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod error;
pub mod node;

#[cfg(test)]
mod tests;

pub use crate::{
    error::{NodeError, ParseError},
    node::{
        expression::{Expression, ExpressionKind, Operator},
        literal::{is_valid_literal, validate_literal},
        parser::{parse, parse_with_settings, ParseSettings},
    },
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
