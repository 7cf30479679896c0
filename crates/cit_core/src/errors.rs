//! Core error kinds shared by the registry and domain modules.

use core::fmt;

/// Minimal error set for core-domain validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// A group declared in the IR has zero options.
    EmptyGroup(String),
    /// The same option name was declared in two different groups.
    DuplicateOption(String),
    /// No options at all were found across parameters/environments.
    NoOptions,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyGroup(g) => write!(f, "group '{g}' has no options"),
            CoreError::DuplicateOption(o) => write!(f, "duplicate option name: '{o}'"),
            CoreError::NoOptions => write!(f, "input contains no options for encoding"),
        }
    }
}

impl std::error::Error for CoreError {}
