//! Error kinds surfaced by the encoding passes.

use thiserror::Error;

/// Failures from the condition compiler (tokenizer, shunting-yard, Tseitin).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConditionError {
    #[error("unrecognized character in guard expression: '{0}'")]
    UnrecognizedCharacter(char),
    #[error("mismatched parentheses in guard expression")]
    MismatchedParens,
    #[error("operator with missing operand in guard expression")]
    MissingOperand,
    #[error("guard expression did not reduce to a single value (residual stack size {0})")]
    InvalidExpression(usize),
    #[error("unknown property '{0}' referenced in strict mode")]
    UnknownProperty(String),
}

/// Failures from configuration validation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("interaction strength t must be >= 1, got {0}")]
    NonPositiveT(i64),
    #[error("slot count k must be >= 1, got {0}")]
    NonPositiveK(i64),
    #[error("interaction strength t={t} exceeds the number of groups ({groups})")]
    TTooLarge { t: u32, groups: usize },
}

/// The union of everything an encoding pass can fail with.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Core(#[from] cit_core::CoreError),
    #[error(transparent)]
    Condition(#[from] ConditionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
