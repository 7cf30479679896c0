//! Variable identifiers and signed literals.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A propositional variable id. Ids are 1-based and allocated exactly once
/// by a [`crate::registry::VariableRegistry`]; they never participate in
/// arithmetic other than negation-into-`Literal`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VarId(u32);

impl VarId {
    /// Construct from a raw, already-validated 1-based id.
    pub fn from_raw(id: u32) -> Self {
        debug_assert!(id >= 1, "variable ids are 1-based");
        VarId(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Positive literal asserting this variable.
    pub fn pos(self) -> Literal {
        Literal(self.0 as i64)
    }

    /// Negative literal asserting the negation of this variable.
    pub fn neg(self) -> Literal {
        Literal(-(self.0 as i64))
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signed DIMACS literal: positive asserts the variable, negative asserts
/// its complement. Never zero.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal(i64);

impl Literal {
    pub fn raw(self) -> i64 {
        self.0
    }

    pub fn var(self) -> VarId {
        VarId(self.0.unsigned_abs() as u32)
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl core::ops::Neg for Literal {
    type Output = Literal;
    fn neg(self) -> Literal {
        Literal(-self.0)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
