//! Tseitin transformation over an RPN token stream (spec §4.5).
//!
//! Walks the operand stack left to right; every operator pops its operands
//! and pushes a fresh auxiliary bound to them by bi-implication. Atom
//! resolution is a caller-supplied hook so strict/lenient unknown-property
//! handling lives with the caller, not here.

use cit_core::{Clause, CnfFormula, VarCategory, VarId, VariableRegistry};

use crate::conditions::tokenizer::Token;
use crate::error::ConditionError;

/// Compile an already-RPN-ordered token stream to a single top variable,
/// emitting the Tseitin clauses for every operator along the way.
pub fn compile_to_var(
    rpn: &[Token],
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
    mut resolve_atom: impl FnMut(&str, &mut VariableRegistry) -> Result<VarId, ConditionError>,
) -> Result<VarId, ConditionError> {
    let mut stack: Vec<VarId> = Vec::new();

    for tok in rpn {
        match tok {
            Token::Ident(name) => {
                stack.push(resolve_atom(name, registry)?);
            }
            Token::Not => {
                let a = stack.pop().ok_or(ConditionError::MissingOperand)?;
                let z = registry.fresh("t", VarCategory::TseitinAux);
                formula.push(Clause::from_literals([z.pos(), a.pos()]));
                formula.push(Clause::from_literals([z.neg(), a.neg()]));
                stack.push(z);
            }
            Token::And => {
                let b = stack.pop().ok_or(ConditionError::MissingOperand)?;
                let a = stack.pop().ok_or(ConditionError::MissingOperand)?;
                let z = registry.fresh("t", VarCategory::TseitinAux);
                formula.push(Clause::from_literals([z.neg(), a.pos()]));
                formula.push(Clause::from_literals([z.neg(), b.pos()]));
                formula.push(Clause::from_literals([z.pos(), a.neg(), b.neg()]));
                stack.push(z);
            }
            Token::Or => {
                let b = stack.pop().ok_or(ConditionError::MissingOperand)?;
                let a = stack.pop().ok_or(ConditionError::MissingOperand)?;
                let z = registry.fresh("t", VarCategory::TseitinAux);
                formula.push(Clause::from_literals([z.pos(), a.neg()]));
                formula.push(Clause::from_literals([z.pos(), b.neg()]));
                formula.push(Clause::from_literals([z.neg(), a.pos(), b.pos()]));
                stack.push(z);
            }
            Token::LParen | Token::RParen => {
                unreachable!("RPN output never contains parentheses")
            }
        }
    }

    if stack.len() != 1 {
        return Err(ConditionError::InvalidExpression(stack.len()));
    }
    Ok(stack.pop().unwrap())
}
