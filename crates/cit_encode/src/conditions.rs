//! Guard-expression compilation: tokenizer → shunting-yard → Tseitin.

pub mod shunting_yard;
pub mod tokenizer;
pub mod tseitin;

pub use shunting_yard::to_rpn;
pub use tokenizer::{tokenize, Token};
pub use tseitin::compile_to_var;

use cit_core::{CnfFormula, VarId, VariableRegistry};

use crate::error::ConditionError;

/// Compile a whole guard expression and link it to its owning option: spec
/// §4.5 "for the option O with guard φ in slot j, compile φ to top variable
/// Z; emit {¬v(O,j), Z}". An empty expression is a tautology and emits
/// nothing at all — callers should not invoke this for options with no
/// condition string in the first place.
#[allow(clippy::too_many_arguments)]
pub fn link_condition(
    expr: &str,
    option_var: VarId,
    registry: &mut VariableRegistry,
    formula: &mut CnfFormula,
    resolve_atom: impl FnMut(&str, &mut VariableRegistry) -> Result<VarId, ConditionError>,
) -> Result<(), ConditionError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Ok(());
    }
    let rpn = to_rpn(&tokens)?;
    let top = compile_to_var(&rpn, registry, formula, resolve_atom)?;
    formula.implies(option_var.pos(), top.pos());
    Ok(())
}
