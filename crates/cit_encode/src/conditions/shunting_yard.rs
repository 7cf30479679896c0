//! Iterative shunting-yard: token stream → reverse Polish notation.
//!
//! Explicit operator stack, no recursion — expression depth never touches
//! the call stack (spec §9 "Shunting-yard and Tseitin recursion").

use crate::conditions::tokenizer::Token;
use crate::error::ConditionError;

fn precedence(op: &Token) -> u8 {
    match op {
        Token::Not => 3,
        Token::And => 2,
        Token::Or => 1,
        _ => 0,
    }
}

fn is_right_associative(op: &Token) -> bool {
    matches!(op, Token::Not)
}

/// Convert an infix token stream into RPN. Parens are consumed and do not
/// appear in the output.
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ConditionError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok {
            Token::Ident(_) => output.push(tok.clone()),
            Token::Not | Token::And | Token::Or => {
                while let Some(top) = ops.last() {
                    if matches!(top, Token::LParen) {
                        break;
                    }
                    let pop = if is_right_associative(tok) {
                        precedence(top) > precedence(tok)
                    } else {
                        precedence(top) >= precedence(tok)
                    };
                    if pop {
                        output.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(tok.clone());
            }
            Token::LParen => ops.push(tok.clone()),
            Token::RParen => {
                let mut found = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Token::LParen) {
                        found = true;
                        break;
                    }
                    output.push(top);
                }
                if !found {
                    return Err(ConditionError::MismatchedParens);
                }
            }
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top, Token::LParen) {
            return Err(ConditionError::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::tokenizer::tokenize;

    fn rpn_str(expr: &str) -> Vec<Token> {
        to_rpn(&tokenize(expr).unwrap()).unwrap()
    }

    #[test]
    fn not_binds_tighter_than_and() {
        assert_eq!(
            rpn_str("!X && Y"),
            vec![
                Token::Ident("X".into()),
                Token::Not,
                Token::Ident("Y".into()),
                Token::And,
            ]
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            rpn_str("A || B && C"),
            vec![
                Token::Ident("A".into()),
                Token::Ident("B".into()),
                Token::Ident("C".into()),
                Token::And,
                Token::Or,
            ]
        );
    }

    #[test]
    fn parens_override_precedence() {
        assert_eq!(
            rpn_str("(A || B) && C"),
            vec![
                Token::Ident("A".into()),
                Token::Ident("B".into()),
                Token::Or,
                Token::Ident("C".into()),
                Token::And,
            ]
        );
    }

    #[test]
    fn unbalanced_parens_fail_either_direction() {
        assert_eq!(
            to_rpn(&tokenize("(A && B").unwrap()).unwrap_err(),
            ConditionError::MismatchedParens
        );
        assert_eq!(
            to_rpn(&tokenize("A && B)").unwrap()).unwrap_err(),
            ConditionError::MismatchedParens
        );
    }
}
