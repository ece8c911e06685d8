// Parser for single-function programs, driven by a LanguageSpec

use crate::ast::{FunctionDefinition, Statement};
use crate::error::ParseError;
use crate::spec::LanguageSpec;

/// Build the syntax tree of the one function in `tokens`.
///
/// The token at index 1 is taken as the function name. The body runs from
/// after the last `{` to the first `}` following it. Inside the body,
/// `<call> name arg` and `<keyword> name = expr` are recognized; every other
/// token is skipped.
pub fn parse(tokens: &[&str], spec: &LanguageSpec) -> Result<FunctionDefinition, ParseError> {
    let fn_name = tokens.get(1).ok_or(ParseError::MissingFunctionName)?;
    let (start, end) = body_bounds(tokens)?;

    let declaration_keywords = spec.declaration_keywords();
    let mut body = Vec::new();
    let mut i = start;

    while i < end {
        let token = tokens[i];

        if token == spec.call_syntax {
            let [callee, arg] = operands::<2>(tokens, i, end)?;
            body.push(Statement::Call {
                name: callee.to_string(),
                args: vec![arg.to_string()],
            });
            i += 3;
        } else if declaration_keywords.contains(token) {
            // The middle operand is the assignment placeholder.
            let [name, _, expr] = operands::<3>(tokens, i, end)?;
            body.push(Statement::VariableDeclaration {
                name: name.to_string(),
                expr: expr.to_string(),
            });
            i += 4;
        } else {
            i += 1;
        }
    }

    Ok(FunctionDefinition {
        name: fn_name.to_string(),
        body,
    })
}

fn body_bounds(tokens: &[&str]) -> Result<(usize, usize), ParseError> {
    let start = tokens
        .iter()
        .rposition(|t| *t == "{")
        .map(|i| i + 1)
        .ok_or(ParseError::MissingOpenBrace {
            index: tokens.len(),
        })?;

    let end = tokens[start..]
        .iter()
        .position(|t| *t == "}")
        .map(|i| start + i)
        .ok_or(ParseError::MissingCloseBrace { index: start - 1 })?;

    Ok((start, end))
}

/// The `N` tokens following the keyword at `at`, all before `end`.
fn operands<'a, const N: usize>(
    tokens: &[&'a str],
    at: usize,
    end: usize,
) -> Result<[&'a str; N], ParseError> {
    let available = end - at - 1;
    if available < N {
        return Err(ParseError::TruncatedStatement {
            keyword: tokens[at].to_string(),
            index: at,
            needed: N - available,
        });
    }

    let mut out = [""; N];
    out.copy_from_slice(&tokens[at + 1..at + 1 + N]);
    Ok(out)
}
