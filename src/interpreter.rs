// Interpreter executing rendered IR text

use crate::spec::LanguageSpec;
use std::collections::HashMap;
use std::io::{self, Write};

/// The only callee with an effect.
const PRINT: &str = "print";

/// Executes IR text produced under the same `LanguageSpec`.
///
/// The interpreter never sees the syntax tree. It scans the whitespace
/// separated words of the whole text and recognizes the spec's function,
/// call and assignment spellings. A word followed by the assignment spelling
/// is always a binding, whatever the word is. Execution is total: unknown
/// words are skipped and a print of an unbound variable writes
/// `(undefined) <name>`.
pub struct Interpreter<'a> {
    spec: &'a LanguageSpec,
}

impl<'a> Interpreter<'a> {
    pub fn new(spec: &'a LanguageSpec) -> Self {
        Self { spec }
    }

    /// Run `ir`, writing one line to `out` per executed print.
    pub fn execute<W: Write>(&self, ir: &str, out: &mut W) -> io::Result<()> {
        let mut variables: HashMap<String, i64> = HashMap::new();
        let mut words = ir.split_whitespace().peekable();

        while let Some(word) = words.next() {
            if words.peek() == Some(&self.spec.assignment.as_str()) {
                words.next();
                let Some(expr) = words.next() else {
                    break;
                };
                match evaluate(expr, &variables) {
                    Some(value) => {
                        variables.insert(word.to_string(), value);
                    }
                    None => {
                        variables.remove(word);
                    }
                }
            } else if word == self.spec.func_syntax {
                // Header: the function name and the opening brace.
                words.next();
                words.next();
            } else if word == self.spec.call_syntax {
                let (Some(callee), Some(arg)) = (words.next(), words.next()) else {
                    break;
                };
                if callee == PRINT {
                    match variables.get(arg) {
                        Some(value) => writeln!(out, "{}", value)?,
                        None => writeln!(out, "(undefined) {}", arg)?,
                    }
                }
            }
        }

        Ok(())
    }

    /// Run `ir` and collect the printed lines.
    pub fn execute_to_lines(&self, ir: &str) -> Vec<String> {
        let mut buffer = Vec::new();
        let _ = self.execute(ir, &mut buffer);
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// An integer literal, or the value of a bound variable.
fn evaluate(expr: &str, variables: &HashMap<String, i64>) -> Option<i64> {
    expr.parse::<i64>()
        .ok()
        .or_else(|| variables.get(expr).copied())
}
