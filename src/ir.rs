// Textual IR: the function rendered with the spec's spellings

use std::fmt;

use crate::ast::{FunctionDefinition, Statement};
use crate::spec::LanguageSpec;

const INDENT: &str = "    ";

/// Display adapter writing the IR of `function` under `spec`.
pub struct Ir<'a> {
    pub function: &'a FunctionDefinition,
    pub spec: &'a LanguageSpec,
}

impl fmt::Display for Ir<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spec = self.spec;
        writeln!(f, "{} {} {{", spec.func_syntax, self.function.name)?;

        for statement in &self.function.body {
            match statement {
                Statement::VariableDeclaration { name, expr } => {
                    writeln!(f, "{}{} {} {}", INDENT, name, spec.assignment, expr)?;
                }
                Statement::Call { name, args } => {
                    write!(f, "{}{} {}", INDENT, spec.call_syntax, name)?;
                    for arg in args {
                        write!(f, " {}", arg)?;
                    }
                    writeln!(f)?;
                }
            }
        }

        writeln!(f, "}}")
    }
}

pub fn render(function: &FunctionDefinition, spec: &LanguageSpec) -> String {
    Ir { function, spec }.to_string()
}
