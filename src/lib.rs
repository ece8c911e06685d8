//! # specrun
//!
//! A miniature toolchain for a toy language whose surface syntax comes from a
//! `LanguageSpec`. Source text goes through four stages:
//!
//! 1. [`tokenizer::tokenize`] splits it on whitespace and a fixed delimiter set.
//! 2. [`parser::parse`] builds the syntax tree of its single function.
//! 3. [`ir::render`] lowers the tree to line-oriented IR text.
//! 4. [`interpreter::Interpreter`] executes the IR text directly.
//!
//! ```
//! use specrun::LanguageSpec;
//!
//! let spec = LanguageSpec::default();
//! let ir = specrun::compile("func main() { var x = 15 call print x }", &spec).unwrap();
//! assert_eq!(ir, "func main {\n    x = 15\n    call print x\n}\n");
//!
//! let mut out = Vec::new();
//! specrun::run("func main() { var x = 15 call print x }", &spec, &mut out).unwrap();
//! assert_eq!(out, b"15\n");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod ir;
pub mod parser;
pub mod spec;
pub mod tokenizer;

use std::io::Write;

pub use error::{ConfigError, ParseError};
pub use spec::LanguageSpec;

/// Tokenize, parse and render `source`, returning the IR text.
pub fn compile(source: &str, spec: &LanguageSpec) -> Result<String, ParseError> {
    let tokens = tokenizer::tokenize(source);
    let function = parser::parse(&tokens, spec)?;
    Ok(ir::render(&function, spec))
}

/// Compile `source` and execute the IR, writing printed lines to `out`.
/// Returns the IR text.
pub fn run<W: Write>(
    source: &str,
    spec: &LanguageSpec,
    out: &mut W,
) -> Result<String, Box<dyn std::error::Error>> {
    let ir = compile(source, spec)?;
    interpreter::Interpreter::new(spec).execute(&ir, out)?;
    Ok(ir)
}

/// The sample program, spelled with the spec's function, declaration and
/// call keywords.
pub fn sample_program(spec: &LanguageSpec) -> String {
    let keyword = spec
        .keywords
        .iter()
        .find(|kw| **kw != spec.call_syntax && **kw != spec.func_syntax)
        .map(String::as_str)
        .unwrap_or("var");
    format!(
        "{} main() {{ {} x {} 15 {} print x }}",
        spec.func_syntax, keyword, spec.assignment, spec.call_syntax
    )
}
