// Error types for spec loading and parsing

use std::fmt;
use std::io;

use crate::config::Rule;

/// Failure to obtain a usable `LanguageSpec`.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: io::Error },
    Syntax(Box<pest::error::Error<Rule>>),
    MissingField(&'static str),
    WrongType { field: &'static str, expected: &'static str },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "cannot read '{}': {}", path, source),
            ConfigError::Syntax(e) => write!(f, "malformed spec file:\n{}", e),
            ConfigError::MissingField(field) => write!(f, "missing field '{}'", field),
            ConfigError::WrongType { field, expected } => {
                write!(f, "field '{}' must be {}", field, expected)
            }
            ConfigError::Invalid(msg) => write!(f, "invalid spec: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Syntax(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<pest::error::Error<Rule>> for ConfigError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        ConfigError::Syntax(Box::new(e))
    }
}

/// A structurally malformed program. `index` is the offending token position;
/// the token count stands for the end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MissingFunctionName,
    MissingOpenBrace { index: usize },
    MissingCloseBrace { index: usize },
    TruncatedStatement {
        keyword: String,
        index: usize,
        needed: usize,
    },
}

impl ParseError {
    pub fn index(&self) -> usize {
        match self {
            ParseError::MissingFunctionName => 1,
            ParseError::MissingOpenBrace { index } => *index,
            ParseError::MissingCloseBrace { index } => *index,
            ParseError::TruncatedStatement { index, .. } => *index,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingFunctionName => write!(f, "expected a function name at token 1"),
            ParseError::MissingOpenBrace { index } => {
                write!(f, "no '{{' opening a function body before token {}", index)
            }
            ParseError::MissingCloseBrace { index } => {
                write!(f, "no '}}' closing the body opened before token {}", index)
            }
            ParseError::TruncatedStatement {
                keyword,
                index,
                needed,
            } => write!(
                f,
                "'{}' at token {} needs {} more token(s) before the end of the body",
                keyword, index, needed
            ),
        }
    }
}

impl std::error::Error for ParseError {}
