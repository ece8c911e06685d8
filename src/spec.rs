// Language spec: the configurable surface spellings

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::tokenizer::{is_delimiter, tokenize};

/// Syntax spellings that parameterize parsing, rendering and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSpec {
    pub keywords: Vec<String>,
    pub assignment: String,
    pub call_syntax: String,
    pub func_syntax: String,
}

impl Default for LanguageSpec {
    fn default() -> Self {
        Self {
            keywords: vec!["var".to_string()],
            assignment: "=".to_string(),
            call_syntax: "call".to_string(),
            func_syntax: "func".to_string(),
        }
    }
}

impl LanguageSpec {
    /// Keywords that introduce a variable declaration.
    ///
    /// The call and function spellings are excluded even when listed, so a
    /// spec file may list every reserved word under `keywords`.
    pub fn declaration_keywords(&self) -> HashSet<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(|kw| *kw != self.call_syntax && *kw != self.func_syntax)
            .collect()
    }

    /// Check that every spelling survives tokenization as a single token and
    /// that the three construct spellings are pairwise distinct.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_word("call", &self.call_syntax)?;
        check_word("function", &self.func_syntax)?;
        check_single_token("assignment", &self.assignment)?;

        if self.call_syntax == self.func_syntax
            || self.call_syntax == self.assignment
            || self.func_syntax == self.assignment
        {
            return Err(ConfigError::Invalid(format!(
                "assignment '{}', call '{}' and function '{}' must be distinct",
                self.assignment, self.call_syntax, self.func_syntax
            )));
        }

        for kw in &self.keywords {
            check_word("keywords", kw)?;
            if *kw == self.assignment {
                return Err(ConfigError::Invalid(format!(
                    "keyword '{}' collides with the assignment spelling",
                    kw
                )));
            }
        }

        if self.declaration_keywords().is_empty() {
            return Err(ConfigError::Invalid(
                "at least one declaration keyword is required".to_string(),
            ));
        }

        Ok(())
    }
}

fn check_single_token(field: &str, value: &str) -> Result<(), ConfigError> {
    if tokenize(value) != [value] {
        return Err(ConfigError::Invalid(format!(
            "{} '{}' must be a single token",
            field, value
        )));
    }
    Ok(())
}

// A single token containing no delimiter characters.
fn check_word(field: &str, value: &str) -> Result<(), ConfigError> {
    check_single_token(field, value)?;
    if value.chars().any(is_delimiter) {
        return Err(ConfigError::Invalid(format!(
            "{} '{}' must not be punctuation",
            field, value
        )));
    }
    Ok(())
}
