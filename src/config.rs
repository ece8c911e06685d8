// Loading language specs from JSON files using pest

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::spec::LanguageSpec;

/// File name searched for when no spec path is given.
pub const SPEC_FILE_NAME: &str = "langspec.json";
/// Fallback spec in the home directory.
pub const HOME_SPEC_FILE_NAME: &str = ".langspec.json";

#[derive(Parser)]
#[grammar = "langspec.pest"]
pub struct SpecFileParser;

/// Parse and validate a spec document such as
/// `{"keywords": ["var"], "assignment": "=", "call": "call", "function": "func"}`.
///
/// Keys other than the four above are ignored. When a key repeats, the last
/// occurrence wins.
pub fn parse_spec(input: &str) -> Result<LanguageSpec, ConfigError> {
    let file = SpecFileParser::parse(Rule::spec_file, input)?
        .next()
        .and_then(|file| file.into_inner().next())
        .ok_or_else(|| ConfigError::Invalid("empty spec document".to_string()))?;

    let mut keywords = None;
    let mut assignment = None;
    let mut call_syntax = None;
    let mut func_syntax = None;

    for pair in file.into_inner() {
        let mut inner = pair.into_inner();
        let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
            continue;
        };
        match string_value(key).as_deref() {
            Some("keywords") => keywords = Some(string_array("keywords", value)?),
            Some("assignment") => assignment = Some(string_field("assignment", value)?),
            Some("call") => call_syntax = Some(string_field("call", value)?),
            Some("function") => func_syntax = Some(string_field("function", value)?),
            _ => {}
        }
    }

    let spec = LanguageSpec {
        keywords: keywords.ok_or(ConfigError::MissingField("keywords"))?,
        assignment: assignment.ok_or(ConfigError::MissingField("assignment"))?,
        call_syntax: call_syntax.ok_or(ConfigError::MissingField("call"))?,
        func_syntax: func_syntax.ok_or(ConfigError::MissingField("function"))?,
    };
    spec.validate()?;
    Ok(spec)
}

/// Read and parse the spec file at `path`.
pub fn load_spec(path: &Path) -> Result<LanguageSpec, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_spec(&content)
}

fn string_field(field: &'static str, pair: Pair<Rule>) -> Result<String, ConfigError> {
    string_value(pair).ok_or(ConfigError::WrongType {
        field,
        expected: "a string",
    })
}

fn string_array(field: &'static str, pair: Pair<Rule>) -> Result<Vec<String>, ConfigError> {
    let wrong_type = ConfigError::WrongType {
        field,
        expected: "an array of strings",
    };
    if pair.as_rule() != Rule::array {
        return Err(wrong_type);
    }
    pair.into_inner()
        .map(string_value)
        .collect::<Option<Vec<_>>>()
        .ok_or(wrong_type)
}

fn string_value(pair: Pair<Rule>) -> Option<String> {
    match pair.as_rule() {
        Rule::string => pair.into_inner().next().map(|inner| unescape(inner.as_str())),
        _ => None,
    }
}

// The grammar only admits well-formed escapes.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32);
                out.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

/// Get the user's home directory in a cross-platform way.
fn get_home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home));
    }

    if let Some(userprofile) = std::env::var_os("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }

    None
}

/// Search for `langspec.json` in the current directory and upwards, stopping
/// at the home directory, then fall back to `~/.langspec.json`.
pub fn find_spec_file() -> Option<PathBuf> {
    let home_dir = get_home_dir();

    if let Ok(mut current_dir) = std::env::current_dir() {
        loop {
            let candidate = current_dir.join(SPEC_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }

            if home_dir.as_deref() == Some(current_dir.as_path()) {
                break;
            }

            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => break,
            }
        }
    }

    home_dir
        .map(|home| home.join(HOME_SPEC_FILE_NAME))
        .filter(|path| path.is_file())
}
