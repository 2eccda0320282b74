//! Environment variable access for directory resolution.
//!
//! Resolution never reads the process environment directly; it goes through
//! the [`Environment`] trait so tests (and embedders) can inject a fixed
//! environment instead of mutating process-wide state.

use std::collections::HashMap;

/// Source of environment variable values.
pub trait Environment {
    /// Returns the value of `name`, or `None` if it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment.
///
/// `HOME` falls back to [`dirs::home_dir`] when the variable is unset, which
/// covers hosts (notably Windows) that do not define it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        match std::env::var(name) {
            Ok(value) => Some(value),
            Err(_) if name == "HOME" => {
                dirs::home_dir().map(|home| home.to_string_lossy().into_owned())
            }
            Err(_) => None,
        }
    }
}

/// A fixed environment, handy for tests and sandboxed embedders.
impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Expands `$NAME` and `${NAME}` references in `input` against `env`.
///
/// References to unset variables are left verbatim, as is an unclosed `${`.
/// Names are ASCII alphanumerics and underscores.
pub(crate) fn expand(input: &str, env: &dyn Environment) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    match env.var(&braced[..end]) {
                        Some(value) => out.push_str(&value),
                        None => out.push_str(&rest[pos..pos + end + 3]),
                    }
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push_str(&rest[pos..]);
                    rest = "";
                }
            }
        } else {
            let end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            if end == 0 {
                out.push('$');
                rest = after;
            } else {
                match env.var(&after[..end]) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(&rest[pos..pos + end + 1]),
                }
                rest = &after[end..];
            }
        }
    }

    out.push_str(rest);
    out
}
