//! Shell argument sanitization and structured command lines.
//!
//! Commands are built token by token. Each token is escaped exactly once
//! when it is pushed, and the tokens are only joined into a single string
//! at the process boundary.
//!
//! The escaping is a character blacklist, not real quoting: every
//! metacharacter gets a backslash in front of it. Whitespace is left alone,
//! so a token holding several flags (a pkg-config blob, say) is still split
//! into separate words by the shell.

use std::fmt;

/// Characters the shell would otherwise interpret.
pub const SHELL_METACHARS: &[char] = &[
    '&', ';', '`', '\'', '"', '|', '*', '?', '~', '<', '>', '^', '(', ')', '[', ']', '{', '}',
    '$', '\\', '\n',
];

/// Escape every shell metacharacter in `input` with a backslash.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if SHELL_METACHARS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A command assembled from already-sanitized tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    pub fn new(program: &str) -> Self {
        let mut cmd = Self::default();
        cmd.arg(program);
        cmd
    }

    pub fn arg(&mut self, token: impl AsRef<str>) -> &mut Self {
        let token = token.as_ref();
        if !token.is_empty() {
            self.tokens.push(sanitize(token));
        }
        self
    }

    pub fn args<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.arg(token);
        }
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The final string handed to the shell.
    pub fn to_shell_string(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}
