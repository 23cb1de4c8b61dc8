//! Expression evaluation against a running Emacs session.
//!
//! [`EmacsClient`] shells out to `emacsclient -e <expr>` and captures the
//! printed reply, trimming whitespace and stripping one outer pair of
//! double quotes. The `nil` token is a successful reply and passes
//! through untouched; interpreting it is the aggregator's job.

use std::process::Command;

use crate::error::EvalError;

/// The token Emacs Lisp prints for "no value".
pub const NIL_TOKEN: &str = "nil";

/// The token Emacs Lisp prints for boolean true.
pub const TRUE_TOKEN: &str = "t";

/// Capability to evaluate an expression inside the editor session.
///
/// The production implementation spawns one process per call; tests
/// substitute a fake that maps expressions to canned replies.
pub trait Evaluator: Send + Sync {
    /// Evaluates `expr` and returns its printed representation, trimmed
    /// and with one surrounding quote pair removed if present.
    ///
    /// The expression is an opaque string in the editor's own syntax;
    /// no validation or escaping happens here.
    fn evaluate(&self, expr: &str) -> Result<String, EvalError>;
}

/// Evaluator backed by the `emacsclient` binary.
#[derive(Debug, Clone)]
pub struct EmacsClient {
    binary: String,
}

impl EmacsClient {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for EmacsClient {
    fn default() -> Self {
        Self::new("emacsclient")
    }
}

impl Evaluator for EmacsClient {
    fn evaluate(&self, expr: &str) -> Result<String, EvalError> {
        let out = Command::new(&self.binary).arg("-e").arg(expr).output()?;
        if !out.status.success() {
            return Err(EvalError::NonZeroExit {
                code: out.status.code(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        if out.stdout.is_empty() {
            return Err(EvalError::EmptyOutput);
        }
        Ok(normalize_reply(&String::from_utf8_lossy(&out.stdout)))
    }
}

/// Trims whitespace and strips exactly one outer pair of double quotes.
///
/// Inner escapes are left alone: `"a \"quoted\" word"` loses only the
/// outermost pair.
pub fn normalize_reply(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_one_quote_pair() {
        assert_eq!(normalize_reply("\"Write unit tests\""), "Write unit tests");
        assert_eq!(normalize_reply("\"a \\\"quoted\\\" word\""), "a \\\"quoted\\\" word");
    }

    #[test]
    fn normalize_leaves_unquoted_replies_alone() {
        assert_eq!(normalize_reply("900"), "900");
        assert_eq!(normalize_reply("nil"), "nil");
    }

    #[test]
    fn normalize_trims_whitespace_before_unquoting() {
        assert_eq!(normalize_reply("  \"hello\"\n"), "hello");
        assert_eq!(normalize_reply("  42 \n"), "42");
    }

    #[test]
    fn normalize_requires_both_quotes() {
        // a lone quote character is not a quoted value
        assert_eq!(normalize_reply("\""), "\"");
        assert_eq!(normalize_reply("\"unterminated"), "\"unterminated");
        assert_eq!(normalize_reply("\"\""), "");
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let client = EmacsClient::new("pomodash-no-such-binary");
        match client.evaluate("(org-pomodoro-active-p)") {
            Err(EvalError::Spawn(_)) => {}
            other => panic!("expected Spawn error, got {:?}", other),
        }
    }

    #[test]
    fn non_zero_exit_is_reported() {
        let client = EmacsClient::new("false");
        match client.evaluate("(org-pomodoro-active-p)") {
            Err(EvalError::NonZeroExit { .. }) => {}
            other => panic!("expected NonZeroExit, got {:?}", other),
        }
    }

    #[test]
    fn silent_exit_is_empty_output() {
        let client = EmacsClient::new("true");
        match client.evaluate("(org-pomodoro-active-p)") {
            Err(EvalError::EmptyOutput) => {}
            other => panic!("expected EmptyOutput, got {:?}", other),
        }
    }

    #[test]
    fn stdout_is_captured_and_normalized() {
        // /bin/echo swallows the "-e" flag and prints the expression back,
        // which is enough to exercise the capture path end to end.
        let client = EmacsClient::new("/bin/echo");
        let reply = client.evaluate("\"hello\"").expect("echo should succeed");
        assert_eq!(reply, "hello");
    }
}
