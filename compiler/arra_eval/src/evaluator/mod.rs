//! Right-to-left evaluation of a token sequence.
//!
//! Grammar, applied to the front of the remaining tokens:
//!
//! ```text
//! expr := noun
//!       | monadic-verb expr
//!       | noun dyadic-verb expr
//! noun := integer literal | variable name
//! ```
//!
//! The right operand is always evaluated in full before the verb to its
//! left is applied, so `2 - 1 - 1` is `2 - (1 - 1)`.
//!
//! # Ownership
//!
//! Every entry point returns one owned value (possibly an error value).
//! Intermediate values are released before returning, on every path.

use arra_value::{ErrorValue, ValueId, Workspace};

use crate::environment::Environment;
use arra_stack::ensure_sufficient_stack;
use crate::verbs::{DyadicVerb, MonadicVerb};

/// Token marking an assignment: `name : expr`.
pub const ASSIGN: &str = ":";

/// Whether `token` can name a variable: an ASCII letter followed by word
/// characters.
pub fn is_valid_name(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Evaluates token sequences against a workspace and its bindings.
pub struct Evaluator<'a> {
    ws: &'a mut Workspace,
    env: &'a mut Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(ws: &'a mut Workspace, env: &'a mut Environment) -> Self {
        Evaluator { ws, env }
    }

    /// Evaluate one input line, as an assignment when its second token is
    /// [`ASSIGN`].
    pub fn eval_line(&mut self, tokens: &[&str]) -> ValueId {
        if tokens.get(1) == Some(&ASSIGN) {
            self.assign(tokens)
        } else {
            self.eval(tokens)
        }
    }

    /// Evaluate `tokens` as an expression.
    #[tracing::instrument(level = "trace", skip_all, fields(len = tokens.len()))]
    pub fn eval(&mut self, tokens: &[&str]) -> ValueId {
        ensure_sufficient_stack(|| match tokens {
            [] => self.fail(ErrorValue::parse("Empty expression")),
            [token] => self.noun(token),
            [first, rest @ ..] => match MonadicVerb::from_name(first) {
                Some(verb) => self.monadic(verb, rest),
                None => self.dyadic(tokens),
            },
        })
    }

    /// Evaluate `name : expr`, binding the result.
    ///
    /// The returned value is the bound value, with its own reference. An
    /// error on the right is returned without touching the bindings.
    pub fn assign(&mut self, tokens: &[&str]) -> ValueId {
        let name = tokens.first().copied().unwrap_or_default();
        if !is_valid_name(name) {
            return self.fail(ErrorValue::parse(format!("Invalid variable name: {name}")));
        }
        let rest = tokens.get(2..).unwrap_or_default();
        if rest.is_empty() {
            return self.fail(ErrorValue::parse(format!("No value to assign to {name}")));
        }
        let value = self.eval(rest);
        if self.ws.is_error(value) {
            return value;
        }
        self.ws.retain(value);
        self.env.assign(self.ws, name, value);
        value
    }

    fn monadic(&mut self, verb: MonadicVerb, rest: &[&str]) -> ValueId {
        let x = self.eval(rest);
        if self.ws.is_error(x) {
            return x;
        }
        let result = verb.apply(self.ws, x);
        self.ws.release(x);
        result
    }

    fn dyadic(&mut self, tokens: &[&str]) -> ValueId {
        let Some(verb) = DyadicVerb::from_name(tokens[1]) else {
            return self.fail(ErrorValue::parse(format!(
                "Expected verb, got \"{}\"",
                tokens[1]
            )));
        };
        let rest = &tokens[2..];
        if rest.is_empty() {
            return self.fail(ErrorValue::not_yet_implemented("Projections unsupported"));
        }
        let x = self.noun(tokens[0]);
        if self.ws.is_error(x) {
            return x;
        }
        let y = self.eval(rest);
        if self.ws.is_error(y) {
            self.ws.release(x);
            return y;
        }
        let result = verb.apply(self.ws, x, y);
        self.ws.release(x);
        self.ws.release(y);
        result
    }

    /// An integer literal or a variable reference.
    fn noun(&mut self, token: &str) -> ValueId {
        if let Ok(n) = token.parse::<i64>() {
            return self.ws.int(n);
        }
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return self.fail(ErrorValue::parse(format!(
                "Couldn't parse as integer: {token}"
            )));
        }
        match self.env.lookup(self.ws, token) {
            Some(value) => value,
            None => self.fail(ErrorValue::undefined(token)),
        }
    }

    fn fail(&mut self, error: ErrorValue) -> ValueId {
        tracing::debug!(%error, "evaluation failed");
        self.ws.error_value(error)
    }
}
