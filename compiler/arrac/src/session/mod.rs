//! The read-eval-print loop.
//!
//! A [`Session`] owns the workspace and bindings for one run and feeds it
//! lines from any `BufRead`, writing results to any `Write`. The same loop
//! serves the interactive prompt and batch files; only the prompt differs.

use std::io::{BufRead, Write};

use arra_eval::{Environment, Evaluator, Workspace};

use crate::CliError;

/// Prompt shown before each interactive line.
pub const PROMPT: &str = "a) ";

/// Line that prints workspace statistics instead of evaluating.
const DEBUG_COMMAND: &str = "debug";

/// Token starting a comment line.
const COMMENT: &str = "/";

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Written before each line is read; `None` in batch mode.
    pub prompt: Option<String>,
}

impl SessionConfig {
    pub fn interactive() -> Self {
        SessionConfig {
            prompt: Some(PROMPT.to_owned()),
        }
    }

    pub fn batch() -> Self {
        SessionConfig { prompt: None }
    }
}

/// State carried across the lines of one run.
pub struct Session {
    config: SessionConfig,
    ws: Workspace,
    env: Environment,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            ws: Workspace::new(),
            env: Environment::new(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.ws
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Run every line of `input`, then drop all bindings.
    ///
    /// Lines are read as bytes, so input that is not valid UTF-8 is
    /// evaluated with replacement characters rather than rejected.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<(), CliError> {
        let mut buf = Vec::new();
        loop {
            if let Some(prompt) = &self.config.prompt {
                out.write_all(prompt.as_bytes())?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Invalid UTF-8 becomes U+FFFD, which evaluates like any other
            // unknown symbol instead of ending the run.
            let line = String::from_utf8_lossy(&buf);
            self.line(&line, out)?;
        }
        self.env.clear(&mut self.ws);
        tracing::debug!(stats = ?self.ws.stats(), "session finished");
        Ok(())
    }

    /// Handle one line of input.
    pub fn line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), CliError> {
        let tokens = arra_lexer::tokenize(line);
        match tokens.as_slice() {
            [] => Ok(()),
            [COMMENT, ..] => Ok(()),
            [DEBUG_COMMAND] => self.debug(out),
            _ => {
                let result = Evaluator::new(&mut self.ws, &mut self.env).eval_line(&tokens);
                let written = writeln!(out, "{}", self.ws.display(result));
                self.ws.release(result);
                written?;
                Ok(())
            }
        }
    }

    fn debug<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let stats = self.ws.stats();
        writeln!(
            out,
            "Workspace: {} bytes, {} values",
            stats.bytes, stats.live_values
        )?;
        for (name, id) in self.env.bindings() {
            writeln!(
                out,
                "{name}: kind={}, refcount={}",
                self.ws.kind(id),
                self.ws.refcount(id)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
