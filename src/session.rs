use log::debug;

use crate::errors::*;
use crate::ops;
use crate::parse;
use crate::stack::OperandStack;
use crate::value::{format_f64, str_to_f64};

/// Number of operands a calculator screen shows by default
pub const DEFAULT_DISPLAY_LINES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// How many operands from the top `Session::display` returns
    pub display_lines: usize,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            display_lines: DEFAULT_DISPLAY_LINES,
        }
    }
}

/// One calculator: the operand stack plus the numeral being typed.
///
/// Mirrors what a calculator UI does with key presses: digits go to the
/// input buffer, `enter` pushes the buffer (or duplicates the top when
/// nothing was typed), operator keys push pending input and apply the
/// operator. A failed action leaves both the stack and the buffer as they
/// were, so the UI can report the error and keep showing the old state.
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: SessionConfig,
    stack: OperandStack,
    input: String,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session::with_stack(config, OperandStack::new())
    }

    pub fn with_stack(config: SessionConfig, stack: OperandStack) -> Self {
        Session {
            config,
            stack,
            input: String::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// Text typed since the last enter or operator
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Appends a digit or the decimal point to the input buffer
    pub fn type_char(&mut self, c: char) -> CalcErrorResult {
        if c.is_ascii_digit() || (c == '.' && !self.input.contains('.')) {
            self.input.push(c);
            return Ok(());
        }
        let mut rejected = self.input.clone();
        rejected.push(c);
        debug!("rejected input '{}'", rejected);
        Err(CalcError::StrToFloat(rejected))
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        if self.input == "-" {
            self.input.clear();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Flips the sign of the numeral being typed, or negates the top
    /// operand when nothing is typed
    pub fn toggle_sign(&mut self) -> CalcErrorResult {
        if self.input.is_empty() {
            return self.stack.perform_unary(|v| -v).map(|_| ());
        }
        if let Some(rest) = self.input.strip_prefix('-') {
            self.input = rest.to_string();
        } else {
            self.input.insert(0, '-');
        }
        Ok(())
    }

    /// Pushes the typed numeral, or duplicates the top operand if the
    /// input buffer is empty
    pub fn enter(&mut self) -> CalcErrorResult {
        if self.input.is_empty() {
            return self.stack.dup();
        }
        let v = str_to_f64(&self.input)?;
        self.stack.push_operand(v);
        self.input.clear();
        Ok(())
    }

    /// Applies an operator or stack command by name, pushing the pending
    /// input first
    pub fn apply(&mut self, name: &str) -> CalcErrorResult {
        let cmd = ops::lookup(name)?;
        let mut work = self.stack.clone();
        if !self.input.is_empty() {
            work.push_operand(str_to_f64(&self.input)?);
        }
        if let Err(e) = cmd.execute(&mut work) {
            debug!("'{}' failed: {}", name, e);
            return Err(e);
        }
        debug!("applied '{}', {} operand(s) left", name, work.operand_count());
        self.stack = work;
        self.input.clear();
        Ok(())
    }

    /// Evaluates a line of RPN tokens, pushing the pending input first.
    /// A blank line acts like the enter key
    pub fn evaluate(&mut self, line: &str) -> CalcErrorResult {
        if line.trim().is_empty() {
            return self.enter();
        }
        let mut work = self.stack.clone();
        if !self.input.is_empty() {
            work.push_operand(str_to_f64(&self.input)?);
        }
        parse::eval(line, &mut work)?;
        self.stack = work;
        self.input.clear();
        Ok(())
    }

    /// Top operands formatted for a screen, top first
    pub fn display(&self) -> Vec<String> {
        let lines = self.config.display_lines.min(self.stack.operand_count());
        self.stack.iter().take(lines).map(format_f64).collect()
    }
}
