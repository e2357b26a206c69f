use log::trace;

use crate::errors::*;
use crate::ops::Operation;

/// Stack of floating point operands. The last pushed value is the top
/// (depth 0), the value pushed before it is at depth 1, and so on.
///
/// Every method either succeeds or returns an error without touching the
/// stack, so a caller can show the error and keep the current state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperandStack {
    operands: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack { operands: Vec::new() }
    }

    /// Creates a stack from initial values listed bottom to top:
    /// `with_operands([1.0, 3.14])` has `3.14` on top
    pub fn with_operands<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        OperandStack {
            operands: initial.into_iter().collect(),
        }
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn push_operand(&mut self, value: f64) {
        self.operands.push(value);
    }

    /// Returns the value `depth` positions below the top without removing it
    pub fn peek_operand(&self, depth: isize) -> CalcResult {
        let count = self.operands.len();
        if depth < 0 || depth as usize >= count {
            trace!("peek at depth {} rejected, {} operand(s)", depth, count);
            return Err(CalcError::InvalidDepth { depth, count });
        }
        Ok(self.operands[count - 1 - depth as usize])
    }

    pub fn top(&self) -> CalcResult {
        self.peek_operand(0)
    }

    pub fn pop_operand(&mut self) -> CalcResult {
        self.operands.pop().ok_or_else(|| self.underflow(1))
    }

    /// Exchanges the top two operands
    pub fn swap(&mut self) -> CalcErrorResult {
        self.require(2)?;
        let len = self.operands.len();
        self.operands.swap(len - 1, len - 2);
        Ok(())
    }

    /// Pushes a copy of the top operand
    pub fn dup(&mut self) -> CalcErrorResult {
        let v = self.top().map_err(|_| self.underflow(1))?;
        self.operands.push(v);
        Ok(())
    }

    /// Replaces the top operand `y` with `f(y)` and returns the result
    pub fn perform_unary<F>(&mut self, f: F) -> CalcResult
    where
        F: FnOnce(f64) -> f64,
    {
        self.require(1)?;
        let len = self.operands.len();
        let res = f(self.operands[len - 1]);
        self.operands[len - 1] = res;
        Ok(res)
    }

    /// Replaces the top two operands with `f(x, y)`, where `y` is the top
    /// and `x` the one below it, and returns the result. For `[1, 3]` and
    /// subtraction that is `1 - 3`.
    pub fn perform_binary<F>(&mut self, f: F) -> CalcResult
    where
        F: FnOnce(f64, f64) -> f64,
    {
        self.require(2)?;
        let len = self.operands.len();
        let res = f(self.operands[len - 2], self.operands[len - 1]);
        self.operands.truncate(len - 1);
        self.operands[len - 2] = res;
        Ok(res)
    }

    pub fn perform_operation(&mut self, op: Operation) -> CalcResult {
        match op {
            Operation::Unary(f) => self.perform_unary(f),
            Operation::Binary(f) => self.perform_binary(f),
        }
    }

    pub fn clear(&mut self) {
        self.operands.clear();
    }

    /// Operands from the top down
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.operands.iter().rev().copied()
    }

    fn underflow(&self, needed: usize) -> CalcError {
        CalcError::Underflow {
            needed,
            available: self.operands.len(),
        }
    }

    fn require(&self, needed: usize) -> CalcErrorResult {
        if self.operands.len() < needed {
            trace!("need {} operand(s), have {}", needed, self.operands.len());
            return Err(self.underflow(needed));
        }
        Ok(())
    }
}

impl From<Vec<f64>> for OperandStack {
    fn from(operands: Vec<f64>) -> Self {
        OperandStack { operands }
    }
}

impl From<&[f64]> for OperandStack {
    fn from(operands: &[f64]) -> Self {
        OperandStack {
            operands: operands.to_vec(),
        }
    }
}

impl FromIterator<f64> for OperandStack {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        OperandStack::with_operands(iter)
    }
}
