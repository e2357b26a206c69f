use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::*;
use crate::stack::OperandStack;

/// A function applied to the operands on top of the stack
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Consumes the top operand
    Unary(fn(f64) -> f64),
    /// Consumes the top two operands: `f(below, top)`
    Binary(fn(f64, f64) -> f64),
}

impl Operation {
    /// Number of operands the operation consumes
    pub fn arity(&self) -> usize {
        match self {
            Operation::Unary(..) => 1,
            Operation::Binary(..) => 2,
        }
    }
}

/// Everything a calculator key or a word in an input line can do to the stack
#[derive(Clone, Copy, Debug)]
pub enum Command {
    Apply(Operation),
    Swap,
    Dup,
    Drop,
    Clear,
}

impl Command {
    pub fn execute(&self, stack: &mut OperandStack) -> CalcErrorResult {
        match self {
            Command::Apply(op) => stack.perform_operation(*op).map(|_| ()),
            Command::Swap => stack.swap(),
            Command::Dup => stack.dup(),
            Command::Drop => stack.pop_operand().map(|_| ()),
            Command::Clear => {
                stack.clear();
                Ok(())
            }
        }
    }
}

fn add(x: f64, y: f64) -> f64 {
    x + y
}
fn subtract(x: f64, y: f64) -> f64 {
    x - y
}
fn multiply(x: f64, y: f64) -> f64 {
    x * y
}
fn divide(x: f64, y: f64) -> f64 {
    x / y
}
fn reminder(x: f64, y: f64) -> f64 {
    x % y
}
fn negate(v: f64) -> f64 {
    -v
}
fn sqr(v: f64) -> f64 {
    v * v
}
fn inverse(v: f64) -> f64 {
    1.0 / v
}

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, Command> = {
        use Command::*;
        use Operation::*;

        let mut m = HashMap::new();
        m.insert("+", Apply(Binary(add)));
        m.insert("-", Apply(Binary(subtract)));
        m.insert("*", Apply(Binary(multiply)));
        m.insert("/", Apply(Binary(divide)));
        m.insert("%", Apply(Binary(reminder)));
        m.insert("**", Apply(Binary(f64::powf)));
        m.insert("^", Apply(Binary(f64::powf)));
        m.insert("pow", Apply(Binary(f64::powf)));
        m.insert("min", Apply(Binary(f64::min)));
        m.insert("max", Apply(Binary(f64::max)));

        m.insert("neg", Apply(Unary(negate)));
        m.insert("~", Apply(Unary(negate)));
        m.insert("sqrt", Apply(Unary(f64::sqrt)));
        m.insert("sqr", Apply(Unary(sqr)));
        m.insert("abs", Apply(Unary(f64::abs)));
        m.insert("inv", Apply(Unary(inverse)));
        m.insert("exp", Apply(Unary(f64::exp)));
        m.insert("ln", Apply(Unary(f64::ln)));
        m.insert("sin", Apply(Unary(f64::sin)));
        m.insert("cos", Apply(Unary(f64::cos)));
        m.insert("tan", Apply(Unary(f64::tan)));
        m.insert("floor", Apply(Unary(f64::floor)));
        m.insert("ceil", Apply(Unary(f64::ceil)));
        m.insert("round", Apply(Unary(f64::round)));

        m.insert("swap", Swap);
        m.insert("dup", Dup);
        m.insert("drop", Drop);
        m.insert("pop", Drop);
        m.insert("clear", Clear);
        m
    };
}

/// Returns the command for an operator symbol or a name. Names are
/// case-insensitive
pub fn lookup(name: &str) -> Result<Command, CalcError> {
    let low = name.to_lowercase();
    match COMMANDS.get(low.as_str()) {
        Some(cmd) => Ok(*cmd),
        None => Err(CalcError::InvalidOp(name.to_string())),
    }
}

pub fn is_command(name: &str) -> bool {
    COMMANDS.contains_key(name.to_lowercase().as_str())
}

/// All known operator symbols and names, sorted
pub fn command_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COMMANDS.keys().copied().collect();
    names.sort_unstable();
    names
}
