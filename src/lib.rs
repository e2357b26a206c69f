//! # Operand-stack calculator
//!
//! A reverse-Polish calculator engine: numbers are pushed onto a stack and
//! operators consume the operands on top of it and push the result.
//!
//! ```
//! use rpncalc::stack::OperandStack;
//!
//! let mut stack = OperandStack::with_operands([1.0, 3.14]);
//! let res = stack.perform_binary(|x, y| x - y).unwrap();
//! assert!((res + 2.14).abs() < 1e-12);
//! assert_eq!(stack.operand_count(), 1);
//! ```
//!
//! The top of the stack is depth 0. Binary operators get the operand below
//! the top as their first argument, so `1 3.14 -` is `1 - 3.14`.
//!
//! Operations that need more operands than the stack holds fail with
//! `CalcError::Underflow`, peeking outside the stack fails with
//! `CalcError::InvalidDepth`. A failed call never changes the stack.
//!
//! Operators known by name (case-insensitive):
//! * binary: `+`, `-`, `*`, `/`, `%`, `**` (also `^` and `pow`), `min`, `max`
//! * unary: `neg` (also `~`), `sqrt`, `sqr`, `abs`, `inv`, `exp`, `ln`,
//! `sin`, `cos`, `tan`, `floor`, `ceil`, `round`
//! * stack commands: `swap`, `dup`, `drop` (also `pop`), `clear`
//!
//! Division by zero is not an error: the IEEE result (`inf` or `NaN`) is
//! pushed like any other number.
//!
//! `session::Session` wraps a stack with the input handling of a calculator
//! screen, `parse::eval` evaluates a whole line such as `2 3 + 4 *`.

#[macro_use]
extern crate pest_derive;

pub mod errors;
pub mod ops;
pub mod parse;
pub mod session;
pub mod stack;
pub mod value;
