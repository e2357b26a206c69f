use log::debug;
use pest::Parser;

use crate::errors::*;
use crate::ops;
use crate::stack::OperandStack;
use crate::value::str_to_f64;

#[derive(Parser)]
#[grammar = "rpn.pest"]
pub struct RpnParser;

/// Evaluates a line of whitespace separated RPN tokens against a stack.
///
/// Numbers are pushed, operator symbols and names are applied in order,
/// e.g. `1 3.14 - abs`. The line is applied as a whole: if any token
/// fails the stack is left as it was before the line.
pub fn eval(line: &str, stack: &mut OperandStack) -> CalcErrorResult {
    let pairs = match RpnParser::parse(Rule::line, line) {
        Ok(p) => p,
        Err(e) => return Err(CalcError::ParseFailed(format!("unexpected input at column {}", error_column(&e)))),
    };

    let mut work = stack.clone();
    for pair in pairs {
        let tok = pair.as_str();
        match pair.as_rule() {
            Rule::number => work.push_operand(str_to_f64(tok)?),
            Rule::word | Rule::symbol => {
                let cmd = ops::lookup(tok)?;
                if let Err(e) = cmd.execute(&mut work) {
                    debug!("'{}' failed in '{}': {}", tok, line, e);
                    return Err(e);
                }
            }
            Rule::EOI => {}
            _ => return Err(CalcError::ParseFailed(format!("unexpected token '{}'", tok))),
        }
    }

    *stack = work;
    Ok(())
}

fn error_column(e: &pest::error::Error<Rule>) -> usize {
    match e.line_col {
        pest::error::LineColLocation::Pos((_, col)) => col,
        pest::error::LineColLocation::Span((_, col), _) => col,
    }
}
