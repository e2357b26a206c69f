use rpncalc::errors::CalcError;
use rpncalc::ops::{self, Command, Operation};
use rpncalc::parse;
use rpncalc::session::{Session, SessionConfig};
use rpncalc::stack::OperandStack;
use rpncalc::value::f64_equal;

#[test]
fn test_calibration_scenarios() {
    let mut stack = OperandStack::with_operands([1.0, 3.14]);
    let res = stack.perform_binary(|a, b| a - b).unwrap();
    assert!(f64_equal(res, -2.14));
    assert_eq!(stack.operand_count(), 1);

    let mut stack = OperandStack::new();
    stack.push_operand(1.0);
    stack.push_operand(3.14);
    assert_eq!(stack.peek_operand(0), Ok(3.14));
    assert_eq!(stack.peek_operand(1), Ok(1.0));
    assert_eq!(stack.operand_count(), 2);

    let mut stack = OperandStack::with_operands([1.0, 3.14]);
    stack.swap().unwrap();
    assert_eq!(stack.peek_operand(0), Ok(1.0));
    assert_eq!(stack.peek_operand(1), Ok(3.14));
}

#[test]
fn test_keypad_session() {
    // 12 enter 3 / 2 * -> 8
    let mut session = Session::new(SessionConfig { display_lines: 2 });
    for c in "12".chars() {
        session.type_char(c).unwrap();
    }
    session.enter().unwrap();
    session.type_char('3').unwrap();
    session.apply("/").unwrap();
    session.type_char('2').unwrap();
    session.apply("*").unwrap();
    assert_eq!(session.display(), vec!["8.0"]);

    // enter with nothing typed duplicates, then multiply squares
    session.enter().unwrap();
    session.apply("*").unwrap();
    assert_eq!(session.stack().top(), Ok(64.0));
}

#[test]
fn test_session_recovers_after_error() {
    let mut session = Session::default();
    assert_eq!(session.evaluate("4 +"), Err(CalcError::Underflow { needed: 2, available: 1 }));
    assert!(session.stack().is_empty());
    assert_eq!(session.evaluate("4 sqrt 1 +"), Ok(()));
    assert_eq!(session.display(), vec!["3.0"]);
}

#[test]
fn test_commands_from_table() {
    let mut stack = OperandStack::from(vec![3.0, 4.0]);
    for name in ["sqr", "swap", "sqr", "+", "sqrt"] {
        ops::lookup(name).unwrap().execute(&mut stack).unwrap();
    }
    assert_eq!(stack, OperandStack::from(vec![5.0]));

    let custom = Command::Apply(Operation::Binary(f64::hypot));
    let mut stack = OperandStack::from(vec![6.0, 8.0]);
    custom.execute(&mut stack).unwrap();
    assert!(f64_equal(stack.top().unwrap(), 10.0));
}

#[test]
fn test_eval_line_is_atomic() {
    let mut stack = OperandStack::from(vec![10.0]);
    assert_eq!(parse::eval("2 / 5 * nope", &mut stack), Err(CalcError::InvalidOp("nope".to_string())));
    assert_eq!(stack, OperandStack::from(vec![10.0]));
    assert_eq!(parse::eval("2 / 5 *", &mut stack), Ok(()));
    assert_eq!(stack, OperandStack::from(vec![25.0]));
}
