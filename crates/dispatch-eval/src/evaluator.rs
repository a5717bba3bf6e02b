//! Evaluator trait and the default expression evaluator.

use dispatch_models::{BinOp, Command, Context, Expr, Value};

use crate::error::{EvalError, Result};

/// Executes command payloads against a binding context.
///
/// Implementations decide what payloads mean; the queue only routes each
/// dequeued payload here during a drain.
pub trait Evaluator {
    /// Evaluates one command, returning its result value.
    fn evaluate(&self, command: &Command, context: &Context) -> Result<Value>;
}

/// Default evaluator: integer arithmetic plus named binding lookup.
///
/// - [`Command::Expr`] is evaluated as checked `i64` arithmetic; variables
///   must resolve to integer bindings.
/// - [`Command::Action`] resolves to the value bound under that name,
///   whatever its type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExprEvaluator;

impl ExprEvaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    fn eval_expr(&self, expr: &Expr, context: &Context) -> Result<i64> {
        match expr {
            Expr::Literal(n) => Ok(*n),
            Expr::Var(name) => match context.get(name) {
                Some(Value::Int(n)) => Ok(*n),
                Some(Value::Str(_)) => Err(EvalError::TypeMismatch { name: name.clone() }),
                None => Err(EvalError::UnknownIdentifier(name.clone())),
            },
            Expr::Binary { op, lhs, rhs } => {
                let lhs = self.eval_expr(lhs, context)?;
                let rhs = self.eval_expr(rhs, context)?;
                self.apply(*op, lhs, rhs)
            }
        }
    }

    fn apply(&self, op: BinOp, lhs: i64, rhs: i64) -> Result<i64> {
        match op {
            BinOp::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            BinOp::Sub => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            BinOp::Mul => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            BinOp::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)
            }
        }
    }
}

impl Evaluator for ExprEvaluator {
    fn evaluate(&self, command: &Command, context: &Context) -> Result<Value> {
        match command {
            Command::Expr(expr) => self.eval_expr(expr, context).map(Value::Int),
            Command::Action(name) => context
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::UnknownIdentifier(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> Context {
        Context::new()
            .with_binding("x", 2)
            .with_binding("y", 3)
            .with_binding("foo", "foo")
    }

    fn eval(command: Command) -> Result<Value> {
        ExprEvaluator::new().evaluate(&command, &make_context())
    }

    #[test]
    fn test_literal() {
        assert_eq!(eval(Command::expr(Expr::lit(7))), Ok(Value::Int(7)));
    }

    #[test]
    fn test_var() {
        assert_eq!(eval(Command::expr(Expr::var("y"))), Ok(Value::Int(3)));
    }

    #[test]
    fn test_binary_ops() {
        assert_eq!(
            eval(Command::expr(Expr::mul(Expr::var("x"), Expr::var("y")))),
            Ok(Value::Int(6))
        );
        assert_eq!(
            eval(Command::expr(Expr::add(Expr::lit(4), Expr::var("x")))),
            Ok(Value::Int(6))
        );
        assert_eq!(
            eval(Command::expr(Expr::sub(Expr::var("y"), Expr::lit(1)))),
            Ok(Value::Int(2))
        );
        assert_eq!(
            eval(Command::expr(Expr::div(Expr::lit(6), Expr::var("y")))),
            Ok(Value::Int(2))
        );
    }

    #[test]
    fn test_nested_expr() {
        // (x + y) * 5
        let expr = Expr::mul(Expr::add(Expr::var("x"), Expr::var("y")), Expr::lit(5));
        assert_eq!(eval(Command::expr(expr)), Ok(Value::Int(25)));
    }

    #[test]
    fn test_action_lookup() {
        assert_eq!(
            eval(Command::action("foo")),
            Ok(Value::Str("foo".to_string()))
        );
    }

    #[test]
    fn test_action_can_return_int() {
        assert_eq!(eval(Command::action("x")), Ok(Value::Int(2)));
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(
            eval(Command::expr(Expr::var("nope"))),
            Err(EvalError::UnknownIdentifier("nope".to_string()))
        );
        assert_eq!(
            eval(Command::action("nope")),
            Err(EvalError::UnknownIdentifier("nope".to_string()))
        );
    }

    #[test]
    fn test_type_mismatch() {
        // "foo" is bound to a string; using it arithmetically fails.
        assert_eq!(
            eval(Command::expr(Expr::mul(Expr::var("foo"), Expr::lit(2)))),
            Err(EvalError::TypeMismatch {
                name: "foo".to_string()
            })
        );
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            eval(Command::expr(Expr::div(Expr::var("x"), Expr::lit(0)))),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            eval(Command::expr(Expr::mul(Expr::lit(i64::MAX), Expr::lit(2)))),
            Err(EvalError::Overflow)
        );
    }
}
