//! Command payloads - the executable part of a work item.
//!
//! The queue treats payloads as opaque; execution is delegated to an
//! evaluator at drain time. Instead of arbitrary source text, a payload is
//! a closed tagged variant: an arithmetic expression over context bindings,
//! or a named action resolved by the executor.

use serde::{Deserialize, Serialize};

/// An executable command payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Arithmetic expression evaluated against the context bindings.
    Expr(Expr),
    /// Named external action. The default evaluator resolves it to the
    /// value bound under that name in the context.
    Action(String),
}

impl Command {
    /// Creates an expression command.
    pub fn expr(expr: Expr) -> Self {
        Command::Expr(expr)
    }

    /// Creates a named action command.
    pub fn action(name: impl Into<String>) -> Self {
        Command::Action(name.into())
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// An integer arithmetic expression over named bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Integer literal.
    Literal(i64),
    /// Reference to a binding in the evaluation context.
    Var(String),
    /// Binary operation on two sub-expressions.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Creates an integer literal.
    pub fn lit(value: i64) -> Self {
        Expr::Literal(value)
    }

    /// Creates a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Creates an addition.
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Add, lhs, rhs)
    }

    /// Creates a subtraction.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Sub, lhs, rhs)
    }

    /// Creates a multiplication.
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Mul, lhs, rhs)
    }

    /// Creates a division.
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binary(BinOp::Div, lhs, rhs)
    }
}
