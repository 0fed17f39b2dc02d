//! Infix operator implementations for the evaluator.
//!
//! Dispatch order for `left OP right`:
//! 1. both integers: the integer table below
//! 2. kinds differ: type mismatch
//! 3. `==`/`!=`: identity comparison of the two handles
//! 4. anything else: unknown operator
//!
//! Identity comparison is exact for booleans and null because they are
//! interned. Two separately built strings are never `==`.

use monkey_ir::InfixOp;
use monkey_object::{
    division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, unknown_operator,
    ErrorValue, Object, Value,
};

/// Checked arithmetic where overflow is the only failure.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> Result<Value, ErrorValue> {
    result
        .map(Value::integer)
        .ok_or_else(|| integer_overflow(operation))
}

/// Reject a zero divisor before `/` or `%` runs.
#[inline]
fn guard_divisor(divisor: i64, by_zero: fn() -> ErrorValue) -> Result<(), ErrorValue> {
    if divisor == 0 {
        Err(by_zero())
    } else {
        Ok(())
    }
}

/// Evaluate an infix operation on two already-evaluated operands.
///
/// Neither operand may be an error; the interpreter propagates those before
/// dispatching here.
pub fn evaluate_infix(operator: InfixOp, left: &Value, right: &Value) -> Result<Value, ErrorValue> {
    if let (Object::Integer(a), Object::Integer(b)) = (&**left, &**right) {
        return eval_integer_infix(operator, *a, *b);
    }

    let (left_kind, right_kind) = (left.kind(), right.kind());
    if left_kind != right_kind {
        return Err(type_mismatch(left_kind, operator, right_kind));
    }
    match operator {
        InfixOp::Eq => Ok(Value::boolean(Value::ptr_eq(left, right))),
        InfixOp::NotEq => Ok(Value::boolean(!Value::ptr_eq(left, right))),
        _ => Err(unknown_operator(left_kind, operator, right_kind)),
    }
}

/// Integer arithmetic and comparison.
///
/// `/` and `%` truncate toward zero like the native operators. `%` never
/// overflows.
fn eval_integer_infix(operator: InfixOp, a: i64, b: i64) -> Result<Value, ErrorValue> {
    match operator {
        InfixOp::Add => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Div => {
            guard_divisor(b, division_by_zero)?;
            checked_arith(a.checked_div(b), "division")
        }
        InfixOp::Mod => {
            guard_divisor(b, modulo_by_zero)?;
            // `MIN % -1` is 0; only the quotient overflows.
            Ok(Value::integer(a.wrapping_rem(b)))
        }
        InfixOp::Lt => Ok(Value::boolean(a < b)),
        InfixOp::Gt => Ok(Value::boolean(a > b)),
        InfixOp::Eq => Ok(Value::boolean(a == b)),
        InfixOp::NotEq => Ok(Value::boolean(a != b)),
    }
}
