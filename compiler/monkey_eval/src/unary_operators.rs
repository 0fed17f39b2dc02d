//! Prefix operator implementations for the evaluator.

use monkey_ir::PrefixOp;
use monkey_object::{integer_overflow, operator_type, ErrorValue, Object, Value};

/// Evaluate a prefix operation on an already-evaluated operand.
///
/// `!` negates truthiness, so it accepts every kind. `-` needs an integer.
pub fn evaluate_prefix(operator: PrefixOp, right: &Value) -> Result<Value, ErrorValue> {
    match operator {
        PrefixOp::Bang => Ok(Value::boolean(!right.is_truthy())),
        PrefixOp::Minus => match **right {
            Object::Integer(n) => n
                .checked_neg()
                .map(Value::integer)
                .ok_or_else(|| integer_overflow("negation")),
            _ => Err(operator_type(operator, right.kind())),
        },
    }
}
