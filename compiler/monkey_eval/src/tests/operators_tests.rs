//! Tests for infix operator dispatch.
//!
//! Relocated from `operators.rs`.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::operators::evaluate_infix;
use monkey_ir::InfixOp;
use monkey_object::{EvalErrorKind, ObjectKind, Value};
use proptest::prelude::*;

fn int(n: i64) -> Value {
    Value::integer(n)
}

fn int_op(a: i64, op: InfixOp, b: i64) -> Value {
    evaluate_infix(op, &int(a), &int(b)).unwrap()
}

mod integer_arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_sub_mul() {
        assert_eq!(int_op(5, InfixOp::Add, 5).as_integer(), Some(10));
        assert_eq!(int_op(5, InfixOp::Sub, 10).as_integer(), Some(-5));
        assert_eq!(int_op(-3, InfixOp::Mul, 4).as_integer(), Some(-12));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(int_op(7, InfixOp::Div, 2).as_integer(), Some(3));
        assert_eq!(int_op(-7, InfixOp::Div, 2).as_integer(), Some(-3));
        assert_eq!(int_op(7, InfixOp::Div, -2).as_integer(), Some(-3));
    }

    #[test]
    fn remainder_of_min_by_minus_one_is_zero() {
        assert_eq!(int_op(i64::MIN, InfixOp::Mod, -1).as_integer(), Some(0));
        assert_eq!(int_op(i64::MIN, InfixOp::Mod, 1).as_integer(), Some(0));
    }

    #[test]
    fn remainder_takes_dividend_sign() {
        assert_eq!(int_op(7, InfixOp::Mod, 3).as_integer(), Some(1));
        assert_eq!(int_op(-7, InfixOp::Mod, 3).as_integer(), Some(-1));
        assert_eq!(int_op(7, InfixOp::Mod, -3).as_integer(), Some(1));
    }

    #[test]
    fn results_are_fresh_integers() {
        let a = int_op(1, InfixOp::Add, 1);
        let b = int_op(1, InfixOp::Add, 1);
        assert!(!Value::ptr_eq(&a, &b));
    }
}

mod integer_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn division_by_zero() {
        let err = evaluate_infix(InfixOp::Div, &int(1), &int(0)).unwrap_err();
        assert_eq!(err.kind(), &EvalErrorKind::DivisionByZero);
        assert_eq!(err.message(), "division by zero");
    }

    #[test]
    fn modulo_by_zero() {
        let err = evaluate_infix(InfixOp::Mod, &int(1), &int(0)).unwrap_err();
        assert_eq!(err.kind(), &EvalErrorKind::ModuloByZero);
    }

    #[test]
    fn overflow_is_reported() {
        let cases = [
            (i64::MAX, InfixOp::Add, 1, "addition"),
            (i64::MIN, InfixOp::Sub, 1, "subtraction"),
            (i64::MAX, InfixOp::Mul, 2, "multiplication"),
            (i64::MIN, InfixOp::Div, -1, "division"),
        ];
        for (a, op, b, operation) in cases {
            let err = evaluate_infix(op, &int(a), &int(b)).unwrap_err();
            assert_eq!(err.kind(), &EvalErrorKind::IntegerOverflow { operation });
        }
    }
}

mod integer_comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comparisons_return_singletons() {
        let t = Value::boolean(true);
        let f = Value::boolean(false);
        assert!(Value::ptr_eq(&int_op(1, InfixOp::Lt, 2), &t));
        assert!(Value::ptr_eq(&int_op(1, InfixOp::Gt, 2), &f));
        assert!(Value::ptr_eq(&int_op(1, InfixOp::Eq, 1), &t));
        assert!(Value::ptr_eq(&int_op(1, InfixOp::NotEq, 1), &f));
        assert!(Value::ptr_eq(&int_op(1, InfixOp::NotEq, 2), &t));
    }

    #[test]
    fn separate_integer_instances_compare_by_value() {
        let result = evaluate_infix(InfixOp::Eq, &int(5), &int(5)).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }
}

mod mixed_kinds {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_mismatch_names_both_kinds_and_operator() {
        let err = evaluate_infix(InfixOp::Add, &int(5), &Value::boolean(true)).unwrap_err();
        assert_eq!(err.message(), "type mismatch: INTEGER + BOOLEAN");
    }

    #[test]
    fn mismatch_wins_over_equality() {
        let err = evaluate_infix(InfixOp::Eq, &int(1), &Value::boolean(true)).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::TypeMismatch {
                left: ObjectKind::Integer,
                operator: InfixOp::Eq,
                right: ObjectKind::Boolean,
            }
        );
    }

    #[test]
    fn null_against_boolean_is_mismatch() {
        let err = evaluate_infix(InfixOp::NotEq, &Value::null(), &Value::boolean(false))
            .unwrap_err();
        assert_eq!(err.message(), "type mismatch: NULL != BOOLEAN");
    }
}

mod identity_equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn booleans() {
        let t = Value::boolean(true);
        let f = Value::boolean(false);
        let eq = |a: &Value, b: &Value| evaluate_infix(InfixOp::Eq, a, b).unwrap().as_bool();
        assert_eq!(eq(&t, &Value::boolean(true)), Some(true));
        assert_eq!(eq(&t, &f), Some(false));
        let ne = evaluate_infix(InfixOp::NotEq, &t, &f).unwrap();
        assert_eq!(ne.as_bool(), Some(true));
    }

    #[test]
    fn null_equals_null() {
        let result = evaluate_infix(InfixOp::Eq, &Value::null(), &Value::null()).unwrap();
        assert_eq!(result.as_bool(), Some(true));
    }

    #[test]
    fn separate_strings_are_never_equal() {
        let a = Value::string("same");
        let b = Value::string("same");
        let result = evaluate_infix(InfixOp::Eq, &a, &b).unwrap();
        assert_eq!(result.as_bool(), Some(false));
        let same_handle = evaluate_infix(InfixOp::Eq, &a, &a.clone()).unwrap();
        assert_eq!(same_handle.as_bool(), Some(true));
    }

    #[test]
    fn unknown_operator_for_booleans() {
        let err =
            evaluate_infix(InfixOp::Add, &Value::boolean(true), &Value::boolean(false))
                .unwrap_err();
        assert_eq!(err.message(), "unknown operator: BOOLEAN + BOOLEAN");
    }

    #[test]
    fn unknown_operator_for_strings() {
        let err =
            evaluate_infix(InfixOp::Lt, &Value::string("a"), &Value::string("b")).unwrap_err();
        assert!(matches!(err.kind(), EvalErrorKind::UnknownOperator { .. }));
    }
}

proptest! {
    #[test]
    fn division_matches_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        match a.checked_div(b) {
            Some(q) => {
                prop_assert_eq!(int_op(a, InfixOp::Div, b).as_integer(), Some(q));
            }
            None => {
                prop_assert!(evaluate_infix(InfixOp::Div, &int(a), &int(b)).is_err());
            }
        }
    }

    #[test]
    fn remainder_matches_native(
        a in prop_oneof![Just(i64::MIN), any::<i64>()],
        b in prop_oneof![Just(-1i64), any::<i64>()],
    ) {
        prop_assume!(b != 0);
        prop_assert_eq!(int_op(a, InfixOp::Mod, b).as_integer(), Some(a.wrapping_rem(b)));
    }

    #[test]
    fn comparisons_match_native(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(int_op(a, InfixOp::Lt, b).as_bool(), Some(a < b));
        prop_assert_eq!(int_op(a, InfixOp::Gt, b).as_bool(), Some(a > b));
        prop_assert_eq!(int_op(a, InfixOp::Eq, b).as_bool(), Some(a == b));
        prop_assert_eq!(int_op(a, InfixOp::NotEq, b).as_bool(), Some(a != b));
    }
}
