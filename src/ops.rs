//! Pure arithmetic core.
//!
//! # Responsibilities
//! - Decode raw query-string text into `f64` operands
//! - Enforce per-operation validity predicates (zero divisor, negative radicand)
//! - Perform the actual computation
//!
//! # Design Decisions
//! - Missing or malformed text maps to the NaN sentinel, so "absent" and
//!   "unparseable" take the same rejection path
//! - Only the explicit predicates pre-empt computation; IEEE specials
//!   produced by valid operands (e.g. (-8)^0.5) flow through to the response
//! - No I/O here: everything is a pure function over `f64`

use thiserror::Error;

/// Why an operation rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpError {
    /// An operand was missing or did not parse as a number.
    #[error("operand is not a number")]
    NotANumber,

    /// Division or modulo by zero.
    #[error("divisor is zero")]
    ZeroDivisor,

    /// Square root of a negative number.
    #[error("radicand is negative")]
    NegativeRadicand,
}

/// The supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    SquareRoot,
    Modulo,
    Abs,
}

impl Operation {
    /// Noun used in log and error messages.
    pub fn noun(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Exponentiate => "exponentiation",
            Operation::SquareRoot => "square root",
            Operation::Modulo => "modulo operation",
            Operation::Abs => "absolute value",
        }
    }

    /// Unary operations take a single `num` parameter.
    pub fn is_unary(self) -> bool {
        matches!(self, Operation::SquareRoot | Operation::Abs)
    }

    /// Client-facing message for a validation rejection.
    ///
    /// Unary operations use the singular "parameter".
    pub fn rejection_message(self) -> String {
        let noun = if self.is_unary() {
            "parameter"
        } else {
            "parameters"
        };
        format!("Invalid input {} for {}", noun, self.noun())
    }
}

/// Decode one raw query-string value into an operand.
///
/// Accepts leading/trailing whitespace, an optional sign, decimal and
/// exponential notation. Missing or non-numeric text yields NaN.
pub fn parse_operand(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Reject operands that failed to parse.
fn operand(value: f64) -> Result<f64, OpError> {
    if value.is_nan() {
        Err(OpError::NotANumber)
    } else {
        Ok(value)
    }
}

pub fn add(num1: f64, num2: f64) -> Result<f64, OpError> {
    Ok(operand(num1)? + operand(num2)?)
}

pub fn subtract(num1: f64, num2: f64) -> Result<f64, OpError> {
    Ok(operand(num1)? - operand(num2)?)
}

pub fn multiply(num1: f64, num2: f64) -> Result<f64, OpError> {
    Ok(operand(num1)? * operand(num2)?)
}

pub fn divide(num1: f64, num2: f64) -> Result<f64, OpError> {
    let num1 = operand(num1)?;
    let num2 = operand(num2)?;
    if num2 == 0.0 {
        return Err(OpError::ZeroDivisor);
    }
    Ok(num1 / num2)
}

pub fn exponentiate(base: f64, exponent: f64) -> Result<f64, OpError> {
    Ok(operand(base)?.powf(operand(exponent)?))
}

pub fn square_root(num: f64) -> Result<f64, OpError> {
    let num = operand(num)?;
    if num < 0.0 {
        return Err(OpError::NegativeRadicand);
    }
    Ok(num.sqrt())
}

pub fn modulo(dividend: f64, divisor: f64) -> Result<f64, OpError> {
    let dividend = operand(dividend)?;
    let divisor = operand(divisor)?;
    if divisor == 0.0 {
        return Err(OpError::ZeroDivisor);
    }
    Ok(dividend % divisor)
}

pub fn abs(num: f64) -> Result<f64, OpError> {
    Ok(operand(num)?.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_operand_accepts_standard_notation() {
        assert_eq!(parse_operand(Some("1.5")), 1.5);
        assert_eq!(parse_operand(Some("-7")), -7.0);
        assert_eq!(parse_operand(Some("1e3")), 1000.0);
        assert_eq!(parse_operand(Some("  42  ")), 42.0);
    }

    #[test]
    fn parse_operand_rejects_garbage_and_missing() {
        assert!(parse_operand(Some("foo")).is_nan());
        assert!(parse_operand(Some("")).is_nan());
        assert!(parse_operand(Some("1.2.3")).is_nan());
        assert!(parse_operand(None).is_nan());
    }

    #[test]
    fn binary_operations_compute() {
        assert_eq!(add(1.5, 2.0), Ok(3.5));
        assert_eq!(subtract(1.0, 4.0), Ok(-3.0));
        assert_eq!(multiply(3.0, -2.0), Ok(-6.0));
        assert_eq!(divide(5.0, 2.0), Ok(2.5));
        assert_eq!(exponentiate(2.0, 10.0), Ok(1024.0));
        assert_eq!(modulo(10.0, 3.0), Ok(1.0));
    }

    #[test]
    fn unary_operations_compute() {
        assert_eq!(square_root(9.0), Ok(3.0));
        assert_eq!(abs(-7.5), Ok(7.5));
        assert_eq!(abs(7.5), Ok(7.5));
    }

    #[test]
    fn nan_operands_are_rejected() {
        assert_eq!(add(f64::NAN, 2.0), Err(OpError::NotANumber));
        assert_eq!(add(2.0, f64::NAN), Err(OpError::NotANumber));
        assert_eq!(square_root(f64::NAN), Err(OpError::NotANumber));
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(divide(5.0, 0.0), Err(OpError::ZeroDivisor));
        assert_eq!(divide(5.0, -0.0), Err(OpError::ZeroDivisor));
        assert_eq!(modulo(10.0, 0.0), Err(OpError::ZeroDivisor));
    }

    #[test]
    fn negative_radicand_is_rejected() {
        assert_eq!(square_root(-1.0), Err(OpError::NegativeRadicand));
        assert_eq!(square_root(0.0), Ok(0.0));
    }

    #[test]
    fn ieee_specials_flow_through_valid_operands() {
        // Negative base to a fractional exponent is NaN, not a rejection.
        assert!(exponentiate(-8.0, 0.5).unwrap().is_nan());
        assert_eq!(divide(1.0, f64::INFINITY), Ok(0.0));
    }

    #[test]
    fn modulo_keeps_the_dividend_sign() {
        assert_eq!(modulo(-10.0, 3.0), Ok(-1.0));
        assert_eq!(modulo(10.0, -3.0), Ok(1.0));
    }

    #[test]
    fn rejection_messages_match_operation_arity() {
        assert_eq!(
            Operation::Add.rejection_message(),
            "Invalid input parameters for addition"
        );
        assert_eq!(
            Operation::SquareRoot.rejection_message(),
            "Invalid input parameter for square root"
        );
        assert_eq!(
            Operation::Modulo.rejection_message(),
            "Invalid input parameters for modulo operation"
        );
    }
}
