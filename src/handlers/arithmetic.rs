//! Arithmetic endpoint handlers.
//!
//! Every handler has the same shape: decode the declared query parameters
//! into operands, run the operation from [`crate::ops`], and either render
//! `Result: <value>` or short-circuit with a 400 after logging the rejection.
//! Missing and malformed parameters both flow through the NaN sentinel, so a
//! single rejection path covers them.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::RequestLogger;
use crate::ops::{self, OpError, Operation};

/// Operands for the num1/num2 endpoints.
#[derive(Debug, Deserialize)]
pub struct PairParams {
    num1: Option<String>,
    num2: Option<String>,
}

impl PairParams {
    fn parsed(&self) -> (f64, f64) {
        (
            ops::parse_operand(self.num1.as_deref()),
            ops::parse_operand(self.num2.as_deref()),
        )
    }
}

/// Operands for /exponentiate.
#[derive(Debug, Deserialize)]
pub struct PowerParams {
    base: Option<String>,
    exponent: Option<String>,
}

/// Operands for /modulo.
#[derive(Debug, Deserialize)]
pub struct ModuloParams {
    dividend: Option<String>,
    divisor: Option<String>,
}

/// Operand for the single-parameter endpoints.
#[derive(Debug, Deserialize)]
pub struct SingleParam {
    num: Option<String>,
}

impl SingleParam {
    fn parsed(&self) -> f64 {
        ops::parse_operand(self.num.as_deref())
    }
}

fn render(value: f64) -> String {
    format!("Result: {value}")
}

/// Log the rejection, then build the client-facing error.
fn reject(log: &RequestLogger, operation: Operation, source: OpError) -> ApiError {
    log.invalid_input(operation);
    ApiError::invalid_input(operation, source)
}

pub async fn add(
    State(state): State<AppState>,
    Query(params): Query<PairParams>,
) -> Result<String, ApiError> {
    let (num1, num2) = params.parsed();
    ops::add(num1, num2)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Add, e))
}

pub async fn subtract(
    State(state): State<AppState>,
    Query(params): Query<PairParams>,
) -> Result<String, ApiError> {
    let (num1, num2) = params.parsed();
    ops::subtract(num1, num2)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Subtract, e))
}

pub async fn multiply(
    State(state): State<AppState>,
    Query(params): Query<PairParams>,
) -> Result<String, ApiError> {
    let (num1, num2) = params.parsed();
    ops::multiply(num1, num2)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Multiply, e))
}

pub async fn divide(
    State(state): State<AppState>,
    Query(params): Query<PairParams>,
) -> Result<String, ApiError> {
    let (num1, num2) = params.parsed();
    ops::divide(num1, num2)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Divide, e))
}

pub async fn exponentiate(
    State(state): State<AppState>,
    Query(params): Query<PowerParams>,
) -> Result<String, ApiError> {
    let base = ops::parse_operand(params.base.as_deref());
    let exponent = ops::parse_operand(params.exponent.as_deref());
    ops::exponentiate(base, exponent)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Exponentiate, e))
}

pub async fn square_root(
    State(state): State<AppState>,
    Query(params): Query<SingleParam>,
) -> Result<String, ApiError> {
    ops::square_root(params.parsed())
        .map(render)
        .map_err(|e| reject(&state.log, Operation::SquareRoot, e))
}

pub async fn modulo(
    State(state): State<AppState>,
    Query(params): Query<ModuloParams>,
) -> Result<String, ApiError> {
    let dividend = ops::parse_operand(params.dividend.as_deref());
    let divisor = ops::parse_operand(params.divisor.as_deref());
    ops::modulo(dividend, divisor)
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Modulo, e))
}

pub async fn abs(
    State(state): State<AppState>,
    Query(params): Query<SingleParam>,
) -> Result<String, ApiError> {
    ops::abs(params.parsed())
        .map(render)
        .map_err(|e| reject(&state.log, Operation::Abs, e))
}
