//! Eager argument checks shared by the validated container operations. Every check runs before the
//! operation touches its container, so a rejected call never leaves a partial mutation behind.

use tracing::debug;

use crate::collections::Value;
use crate::util::error::{ContainerError, IllegalArgument, TypeMismatch};

/// Requires `value` to be a finite [`Value::Number`], returning the number.
pub(crate) fn finite(
    operation: &'static str,
    parameter: &'static str,
    value: &Value,
) -> Result<f64, ContainerError> {
    match value {
        Value::Number(n) if n.is_finite() => Ok(*n),
        other => {
            let found = match other {
                Value::Number(_) => "a non-finite Number",
                other => other.type_name(),
            };
            debug!(operation, parameter, found, "rejected argument of the wrong type");
            Err(TypeMismatch {
                operation,
                expected: "a finite Number",
                found,
            }
            .into())
        }
    }
}

/// Like [`finite`], but treats [`Value::Undefined`] as an omitted argument and substitutes
/// `default`.
pub(crate) fn finite_or(
    operation: &'static str,
    parameter: &'static str,
    value: &Value,
    default: f64,
) -> Result<f64, ContainerError> {
    match value {
        Value::Undefined => Ok(default),
        other => finite(operation, parameter, other),
    }
}

/// Requires `value >= min`.
pub(crate) fn at_least(
    operation: &'static str,
    parameter: &'static str,
    value: f64,
    min: f64,
) -> Result<f64, ContainerError> {
    if value < min {
        debug!(operation, parameter, value, min, "rejected out of range argument");
        Err(IllegalArgument {
            operation,
            parameter,
            value,
            min,
        }
        .into())
    } else {
        Ok(value)
    }
}

/// Resolves a relative offset against a sequence of length `len`: the offset is truncated towards
/// zero, negative offsets count back from the end and the result is clamped to `0..=len`.
pub(crate) fn resolve_offset(offset: f64, len: usize) -> usize {
    let offset = if offset.is_nan() { 0.0 } else { offset.trunc() };
    let len = len as f64;

    if offset < 0.0 {
        (len + offset).max(0.0) as usize
    } else {
        offset.min(len) as usize
    }
}
