//! Parsing of raw prompt input into typed values.
//!
//! Each parser trims its input and returns a [`PayrollError::Format`] when
//! the text is not a number of the expected kind, or a
//! [`PayrollError::Validation`] when it parses but is out of range.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeId;

/// Message shown when a salary is negative.
pub const NEGATIVE_SALARY_MESSAGE: &str = "Salary cannot be negative";

/// Message shown when hours or rate are negative.
pub const NEGATIVE_VALUES_MESSAGE: &str = "Values must be positive";

/// Message shown when hours times rate does not fit in a decimal.
pub const SALARY_OVERFLOW_MESSAGE: &str = "Salary is too large";

/// Returns the trimmed name, rejecting blank input.
pub fn parse_name(input: &str) -> PayrollResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(PayrollError::validation("name", "Name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Parses an employee id. Any 32-bit integer is accepted.
pub fn parse_id(input: &str) -> PayrollResult<EmployeeId> {
    input
        .trim()
        .parse::<EmployeeId>()
        .map_err(|_| PayrollError::format("id", input))
}

/// Parses a non-negative monthly salary.
pub fn parse_salary(input: &str) -> PayrollResult<Decimal> {
    let salary = parse_decimal("monthly_salary", input)?;
    if is_negative(salary) {
        return Err(PayrollError::validation(
            "monthly_salary",
            NEGATIVE_SALARY_MESSAGE,
        ));
    }
    Ok(salary)
}

/// Parses a non-negative whole number of hours.
///
/// A negative integer is a validation error; a fraction is a format error.
pub fn parse_hours(input: &str) -> PayrollResult<u32> {
    let hours = input
        .trim()
        .parse::<i32>()
        .map_err(|_| PayrollError::format("hours_worked", input))?;
    u32::try_from(hours)
        .map_err(|_| PayrollError::validation("hours_worked", NEGATIVE_VALUES_MESSAGE))
}

/// Parses a non-negative hourly rate.
pub fn parse_rate(input: &str) -> PayrollResult<Decimal> {
    let rate = parse_decimal("hourly_rate", input)?;
    if is_negative(rate) {
        return Err(PayrollError::validation(
            "hourly_rate",
            NEGATIVE_VALUES_MESSAGE,
        ));
    }
    Ok(rate)
}

fn parse_decimal(field: &str, input: &str) -> PayrollResult<Decimal> {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PayrollError::format(field, input))
}

/// True for values below zero. A negative zero is not negative.
pub(crate) fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_name_trims() {
        assert_eq!(parse_name("  Alice  ").unwrap(), "Alice");
    }

    #[test]
    fn test_parse_name_rejects_blank() {
        for input in ["", "   ", "\t"] {
            let err = parse_name(input).unwrap_err();
            assert_eq!(err.to_string(), "Name cannot be empty");
        }
    }

    #[test]
    fn test_parse_id_accepts_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_id("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        for input in ["", "abc", "1.5", "99999999999"] {
            let err = parse_id(input).unwrap_err();
            assert_eq!(err, PayrollError::format("id", input), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("3000.00").unwrap(), dec("3000"));
        assert_eq!(parse_salary("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_salary("1e3").unwrap(), dec("1000"));
    }

    #[test]
    fn test_parse_salary_negative_is_validation_error() {
        let err = parse_salary("-1").unwrap_err();
        assert_eq!(
            err,
            PayrollError::validation("monthly_salary", NEGATIVE_SALARY_MESSAGE)
        );
    }

    #[test]
    fn test_parse_salary_non_numeric_is_format_error() {
        let err = parse_salary("lots").unwrap_err();
        assert_eq!(err.code(), "FORMAT_ERROR");
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("10").unwrap(), 10);
        assert_eq!(parse_hours("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_hours_negative_is_validation_error() {
        let err = parse_hours("-5").unwrap_err();
        assert_eq!(err.to_string(), NEGATIVE_VALUES_MESSAGE);
    }

    #[test]
    fn test_parse_hours_fraction_is_format_error() {
        let err = parse_hours("7.5").unwrap_err();
        assert_eq!(err, PayrollError::format("hours_worked", "7.5"));
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("15.5").unwrap(), dec("15.5"));
        assert_eq!(parse_rate("-2.25").unwrap_err().code(), "VALIDATION_ERROR");
        assert_eq!(parse_rate("x").unwrap_err().code(), "FORMAT_ERROR");
    }
}
