//! Employee model and related types.
//!
//! This module defines the [`Employee`] record and the [`EmploymentType`]
//! discriminant for the two pay arrangements the roster supports.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::validation::{
    NEGATIVE_SALARY_MESSAGE, NEGATIVE_VALUES_MESSAGE, SALARY_OVERFLOW_MESSAGE, is_negative,
    parse_name,
};

/// Identifier of an employee, unique within a roster.
pub type EmployeeId = i32;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Salaried employment paid a fixed monthly amount.
    FullTime,
    /// Hourly employment paid for hours worked.
    PartTime,
}

impl EmploymentType {
    /// Every employment type, in menu order.
    pub const ALL: [EmploymentType; 2] = [EmploymentType::FullTime, EmploymentType::PartTime];

    /// The default human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-Time",
            EmploymentType::PartTime => "Part-Time",
        }
    }
}

/// How an employee is paid. The variant decides how salary is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum PayBasis {
    /// Paid a fixed monthly salary.
    FullTime {
        /// The monthly salary.
        monthly_salary: Decimal,
    },
    /// Paid `hours_worked * hourly_rate`.
    PartTime {
        /// Whole hours worked in the period.
        hours_worked: u32,
        /// Pay per hour.
        hourly_rate: Decimal,
    },
}

/// An employee on the roster.
///
/// Records are immutable once built: there are no setters, and the only way
/// to change an entry is to remove it and add a new one. Deserialization
/// goes through the same checks as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    name: String,
    id: EmployeeId,
    #[serde(flatten)]
    pay: PayBasis,
}

impl Employee {
    /// Creates a full-time employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the name is blank or the
    /// salary is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_roster::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let alice = Employee::full_time("Alice", 1, Decimal::new(3000, 0)).unwrap();
    /// assert_eq!(alice.describe(), "Employee [Name: Alice, ID: 1, Salary: 3000.00]");
    /// ```
    pub fn full_time(
        name: impl Into<String>,
        id: EmployeeId,
        monthly_salary: Decimal,
    ) -> PayrollResult<Self> {
        let name = parse_name(&name.into())?;
        if is_negative(monthly_salary) {
            return Err(PayrollError::validation(
                "monthly_salary",
                NEGATIVE_SALARY_MESSAGE,
            ));
        }
        Ok(Self {
            name,
            id,
            pay: PayBasis::FullTime { monthly_salary },
        })
    }

    /// Creates a part-time employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] if the name is blank, the
    /// hourly rate is negative, or hours times rate overflows a decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_roster::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let bob = Employee::part_time("Bob", 2, 10, Decimal::new(155, 1)).unwrap();
    /// assert_eq!(bob.compute_salary(), Decimal::new(155, 0));
    /// ```
    pub fn part_time(
        name: impl Into<String>,
        id: EmployeeId,
        hours_worked: u32,
        hourly_rate: Decimal,
    ) -> PayrollResult<Self> {
        let name = parse_name(&name.into())?;
        if is_negative(hourly_rate) {
            return Err(PayrollError::validation(
                "hourly_rate",
                NEGATIVE_VALUES_MESSAGE,
            ));
        }
        if Decimal::from(hours_worked).checked_mul(hourly_rate).is_none() {
            return Err(PayrollError::validation(
                "hourly_rate",
                SALARY_OVERFLOW_MESSAGE,
            ));
        }
        Ok(Self {
            name,
            id,
            pay: PayBasis::PartTime {
                hours_worked,
                hourly_rate,
            },
        })
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's id.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// How the employee is paid.
    pub fn pay(&self) -> &PayBasis {
        &self.pay
    }

    /// The employment arrangement of this record.
    pub fn employment_type(&self) -> EmploymentType {
        match self.pay {
            PayBasis::FullTime { .. } => EmploymentType::FullTime,
            PayBasis::PartTime { .. } => EmploymentType::PartTime,
        }
    }

    /// Computes the salary for this employee.
    ///
    /// Construction rejects any hours and rate whose product overflows.
    pub fn compute_salary(&self) -> Decimal {
        match self.pay {
            PayBasis::FullTime { monthly_salary } => monthly_salary,
            PayBasis::PartTime {
                hours_worked,
                hourly_rate,
            } => Decimal::from(hours_worked) * hourly_rate,
        }
    }

    /// One-line summary with the salary rounded to cents.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salary = self
            .compute_salary()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(
            f,
            "Employee [Name: {}, ID: {}, Salary: {:.2}]",
            self.name, self.id, salary
        )
    }
}

/// Wire shape of an [`Employee`], checked before it becomes one.
#[derive(Deserialize)]
struct EmployeeRecord {
    name: String,
    id: EmployeeId,
    #[serde(flatten)]
    pay: PayBasis,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = PayrollError;

    fn try_from(record: EmployeeRecord) -> PayrollResult<Self> {
        match record.pay {
            PayBasis::FullTime { monthly_salary } => {
                Employee::full_time(record.name, record.id, monthly_salary)
            }
            PayBasis::PartTime {
                hours_worked,
                hourly_rate,
            } => Employee::part_time(record.name, record.id, hours_worked, hourly_rate),
        }
    }
}
