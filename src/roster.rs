//! The in-memory roster of employees.
//!
//! The [`Roster`] keeps records in insertion order and answers lookups by
//! linear scan. It does not enforce id uniqueness itself: callers check
//! [`Roster::exists`] before [`Roster::add`], which the add flow always does.

use tracing::debug;

use crate::models::{Employee, EmployeeId};

/// Ordered collection of employee records.
///
/// # Example
///
/// ```
/// use payroll_roster::models::Employee;
/// use payroll_roster::roster::Roster;
/// use rust_decimal::Decimal;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::full_time("Alice", 1, Decimal::new(3000, 0)).unwrap());
/// assert!(roster.exists(1));
///
/// roster.remove(1);
/// assert!(!roster.exists(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record. No uniqueness check is made here.
    pub fn add(&mut self, employee: Employee) {
        debug!(employee_id = employee.id(), "Adding employee to roster");
        self.employees.push(employee);
    }

    /// Removes every record with `id` and returns how many were removed.
    ///
    /// Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id() != id);
        let removed = before - self.employees.len();
        debug!(employee_id = id, removed, "Removed employees from roster");
        removed
    }

    /// Returns true if some record has `id`.
    pub fn exists(&self, id: EmployeeId) -> bool {
        self.employees.iter().any(|employee| employee.id() == id)
    }

    /// Returns the first record with `id`.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Current records in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn full_time(name: &str, id: EmployeeId) -> Employee {
        Employee::full_time(name, id, Decimal::new(1000, 0)).unwrap()
    }

    fn ids(roster: &Roster) -> Vec<EmployeeId> {
        roster.list().iter().map(Employee::id).collect()
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(!roster.exists(1));
    }

    #[test]
    fn test_add_then_exists() {
        let mut roster = Roster::new();
        roster.add(full_time("Alice", 1));
        assert!(roster.exists(1));
        assert_eq!(roster.get(1).map(Employee::name), Some("Alice"));
    }

    #[test]
    fn test_remove_then_not_exists() {
        let mut roster = Roster::new();
        roster.add(full_time("Alice", 1));
        assert_eq!(roster.remove(1), 1);
        assert!(!roster.exists(1));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut roster = Roster::new();
        roster.add(full_time("Alice", 1));
        roster.add(full_time("Bob", 2));
        let before = roster.clone();

        assert_eq!(roster.remove(99), 0);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_on_empty_roster() {
        let mut roster = Roster::new();
        assert_eq!(roster.remove(99), 0);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved_across_removals() {
        let mut roster = Roster::new();
        for (name, id) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
            roster.add(full_time(name, id));
        }
        roster.remove(2);
        roster.add(full_time("E", 5));

        assert_eq!(ids(&roster), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_add_does_not_check_duplicates() {
        let mut roster = Roster::new();
        roster.add(full_time("Alice", 1));
        roster.add(full_time("Alicia", 1));
        assert_eq!(roster.len(), 2);

        // Removal filters out every match.
        assert_eq!(roster.remove(1), 2);
        assert!(roster.is_empty());
    }
}
