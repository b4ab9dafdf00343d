//! Keeps derived spending totals consistent with the expense set.
//!
//! Budgets materialize `total_spent` and per-category `spent` for cheap
//! reads. Rather than patching those fields incrementally on each expense
//! mutation, the ledger recomputes them from the current expense set, so a
//! refresh is always correct regardless of the operation that triggered it.
//! Callers run the triggering mutation and the refresh inside one store
//! write.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Budget, Database};

pub struct LedgerService;

impl LedgerService {
    /// Recomputes `total_spent` and each category's `spent` for the budget
    /// from its current expenses. Expenses whose category name matches no
    /// entry still count toward the budget total. A no-op when the budget
    /// does not exist.
    pub fn refresh_budget(db: &mut Database, budget_id: Uuid) {
        let mut total = 0.0;
        let mut by_category: HashMap<String, f64> = HashMap::new();
        for expense in db.expenses.iter().filter(|e| e.budget_id == budget_id) {
            total += expense.amount;
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        if let Some(budget) = db.budget_mut(budget_id) {
            budget.total_spent = total;
            for category in &mut budget.categories {
                category.spent = by_category.get(&category.name).copied().unwrap_or(0.0);
            }
        }
    }

    /// Recomputes a user's savings standing from their budgets. A no-op
    /// when the user does not exist.
    pub fn refresh_user_savings(db: &mut Database, user_id: Uuid) {
        let (total_savings, savings_percentage) = {
            let budgets = db.budgets_for_user(user_id);
            Self::savings_from_budgets(&budgets)
        };
        if let Some(user) = db.user_mut(user_id) {
            user.total_savings = total_savings;
            user.savings_percentage = savings_percentage;
        }
    }

    /// `(total_savings, savings_percentage)` over a set of budgets: the
    /// combined limit minus combined spending, and the unspent share of the
    /// limit expressed 0-100 (zero when there is no limit to measure
    /// against).
    pub fn savings_from_budgets(budgets: &[&Budget]) -> (f64, f64) {
        let total_limit: f64 = budgets.iter().map(|b| b.total_limit).sum();
        let total_spent: f64 = budgets.iter().map(|b| b.total_spent).sum();
        let total_savings = total_limit - total_spent;
        let savings_percentage = if total_limit > 0.0 {
            (total_savings / total_limit) * 100.0
        } else {
            0.0
        };
        (total_savings, savings_percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Expense, User};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn db_with_budget() -> (Database, Uuid, Uuid) {
        let mut db = Database::default();
        let user_id = db.add_user(User::new("tester"));
        let names = vec!["Rent".to_string(), "Utilities".to_string()];
        let budget_id = db.add_budget(Budget::new(user_id, "Monthly", &names, 600.0));
        (db, user_id, budget_id)
    }

    #[test]
    fn refresh_sums_expenses_per_category_and_in_total() {
        let (mut db, _, budget_id) = db_with_budget();
        db.add_expense(Expense::new(budget_id, "Rent", 100.0, date(2024, 6, 1), None));
        db.add_expense(Expense::new(budget_id, "Rent", 40.0, date(2024, 6, 2), None));
        db.add_expense(Expense::new(budget_id, "Utilities", 25.0, date(2024, 6, 3), None));

        LedgerService::refresh_budget(&mut db, budget_id);

        let budget = db.budget(budget_id).unwrap();
        assert_eq!(budget.total_spent, 165.0);
        assert_eq!(budget.category("Rent").unwrap().spent, 140.0);
        assert_eq!(budget.category("Utilities").unwrap().spent, 25.0);
    }

    #[test]
    fn unmatched_category_counts_toward_total_only() {
        let (mut db, _, budget_id) = db_with_budget();
        db.add_expense(Expense::new(budget_id, "Travel", 80.0, date(2024, 6, 1), None));

        LedgerService::refresh_budget(&mut db, budget_id);

        let budget = db.budget(budget_id).unwrap();
        assert_eq!(budget.total_spent, 80.0);
        assert!(budget.categories.iter().all(|c| c.spent == 0.0));
    }

    #[test]
    fn savings_follow_budget_totals() {
        let (mut db, user_id, budget_id) = db_with_budget();
        db.add_expense(Expense::new(budget_id, "Rent", 240.0, date(2024, 6, 1), None));
        LedgerService::refresh_budget(&mut db, budget_id);
        LedgerService::refresh_user_savings(&mut db, user_id);

        let user = db.user(user_id).unwrap();
        assert_eq!(user.total_savings, 360.0);
        assert_eq!(user.savings_percentage, 60.0);
    }

    #[test]
    fn savings_percentage_is_zero_without_limits() {
        assert_eq!(LedgerService::savings_from_budgets(&[]), (0.0, 0.0));
    }
}
