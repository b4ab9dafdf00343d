//! Expense lifecycle. Every mutation refreshes the owning budget's derived
//! totals and the owner's savings inside the same database borrow, so
//! callers persisting the database afterwards write record and totals
//! together.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Database, Expense};

use super::{LedgerService, ServiceError, ServiceResult};

/// Partial update for an expense; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct ExpenseUpdate {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

pub struct ExpenseService;

impl ExpenseService {
    /// Records an expense against an existing budget and brings the
    /// budget's totals up to date.
    pub fn create(
        db: &mut Database,
        budget_id: Uuid,
        category: String,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> ServiceResult<Expense> {
        let user_id = db
            .budget(budget_id)
            .map(|b| b.user_id)
            .ok_or_else(|| ServiceError::NotFound("Budget not found".into()))?;
        let expense = Expense::new(budget_id, category, amount, date, description);
        db.add_expense(expense.clone());
        LedgerService::refresh_budget(db, budget_id);
        LedgerService::refresh_user_savings(db, user_id);
        Ok(expense)
    }

    /// Applies the provided field changes and recomputes the budget's
    /// totals from the stored expense set. Old amounts and categories never
    /// come from the request, so double counting cannot occur.
    pub fn update(db: &mut Database, id: Uuid, changes: ExpenseUpdate) -> ServiceResult<Expense> {
        let expense = db
            .expense_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Expense not found".into()))?;
        if let Some(category) = changes.category {
            expense.category = category;
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }
        if let Some(description) = changes.description {
            expense.description = Some(description);
        }
        let updated = expense.clone();
        LedgerService::refresh_budget(db, updated.budget_id);
        if let Some(user_id) = db.budget(updated.budget_id).map(|b| b.user_id) {
            LedgerService::refresh_user_savings(db, user_id);
        }
        Ok(updated)
    }

    /// Deletes the expense; its amount leaves the budget's totals.
    pub fn remove(db: &mut Database, id: Uuid) -> ServiceResult<Expense> {
        let expense = db
            .remove_expense(id)
            .ok_or_else(|| ServiceError::NotFound("Expense not found".into()))?;
        LedgerService::refresh_budget(db, expense.budget_id);
        if let Some(user_id) = db.budget(expense.budget_id).map(|b| b.user_id) {
            LedgerService::refresh_user_savings(db, user_id);
        }
        Ok(expense)
    }

    pub fn list_for_budget(db: &Database, budget_id: Uuid) -> Vec<Expense> {
        db.expenses_for_budget(budget_id)
            .into_iter()
            .cloned()
            .collect()
    }
}
