//! Budget lifecycle: creation with an even category split, plan
//! replacement, cascading deletion.

use uuid::Uuid;

use crate::domain::{Budget, Database};

use super::{LedgerService, ServiceError, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    /// Creates a budget for an existing user. The total limit is divided
    /// evenly among the named categories.
    pub fn create(
        db: &mut Database,
        user_id: Uuid,
        name: &str,
        category_names: &[String],
        limit: f64,
    ) -> ServiceResult<Budget> {
        Self::validate_plan(name, category_names)?;
        if db.user(user_id).is_none() {
            return Err(ServiceError::NotFound("User not found".into()));
        }
        let budget = Budget::new(user_id, name.trim(), category_names, limit);
        db.add_budget(budget.clone());
        Ok(budget)
    }

    /// Replaces the budget's name, categories, and limit. Per-category
    /// spending is recomputed from the surviving expenses, as is the
    /// owner's savings standing.
    pub fn update(
        db: &mut Database,
        id: Uuid,
        name: &str,
        category_names: &[String],
        limit: f64,
    ) -> ServiceResult<Budget> {
        Self::validate_plan(name, category_names)?;
        let budget = db
            .budget_mut(id)
            .ok_or_else(|| ServiceError::NotFound("Budget not found".into()))?;
        let user_id = budget.user_id;
        budget.replace_plan(name.trim(), category_names, limit);
        LedgerService::refresh_budget(db, id);
        LedgerService::refresh_user_savings(db, user_id);
        db.budget(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("Budget not found".into()))
    }

    /// Deletes the budget and every expense referencing it.
    pub fn remove(db: &mut Database, id: Uuid) -> ServiceResult<()> {
        let budget = db
            .remove_budget(id)
            .ok_or_else(|| ServiceError::NotFound("Budget not found".into()))?;
        db.remove_expenses_for_budget(budget.id);
        LedgerService::refresh_user_savings(db, budget.user_id);
        Ok(())
    }

    pub fn get(db: &Database, id: Uuid) -> ServiceResult<Budget> {
        db.budget(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("Budget not found".into()))
    }

    pub fn list_for_user(db: &Database, user_id: Uuid) -> Vec<Budget> {
        db.budgets_for_user(user_id).into_iter().cloned().collect()
    }

    fn validate_plan(name: &str, category_names: &[String]) -> ServiceResult<()> {
        if name.trim().is_empty() {
            return Err(ServiceError::Invalid("budget name is required".into()));
        }
        if category_names.is_empty() {
            return Err(ServiceError::Invalid(
                "at least one category is required".into(),
            ));
        }
        for (index, candidate) in category_names.iter().enumerate() {
            let normalized = candidate.trim().to_ascii_lowercase();
            if normalized.is_empty() {
                return Err(ServiceError::Invalid("category names must not be empty".into()));
            }
            let duplicate = category_names[..index]
                .iter()
                .any(|earlier| earlier.trim().to_ascii_lowercase() == normalized);
            if duplicate {
                return Err(ServiceError::Invalid(format!(
                    "Category `{}` already exists",
                    candidate
                )));
            }
        }
        Ok(())
    }
}
