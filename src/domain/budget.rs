//! Domain models for budgets and their embedded spending categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A named spending bucket inside a budget. Category names are unique
/// within their budget; `spent` is maintained by the ledger service.
pub struct Category {
    pub name: String,
    pub limit: f64,
    pub spent: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, limit: f64) -> Self {
        Self {
            name: name.into(),
            limit,
            spent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub categories: Vec<Category>,
    pub total_limit: f64,
    /// Derived: sum of amounts over the budget's expenses.
    pub total_spent: f64,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Creates a budget whose total limit is split evenly across the named
    /// categories.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        category_names: &[String],
        total_limit: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            categories: split_categories(category_names, total_limit),
            total_limit,
            total_spent: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    /// Replaces the budget's plan: new name, new category set (limit split
    /// evenly), new total limit. Spent figures are cleared; the caller is
    /// expected to recompute them from the expense set.
    pub fn replace_plan(
        &mut self,
        name: impl Into<String>,
        category_names: &[String],
        total_limit: f64,
    ) {
        self.name = name.into();
        self.categories = split_categories(category_names, total_limit);
        self.total_limit = total_limit;
        self.total_spent = 0.0;
    }
}

fn split_categories(names: &[String], total_limit: f64) -> Vec<Category> {
    let share = if names.is_empty() {
        0.0
    } else {
        total_limit / names.len() as f64
    };
    names
        .iter()
        .map(|name| Category::new(name.clone(), share))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_splits_evenly_across_categories() {
        let names = vec![
            "Groceries".to_string(),
            "Rent".to_string(),
            "Utilities".to_string(),
        ];
        let budget = Budget::new(Uuid::new_v4(), "Monthly", &names, 600.0);

        assert_eq!(budget.total_limit, 600.0);
        assert_eq!(budget.categories.len(), 3);
        for category in &budget.categories {
            assert_eq!(category.limit, 200.0);
            assert_eq!(category.spent, 0.0);
        }
    }

    #[test]
    fn replace_plan_swaps_categories_and_clears_spending() {
        let mut budget = Budget::new(Uuid::new_v4(), "Monthly", &["Rent".to_string()], 500.0);
        budget.total_spent = 120.0;
        budget.categories[0].spent = 120.0;

        budget.replace_plan(
            "Revised",
            &["Rent".to_string(), "Utilities".to_string()],
            800.0,
        );

        assert_eq!(budget.name, "Revised");
        assert_eq!(budget.total_limit, 800.0);
        assert_eq!(budget.total_spent, 0.0);
        assert_eq!(budget.categories.len(), 2);
        assert!(budget.categories.iter().all(|c| c.limit == 400.0));
    }
}
