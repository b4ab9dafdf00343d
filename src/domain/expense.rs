//! Domain model for individual spending transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub budget_id: Uuid,
    /// Name of the owning budget's category this expense counts against.
    /// Not validated against the budget's category set; a non-matching
    /// name contributes to the budget total only.
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(
        budget_id: Uuid,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            budget_id,
            category: category.into(),
            amount,
            date,
            description,
        }
    }
}
