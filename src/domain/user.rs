//! Domain model for registered users and their savings standing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Derived: sum of budget limits minus sum of budget spending.
    pub total_savings: f64,
    /// Derived: `total_savings` as a share of the combined limit, 0-100.
    pub savings_percentage: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            total_savings: 0.0,
            savings_percentage: 0.0,
            created_at: Utc::now(),
        }
    }
}
