use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::services::{ExpenseService, ExpenseUpdate};
use crate::domain::Expense;
use crate::http::{parse_id, ApiError, AppState, MessageEnvelope};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub budget_id: String,
    pub category: String,
    pub amount: f64,
    /// Defaults to today when omitted.
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateExpenseRequest {
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseEnvelope {
    pub success: bool,
    pub expense: Expense,
}

#[derive(Debug, Serialize)]
pub struct ExpenseListEnvelope {
    pub success: bool,
    pub expenses: Vec<Expense>,
}

pub async fn list_for_budget(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<ExpenseListEnvelope>, ApiError> {
    let budget_id = parse_id(&raw)?;
    let expenses = state
        .store
        .read(|db| ExpenseService::list_for_budget(db, budget_id));
    Ok(Json(ExpenseListEnvelope {
        success: true,
        expenses,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<Json<ExpenseEnvelope>, ApiError> {
    let budget_id = parse_id(&req.budget_id)?;
    let date = req.date.unwrap_or_else(|| Utc::now().date_naive());
    let expense = state.store.write(|db| {
        ExpenseService::create(db, budget_id, req.category, req.amount, date, req.description)
    })?;
    tracing::debug!(expense = %expense.id, budget = %budget_id, "expense recorded");
    Ok(Json(ExpenseEnvelope {
        success: true,
        expense,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(req): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseEnvelope>, ApiError> {
    let expense_id = parse_id(&raw)?;
    let changes = ExpenseUpdate {
        category: req.category,
        amount: req.amount,
        date: req.date,
        description: req.description,
    };
    let expense = state
        .store
        .write(|db| ExpenseService::update(db, expense_id, changes))?;
    Ok(Json(ExpenseEnvelope {
        success: true,
        expense,
    }))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let expense_id = parse_id(&raw)?;
    state
        .store
        .write(|db| ExpenseService::remove(db, expense_id))?;
    Ok(Json(MessageEnvelope::new("Expense deleted successfully")))
}
