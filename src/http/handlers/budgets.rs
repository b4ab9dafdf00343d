use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::core::services::{BudgetService, ExpenseService};
use crate::domain::{Budget, Database, Expense};
use crate::http::{parse_id, ApiError, AppState, MessageEnvelope};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub user_id: String,
    pub name: String,
    pub categories: Vec<String>,
    pub limit: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub name: String,
    pub categories: Vec<String>,
    pub limit: f64,
}

/// A budget with its expense set embedded, the read shape used by the
/// dashboard endpoints.
#[derive(Debug, Serialize)]
pub struct BudgetDetail {
    #[serde(flatten)]
    pub budget: Budget,
    pub expenses: Vec<Expense>,
}

impl BudgetDetail {
    fn assemble(db: &Database, budget: Budget) -> Self {
        let expenses = ExpenseService::list_for_budget(db, budget.id);
        Self { budget, expenses }
    }
}

#[derive(Debug, Serialize)]
pub struct BudgetEnvelope {
    pub success: bool,
    pub budget: Budget,
}

#[derive(Debug, Serialize)]
pub struct BudgetDetailEnvelope {
    pub success: bool,
    pub budget: BudgetDetail,
}

#[derive(Debug, Serialize)]
pub struct BudgetListEnvelope {
    pub success: bool,
    pub budgets: Vec<BudgetDetail>,
}

/// Lists a user's budgets with their expenses embedded. An unknown user
/// simply has no budgets.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<BudgetListEnvelope>, ApiError> {
    let user_id = parse_id(&raw)?;
    let budgets = state.store.read(|db| {
        BudgetService::list_for_user(db, user_id)
            .into_iter()
            .map(|budget| BudgetDetail::assemble(db, budget))
            .collect::<Vec<_>>()
    });
    Ok(Json(BudgetListEnvelope {
        success: true,
        budgets,
    }))
}

pub async fn get_single(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<BudgetDetailEnvelope>, ApiError> {
    let budget_id = parse_id(&raw)?;
    let budget = state.store.read(|db| {
        let budget = BudgetService::get(db, budget_id)?;
        Ok::<_, ApiError>(BudgetDetail::assemble(db, budget))
    })?;
    Ok(Json(BudgetDetailEnvelope {
        success: true,
        budget,
    }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateBudgetRequest>,
) -> Result<Json<BudgetEnvelope>, ApiError> {
    let user_id = parse_id(&req.user_id)?;
    let budget = state.store.write(|db| {
        BudgetService::create(db, user_id, &req.name, &req.categories, req.limit)
    })?;
    tracing::info!(budget = %budget.id, name = %budget.name, "budget created");
    Ok(Json(BudgetEnvelope {
        success: true,
        budget,
    }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Json(req): Json<UpdateBudgetRequest>,
) -> Result<Json<BudgetEnvelope>, ApiError> {
    let budget_id = parse_id(&raw)?;
    let budget = state.store.write(|db| {
        BudgetService::update(db, budget_id, &req.name, &req.categories, req.limit)
    })?;
    Ok(Json(BudgetEnvelope {
        success: true,
        budget,
    }))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let budget_id = parse_id(&raw)?;
    state.store.write(|db| BudgetService::remove(db, budget_id))?;
    tracing::info!(budget = %budget_id, "budget deleted");
    Ok(Json(MessageEnvelope::new("Budget deleted successfully")))
}
