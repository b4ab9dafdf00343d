use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::{
    leaderboard_service::{LeaderboardEntry, UserStats},
    LeaderboardService, UserService,
};
use crate::domain::{Budget, TimeRange, User};
use crate::http::{parse_id, ApiError, AppState, MessageEnvelope};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub total_savings: f64,
    pub savings_percentage: f64,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            total_savings: user.total_savings,
            savings_percentage: user.savings_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub success: bool,
    pub user: UserView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailView {
    pub id: Uuid,
    pub username: String,
    pub total_savings: f64,
    pub savings_percentage: f64,
    pub budgets: Vec<Budget>,
}

#[derive(Debug, Serialize)]
pub struct UserDetailEnvelope {
    pub success: bool,
    pub user: UserDetailView,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user = state.store.write(|db| UserService::login(db, &req.username))?;
    tracing::info!(username = %user.username, "login");
    Ok(Json(UserEnvelope {
        success: true,
        user: UserView::from(&user),
    }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<UserDetailEnvelope>, ApiError> {
    let user_id = parse_id(&raw)?;
    let (user, budgets) = state.store.read(|db| {
        let user = UserService::get(db, user_id)?;
        let budgets: Vec<Budget> = db.budgets_for_user(user_id).into_iter().cloned().collect();
        Ok::<_, ApiError>((user, budgets))
    })?;
    Ok(Json(UserDetailEnvelope {
        success: true,
        user: UserDetailView {
            id: user.id,
            username: user.username,
            total_savings: user.total_savings,
            savings_percentage: user.savings_percentage,
            budgets,
        },
    }))
}

/// Rederives the user's savings from stored budgets. Client-submitted
/// figures in the body are ignored; the server is the source of truth for
/// aggregates.
pub async fn refresh_savings(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let user_id = parse_id(&raw)?;
    let user = state
        .store
        .write(|db| UserService::refresh_savings(db, user_id))?;
    Ok(Json(UserEnvelope {
        success: true,
        user: UserView::from(&user),
    }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    let user_id = parse_id(&raw)?;
    let user = state.store.write(|db| UserService::remove(db, user_id))?;
    tracing::info!(username = %user.username, "account deleted");
    Ok(Json(MessageEnvelope::new(
        "User account deleted successfully",
    )))
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub username: Option<String>,
    #[serde(rename = "timeRange")]
    pub time_range: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEnvelope {
    pub success: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub user_stats: UserStats,
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardEnvelope>, ApiError> {
    let range = query
        .time_range
        .as_deref()
        .map(TimeRange::parse)
        .unwrap_or_default();
    let entries = state
        .store
        .read(|db| LeaderboardService::rankings(&db.users, range, Utc::now()));
    let user_stats =
        LeaderboardService::stats_for(&entries, query.username.as_deref().unwrap_or(""));
    Ok(Json(LeaderboardEnvelope {
        success: true,
        leaderboard: entries,
        user_stats,
    }))
}
