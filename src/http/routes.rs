use axum::{
    routing::{get, post, put},
    Router,
};

use crate::http::{handlers, AppState};

pub fn app() -> Router<AppState> {
    Router::new()
        // users
        .route("/api/users/login", post(handlers::users::login))
        .route(
            "/api/users/:id",
            get(handlers::users::get_user).delete(handlers::users::delete_user),
        )
        .route("/api/users/:id/savings", put(handlers::users::refresh_savings))
        .route("/api/leaderboard", get(handlers::users::leaderboard))
        // budgets
        .route("/api/budgets", post(handlers::budgets::create))
        .route("/api/budgets/single/:id", get(handlers::budgets::get_single))
        .route(
            "/api/budgets/:id",
            get(handlers::budgets::list_for_user)
                .put(handlers::budgets::update)
                .delete(handlers::budgets::remove),
        )
        // expenses
        .route("/api/expenses", post(handlers::expenses::create))
        .route(
            "/api/expenses/budget/:id",
            get(handlers::expenses::list_for_budget),
        )
        .route(
            "/api/expenses/:id",
            put(handlers::expenses::update).delete(handlers::expenses::remove),
        )
        // reports
        .route("/api/reports/:id", get(handlers::reports::spending_report))
}
