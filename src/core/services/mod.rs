pub mod budget_service;
pub mod expense_service;
pub mod leaderboard_service;
pub mod ledger_service;
pub mod report_service;
pub mod user_service;

pub use budget_service::BudgetService;
pub use expense_service::{ExpenseService, ExpenseUpdate};
pub use leaderboard_service::LeaderboardService;
pub use ledger_service::LedgerService;
pub use report_service::ReportService;
pub use user_service::UserService;

use crate::core::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Storage(#[from] BudgetError),
}
