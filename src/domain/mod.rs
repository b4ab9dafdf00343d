pub mod budget;
pub mod common;
pub mod database;
pub mod expense;
pub mod report;
pub mod user;

pub use budget::{Budget, Category};
pub use common::TimeRange;
pub use database::Database;
pub use expense::Expense;
pub use report::{CategoryComparison, CategoryTotal, DailyTotal, MonthlyTotal, SpendingReport};
pub use user::User;
