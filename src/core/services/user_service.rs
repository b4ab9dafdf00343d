//! Account lifecycle: find-or-create login, savings refresh, deletion.

use uuid::Uuid;

use crate::domain::{Database, User};

use super::{LedgerService, ServiceError, ServiceResult};

pub struct UserService;

impl UserService {
    /// Finds the user with `username` or creates one. Login is idempotent:
    /// repeating it returns the same account.
    pub fn login(db: &mut Database, username: &str) -> ServiceResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ServiceError::Invalid("username is required".into()));
        }
        if let Some(user) = db.user_by_username(username) {
            return Ok(user.clone());
        }
        let user = User::new(username);
        db.add_user(user.clone());
        Ok(user)
    }

    pub fn get(db: &Database, id: Uuid) -> ServiceResult<User> {
        db.user(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))
    }

    /// Rederives the user's savings from their stored budgets and returns
    /// the refreshed record.
    pub fn refresh_savings(db: &mut Database, id: Uuid) -> ServiceResult<User> {
        if db.user(id).is_none() {
            return Err(ServiceError::NotFound("User not found".into()));
        }
        LedgerService::refresh_user_savings(db, id);
        db.user(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))
    }

    /// Deletes the account along with every budget it owns and their
    /// expenses.
    pub fn remove(db: &mut Database, id: Uuid) -> ServiceResult<User> {
        let user = db
            .remove_user(id)
            .ok_or_else(|| ServiceError::NotFound("User not found".into()))?;
        let budget_ids: Vec<Uuid> = db
            .budgets
            .iter()
            .filter(|b| b.user_id == user.id)
            .map(|b| b.id)
            .collect();
        for budget_id in budget_ids {
            db.remove_expenses_for_budget(budget_id);
            db.remove_budget(budget_id);
        }
        Ok(user)
    }
}
