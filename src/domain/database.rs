//! The record aggregate: every persisted collection in one serializable
//! value. Storage backends save and load it as a whole; services mutate it
//! through the accessors below.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{budget::Budget, expense::Expense, user::User};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Database {
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn budget_mut(&mut self, id: Uuid) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    pub fn budgets_for_user(&self, user_id: Uuid) -> Vec<&Budget> {
        self.budgets.iter().filter(|b| b.user_id == user_id).collect()
    }

    pub fn expenses_for_budget(&self, budget_id: Uuid) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.budget_id == budget_id)
            .collect()
    }

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.push(user);
        id
    }

    pub fn add_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id;
        self.budgets.push(budget);
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    pub fn remove_user(&mut self, id: Uuid) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn remove_budget(&mut self, id: Uuid) -> Option<Budget> {
        let index = self.budgets.iter().position(|b| b.id == id)?;
        Some(self.budgets.remove(index))
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Drops every expense referencing `budget_id`, returning how many were
    /// removed.
    pub fn remove_expenses_for_budget(&mut self, budget_id: Uuid) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.budget_id != budget_id);
        before - self.expenses.len()
    }
}
