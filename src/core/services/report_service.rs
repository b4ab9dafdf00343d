//! Aggregation over expense sets: category totals, trend series, and
//! budget-vs-actual comparisons. Pure functions of their inputs; the
//! reference date is always passed in so windows are reproducible.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::{
    Budget, CategoryComparison, CategoryTotal, DailyTotal, Database, Expense, MonthlyTotal,
    SpendingReport, TimeRange,
};

use super::{ServiceError, ServiceResult};

pub struct ReportService;

impl ReportService {
    /// Keeps the expenses whose date falls inside `range` anchored at
    /// `reference`.
    pub fn filter_by_range<'a>(
        expenses: &[&'a Expense],
        range: TimeRange,
        reference: NaiveDate,
    ) -> Vec<&'a Expense> {
        expenses
            .iter()
            .copied()
            .filter(|e| range.contains(e.date, reference))
            .collect()
    }

    /// Summed amounts keyed by category name, name-ordered.
    pub fn category_totals(expenses: &[&Expense]) -> Vec<CategoryTotal> {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
        }
        totals
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect()
    }

    /// Spending per calendar month in chronological order. Buckets are
    /// keyed by the first day of their month before labeling, so ordering
    /// never depends on insertion order.
    pub fn monthly_trend(expenses: &[&Expense]) -> Vec<MonthlyTotal> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for expense in expenses {
            let month = expense.date.with_day(1).unwrap_or(expense.date);
            *totals.entry(month).or_insert(0.0) += expense.amount;
        }
        totals
            .into_iter()
            .map(|(month, total)| MonthlyTotal {
                month: month.format("%b").to_string(),
                total,
            })
            .collect()
    }

    /// Spending per calendar date, ascending.
    pub fn daily_totals(expenses: &[&Expense]) -> Vec<DailyTotal> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.date).or_insert(0.0) += expense.amount;
        }
        totals
            .into_iter()
            .map(|(date, total)| DailyTotal { date, total })
            .collect()
    }

    /// Pairs budgeted limits with actual spending for the union of
    /// category names across both sides; a missing side reads as zero.
    pub fn comparison(budgets: &[&Budget], expenses: &[&Expense]) -> Vec<CategoryComparison> {
        let mut limits: BTreeMap<&str, f64> = BTreeMap::new();
        for budget in budgets {
            for category in &budget.categories {
                *limits.entry(category.name.as_str()).or_insert(0.0) += category.limit;
            }
        }
        let mut actuals: BTreeMap<&str, f64> = BTreeMap::new();
        for expense in expenses {
            *actuals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
        }

        let mut names: Vec<&str> = limits.keys().copied().collect();
        for name in actuals.keys().copied() {
            if !limits.contains_key(name) {
                names.push(name);
            }
        }
        names.sort_unstable();

        names
            .into_iter()
            .map(|name| CategoryComparison {
                category: name.to_string(),
                limit: limits.get(name).copied().unwrap_or(0.0),
                actual: actuals.get(name).copied().unwrap_or(0.0),
            })
            .collect()
    }

    /// Assembles every report series for a user's combined expense set,
    /// restricted by `range`.
    pub fn spending_report(
        db: &Database,
        user_id: Uuid,
        range: TimeRange,
        reference: NaiveDate,
    ) -> ServiceResult<SpendingReport> {
        if db.user(user_id).is_none() {
            return Err(ServiceError::NotFound("User not found".into()));
        }
        let budgets = db.budgets_for_user(user_id);
        let expenses: Vec<&Expense> = budgets
            .iter()
            .flat_map(|b| db.expenses_for_budget(b.id))
            .collect();
        let filtered = Self::filter_by_range(&expenses, range, reference);

        Ok(SpendingReport {
            category_totals: Self::category_totals(&filtered),
            monthly_trend: Self::monthly_trend(&filtered),
            daily_totals: Self::daily_totals(&filtered),
            comparison: Self::comparison(&budgets, &filtered),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: &str, amount: f64, on: NaiveDate) -> Expense {
        Expense::new(Uuid::new_v4(), category, amount, on, None)
    }

    #[test]
    fn month_and_year_windows_follow_the_calendar() {
        let items = vec![
            expense("Rent", 10.0, date(2024, 1, 5)),
            expense("Rent", 20.0, date(2024, 6, 15)),
            expense("Rent", 30.0, date(2024, 6, 20)),
        ];
        let refs: Vec<&Expense> = items.iter().collect();
        let reference = date(2024, 6, 20);

        let month = ReportService::filter_by_range(&refs, TimeRange::Month, reference);
        assert_eq!(month.len(), 2);
        assert!(month.iter().all(|e| e.date.month() == 6));

        let year = ReportService::filter_by_range(&refs, TimeRange::Year, reference);
        assert_eq!(year.len(), 3);

        let week = ReportService::filter_by_range(&refs, TimeRange::Week, reference);
        assert_eq!(week.len(), 2); // trailing 7 days keep June 15 and 20
    }

    #[test]
    fn trend_orders_months_chronologically_not_by_insertion() {
        let items = vec![
            expense("Rent", 30.0, date(2024, 6, 20)),
            expense("Rent", 10.0, date(2024, 1, 5)),
            expense("Rent", 20.0, date(2024, 6, 15)),
            expense("Rent", 5.0, date(2023, 12, 31)),
        ];
        let refs: Vec<&Expense> = items.iter().collect();

        let trend = ReportService::monthly_trend(&refs);
        let labels: Vec<&str> = trend.iter().map(|t| t.month.as_str()).collect();
        assert_eq!(labels, vec!["Dec", "Jan", "Jun"]);
        assert_eq!(trend[2].total, 50.0);
    }

    #[test]
    fn daily_totals_are_sorted_ascending() {
        let items = vec![
            expense("Rent", 30.0, date(2024, 6, 20)),
            expense("Rent", 10.0, date(2024, 6, 1)),
            expense("Rent", 20.0, date(2024, 6, 1)),
        ];
        let refs: Vec<&Expense> = items.iter().collect();

        let daily = ReportService::daily_totals(&refs);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, date(2024, 6, 1));
        assert_eq!(daily[0].total, 30.0);
        assert_eq!(daily[1].total, 30.0);
    }

    #[test]
    fn comparison_unions_planned_and_actual_categories() {
        let user_id = Uuid::new_v4();
        let budget = Budget::new(
            user_id,
            "Monthly",
            &["Rent".to_string(), "Utilities".to_string()],
            400.0,
        );
        let items = vec![
            expense("Rent", 120.0, date(2024, 6, 1)),
            expense("Travel", 75.0, date(2024, 6, 2)),
        ];
        let refs: Vec<&Expense> = items.iter().collect();

        let pairs = ReportService::comparison(&[&budget], &refs);
        assert_eq!(pairs.len(), 3);
        let rent = pairs.iter().find(|p| p.category == "Rent").unwrap();
        assert_eq!((rent.limit, rent.actual), (200.0, 120.0));
        let travel = pairs.iter().find(|p| p.category == "Travel").unwrap();
        assert_eq!((travel.limit, travel.actual), (0.0, 75.0));
        let utilities = pairs.iter().find(|p| p.category == "Utilities").unwrap();
        assert_eq!((utilities.limit, utilities.actual), (200.0, 0.0));
    }

    #[test]
    fn spending_report_requires_a_known_user() {
        let db = Database::default();
        let err =
            ReportService::spending_report(&db, Uuid::new_v4(), TimeRange::All, date(2024, 6, 20))
                .expect_err("unknown user must fail");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
