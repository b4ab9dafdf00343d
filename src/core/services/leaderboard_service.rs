//! Savings ranking across users.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::{TimeRange, User};

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub total_savings: f64,
    pub savings_percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// The querying user's own standing: 1-based rank, or 0 when the username
/// is absent from the ranked population.
pub struct UserStats {
    pub rank: usize,
    pub total_savings: f64,
    pub savings_percentage: f64,
}

pub struct LeaderboardService;

impl LeaderboardService {
    /// Ranks users by savings percentage, highest first. The sort is
    /// stable: users with equal percentages keep their original relative
    /// order. `Month`/`Year` ranges restrict the population to accounts
    /// created since the start of the current calendar month/year.
    pub fn rankings(
        users: &[User],
        range: TimeRange,
        reference: DateTime<Utc>,
    ) -> Vec<LeaderboardEntry> {
        let cutoff = population_cutoff(range, reference);
        let mut entries: Vec<LeaderboardEntry> = users
            .iter()
            .filter(|user| cutoff.map_or(true, |c| user.created_at >= c))
            .map(|user| LeaderboardEntry {
                username: user.username.clone(),
                total_savings: user.total_savings,
                savings_percentage: user.savings_percentage,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.savings_percentage
                .partial_cmp(&a.savings_percentage)
                .unwrap_or(Ordering::Equal)
        });
        entries
    }

    /// 1-based position of `username` in the ranked entries, 0 when absent.
    pub fn rank_of(entries: &[LeaderboardEntry], username: &str) -> usize {
        entries
            .iter()
            .position(|entry| entry.username == username)
            .map_or(0, |index| index + 1)
    }

    pub fn stats_for(entries: &[LeaderboardEntry], username: &str) -> UserStats {
        match entries.iter().position(|entry| entry.username == username) {
            Some(index) => UserStats {
                rank: index + 1,
                total_savings: entries[index].total_savings,
                savings_percentage: entries[index].savings_percentage,
            },
            None => UserStats {
                rank: 0,
                total_savings: 0.0,
                savings_percentage: 0.0,
            },
        }
    }
}

fn population_cutoff(range: TimeRange, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = reference.date_naive();
    let start = match range {
        TimeRange::Month => NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?,
        TimeRange::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
        _ => return None,
    };
    Some(start.and_hms_opt(0, 0, 0)?.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(name: &str, percentage: f64) -> User {
        let mut user = User::new(name);
        user.total_savings = percentage * 10.0;
        user.savings_percentage = percentage;
        user
    }

    fn sample_users() -> Vec<User> {
        vec![
            user("A", 50.0),
            user("B", 80.0),
            user("C", 80.0),
            user("D", 20.0),
        ]
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let entries = LeaderboardService::rankings(&sample_users(), TimeRange::All, Utc::now());
        let order: Vec<&str> = entries.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A", "D"]);
        assert_eq!(LeaderboardService::rank_of(&entries, "A"), 4);
    }

    #[test]
    fn missing_username_gets_the_unranked_sentinel() {
        let entries = LeaderboardService::rankings(&sample_users(), TimeRange::All, Utc::now());
        let stats = LeaderboardService::stats_for(&entries, "nobody");
        assert_eq!(stats.rank, 0);
        assert_eq!(stats.total_savings, 0.0);
        assert_eq!(stats.savings_percentage, 0.0);
    }

    #[test]
    fn month_range_drops_accounts_created_before_the_month_started() {
        let reference = Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
        let mut veteran = user("veteran", 90.0);
        veteran.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let mut newcomer = user("newcomer", 40.0);
        newcomer.created_at = Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();

        let entries =
            LeaderboardService::rankings(&[veteran, newcomer], TimeRange::Month, reference);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].username, "newcomer");
    }
}
