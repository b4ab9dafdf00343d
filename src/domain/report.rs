//! Derived reporting series consumed by dashboards and charts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One trend bucket: a calendar month (labeled `Jan`..`Dec`) and the summed
/// spending inside it. Buckets are emitted in chronological order.
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Budget-vs-actual pairing for one category name. Either side defaults to
/// zero when the category only appears on the other side.
pub struct CategoryComparison {
    pub category: String,
    pub limit: f64,
    pub actual: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingReport {
    pub category_totals: Vec<CategoryTotal>,
    pub monthly_trend: Vec<MonthlyTotal>,
    pub daily_totals: Vec<DailyTotal>,
    pub comparison: Vec<CategoryComparison>,
}
