use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use crate::financial::{IncomeSource, LedgerTotals, MonthlyBucket};

/// Dashboard cards and charts, recomputed from each store snapshot
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub totals: LedgerTotals,
    #[ts(type = "string")]
    pub net_balance: Decimal,
    pub pending_tasks: u32,
    pub monthly_series: Vec<MonthlyBucket>,
    pub income_by_source: Vec<IncomeSource>,
}
