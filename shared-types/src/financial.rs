use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

/// Where money comes from or goes to. Direction lives here, never in the amount's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum FinancialCategory {
    #[serde(alias = "income-client")]
    ClientIncome,
    #[serde(alias = "income-company")]
    CompanyIncome,
    Expense,
}

impl FinancialCategory {
    pub fn is_income(self) -> bool {
        matches!(self, Self::ClientIncome | Self::CompanyIncome)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientIncome => "client-income",
            Self::CompanyIncome => "company-income",
            Self::Expense => "expense",
        }
    }
}

/// Stored payment status of a ledger entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

/// Status as shown to the user: a pending entry past its due date is overdue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentState {
    Paid,
    Pending,
    Overdue,
}

/// Ledger entry as stored for the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    pub description: String,
    #[ts(type = "string")]
    pub amount: Decimal,
    pub category: FinancialCategory,
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
    pub status: PaymentStatus,
}

/// Ledger entry together with its derived display state
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FinancialRecordView {
    #[serde(flatten)]
    pub record: FinancialRecord,
    pub state: PaymentState,
}

/// Request to create a ledger entry. `amount` is the raw form text.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinancialRecordRequest {
    pub description: String,
    pub amount: String,
    pub category: FinancialCategory,
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

/// Request to update a ledger entry; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinancialRecordRequest {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<FinancialCategory>,
    #[ts(type = "string | null")]
    pub due_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FinancialRecordsResponse {
    pub records: Vec<FinancialRecordView>,
}

/// Income and expense accumulated over a set of ledger entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    #[ts(type = "string")]
    pub income: Decimal,
    #[ts(type = "string")]
    pub expense: Decimal,
}

impl LedgerTotals {
    pub fn net_balance(&self) -> Decimal {
        self.income.saturating_sub(self.expense)
    }
}

impl Add for LedgerTotals {
    type Output = LedgerTotals;

    fn add(self, rhs: Self) -> Self::Output {
        LedgerTotals {
            income: self.income.saturating_add(rhs.income),
            expense: self.expense.saturating_add(rhs.expense),
        }
    }
}

impl AddAssign for LedgerTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid month key '{0}', expected YYYY-MM")]
pub struct MonthKeyError(pub String);

/// Calendar month, ordered chronologically and written as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthKeyError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        MonthKey::new(year, month).ok_or_else(err)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Income and expense for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    #[ts(type = "string")]
    pub month: MonthKey,
    #[ts(type = "string")]
    pub income: Decimal,
    #[ts(type = "string")]
    pub expense: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeSourceKind {
    Client,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub source: IncomeSourceKind,
    #[ts(type = "string")]
    pub total: Decimal,
}

/// Everything the ledger page charts, derived from one snapshot
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub totals: LedgerTotals,
    #[ts(type = "string")]
    pub net_balance: Decimal,
    pub monthly_series: Vec<MonthlyBucket>,
    pub income_by_source: Vec<IncomeSource>,
}
