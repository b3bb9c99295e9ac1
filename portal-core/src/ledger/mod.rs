//! Aggregates over the ledger. Every function is total: an empty snapshot
//! gives zero totals and empty series, and sums saturate at `Decimal::MAX`
//! instead of overflowing.

pub mod status;

pub use status::{payment_state, record_views, sort_by_due_date_desc};

use rust_decimal::Decimal;
use shared_types::{
    FinancialCategory, FinancialRecord, IncomeSource, IncomeSourceKind, LedgerSummary,
    LedgerTotals, MonthKey, MonthlyBucket,
};
use std::collections::BTreeMap;

/// Income (client and company) against expense over all records
pub fn totals(records: &[FinancialRecord]) -> LedgerTotals {
    records
        .iter()
        .fold(LedgerTotals::default(), |mut acc, record| {
            add_to(&mut acc, record);
            acc
        })
}

/// One bucket per calendar month of the due date, oldest month first.
/// Records without a due date are left out.
pub fn monthly_series(records: &[FinancialRecord]) -> Vec<MonthlyBucket> {
    let mut months: BTreeMap<MonthKey, LedgerTotals> = BTreeMap::new();

    for record in records {
        let Some(due_date) = record.due_date else {
            continue;
        };
        add_to(months.entry(MonthKey::from_date(due_date)).or_default(), record);
    }

    months
        .into_iter()
        .map(|(month, totals)| MonthlyBucket {
            month,
            income: totals.income,
            expense: totals.expense,
        })
        .collect()
}

/// Income split by where it came from. Sources with no records are omitted.
pub fn income_by_source(records: &[FinancialRecord]) -> Vec<IncomeSource> {
    let mut sources: BTreeMap<IncomeSourceKind, Decimal> = BTreeMap::new();

    for record in records {
        if let Some(source) = source_of(record.category) {
            let total = sources.entry(source).or_insert(Decimal::ZERO);
            *total = total.saturating_add(record.amount);
        }
    }

    sources
        .into_iter()
        .map(|(source, total)| IncomeSource { source, total })
        .collect()
}

pub fn summarize(records: &[FinancialRecord]) -> LedgerSummary {
    let totals = totals(records);
    LedgerSummary {
        totals,
        net_balance: totals.net_balance(),
        monthly_series: monthly_series(records),
        income_by_source: income_by_source(records),
    }
}

fn add_to(acc: &mut LedgerTotals, record: &FinancialRecord) {
    if record.category.is_income() {
        acc.income = acc.income.saturating_add(record.amount);
    } else {
        acc.expense = acc.expense.saturating_add(record.amount);
    }
}

fn source_of(category: FinancialCategory) -> Option<IncomeSourceKind> {
    match category {
        FinancialCategory::ClientIncome => Some(IncomeSourceKind::Client),
        FinancialCategory::CompanyIncome => Some(IncomeSourceKind::Company),
        FinancialCategory::Expense => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::PaymentStatus;
    use std::str::FromStr;

    fn record(category: FinancialCategory, amount: &str, date: Option<&str>) -> FinancialRecord {
        FinancialRecord {
            id: format!("{}-{}", category.as_str(), amount),
            description: String::new(),
            amount: Decimal::from_str(amount).unwrap(),
            category,
            due_date: date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            status: PaymentStatus::Pending,
        }
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn sample() -> Vec<FinancialRecord> {
        vec![
            record(FinancialCategory::ClientIncome, "1000", Some("2024-01-05")),
            record(FinancialCategory::Expense, "300", Some("2024-01-10")),
            record(FinancialCategory::CompanyIncome, "500", Some("2024-02-01")),
        ]
    }

    #[test]
    fn test_totals() {
        let totals = totals(&sample());
        assert_eq!(totals.income, dec("1500"));
        assert_eq!(totals.expense, dec("300"));
    }

    #[test]
    fn test_monthly_series() {
        let series = monthly_series(&sample());
        assert_eq!(
            series,
            vec![
                MonthlyBucket {
                    month: MonthKey::new(2024, 1).unwrap(),
                    income: dec("1000"),
                    expense: dec("300"),
                },
                MonthlyBucket {
                    month: MonthKey::new(2024, 2).unwrap(),
                    income: dec("500"),
                    expense: Decimal::ZERO,
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(totals(&[]), LedgerTotals::default());
        assert!(monthly_series(&[]).is_empty());
        assert!(income_by_source(&[]).is_empty());
    }

    #[test]
    fn test_totals_over_concatenation() {
        let a = sample();
        let b = vec![
            record(FinancialCategory::Expense, "0.10", None),
            record(FinancialCategory::ClientIncome, "0.20", Some("2023-12-31")),
        ];
        let joined: Vec<_> = a.iter().chain(b.iter()).cloned().collect();

        assert_eq!(totals(&joined), totals(&a) + totals(&b));
    }

    #[test]
    fn test_cents_accumulate_exactly() {
        let records: Vec<_> = (0..10)
            .map(|_| record(FinancialCategory::Expense, "0.1", None))
            .collect();
        assert_eq!(totals(&records).expense, dec("1.0"));
    }

    #[test]
    fn test_monthly_series_sorted_and_unique() {
        let records = vec![
            record(FinancialCategory::Expense, "10", Some("2024-03-02")),
            record(FinancialCategory::ClientIncome, "20", Some("2023-11-15")),
            record(FinancialCategory::Expense, "5", Some("2024-03-28")),
            record(FinancialCategory::CompanyIncome, "7", None),
            record(FinancialCategory::CompanyIncome, "8", Some("2024-01-01")),
        ];
        let series = monthly_series(&records);
        let months: Vec<String> = series.iter().map(|b| b.month.to_string()).collect();

        assert_eq!(months, vec!["2023-11", "2024-01", "2024-03"]);
        assert_eq!(series[2].expense, dec("15"));
    }

    #[test]
    fn test_income_by_source() {
        let mut records = sample();
        records.push(record(FinancialCategory::ClientIncome, "250.50", None));

        let sources = income_by_source(&records);
        assert_eq!(
            sources,
            vec![
                IncomeSource {
                    source: IncomeSourceKind::Client,
                    total: dec("1250.50"),
                },
                IncomeSource {
                    source: IncomeSourceKind::Company,
                    total: dec("500"),
                },
            ]
        );
    }

    #[test]
    fn test_income_by_source_omits_empty_sources() {
        let records = vec![
            record(FinancialCategory::Expense, "40", None),
            record(FinancialCategory::CompanyIncome, "60", None),
        ];
        let sources = income_by_source(&records);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].source, IncomeSourceKind::Company);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let max = "79228162514264337593543950335";
        let records = vec![
            record(FinancialCategory::ClientIncome, max, Some("2024-01-05")),
            record(FinancialCategory::ClientIncome, max, Some("2024-01-06")),
            record(FinancialCategory::Expense, max, None),
            record(FinancialCategory::Expense, "1", None),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.totals.income, Decimal::MAX);
        assert_eq!(summary.totals.expense, Decimal::MAX);
        assert_eq!(summary.net_balance, Decimal::ZERO);
        assert_eq!(summary.monthly_series[0].income, Decimal::MAX);
        assert_eq!(summary.income_by_source[0].total, Decimal::MAX);
        assert_eq!(totals(&records) + totals(&records), totals(&records));
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&sample());
        assert_eq!(summary.net_balance, dec("1200"));
        assert_eq!(summary.monthly_series.len(), 2);
        assert_eq!(summary.income_by_source.len(), 2);
    }
}
