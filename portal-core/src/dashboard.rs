use shared_types::{DashboardSummary, FinancialRecord, Task};

use crate::{ledger, tasks};

pub fn summarize(records: &[FinancialRecord], task_list: &[Task]) -> DashboardSummary {
    let totals = ledger::totals(records);
    let pending = tasks::pending_count(task_list);

    DashboardSummary {
        totals,
        net_balance: totals.net_balance(),
        pending_tasks: u32::try_from(pending).unwrap_or(u32::MAX),
        monthly_series: ledger::monthly_series(records),
        income_by_source: ledger::income_by_source(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use shared_types::{FinancialCategory, PaymentStatus, TaskPriority};

    #[test]
    fn test_summarize() {
        let records = vec![
            FinancialRecord {
                id: "1".to_string(),
                description: "Consulting".to_string(),
                amount: Decimal::new(1000, 0),
                category: FinancialCategory::ClientIncome,
                due_date: NaiveDate::from_ymd_opt(2024, 1, 5),
                status: PaymentStatus::Paid,
            },
            FinancialRecord {
                id: "2".to_string(),
                description: "Rent".to_string(),
                amount: Decimal::new(300, 0),
                category: FinancialCategory::Expense,
                due_date: NaiveDate::from_ymd_opt(2024, 1, 10),
                status: PaymentStatus::Pending,
            },
        ];
        let task_list = vec![
            Task {
                id: "t1".to_string(),
                text: "Send invoice".to_string(),
                completed: false,
                created_at: Utc::now(),
                priority: Some(TaskPriority::High),
            },
            Task {
                id: "t2".to_string(),
                text: "Pay rent".to_string(),
                completed: true,
                created_at: Utc::now(),
                priority: None,
            },
        ];

        let summary = summarize(&records, &task_list);
        assert_eq!(summary.totals.income, Decimal::new(1000, 0));
        assert_eq!(summary.net_balance, Decimal::new(700, 0));
        assert_eq!(summary.pending_tasks, 1);
        assert_eq!(summary.monthly_series.len(), 1);
        assert_eq!(summary.income_by_source.len(), 1);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.net_balance, Decimal::ZERO);
        assert_eq!(summary.pending_tasks, 0);
        assert!(summary.monthly_series.is_empty());
    }
}
