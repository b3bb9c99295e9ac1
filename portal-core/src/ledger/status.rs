use chrono::NaiveDate;
use shared_types::{FinancialRecord, FinancialRecordView, PaymentState, PaymentStatus};
use std::cmp::Ordering;

/// A pending entry whose due date is before `today` is overdue
pub fn payment_state(record: &FinancialRecord, today: NaiveDate) -> PaymentState {
    match record.status {
        PaymentStatus::Paid => PaymentState::Paid,
        PaymentStatus::Pending => match record.due_date {
            Some(due_date) if due_date < today => PaymentState::Overdue,
            _ => PaymentState::Pending,
        },
    }
}

/// Latest due date first, undated entries last. Stable.
pub fn sort_by_due_date_desc(records: &mut [FinancialRecord]) {
    records.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Ledger listing: sorted for display, each entry with its state as of `today`
pub fn record_views(mut records: Vec<FinancialRecord>, today: NaiveDate) -> Vec<FinancialRecordView> {
    sort_by_due_date_desc(&mut records);
    records
        .into_iter()
        .map(|record| {
            let state = payment_state(&record, today);
            FinancialRecordView { record, state }
        })
        .collect()
}
