use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod activity_log;
pub mod dashboard;
pub mod financial;
pub mod shift;
pub mod task;

pub use activity_log::{
    ActivityLogEntry, ActivityLogsResponse, CreateActivityLogRequest, UpdateActivityLogRequest,
};
pub use dashboard::DashboardSummary;
pub use financial::{
    CreateFinancialRecordRequest, FinancialCategory, FinancialRecord, FinancialRecordView,
    FinancialRecordsResponse, IncomeSource, IncomeSourceKind, LedgerSummary, LedgerTotals,
    MonthKey, MonthKeyError, MonthlyBucket, PaymentState, PaymentStatus,
    UpdateFinancialRecordRequest,
};
pub use shift::{ShiftInput, ShiftResult};
pub use task::{CreateTaskRequest, Task, TaskPriority, TasksResponse, UpdateTaskRequest};

/// Error body for API endpoints
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
