use thiserror::Error;

/// Failures of the time-clock calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("entry, lunch start and lunch end are all required")]
    MissingInput,

    #[error("lunch end must not be before lunch start")]
    InvalidRange,

    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Rejections of user input before anything is written to the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    RequiredFieldMissing(&'static str),

    #[error("task text must not be empty")]
    EmptyTaskText,

    #[error("amount must not be negative: {0}")]
    NegativeAmount(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("amount is above the ledger ceiling: {0}")]
    AmountTooLarge(String),
}
