//! Portal Core Crate
//!
//! Pure computations behind the portal pages. Nothing here performs I/O or
//! holds state: callers hand in a snapshot of the store's collections and
//! get a value or a validation error back, so every function is cheap to
//! re-run on each change notification.
//!
//! # Modules
//!
//! - `shift`: clock-out time for a fixed workday
//! - `ledger`: totals, monthly series and income sources of the ledger
//! - `tasks`: priority-then-recency ordering of the to-do list
//! - `activity_log`: write-time rules for the work journal
//! - `forms`: parsing of raw form text (amounts, times of day)
//! - `dashboard`: the combined dashboard summary
//!
//! # Example
//!
//! ```rust
//! use portal_core::ShiftCalculator;
//! use shared_types::ShiftInput;
//!
//! let input = ShiftInput {
//!     entry: Some("09:00".to_string()),
//!     lunch_start: Some("12:00".to_string()),
//!     lunch_end: Some("13:00".to_string()),
//! };
//! let result = ShiftCalculator::default().compute_input(&input).unwrap();
//! assert_eq!(result.exit_time, "18:00");
//! ```

pub mod activity_log;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod ledger;
pub mod shift;
pub mod tasks;

pub use error::{ShiftError, ValidationError};
pub use shift::ShiftCalculator;
