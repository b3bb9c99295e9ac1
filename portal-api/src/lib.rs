pub mod config;
pub mod errors;
pub mod handlers;
pub mod session;
pub mod state;
pub mod store;

pub use store::DocumentStore;
