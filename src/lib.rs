pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::create_router;
pub use crate::config::AppConfig;
pub use error::{ApiError, ReceiptError};
pub use models::{Item, Receipt, ScoredReceipt};
pub use service::{compute_points, new_id, ReceiptService};
pub use store::{MemoryStore, ReceiptStore};
