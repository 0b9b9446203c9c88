pub mod id;
pub mod receipts;
pub mod rules;

pub use id::new_id;
pub use receipts::ReceiptService;
pub use rules::{compute_points, score, PointsBreakdown};
