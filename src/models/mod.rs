pub mod receipt;
pub mod scored;

pub use receipt::{Item, Receipt};
pub use scored::ScoredReceipt;
