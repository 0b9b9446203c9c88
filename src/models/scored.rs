use chrono::{DateTime, Utc};

/// 已计分小票 (存储记录)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReceipt {
    pub id: String,
    pub points: i64,
    pub processed_at: DateTime<Utc>,
}

impl ScoredReceipt {
    pub fn new(id: String, points: i64) -> Self {
        Self {
            id,
            points,
            processed_at: Utc::now(),
        }
    }
}
