//! 内存存储实现

use dashmap::DashMap;

use super::ReceiptStore;
use crate::models::ScoredReceipt;

/// 基于 DashMap 的内存存储，可在多线程间共享
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: DashMap<String, ScoredReceipt>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn put(&self, id: String, points: i64) {
        let receipt = ScoredReceipt::new(id.clone(), points);
        tracing::debug!(
            "Stored receipt {} ({} points) at {}",
            receipt.id,
            receipt.points,
            receipt.processed_at.to_rfc3339()
        );
        self.receipts.insert(id, receipt);
    }

    fn get(&self, id: &str) -> Option<i64> {
        self.receipts.get(id).map(|entry| entry.points)
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_put_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.put("abc".to_string(), 28);
        assert_eq!(store.get("abc"), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("abc".to_string(), 1);
        store.put("abc".to_string(), 2);
        assert_eq!(store.get("abc"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let store = MemoryStore::new();
        store.put("known".to_string(), 0);
        assert_eq!(store.get("missing"), None);
        assert_eq!(store.points_or_zero("missing"), 0);
        // 真实的 0 分与未知ID可区分
        assert_eq!(store.get("known"), Some(0));
    }

    #[test]
    fn test_concurrent_put_get() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        let id = format!("{}-{}", t, i);
                        store.put(id.clone(), i);
                        assert_eq!(store.get(&id), Some(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8 * 500);
    }
}
