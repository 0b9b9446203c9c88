//! 小票存储层
//!
//! 积分计算只依赖 [`ReceiptStore`]，存储后端可替换。

pub mod memory;

pub use memory::MemoryStore;

/// 小票积分存储接口
pub trait ReceiptStore: Send + Sync {
    /// 写入 (已存在则覆盖)，不检查ID唯一性
    fn put(&self, id: String, points: i64);

    /// 按ID查询积分，未知ID返回 None
    fn get(&self, id: &str) -> Option<i64>;

    /// 已存储的小票数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 兼容旧接口：未知ID按 0 分处理
    fn points_or_zero(&self, id: &str) -> i64 {
        self.get(id).unwrap_or(0)
    }
}
