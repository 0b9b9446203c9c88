use std::sync::Arc;

use crate::error::ReceiptError;
use crate::models::Receipt;
use crate::service::id::new_id;
use crate::service::rules;
use crate::store::ReceiptStore;

/// 小票积分服务：校验 -> 计分 -> 生成ID -> 入库
pub struct ReceiptService {
    store: Arc<dyn ReceiptStore>,
    legacy: bool,
}

impl ReceiptService {
    /// `legacy` 为 true 时沿用宽松策略：字段解析失败只让对应规则得 0 分
    pub fn new(store: Arc<dyn ReceiptStore>, legacy: bool) -> Self {
        Self { store, legacy }
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// 处理小票，返回新ID
    pub fn process(&self, receipt: &Receipt) -> Result<String, ReceiptError> {
        if !self.legacy {
            receipt.validate()?;
        }

        let breakdown = rules::score(receipt);
        let points = breakdown.total();
        let id = new_id();

        tracing::debug!("Receipt {} breakdown: {:?}", id, breakdown);
        tracing::info!(
            "Processed receipt {} from {:?}: {} items, {} points",
            id,
            receipt.retailer,
            receipt.items.len(),
            points
        );

        self.store.put(id.clone(), points);
        Ok(id)
    }

    /// 无法解析的请求体在兼容模式下按 0 分入库
    pub fn process_unreadable(&self) -> String {
        let id = new_id();
        self.store.put(id.clone(), 0);
        tracing::info!("Stored receipt {} with 0 points (unreadable body)", id);
        id
    }

    /// 查询积分
    pub fn points(&self, id: &str) -> Option<i64> {
        let points = self.store.get(id);
        if points.is_none() {
            tracing::warn!("Receipt {} not found", id);
        }
        points
    }

    /// 查询积分，未知ID按 0 分
    pub fn points_or_zero(&self, id: &str) -> i64 {
        self.store.points_or_zero(id)
    }
}
