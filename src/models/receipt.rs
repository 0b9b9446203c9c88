use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ReceiptError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// 金额格式：普通十进制，不接受科学计数法，整数与小数部分各最多 18 位
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[0-9]{1,18}(\.[0-9]{1,18})?$").expect("Invalid amount regex")
});

/// 小票 (请求体)
///
/// 金额、日期、时间保留原始字符串，按需解析。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM, 24小时制
    pub total: String,
    pub items: Vec<Item>,
}

/// 小票明细行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// 宽松解析用：缺失字段按零值填充
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LenientReceipt {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    total: String,
    items: Vec<LenientItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LenientItem {
    short_description: String,
    price: String,
}

impl From<LenientReceipt> for Receipt {
    fn from(raw: LenientReceipt) -> Self {
        Self {
            retailer: raw.retailer,
            purchase_date: raw.purchase_date,
            purchase_time: raw.purchase_time,
            total: raw.total,
            items: raw
                .items
                .into_iter()
                .map(|item| Item {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
        }
    }
}

impl Receipt {
    /// 宽松反序列化：缺失字段视为空值，只影响对应规则；类型错误仍然失败
    pub fn from_json_lenient(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<LenientReceipt>(body).map(Receipt::from)
    }

    pub fn total_amount(&self) -> Option<BigDecimal> {
        parse_amount(&self.total)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.purchase_date, DATE_FORMAT).ok()
    }

    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, TIME_FORMAT).ok()
    }

    /// 严格校验：日期、时间、总额及每行单价都必须可解析
    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.date().is_none() {
            return Err(ReceiptError::InvalidDate(self.purchase_date.clone()));
        }
        if self.time().is_none() {
            return Err(ReceiptError::InvalidTime(self.purchase_time.clone()));
        }
        if self.total_amount().is_none() {
            return Err(ReceiptError::InvalidTotal(self.total.clone()));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.price_amount().is_none() {
                return Err(ReceiptError::InvalidPrice {
                    index,
                    value: item.price.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Item {
    pub fn price_amount(&self) -> Option<BigDecimal> {
        parse_amount(&self.price)
    }
}

fn parse_amount(raw: &str) -> Option<BigDecimal> {
    if !AMOUNT_PATTERN.is_match(raw) {
        return None;
    }
    BigDecimal::from_str(raw).ok()
}
