use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Item, Receipt};

const ROUND_DOLLAR_POINTS: i64 = 50;
const QUARTER_MULTIPLE_POINTS: i64 = 25;
const POINTS_PER_ITEM_PAIR: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

/// Unicode 字母 (L*) 或十进制数字 (Nd)
static LETTER_OR_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{Nd}]").expect("Invalid letter/digit regex"));

/// 各规则得分明细
///
/// 无法解析的字段只会让对应规则得 0 分，不会中断计分。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: i64,
    pub round_dollar: i64,
    pub quarter_multiple: i64,
    pub item_descriptions: i64,
    pub item_pairs: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl PointsBreakdown {
    /// 合计，下限为 0 (负单价可能拉低规则4的得分)
    pub fn total(&self) -> i64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_descriptions,
            self.item_pairs,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0i64, i64::saturating_add)
        .max(0)
    }
}

/// 逐条规则计分
pub fn score(receipt: &Receipt) -> PointsBreakdown {
    let total = receipt.total_amount();
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: total.as_ref().map_or(0, round_dollar_points),
        quarter_multiple: total.as_ref().map_or(0, quarter_multiple_points),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0i64, i64::saturating_add),
        item_pairs: item_pair_points(receipt.items.len()),
        odd_day: receipt.date().map_or(0, |d| odd_day_points(d.day())),
        afternoon: receipt.time().map_or(0, |t| afternoon_points(t.hour())),
    }
}

/// 计算小票积分
pub fn compute_points(receipt: &Receipt) -> i64 {
    score(receipt).total()
}

/// 规则1: 商户名中每个字母或数字 1 分
pub fn retailer_points(retailer: &str) -> i64 {
    LETTER_OR_DIGIT.find_iter(retailer).count() as i64
}

/// 规则2: 总额为整数
pub fn round_dollar_points(total: &BigDecimal) -> i64 {
    if is_whole(total) {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 规则3: 总额为 0.25 的整数倍
pub fn quarter_multiple_points(total: &BigDecimal) -> i64 {
    if is_whole(&(total * &BigDecimal::from(4))) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 规则4: 去空白后描述长度为 3 的倍数时，得 ceil(单价 * 0.2)
pub fn item_description_points(item: &Item) -> i64 {
    if item.short_description.trim().chars().count() % 3 != 0 {
        return 0;
    }
    match item.price_amount() {
        // 0.2 * price == price / 5，十进制下可精确表示
        Some(price) => ceil(&(price / BigDecimal::from(5))),
        None => 0,
    }
}

/// 规则5: 每两件商品 5 分
pub fn item_pair_points(item_count: usize) -> i64 {
    ((item_count / 2) as i64).saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// 规则6: 购买日为奇数
pub fn odd_day_points(day: u32) -> i64 {
    if day % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 规则7: 14:00 (含) 至 16:00 (不含)
pub fn afternoon_points(hour: u32) -> i64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}

fn is_whole(value: &BigDecimal) -> bool {
    value.with_scale(0) == *value
}

// with_scale(0) 向零截断；超出 i64 范围时按符号饱和
fn ceil(value: &BigDecimal) -> i64 {
    let truncated = value.with_scale(0);
    let Some(whole) = truncated.to_i64() else {
        return if *value < BigDecimal::zero() { i64::MIN } else { i64::MAX };
    };
    if *value > truncated {
        whole.saturating_add(1)
    } else {
        whole
    }
}
