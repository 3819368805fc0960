//! 月別グルーピング
//!
//! キーは "YYYY年MM月"（ローカル時刻）。グループの順序は各キーが最初に
//! 現れた順、グループ内の作品は元の並び順を保つ。

use crate::clock::Clock;
use crate::types::Artwork;
use chrono::Datelike;

/// タイムスタンプが範囲外の作品のキー
pub const UNKNOWN_MONTH_KEY: &str = "未知月份";

/// 月グループ
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub key: String,
    pub artworks: Vec<&'a Artwork>,
}

/// タイムスタンプから月キーを算出
pub fn month_key(timestamp: i64, clock: &impl Clock) -> String {
    clock
        .to_local(timestamp)
        .map(|dt| format!("{}年{:02}月", dt.year(), dt.month()))
        .unwrap_or_else(|| UNKNOWN_MONTH_KEY.to_string())
}

/// 作品列を月ごとに分割
pub fn group_by_month<'a>(artworks: &'a [Artwork], clock: &impl Clock) -> Vec<MonthGroup<'a>> {
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();

    for artwork in artworks {
        let key = month_key(artwork.timestamp, clock);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.artworks.push(artwork),
            None => groups.push(MonthGroup {
                key,
                artworks: vec![artwork],
            }),
        }
    }

    groups
}
