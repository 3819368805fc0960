//! 時刻とローカルタイムゾーン
//!
//! 月キーの算出やコメント日時の表示はローカル時刻で行う。
//! テストでは `ManualClock` で時刻とオフセットを固定する。

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock {
    /// 現在時刻（epochミリ秒）
    fn now_millis(&self) -> i64;

    /// epochミリ秒をローカル時刻に変換
    fn to_local(&self, millis: i64) -> Option<DateTime<FixedOffset>>;

    /// ローカル日時をepochミリ秒に変換（夏時間の重複は早い方）
    fn from_local(&self, local: &NaiveDateTime) -> Option<i64>;
}

/// 実行環境のローカルタイムゾーンを使う時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn to_local(&self, millis: i64) -> Option<DateTime<FixedOffset>> {
        Local
            .timestamp_millis_opt(millis)
            .single()
            .map(|dt| dt.fixed_offset())
    }

    fn from_local(&self, local: &NaiveDateTime) -> Option<i64> {
        Local
            .from_local_datetime(local)
            .earliest()
            .map(|dt| dt.timestamp_millis())
    }
}

/// 手動で進める時計（固定オフセット）
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
    offset: FixedOffset,
}

impl ManualClock {
    pub fn new(now_millis: i64, offset: FixedOffset) -> Self {
        Self {
            now: AtomicI64::new(now_millis),
            offset,
        }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.store(now_millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }

    fn to_local(&self, millis: i64) -> Option<DateTime<FixedOffset>> {
        self.offset.timestamp_millis_opt(millis).single()
    }

    fn from_local(&self, local: &NaiveDateTime) -> Option<i64> {
        self.offset
            .from_local_datetime(local)
            .single()
            .map(|dt| dt.timestamp_millis())
    }
}
