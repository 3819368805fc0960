//! 撮影日時の推定
//!
//! EXIF → ファイル名 → ファイル更新日時 → 現在時刻 の順に試す。
//! ファイル名・EXIFの日時はローカル時刻として扱う。

use crate::scanner;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};
use kaihan_gallery_common::{Clock, DateIssue, TimeSource};
use regex::Regex;
use std::path::Path;

/// これより前の年は EARLY_TIME
pub const EARLY_YEAR: i32 = 2020;

/// ファイル名の日付として認める年の範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self { min: 2020, max: 2030 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTime {
    /// epochミリ秒
    pub millis: i64,
    pub source: TimeSource,
}

/// 推定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub capture: CaptureTime,
    /// EXIFが使えなかった場合に記録する代替の根拠
    pub no_exif_fallback: Option<TimeSource>,
}

lazy_static::lazy_static! {
    static ref MMEXPORT_RE: Regex = Regex::new(r"mmexport(\d{13})").unwrap();
    static ref IMG_RE: Regex = Regex::new(r"IMG_(\d{8})_(\d{6})").unwrap();
    static ref SCREENSHOT_RE: Regex = Regex::new(r"Screenshot[_-](\d{4})[_-](\d{2})[_-](\d{2})").unwrap();
    static ref DATE_RE: Regex = Regex::new(r"(\d{4})[_-]?(\d{2})[_-]?(\d{2})").unwrap();
}

/// ファイル名（拡張子を除く）から日時を読む
pub fn parse_filename(file_name: &str, window: YearWindow, clock: &impl Clock) -> Option<CaptureTime> {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if stem.starts_with("mmexport") {
        let millis = MMEXPORT_RE
            .captures(&stem)
            .and_then(|caps| caps[1].parse::<i64>().ok())
            .filter(|ms| clock.to_local(*ms).is_some());
        if let Some(millis) = millis {
            return Some(CaptureTime {
                millis,
                source: TimeSource::FilenameTimestamp,
            });
        }
    }

    let pattern = |millis: i64| CaptureTime {
        millis,
        source: TimeSource::FilenamePattern,
    };

    if let Some(caps) = IMG_RE.captures(&stem) {
        let joined = format!("{}{}", &caps[1], &caps[2]);
        if let Some(millis) = NaiveDateTime::parse_from_str(&joined, "%Y%m%d%H%M%S")
            .ok()
            .and_then(|dt| clock.from_local(&dt))
        {
            return Some(pattern(millis));
        }
    }

    if let Some(caps) = SCREENSHOT_RE.captures(&stem) {
        if let Some(millis) = date_from_parts(&caps[1], &caps[2], &caps[3])
            .and_then(|dt| clock.from_local(&dt))
        {
            return Some(pattern(millis));
        }
    }

    // 最初の一致だけを見る
    let caps = DATE_RE.captures(&stem)?;
    let dt = date_from_parts(&caps[1], &caps[2], &caps[3])?;
    if !window.contains(dt.year()) {
        return None;
    }
    clock.from_local(&dt).map(pattern)
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)?
        .and_hms_opt(0, 0, 0)
}

/// ファイル更新日時（epochミリ秒）
pub fn file_mtime(path: &Path) -> Option<i64> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(chrono::DateTime::<Utc>::from(modified).timestamp_millis())
}

/// 1枚の画像の撮影日時を推定
pub fn infer_capture_time(path: &Path, window: YearWindow, clock: &impl Clock) -> Inference {
    if let Some(millis) = scanner::extract_datetime(path).and_then(|dt| clock.from_local(&dt)) {
        return Inference {
            capture: CaptureTime {
                millis,
                source: TimeSource::ExifDatetime,
            },
            no_exif_fallback: None,
        };
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if let Some(capture) = parse_filename(&file_name, window, clock) {
        let fallback = capture.source.clone();
        return Inference {
            capture,
            no_exif_fallback: Some(fallback),
        };
    }

    let capture = match file_mtime(path) {
        Some(millis) => CaptureTime {
            millis,
            source: TimeSource::FileMtime,
        },
        None => {
            tracing::warn!(file = %file_name, "modification time unavailable, using now");
            CaptureTime {
                millis: clock.now_millis(),
                source: TimeSource::Fallback,
            }
        }
    };
    Inference {
        capture,
        no_exif_fallback: Some(TimeSource::FileMtime),
    }
}

/// 未来・古すぎる日時の検出
pub fn validate(millis: i64, clock: &impl Clock) -> Vec<DateIssue> {
    let mut issues = Vec::new();
    if millis > clock.now_millis() {
        issues.push(DateIssue::FutureTime);
    }
    if clock.to_local(millis).is_some_and(|dt| dt.year() < EARLY_YEAR) {
        issues.push(DateIssue::EarlyTime);
    }
    issues
}

/// 表示用日付 "YYYY年MM月DD日"
pub fn format_date_display(millis: i64, clock: &impl Clock) -> String {
    clock
        .to_local(millis)
        .map(|dt| dt.format("%Y年%m月%d日").to_string())
        .unwrap_or_default()
}
