//! 作品データ・コメントの型定義
//!
//! 生成ツール(CLI)とWeb(WASM)で共有される型:
//! - Artwork / ArtworkCollection: `data/artworks.json` の内容（読み込み後は不変）
//! - CommentRecord / ArtworkComments: 閲覧端末にローカル保存されるコメント

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// OCRで題名が得られなかった作品のタイトル値
pub const UNTITLED_SENTINEL: &str = "未命名作品";

/// 撮影日時の推定元
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeSource {
    /// EXIF DateTimeOriginal 等
    ExifDatetime,
    /// mmexport のミリ秒タイムスタンプ
    FilenameTimestamp,
    /// IMG_YYYYMMDD_HHMMSS 等の日付パターン
    FilenamePattern,
    /// ファイル更新日時
    FileMtime,
    /// 現在時刻で代用
    Fallback,
    /// 未知の値（そのまま保持）
    Unknown(String),
}

impl TimeSource {
    pub fn as_str(&self) -> &str {
        match self {
            TimeSource::ExifDatetime => "EXIF_DATETIME",
            TimeSource::FilenameTimestamp => "FILENAME_TIMESTAMP",
            TimeSource::FilenamePattern => "FILENAME_PATTERN",
            TimeSource::FileMtime => "FILE_MTIME",
            TimeSource::Fallback => "FALLBACK",
            TimeSource::Unknown(raw) => raw,
        }
    }

    /// 詳細表示用ラベル（未知の値は生の値）
    pub fn label(&self) -> &str {
        match self {
            TimeSource::ExifDatetime => "EXIF原始时间",
            TimeSource::FilenameTimestamp => "文件名时间戳",
            TimeSource::FilenamePattern => "文件名日期",
            TimeSource::FileMtime => "文件修改时间",
            TimeSource::Fallback => "默认时间",
            TimeSource::Unknown(raw) => raw,
        }
    }

    /// 推定元から決まる信頼度
    pub fn confidence(&self) -> Confidence {
        match self {
            TimeSource::ExifDatetime => Confidence::High,
            TimeSource::FilenameTimestamp | TimeSource::FilenamePattern => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

impl From<String> for TimeSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "EXIF_DATETIME" => TimeSource::ExifDatetime,
            "FILENAME_TIMESTAMP" => TimeSource::FilenameTimestamp,
            "FILENAME_PATTERN" => TimeSource::FilenamePattern,
            "FILE_MTIME" => TimeSource::FileMtime,
            "FALLBACK" => TimeSource::Fallback,
            _ => TimeSource::Unknown(value),
        }
    }
}

impl From<TimeSource> for String {
    fn from(value: TimeSource) -> Self {
        match value {
            TimeSource::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// 撮影日時の信頼度
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Confidence {
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Confidence {
    pub fn as_str(&self) -> &str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
            Confidence::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Confidence::High => "高可信度",
            Confidence::Medium => "中等可信度",
            Confidence::Low => "低可信度",
            Confidence::Unknown(raw) => raw,
        }
    }

    /// バッジのCSSクラス（未知の値は低信頼度扱い）
    pub fn css_class(&self) -> &'static str {
        match self {
            Confidence::High => "confidence-high",
            Confidence::Medium => "confidence-medium",
            Confidence::Low | Confidence::Unknown(_) => "confidence-low",
        }
    }
}

impl From<String> for Confidence {
    fn from(value: String) -> Self {
        match value.as_str() {
            "HIGH" => Confidence::High,
            "MEDIUM" => Confidence::Medium,
            "LOW" => Confidence::Low,
            _ => Confidence::Unknown(value),
        }
    }
}

impl From<Confidence> for String {
    fn from(value: Confidence) -> Self {
        match value {
            Confidence::Unknown(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// 生成時に検出された日時の問題
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateIssue {
    /// EXIFなし（ファイル名・更新日時で代用）
    NoExif,
    /// 未来の日時
    FutureTime,
    /// 2020年より前
    EarlyTime,
    Other(String),
}

impl DateIssue {
    pub fn as_str(&self) -> &str {
        match self {
            DateIssue::NoExif => "NO_EXIF",
            DateIssue::FutureTime => "FUTURE_TIME",
            DateIssue::EarlyTime => "EARLY_TIME",
            DateIssue::Other(raw) => raw,
        }
    }
}

impl From<String> for DateIssue {
    fn from(value: String) -> Self {
        match value.as_str() {
            "NO_EXIF" => DateIssue::NoExif,
            "FUTURE_TIME" => DateIssue::FutureTime,
            "EARLY_TIME" => DateIssue::EarlyTime,
            _ => DateIssue::Other(value),
        }
    }
}

impl From<DateIssue> for String {
    fn from(value: DateIssue) -> Self {
        match value {
            DateIssue::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// 詩詞の出典
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemSource {
    pub title: String,
    pub author: String,
}

/// 作品（外部から供給され、セッション中は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,

    pub filename: String,

    /// 画像の相対パス（例: "images/IMG_20240101_120000.jpg"）
    pub path: String,

    /// OCR由来のタイトル
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// 撮影日時（epochミリ秒）
    pub timestamp: i64,

    /// 表示用日付（例: "2024年01月01日"）
    pub date_display: String,

    pub time_source: TimeSource,

    pub confidence: Confidence,

    #[serde(default)]
    pub issues: Option<Vec<DateIssue>>,

    /// OCRで読み取った本文
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poem_source: Option<PoemSource>,
}

impl Artwork {
    /// 意味のあるOCRタイトル（センチネル値・空は None）
    pub fn ocr_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty() && *t != UNTITLED_SENTINEL)
    }
}

/// 生成時の警告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationWarning {
    pub file: String,
    pub issue: DateIssue,
    pub fallback: Option<TimeSource>,
}

/// 作品コレクション（新しい順に並んでいる前提）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,

    pub total_count: usize,

    #[serde(default)]
    pub warnings: Vec<GenerationWarning>,

    pub artworks: Vec<Artwork>,
}

impl ArtworkCollection {
    pub fn find(&self, artwork_id: &str) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == artwork_id)
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }
}

/// コメント1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub text: String,
    /// 作成日時（epochミリ秒）
    pub timestamp: i64,
    /// 表示用日時（"YYYY-MM-DD HH:MM"）
    pub date: String,
}

/// 作品ごとのコメント一覧（挿入順 = 時系列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkComments {
    pub comments: Vec<CommentRecord>,
}

/// 永続化されるコメント文書全体
pub type CommentsByArtwork = BTreeMap<String, ArtworkComments>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "generated_at": "2024-05-02T10:00:00",
            "total_count": 2,
            "warnings": [
                {"file": "a.jpg", "issue": "NO_EXIF", "fallback": "FILE_MTIME"}
            ],
            "artworks": [
                {
                    "id": "artwork_001",
                    "filename": "IMG_20240501_093000.jpg",
                    "path": "images/IMG_20240501_093000.jpg",
                    "timestamp": 1714527000000,
                    "date_display": "2024年05月01日",
                    "time_source": "FILENAME_PATTERN",
                    "confidence": "MEDIUM",
                    "issues": null,
                    "title": "静夜思"
                },
                {
                    "id": "artwork_002",
                    "filename": "a.jpg",
                    "path": "images/a.jpg",
                    "timestamp": 1709251200000,
                    "date_display": "2024年03月01日",
                    "time_source": "SCANNER_CLOCK",
                    "confidence": "VERY_HIGH"
                }
            ]
        }"#
    }

    #[test]
    fn test_collection_deserialize() {
        let collection: ArtworkCollection =
            serde_json::from_str(sample_json()).expect("デシリアライズ失敗");
        assert_eq!(collection.total_count, 2);
        assert_eq!(collection.artworks.len(), 2);
        assert_eq!(collection.warnings[0].issue, DateIssue::NoExif);
        assert_eq!(collection.warnings[0].fallback, Some(TimeSource::FileMtime));

        let first = &collection.artworks[0];
        assert_eq!(first.time_source, TimeSource::FilenamePattern);
        assert_eq!(first.confidence, Confidence::Medium);
        assert_eq!(first.ocr_title(), Some("静夜思"));
        assert_eq!(first.issues, None);
    }

    #[test]
    fn test_unknown_enum_values_are_kept() {
        let collection: ArtworkCollection =
            serde_json::from_str(sample_json()).expect("デシリアライズ失敗");
        let second = &collection.artworks[1];
        assert_eq!(second.time_source, TimeSource::Unknown("SCANNER_CLOCK".to_string()));
        assert_eq!(second.time_source.label(), "SCANNER_CLOCK");
        assert_eq!(second.confidence.label(), "VERY_HIGH");
        assert_eq!(second.confidence.css_class(), "confidence-low");
    }

    #[test]
    fn test_enum_serialize_as_wire_strings() {
        let json = serde_json::to_string(&TimeSource::ExifDatetime).unwrap();
        assert_eq!(json, "\"EXIF_DATETIME\"");
        let json = serde_json::to_string(&Confidence::Unknown("X".to_string())).unwrap();
        assert_eq!(json, "\"X\"");
        let json = serde_json::to_string(&DateIssue::FutureTime).unwrap();
        assert_eq!(json, "\"FUTURE_TIME\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeSource::ExifDatetime.label(), "EXIF原始时间");
        assert_eq!(TimeSource::FilenameTimestamp.label(), "文件名时间戳");
        assert_eq!(TimeSource::FilenamePattern.label(), "文件名日期");
        assert_eq!(TimeSource::FileMtime.label(), "文件修改时间");
        assert_eq!(TimeSource::Fallback.label(), "默认时间");
        assert_eq!(Confidence::High.label(), "高可信度");
        assert_eq!(Confidence::Medium.label(), "中等可信度");
        assert_eq!(Confidence::Low.label(), "低可信度");
        assert_eq!(Confidence::High.css_class(), "confidence-high");
        assert_eq!(Confidence::Medium.css_class(), "confidence-medium");
    }

    #[test]
    fn test_confidence_from_source() {
        assert_eq!(TimeSource::ExifDatetime.confidence(), Confidence::High);
        assert_eq!(TimeSource::FilenameTimestamp.confidence(), Confidence::Medium);
        assert_eq!(TimeSource::FilenamePattern.confidence(), Confidence::Medium);
        assert_eq!(TimeSource::FileMtime.confidence(), Confidence::Low);
        assert_eq!(TimeSource::Fallback.confidence(), Confidence::Low);
    }

    #[test]
    fn test_ocr_title_sentinel() {
        let mut artwork: Artwork = serde_json::from_str(
            r#"{"id":"a","filename":"a.jpg","path":"images/a.jpg","timestamp":0,
                "date_display":"","time_source":"FALLBACK","confidence":"LOW",
                "title":"未命名作品"}"#,
        )
        .expect("デシリアライズ失敗");
        assert_eq!(artwork.ocr_title(), None);

        artwork.title = None;
        assert_eq!(artwork.ocr_title(), None);

        artwork.title = Some(String::new());
        assert_eq!(artwork.ocr_title(), None);
    }

    #[test]
    fn test_comment_record_roundtrip_shape() {
        let mut doc = CommentsByArtwork::new();
        doc.insert(
            "artwork_001".to_string(),
            ArtworkComments {
                comments: vec![CommentRecord {
                    id: "c1714527000000".to_string(),
                    text: "好字".to_string(),
                    timestamp: 1714527000000,
                    date: "2024-05-01 09:30".to_string(),
                }],
            },
        );
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"artwork_001\":{\"comments\":[{\"id\":\"c1714527000000\""));
        assert!(json.contains("\"date\":\"2024-05-01 09:30\""));
    }
}
