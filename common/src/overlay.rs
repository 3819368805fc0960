//! コメントから導出される表示値
//!
//! 最初のコメントは作品のキャプションとして扱う:
//! - 表示タイトル = 最初のコメント本文 > OCRタイトル > 空
//! - 表示コメント数 = 件数 - 1（最初の1件はタイトルとして消費される）

use crate::types::{Artwork, CommentRecord};

/// 表示タイトル（空文字なら表示しない）
pub fn display_title(artwork: &Artwork, comments: &[CommentRecord]) -> String {
    match comments.first() {
        Some(first) => first.text.clone(),
        None => artwork.ocr_title().unwrap_or_default().to_string(),
    }
}

/// カードに表示するコメント数
pub fn displayed_comment_count(comments: &[CommentRecord]) -> usize {
    comments.len().saturating_sub(1)
}

/// "💬 N 条评论"（0件なら None）
pub fn comment_count_label(count: usize) -> Option<String> {
    (count > 0).then(|| format!("💬 {} 条评论", count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, TimeSource};

    fn artwork(title: Option<&str>) -> Artwork {
        Artwork {
            id: "a1".to_string(),
            filename: "a1.jpg".to_string(),
            path: "images/a1.jpg".to_string(),
            title: title.map(str::to_string),
            timestamp: 0,
            date_display: "2024年05月01日".to_string(),
            time_source: TimeSource::ExifDatetime,
            confidence: Confidence::High,
            issues: None,
            content: None,
            poem_source: None,
        }
    }

    fn comments(texts: &[&str]) -> Vec<CommentRecord> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| CommentRecord {
                id: format!("c{}", i),
                text: text.to_string(),
                timestamp: i as i64,
                date: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_title_prefers_first_comment() {
        let title = display_title(&artwork(Some("静夜思")), &comments(&["Hello", "Nice"]));
        assert_eq!(title, "Hello");
    }

    #[test]
    fn test_title_falls_back_to_ocr() {
        assert_eq!(display_title(&artwork(Some("静夜思")), &[]), "静夜思");
    }

    #[test]
    fn test_title_empty_for_sentinel_or_missing() {
        assert_eq!(display_title(&artwork(Some("未命名作品")), &[]), "");
        assert_eq!(display_title(&artwork(None), &[]), "");
    }

    #[test]
    fn test_displayed_count() {
        assert_eq!(displayed_comment_count(&comments(&[])), 0);
        assert_eq!(displayed_comment_count(&comments(&["a"])), 0);
        assert_eq!(displayed_comment_count(&comments(&["a", "b"])), 1);
        assert_eq!(displayed_comment_count(&comments(&["a", "b", "c"])), 2);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(comment_count_label(0), None);
        assert_eq!(comment_count_label(1).as_deref(), Some("💬 1 条评论"));
        assert_eq!(comment_count_label(12).as_deref(), Some("💬 12 条评论"));
    }
}
