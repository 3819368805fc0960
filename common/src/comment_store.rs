//! コメントストア
//!
//! 作品ID → コメント一覧 の文書を1つのキーにまとめて保存する。
//! 呼び出しごとに文書全体を読み直すので、画面側にキャッシュは持たない。
//!
//! - 読み込み: キーなし・壊れた文書は全体を空として扱う
//! - 作品単位の形の不一致: その作品だけ空として扱い、他の作品には影響させない
//! - 書き込み失敗: ログに出して捨てる（呼び出し元にはエラーを返さない）

use crate::clock::{Clock, SystemClock};
use crate::storage::Storage;
use crate::types::{ArtworkComments, CommentRecord, CommentsByArtwork};
use serde_json::Value;
use std::collections::BTreeMap;

/// 保存文書（作品ごとの値は未検証のまま保持する）
type RawDocument = BTreeMap<String, Value>;

/// localStorage のキー
pub const STORAGE_KEY: &str = "kaihan_artwork_comments";

pub struct CommentStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    /// このセッションで最後に発行したID（ミリ秒値）
    last_issued: i64,
}

impl<S: Storage> CommentStore<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> CommentStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self::with_key(storage, clock, STORAGE_KEY)
    }

    pub fn with_key(storage: S, clock: C, key: &str) -> Self {
        Self {
            storage,
            clock,
            key: key.to_string(),
            last_issued: i64::MIN,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// 作品のコメント一覧（失敗時は空）
    pub fn read(&self, artwork_id: &str) -> Vec<CommentRecord> {
        self.load_document()
            .remove(artwork_id)
            .and_then(|value| decode_entry(artwork_id, value))
            .map(|entry| entry.comments)
            .unwrap_or_default()
    }

    /// 全作品のコメント（読めない作品は含めない）
    ///
    /// 一覧描画で文書を1回だけ読むために使う。
    pub fn read_all(&self) -> CommentsByArtwork {
        self.load_document()
            .into_iter()
            .filter_map(|(artwork_id, value)| {
                let entry = decode_entry(&artwork_id, value)?;
                Some((artwork_id, entry))
            })
            .collect()
    }

    /// コメントを追加して保存
    ///
    /// 空白のみのテキストは無視する。保存に失敗した場合も None。
    pub fn add(&mut self, artwork_id: &str, text: &str) -> Option<CommentRecord> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let mut document = self.load_document();
        let mut entry = document
            .remove(artwork_id)
            .and_then(|value| decode_entry(artwork_id, value))
            .unwrap_or_default();

        let now = self.clock.now_millis();
        let stamp = self.next_stamp(now, &entry);
        let record = CommentRecord {
            id: format!("c{}", stamp),
            text: text.to_string(),
            timestamp: now,
            date: self.format_date_time(now),
        };
        entry.comments.push(record.clone());
        self.last_issued = stamp;

        tracing::debug!(artwork_id, comment_id = %record.id, "comment added");
        self.save_entry(document, artwork_id, &entry).then_some(record)
    }

    /// コメントを削除して保存
    ///
    /// 作品・コメントが存在しなければ何もしない。削除したら true。
    pub fn delete(&mut self, artwork_id: &str, comment_id: &str) -> bool {
        let mut document = self.load_document();
        let Some(mut entry) = document
            .remove(artwork_id)
            .and_then(|value| decode_entry(artwork_id, value))
        else {
            return false;
        };

        let before = entry.comments.len();
        entry.comments.retain(|c| c.id != comment_id);
        if entry.comments.len() == before {
            return false;
        }

        tracing::debug!(artwork_id, comment_id, "comment deleted");
        self.save_entry(document, artwork_id, &entry)
    }

    /// ID用のミリ秒値: 時計の値を基本に、発行済み・既存IDと重ならないよう繰り上げる
    fn next_stamp(&self, now: i64, entry: &ArtworkComments) -> i64 {
        let mut stamp = now.max(self.last_issued.saturating_add(1));
        while entry.comments.iter().any(|c| c.id == format!("c{}", stamp)) {
            stamp += 1;
        }
        stamp
    }

    /// "YYYY-MM-DD HH:MM"（ローカル時刻）
    fn format_date_time(&self, millis: i64) -> String {
        self.clock
            .to_local(millis)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }

    fn load_document(&self) -> RawDocument {
        let Some(raw) = self.storage.read(&self.key) else {
            return RawDocument::new();
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored comments unreadable, treating as empty");
                RawDocument::new()
            }
        }
    }

    /// 1作品分を差し替えて保存（他の作品の値はそのまま書き戻す）
    fn save_entry(
        &mut self,
        mut document: RawDocument,
        artwork_id: &str,
        entry: &ArtworkComments,
    ) -> bool {
        match serde_json::to_value(entry) {
            Ok(value) => {
                document.insert(artwork_id.to_string(), value);
            }
            Err(e) => {
                tracing::warn!(artwork_id, error = %e, "failed to serialize comments");
                return false;
            }
        }
        self.save_document(&document)
    }

    fn save_document(&mut self, document: &RawDocument) -> bool {
        let json = match serde_json::to_string(document) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize comments");
                return false;
            }
        };

        match self.storage.write(&self.key, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to save comments");
                false
            }
        }
    }
}

/// 1作品分の値を読む（形が合わなければ None）
fn decode_entry(artwork_id: &str, value: Value) -> Option<ArtworkComments> {
    match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!(artwork_id, error = %e, "stored comments for artwork unreadable, treating as empty");
            None
        }
    }
}
