//! キー・バリュー永続化の抽象
//!
//! ブラウザでは localStorage、テストでは `MemoryStorage` を使う。

use crate::error::{Error, Result};
use std::cell::Cell;
use std::collections::HashMap;

pub trait Storage {
    /// キーの値を読む（存在しなければ None）
    fn read(&self, key: &str) -> Option<String>;

    /// キーに値を書く
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストレージ
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_exceeded: bool,
    reads: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の値を持った状態で作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    /// 書き込み失敗（容量超過）を再現する
    pub fn set_quota_exceeded(&mut self, exceeded: bool) {
        self.quota_exceeded = exceeded;
    }

    /// `read` が呼ばれた回数
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.quota_exceeded {
            return Err(Error::Storage("QuotaExceededError".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
