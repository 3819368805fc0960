//! localStorage によるコメント保存

use kaihan_gallery_common::{Error, Result, Storage};

/// ブラウザの localStorage（使えない環境では読み込みは空、書き込みは失敗）
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl Storage for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage()
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
