//! 作品データの読み込み
//!
//! ページ表示時に1回だけ `data/artworks.json` を取得して構造を解析する。
//! リトライ・ポーリングはしない。部分的なデータは受け付けない。

use crate::error::{Error, Result};
use crate::types::ArtworkCollection;

/// 作品データのURL（ページからの相対パス）
pub const DATA_URL: &str = "data/artworks.json";

/// 作品データ文書の取得元
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// 文書本文を取得（通信失敗・非2xxはエラー）
    async fn fetch(&self) -> Result<String>;
}

/// JSON文書を作品コレクションに変換
pub fn parse_collection(json: &str) -> Result<ArtworkCollection> {
    let collection: ArtworkCollection = serde_json::from_str(json)?;
    Ok(collection)
}

/// 取得して解析
pub async fn load<D: DocumentSource>(source: &D) -> Result<ArtworkCollection> {
    let result = match source.fetch().await {
        Ok(body) => parse_collection(&body),
        Err(e) => Err(e),
    };

    match &result {
        Ok(collection) => tracing::info!(count = collection.artworks.len(), "artworks loaded"),
        Err(e) => tracing::error!(error = %e, "failed to load artworks"),
    }
    result
}

/// HTTPステータスを検査
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::HttpStatus(status))
    }
}
