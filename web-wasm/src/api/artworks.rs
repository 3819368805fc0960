//! 作品データ(artworks.json)の取得

use kaihan_gallery_common::{check_status, DocumentSource, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// fetch API で文書を取得する
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

fn js_error(e: JsValue) -> Error {
    Error::Network(format!("{:?}", e))
}

impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(&self.url, &opts).map_err(js_error)?;
        let window = web_sys::window().ok_or_else(|| Error::Network("window unavailable".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        check_status(resp.status())?;

        let body = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| Error::Network("response body is not text".to_string()))
    }
}
