//! AppIDからメタデータを照会する
//!
//! 照会先は設定ファイルの `lookup_url`。`--offline` 時は照会しない。

use crate::error::{Result, ScanError};
use crate::record::AppMeta;
use reqwest::blocking::Client;
use std::time::Duration;

/// メタデータ照会（1操作のみ）
pub trait MetadataLookup: Sync {
    fn query(&self, wxid: &str) -> Result<AppMeta>;
}

/// HTTP照会
pub struct HttpLookup {
    client: Client,
    url: String,
}

impl HttpLookup {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::Lookup(format!("HTTPクライアント作成失敗: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl MetadataLookup for HttpLookup {
    fn query(&self, wxid: &str) -> Result<AppMeta> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("appid", wxid)])
            .send()
            .map_err(|e| ScanError::Lookup(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Lookup(format!("HTTP {}", status)));
        }

        response
            .json::<AppMeta>()
            .map_err(|e| ScanError::Lookup(format!("レスポンス解析失敗: {}", e)))
    }
}

/// 照会しない（表示名はAppIDのまま）
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineLookup;

impl MetadataLookup for OfflineLookup {
    fn query(&self, _wxid: &str) -> Result<AppMeta> {
        Ok(AppMeta::default())
    }
}
