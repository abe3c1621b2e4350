//! 小程序レコードの型定義

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

lazy_static::lazy_static! {
    /// AppID: "wx" + 16桁の小文字16進数
    static ref APP_ID_RE: regex::Regex = regex::Regex::new(r"wx[0-9a-f]{16}").unwrap();
}

/// エントリ名からAppIDを抽出（部分一致）
pub fn extract_app_id(name: &str) -> Option<&str> {
    APP_ID_RE.find(name).map(|m| m.as_str())
}

/// 検出された小程序1件分の情報
///
/// `wxid` と `location` は走査時に決まり、以降は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRecord {
    pub wxid: String,
    pub location: PathBuf,
    pub nickname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal_name: Option<String>,

    /// メタデータ照会の失敗内容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppRecord {
    /// 走査直後のレコード（表示名は未照会なのでAppID）
    pub fn discovered(wxid: impl Into<String>, location: PathBuf) -> Self {
        let wxid = wxid.into();
        Self {
            nickname: wxid.clone(),
            wxid,
            location,
            description: None,
            avatar: None,
            principal_name: None,
            error: None,
        }
    }

    /// 照会成功時の反映。空のニックネームはAppIDのまま
    pub fn apply_meta(&mut self, meta: AppMeta) {
        self.nickname = meta
            .display_name()
            .map_or_else(|| self.wxid.clone(), str::to_string);
        self.description = first_non_empty([&meta.description]).map(str::to_string);
        self.avatar = meta.avatar_url().map(str::to_string);
        self.principal_name = meta.principal().map(str::to_string);
        self.error = None;
    }

    /// 照会失敗時の反映
    pub fn apply_error(&mut self, error: impl ToString) {
        self.nickname = self.wxid.clone();
        self.error = Some(error.to_string());
    }

    /// detail.json用のJSON文字列
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// 照会サービスが返すメタデータ（どのフィールドも欠けうる）
///
/// サービスによってキー名が異なるため別名は個別フィールドで受ける。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppMeta {
    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default, rename = "appName")]
    pub app_name: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default, rename = "headImg")]
    pub head_img: Option<String>,

    #[serde(default)]
    pub principal_name: Option<String>,

    #[serde(default, rename = "principalName")]
    pub principal_name_camel: Option<String>,
}

impl AppMeta {
    /// 表示名: nickname → appName → name の順で最初の非空
    pub fn display_name(&self) -> Option<&str> {
        first_non_empty([&self.nickname, &self.app_name, &self.name])
    }

    pub fn avatar_url(&self) -> Option<&str> {
        first_non_empty([&self.avatar, &self.head_img])
    }

    pub fn principal(&self) -> Option<&str> {
        first_non_empty([&self.principal_name, &self.principal_name_camel])
    }
}

fn first_non_empty<const N: usize>(values: [&Option<String>; N]) -> Option<&str> {
    values
        .into_iter()
        .filter_map(|v| v.as_deref())
        .find(|v| !v.is_empty())
}
