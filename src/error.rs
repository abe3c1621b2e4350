use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("メタデータ照会エラー: {0}")]
    Lookup(String),

    #[error("展開エラー: {0}")]
    Extraction(String),

    #[error("選択画面エラー: {0}")]
    Selection(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
