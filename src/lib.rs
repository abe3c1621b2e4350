//! 小程序パッケージ検出ライブラリ
//!
//! ルート解決 → ディレクトリ走査 → メタデータ付与 → 対話選択 → 展開・detail.json出力

pub mod cli;
pub mod config;
pub mod enricher;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod lookup;
pub mod record;
pub mod roots;
pub mod scan;
pub mod scanner;
pub mod selector;

pub use error::{Result, ScanError};
pub use record::{AppMeta, AppRecord};
