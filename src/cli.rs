use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wxapkg-scan")]
#[command(about = "ローカルの小程序パッケージを検出して展開", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 小程序を検出し、選択したものを展開
    #[command(
        after_help = "例:\n  wxapkg-scan scan -r \"D:\\WeChat Files\\Applet\""
    )]
    Scan {
        /// 走査ルート（指定時は既定の探索を行わない）
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// 出力先の親ディレクトリ
        #[arg(short, long, default_value = ".")]
        output_base: PathBuf,

        /// メタデータを照会しない
        #[arg(long)]
        offline: bool,

        /// 照会を1件ずつ実行
        #[arg(long)]
        sequential: bool,
    },

    /// 走査対象ディレクトリを表示
    Roots {
        /// 走査ルート
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// メタデータ照会URLを設定
        #[arg(long)]
        set_lookup_url: Option<String>,

        /// 展開コマンドを設定
        #[arg(long)]
        set_extractor: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
