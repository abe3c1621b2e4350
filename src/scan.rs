//! scanコマンド本体: 解決 → 走査 → 照会 → 選択 → 引き渡し

use crate::enricher::{self, LookupMode};
use crate::error::Result;
use crate::handoff::{self, Extractor, HandoffOutcome};
use crate::lookup::MetadataLookup;
use crate::roots;
use crate::scanner::{self, DirLister};
use crate::selector::{self, SelectionUi};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub root: Option<PathBuf>,
    /// 出力ディレクトリ `<AppID>` の親
    pub output_base: PathBuf,
    pub lookup_mode: LookupMode,
}

/// 外部とのやり取り（テストでは差し替える）
pub struct Collaborators<'a> {
    pub lister: &'a dyn DirLister,
    pub lookup: &'a dyn MetadataLookup,
    pub ui: &'a dyn SelectionUi,
    pub extractor: &'a dyn Extractor,
}

pub fn run_scan(
    options: &ScanOptions,
    home: &Path,
    deps: &Collaborators<'_>,
    progress: &ProgressBar,
) -> Result<HandoffOutcome> {
    let candidates = roots::resolve_roots(options.root.as_deref(), home);
    println!("[1/4] {}箇所のディレクトリを走査中...", candidates.len());

    let records = match scanner::scan_roots(&candidates, deps.lister) {
        scanner::ScanOutcome::Found { root, records } => {
            println!("✔ {}件の小程序を検出: {}\n", records.len(), root.display());
            records
        }
        scanner::ScanOutcome::Exhausted => Vec::new(),
    };

    println!("[2/4] メタデータを照会中...");
    let enriched = enricher::enrich(records, deps.lookup, options.lookup_mode, progress);

    println!("[3/4] 小程序を選択");
    let selected = selector::run_selection(enriched, deps.ui)?;

    if selected.is_some() {
        println!("[4/4] 展開中...");
    }
    handoff::handoff(selected, deps.extractor, &options.output_base)
}
