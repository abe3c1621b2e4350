//! 小程序パッケージの走査
//!
//! ルートを優先順に調べ、最初に1件以上見つかったルートの結果だけを採用する。

mod lister;

pub use lister::{DirEntryInfo, DirLister, FsLister};

use crate::record::{extract_app_id, AppRecord};
use std::path::{Path, PathBuf};

/// 走査結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// `root` で見つかった
    Found { root: PathBuf, records: Vec<AppRecord> },
    /// 全ルートを調べても見つからなかった
    Exhausted,
}

impl ScanOutcome {
    pub fn into_records(self) -> Vec<AppRecord> {
        match self {
            ScanOutcome::Found { records, .. } => records,
            ScanOutcome::Exhausted => Vec::new(),
        }
    }
}

/// ルート一覧を順に走査
pub fn scan_roots<L: DirLister + ?Sized>(roots: &[PathBuf], lister: &L) -> ScanOutcome {
    for root in roots {
        let entries = match lister.list(root) {
            Ok(entries) => entries,
            Err(e) => {
                // 存在しない・権限なしは次のルートへ
                tracing::debug!(root = %root.display(), error = %e, "ルートをスキップ");
                continue;
            }
        };

        let records = collect_records(root, &entries);
        if !records.is_empty() {
            tracing::info!(root = %root.display(), count = records.len(), "小程序を検出");
            return ScanOutcome::Found {
                root: root.clone(),
                records,
            };
        }
    }

    tracing::info!("小程序が見つかりません");
    ScanOutcome::Exhausted
}

/// ディレクトリエントリのうちAppIDを含むものをレコード化
fn collect_records(root: &Path, entries: &[DirEntryInfo]) -> Vec<AppRecord> {
    entries
        .iter()
        .filter(|e| e.is_dir)
        .filter_map(|e| {
            extract_app_id(&e.name)
                .map(|wxid| AppRecord::discovered(wxid, root.join(&e.name)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;

    /// 呼び出しを記録する偽リスター
    struct FakeLister {
        dirs: HashMap<PathBuf, Vec<DirEntryInfo>>,
        calls: RefCell<Vec<PathBuf>>,
    }

    impl FakeLister {
        fn new(dirs: Vec<(&str, Vec<DirEntryInfo>)>) -> Self {
            Self {
                dirs: dirs.into_iter().map(|(k, v)| (PathBuf::from(k), v)).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DirLister for FakeLister {
        fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
            self.calls.borrow_mut().push(dir.to_path_buf());
            self.dirs
                .get(dir)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    fn dir(name: &str) -> DirEntryInfo {
        DirEntryInfo { name: name.into(), is_dir: true }
    }

    fn file(name: &str) -> DirEntryInfo {
        DirEntryInfo { name: name.into(), is_dir: false }
    }

    #[test]
    fn test_first_non_empty_root_wins() {
        let lister = FakeLister::new(vec![
            ("/a", vec![dir("wx0123456789abcdef")]),
            ("/b", vec![dir("wxfedcba9876543210")]),
        ]);
        let roots = vec![PathBuf::from("/a"), PathBuf::from("/b")];

        let outcome = scan_roots(&roots, &lister);
        let records = outcome.clone().into_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].wxid, "wx0123456789abcdef");
        assert_eq!(*lister.calls.borrow(), vec![PathBuf::from("/a")]);
        assert!(matches!(outcome, ScanOutcome::Found { root, .. } if root == PathBuf::from("/a")));
    }

    #[test]
    fn test_unreadable_and_empty_roots_are_skipped() {
        let lister = FakeLister::new(vec![
            ("/empty", vec![dir("plainfolder"), file("wx0123456789abcdef")]),
            ("/c", vec![dir("wx0123456789abcdef_extra"), dir("other")]),
        ]);
        let roots = vec![
            PathBuf::from("/missing"),
            PathBuf::from("/empty"),
            PathBuf::from("/c"),
        ];

        let records = scan_roots(&roots, &lister).into_records();

        assert_eq!(lister.calls.borrow().len(), 3);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].wxid, "wx0123456789abcdef");
        assert_eq!(records[0].location, PathBuf::from("/c/wx0123456789abcdef_extra"));
        assert_eq!(records[0].nickname, "wx0123456789abcdef");
    }

    #[test]
    fn test_exhausted() {
        let lister = FakeLister::new(vec![("/a", vec![dir("plainfolder")])]);
        let outcome = scan_roots(&[PathBuf::from("/a"), PathBuf::from("/b")], &lister);
        assert_eq!(outcome, ScanOutcome::Exhausted);
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_listing_order_is_preserved() {
        let lister = FakeLister::new(vec![(
            "/a",
            vec![dir("wxbbbbbbbbbbbbbbbb"), dir("wxaaaaaaaaaaaaaaaa")],
        )]);
        let records = scan_roots(&[PathBuf::from("/a")], &lister).into_records();
        assert_eq!(records[0].wxid, "wxbbbbbbbbbbbbbbbb");
        assert_eq!(records[1].wxid, "wxaaaaaaaaaaaaaaaa");
    }
}
