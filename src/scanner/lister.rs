use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// ディレクトリ直下のエントリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

/// ディレクトリ一覧の取得
pub trait DirLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;
}

/// 実ファイルシステム（ファイル名順）
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)  // 直下のみ
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: entry.file_type().is_dir(),
            });
        }

        Ok(entries)
    }
}
