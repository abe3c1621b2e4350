//! 走査対象ルートの解決
//!
//! 優先順:
//! 1. `~/Documents/WeChat Files/Applet`
//! 2. `~/AppData/Roaming/Tencent/xwechat/radium/users/<userId>/applet/packages`（ユーザーごと）
//! 3. `~/AppData/Roaming/Tencent/xwechat/radium/Applet/packages`

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const DOCUMENTS_APPLET: &[&str] = &["Documents", "WeChat Files", "Applet"];
const RADIUM: &[&str] = &["AppData", "Roaming", "Tencent", "xwechat", "radium"];
const USER_PACKAGES: &[&str] = &["applet", "packages"];
const DEFAULT_PACKAGES: &[&str] = &["Applet", "packages"];

fn join_all(base: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(base.to_path_buf(), |p, part| p.join(part))
}

/// ホームディレクトリ（取得できなければ空パス＝相対パスで組み立てる）
pub fn home_base() -> PathBuf {
    dirs::home_dir().unwrap_or_default()
}

/// 既定のフォールバックルート
pub fn default_root(home: &Path) -> PathBuf {
    join_all(&join_all(home, RADIUM), DEFAULT_PACKAGES)
}

/// マルチユーザー親ディレクトリ
pub fn users_dir(home: &Path) -> PathBuf {
    join_all(home, RADIUM).join("users")
}

/// 走査ルート一覧を解決する
///
/// `root_override` があればそれのみを返す。失敗はしない。
pub fn resolve_roots(root_override: Option<&Path>, home: &Path) -> Vec<PathBuf> {
    if let Some(root) = root_override {
        return vec![root.to_path_buf()];
    }

    let mut candidates = vec![join_all(home, DOCUMENTS_APPLET)];

    let users = users_dir(home);
    candidates.extend(
        list_user_dirs(&users)
            .into_iter()
            .map(|user| join_all(&user, USER_PACKAGES)),
    );

    candidates.push(default_root(home));

    let roots = dedup_preserving_order(candidates);
    tracing::debug!(count = roots.len(), "走査ルートを解決");
    roots
}

/// ユーザーディレクトリ一覧（読めなければ空）
fn list_user_dirs(users: &Path) -> Vec<PathBuf> {
    WalkDir::new(users)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(path = %users.display(), error = %err, "ユーザーディレクトリを読めません");
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

/// 同一パス文字列の重複を除去（先勝ち、順序維持）
pub fn dedup_preserving_order(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen: HashSet<OsString> = HashSet::new();
    candidates
        .into_iter()
        .filter(|p| seen.insert(p.as_os_str().to_os_string()))
        .collect()
}
