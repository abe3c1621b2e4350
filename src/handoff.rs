//! 選択確定後の展開呼び出しと detail.json 出力

use crate::error::{Result, ScanError};
use crate::record::AppRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DETAIL_FILE_NAME: &str = "detail.json";

/// パッケージ展開（1操作のみ）
pub trait Extractor {
    fn extract(&self, root: &Path, output: &Path) -> Result<()>;
}

/// 外部コマンドで展開: `<program> [args..] unpack --root <root> --output <output>`
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Extractor for CommandExtractor {
    fn extract(&self, root: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg("unpack")
            .arg("--root")
            .arg(root)
            .arg("--output")
            .arg(output)
            .status()
            .map_err(|e| ScanError::Extraction(format!("{} の実行に失敗: {}", self.program, e)))?;

        if !status.success() {
            return Err(ScanError::Extraction(format!(
                "{} failed (code {:?})",
                self.program,
                status.code()
            )));
        }
        Ok(())
    }
}

/// 引き渡し結果
#[derive(Debug)]
pub enum HandoffOutcome {
    /// 選択中断（何もしていない）
    Cancelled,
    Completed {
        detail_path: PathBuf,
        /// 展開処理が失敗した場合の内容
        extraction_error: Option<String>,
    },
}

/// 選択結果を展開処理へ渡し、detail.json を書き出す
///
/// 出力先は `<output_base>/<AppID>`。
pub fn handoff<E: Extractor + ?Sized>(
    selected: Option<AppRecord>,
    extractor: &E,
    output_base: &Path,
) -> Result<HandoffOutcome> {
    let Some(record) = selected else {
        return Ok(HandoffOutcome::Cancelled);
    };

    let output_dir = output_dir(output_base, &record.wxid);

    // 展開の成否にかかわらず detail.json は書く
    let extraction_error = match extractor.extract(&record.location, &output_dir) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(wxid = %record.wxid, error = %e, "展開処理が失敗");
            Some(e.to_string())
        }
    };

    std::fs::create_dir_all(&output_dir)?;
    let detail_path = output_dir.join(DETAIL_FILE_NAME);
    write_private(&detail_path, record.to_json()?.as_bytes())?;
    tracing::info!(path = %detail_path.display(), "detail.json を出力");

    Ok(HandoffOutcome::Completed {
        detail_path,
        extraction_error,
    })
}

/// 出力ディレクトリ。基準が `.` か空ならAppIDだけの相対パス
pub fn output_dir(output_base: &Path, wxid: &str) -> PathBuf {
    if output_base.as_os_str().is_empty() || output_base == Path::new(".") {
        PathBuf::from(wxid)
    } else {
        output_base.join(wxid)
    }
}

/// 所有者のみ読み書き可能なファイルとして上書き保存
fn write_private(path: &Path, content: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // 既存ファイルはmodeが適用されないため再設定
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    Ok(())
}
