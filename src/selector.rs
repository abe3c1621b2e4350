//! 対話式の小程序選択
//!
//! 描画（[`SelectionUi`]）と選択結果の決定（[`decide`]）を分けている。

use crate::error::{Result, ScanError};
use crate::record::AppRecord;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

/// 選択画面で起きた操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    /// 指定行で確定
    Confirm(usize),
    /// 中断（Esc / q）
    Cancel,
}

/// 一覧を表示して操作を受け取る
pub trait SelectionUi {
    fn choose(&self, labels: &[String]) -> Result<SelectionAction>;
}

/// 表示ラベル: ニックネーム (AppID)
pub fn format_label(record: &AppRecord) -> String {
    let mut label = if record.nickname == record.wxid {
        record.wxid.clone()
    } else {
        format!("{} ({})", record.nickname, record.wxid)
    };

    if let Some(desc) = &record.description {
        label.push_str(&format!(" - {}", desc));
    }
    if record.error.is_some() {
        label.push_str(" ⚠ 照会失敗");
    }
    label
}

/// 操作から選択結果を決める
///
/// 範囲外の行や空リストでの確定は中断扱い。
pub fn decide(mut records: Vec<AppRecord>, action: SelectionAction) -> Option<AppRecord> {
    match action {
        SelectionAction::Confirm(idx) if idx < records.len() => Some(records.swap_remove(idx)),
        _ => None,
    }
}

/// 選択セッションを1回実行
pub fn run_selection<U: SelectionUi + ?Sized>(
    records: Vec<AppRecord>,
    ui: &U,
) -> Result<Option<AppRecord>> {
    if records.is_empty() {
        println!("⚠ 小程序が見つかりませんでした");
        return Ok(decide(records, SelectionAction::Cancel));
    }

    let labels: Vec<String> = records.iter().map(format_label).collect();
    let action = ui.choose(&labels)?;

    let selected = decide(records, action);
    match &selected {
        Some(r) => tracing::info!(wxid = %r.wxid, "選択を確定"),
        None => tracing::info!("選択を中断"),
    }
    Ok(selected)
}

/// dialoguerによる選択画面
pub struct DialoguerUi {
    prompt: String,
}

impl DialoguerUi {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }
}

impl Default for DialoguerUi {
    fn default() -> Self {
        Self::new("展開する小程序を選択 (Enter:確定 Esc/q:中断)")
    }
}

impl SelectionUi for DialoguerUi {
    fn choose(&self, labels: &[String]) -> Result<SelectionAction> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.prompt)
            .items(labels)
            .default(0)
            .interact_opt()
            .map_err(|e| ScanError::Selection(e.to_string()))?;

        Ok(choice.map_or(SelectionAction::Cancel, SelectionAction::Confirm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;

    struct FakeUi {
        action: SelectionAction,
        shown: Cell<usize>,
    }

    impl SelectionUi for FakeUi {
        fn choose(&self, labels: &[String]) -> Result<SelectionAction> {
            self.shown.set(labels.len());
            Ok(self.action)
        }
    }

    fn records() -> Vec<AppRecord> {
        ["wxaaaaaaaaaaaaaaaa", "wxbbbbbbbbbbbbbbbb", "wxcccccccccccccccc"]
            .iter()
            .map(|id| AppRecord::discovered(*id, PathBuf::from("/r").join(id)))
            .collect()
    }

    #[test]
    fn test_decide_confirm() {
        let chosen = decide(records(), SelectionAction::Confirm(1)).unwrap();
        assert_eq!(chosen.wxid, "wxbbbbbbbbbbbbbbbb");
    }

    #[test]
    fn test_decide_cancel() {
        assert!(decide(records(), SelectionAction::Cancel).is_none());
    }

    #[test]
    fn test_decide_out_of_range() {
        assert!(decide(records(), SelectionAction::Confirm(3)).is_none());
        assert!(decide(Vec::new(), SelectionAction::Confirm(0)).is_none());
    }

    #[test]
    fn test_run_selection_empty_skips_ui() {
        let ui = FakeUi { action: SelectionAction::Confirm(0), shown: Cell::new(usize::MAX) };
        let result = run_selection(Vec::new(), &ui).unwrap();
        assert!(result.is_none());
        assert_eq!(ui.shown.get(), usize::MAX);
    }

    #[test]
    fn test_run_selection_shows_all() {
        let ui = FakeUi { action: SelectionAction::Confirm(2), shown: Cell::new(0) };
        let result = run_selection(records(), &ui).unwrap();
        assert_eq!(ui.shown.get(), 3);
        assert_eq!(result.unwrap().wxid, "wxcccccccccccccccc");
    }

    #[test]
    fn test_format_label() {
        let mut record = AppRecord::discovered("wxaaaaaaaaaaaaaaaa", PathBuf::from("/r"));
        assert_eq!(format_label(&record), "wxaaaaaaaaaaaaaaaa");

        record.nickname = "テスト".into();
        assert_eq!(format_label(&record), "テスト (wxaaaaaaaaaaaaaaaa)");

        record.apply_error("x");
        assert!(format_label(&record).contains("wxaaaaaaaaaaaaaaaa"));
        assert!(format_label(&record).contains("照会失敗"));
    }
}
