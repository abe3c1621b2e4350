//! レコードへのメタデータ付与
//!
//! 照会失敗はレコード単位で記録し、処理は止めない。出力順は入力順と同じ。

use crate::lookup::MetadataLookup;
use crate::record::AppRecord;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// 照会モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupMode {
    /// 並列照会（順序は維持）
    #[default]
    Parallel,
    Sequential,
}

pub fn enrich<L: MetadataLookup + ?Sized>(
    records: Vec<AppRecord>,
    lookup: &L,
    mode: LookupMode,
    progress: &ProgressBar,
) -> Vec<AppRecord> {
    progress.set_length(records.len() as u64);

    let enriched = match mode {
        LookupMode::Parallel => records
            .into_par_iter()
            .map(|record| enrich_one(record, lookup, progress))
            .collect(),
        LookupMode::Sequential => records
            .into_iter()
            .map(|record| enrich_one(record, lookup, progress))
            .collect(),
    };

    progress.finish_and_clear();
    enriched
}

fn enrich_one<L: MetadataLookup + ?Sized>(
    mut record: AppRecord,
    lookup: &L,
    progress: &ProgressBar,
) -> AppRecord {
    match lookup.query(&record.wxid) {
        Ok(meta) => record.apply_meta(meta),
        Err(e) => {
            tracing::warn!(wxid = %record.wxid, error = %e, "メタデータ照会に失敗");
            record.apply_error(e);
        }
    }
    progress.inc(1);
    record
}
