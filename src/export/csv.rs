//! マニフェストをBOM付きUTF-8のCSVに書き出す

use crate::error::{CsvMakerError, Result};
use crate::manifest::ManifestRecord;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Excel等がシステムロケールの文字コードと誤認しないためのBOM
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// `filelist_YYYYMMDD_HHMMSS.csv`（秒精度、辞書順ソート=作成順）
pub fn output_file_name(now: DateTime<Local>) -> String {
    format!("filelist_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// BOM + ヘッダ行 `JobName,Pass` + 1ファイル1行のバイト列を生成する。
/// カンマ・引用符・改行を含む値は標準のCSV規則で引用される
pub fn to_csv_bytes(records: &[ManifestRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for record in records {
        wtr.serialize(record)?;
    }
    let body = wtr
        .into_inner()
        .map_err(|e| CsvMakerError::Io(e.into_error()))?;

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// CSVを `<output_dir>/<file_name>` へ書き出し、パスとバイト列を返す。
/// バイト列はプレビューとダウンロードでディスクを読み直さずに再利用する
pub fn write_manifest(
    records: &[ManifestRecord],
    output_dir: &Path,
    file_name: &str,
) -> Result<(PathBuf, Vec<u8>)> {
    let bytes = to_csv_bytes(records)?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, &bytes)?;
    Ok((path, bytes))
}
