//! アップロード → コピー → マニフェスト → CSV出力 のパイプライン

use crate::config::Config;
use crate::error::{CsvMakerError, Result};
use crate::export;
use crate::manifest::{ManifestRecord, UploadedFile};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

/// 1回の実行結果。プレビュー表示とダウンロードに再利用する
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// コピーしたファイル数
    pub copied: usize,
    pub save_dir: PathBuf,
    pub csv_path: PathBuf,
    pub csv_file_name: String,
    pub csv_bytes: Vec<u8>,
    /// 入力順のマニフェスト
    pub manifest: Vec<ManifestRecord>,
}

/// フォルダが無ければ途中のフォルダごと作成する。
/// 同名の通常ファイルが既にある場合は作成エラーになる
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|source| CsvMakerError::DirCreate {
            path: path.display().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// 1ファイルを保存先へそのまま書き込む（同名ファイルは上書き）。
/// 書き込んだ絶対パスを返す
fn copy_file(file: &UploadedFile, save_dir: &Path) -> Result<PathBuf> {
    let save_path = save_dir.join(&file.name);
    std::fs::write(&save_path, &file.content).map_err(|source| CsvMakerError::FileWrite {
        name: file.name.clone(),
        source,
    })?;
    Ok(save_path)
}

/// パイプライン本体。保存先の確保 → 全ファイルのコピー →
/// CSV出力先の確保 → CSV書き出し を順に実行する。
///
/// 空の入力ではファイルシステムに一切書き込まず `NoFiles` を返す。
/// 保存先フォルダを作れない場合はコピー前に中断する。
/// 1ファイルでも書き込みに失敗したらバッチ全体を中断し、
/// 部分的なマニフェストは作らない
pub fn run(files: &[UploadedFile], config: &Config) -> Result<RunSummary> {
    if files.is_empty() {
        return Err(CsvMakerError::NoFiles);
    }

    ensure_dir(&config.save_dir)?;

    let mut manifest = Vec::with_capacity(files.len());
    for file in files {
        let save_path = copy_file(file, &config.save_dir)?;
        manifest.push(ManifestRecord::new(&file.name, &save_path));
    }

    ensure_dir(&config.csv_output_dir)?;

    let csv_file_name = export::csv::output_file_name(Local::now());
    let (csv_path, csv_bytes) =
        export::csv::write_manifest(&manifest, &config.csv_output_dir, &csv_file_name)?;

    info!(
        copied = files.len(),
        csv = %csv_path.display(),
        "パイプライン完了"
    );

    Ok(RunSummary {
        copied: files.len(),
        save_dir: config.save_dir.clone(),
        csv_path,
        csv_file_name,
        csv_bytes,
        manifest,
    })
}
