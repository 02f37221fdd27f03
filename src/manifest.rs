//! マニフェスト（JobName / Pass）の構築

use serde::{Deserialize, Serialize};
use std::path::Path;

/// アップロードされた1ファイル。1リクエストの間だけ生存する
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 元のファイル名（拡張子込み）
    pub name: String,
    pub content: Vec<u8>,
}

/// CSVの1行。列名は出力仕様に合わせて `JobName` / `Pass`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// ファイル名（拡張子なし）
    #[serde(rename = "JobName")]
    pub job_name: String,
    /// 保存先の絶対パス
    #[serde(rename = "Pass")]
    pub pass: String,
}

impl ManifestRecord {
    pub fn new(file_name: &str, saved_path: &Path) -> Self {
        Self {
            job_name: job_name_of(file_name),
            pass: saved_path.to_string_lossy().into_owned(),
        }
    }
}

/// 最後のドットで分割した前半部分。ドットが無ければファイル名全体
pub fn job_name_of(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name.to_string(),
    }
}
