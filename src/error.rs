use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvMakerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダの作成に失敗しました ({path}): {source}")]
    DirCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ファイルの書き込みに失敗しました ({name}): {source}")]
    FileWrite {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV出力エラー: {0}")]
    CsvExport(#[from] csv::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("ファイルがアップロードされていません")]
    NoFiles,
}

pub type Result<T> = std::result::Result<T, CsvMakerError>;
