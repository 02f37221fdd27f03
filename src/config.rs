use crate::error::{CsvMakerError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 保存先フォルダとCSV出力先フォルダの設定。
///
/// 起動時に1回読み込み、実行中は不変。CSV出力先だけは
/// 画面の入力欄でリクエスト単位に上書きできる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// アップロードされたファイルのコピー先（絶対パス）
    pub save_dir: PathBuf,
    /// CSVファイルの出力先（絶対パス）
    pub csv_output_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Self::default_config()
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CsvMakerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("csvmaker").join("config.json"))
    }

    /// デフォルト: ドキュメントフォルダ配下の `csvmaker/uploads` と `csvmaker/csv`
    fn default_config() -> Result<Self> {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| CsvMakerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(Self {
            save_dir: base.join("csvmaker").join("uploads"),
            csv_output_dir: base.join("csvmaker").join("csv"),
        })
    }

    /// 両フォルダとも絶対パスであることを確認する
    pub fn validate(&self) -> Result<()> {
        if !self.save_dir.is_absolute() {
            return Err(CsvMakerError::Config(format!(
                "保存先は絶対パスで指定してください: {}",
                self.save_dir.display()
            )));
        }
        if !self.csv_output_dir.is_absolute() {
            return Err(CsvMakerError::Config(format!(
                "CSV出力先は絶対パスで指定してください: {}",
                self.csv_output_dir.display()
            )));
        }
        Ok(())
    }

    pub fn set_save_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.save_dir = dir;
        self.validate()?;
        self.save()
    }

    pub fn set_csv_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.csv_output_dir = dir;
        self.validate()?;
        self.save()
    }
}
