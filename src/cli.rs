use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvmaker")]
#[command(about = "ファイルコピー＆CSV出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Web画面を起動
    Serve {
        /// 待ち受けポート
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// ファイルの保存先フォルダ（設定ファイルより優先）
        #[arg(long)]
        save_dir: Option<PathBuf>,

        /// CSV出力先フォルダ（設定ファイルより優先）
        #[arg(long)]
        csv_output_dir: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 保存先フォルダを設定
        #[arg(long)]
        set_save_dir: Option<PathBuf>,

        /// CSV出力先フォルダを設定
        #[arg(long)]
        set_csv_output_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
