//! ファイルコピー＆CSV出力ツール
//!
//! アップロードされたファイルを固定の保存先フォルダへコピーし、
//! ファイル名（拡張子なし）と保存先の絶対パスの一覧を
//! BOM付きUTF-8のCSVとして出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod manifest;
pub mod pipeline;
pub mod server;
