//! 画面のHTML組み立て。テンプレートエンジンは使わず `format!` で構築する

use crate::config::Config;
use crate::pipeline::RunSummary;

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 860px; margin: 2em auto; padding: 0 1em; color: #222; }\
h1 { font-size: 1.5em; }\
h2 { font-size: 1.1em; margin-top: 1.5em; }\
input[type=text] { width: 100%; max-width: 540px; padding: 0.3em; }\
button { padding: 0.5em 1.5em; font-size: 1em; cursor: pointer; }\
table { border-collapse: collapse; margin-top: 1em; }\
th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\
th { background: #f5f5f5; }\
.success { background: #e6f4e6; border: 1px solid #8c8; padding: 1em; white-space: pre-line; }\
.info { background: #e8f0fe; border: 1px solid #89c; padding: 1em; }\
.error { background: #fdecea; border: 1px solid #c88; padding: 1em; }\
.caption { color: #888; font-size: 0.85em; }\
a.download { display: inline-block; margin-top: 1em; }\
";

/// HTML特殊文字のエスケープ
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>ファイルコピー＆CSV出力ツール</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n<hr>\n<p class=\"caption\">ファイルコピー＆CSV出力ツール v1.0</p>\n\
         </body>\n</html>\n"
    )
}

pub fn index_page(config: &Config) -> String {
    let save_dir = escape(&config.save_dir.display().to_string());
    let csv_dir = escape(&config.csv_output_dir.display().to_string());
    layout(&format!(
        r#"<h1>ファイルコピー＆CSV出力ツール</h1>
<p>ファイルをアップロードすると、指定フォルダにコピーして一覧をCSVに出力します。</p>
<form action="/upload" method="post" enctype="multipart/form-data"
      onsubmit="document.getElementById('run').disabled = true;">
  <h2>設定</h2>
  <label>CSV出力先（絶対パス）<br>
    <input type="text" name="csv_output_dir" value="{csv_dir}">
  </label>
  <h2>ファイルをアップロード（複数選択可）</h2>
  <input type="file" name="files" multiple>
  <p><button id="run" type="submit">ファイルをコピーしてCSV出力</button></p>
</form>
<details>
  <summary>使い方</summary>
  <ol>
    <li>「ファイルをアップロード」で処理したいファイルを選択します（複数可）</li>
    <li>「ファイルをコピーしてCSV出力」ボタンをクリックします</li>
    <li>アップロードされたファイルは <code>{save_dir}</code> にコピーされます</li>
    <li>ファイル一覧のCSVファイルはCSV出力先フォルダに出力されます</li>
  </ol>
  <p>出力されるCSVファイル形式:</p>
  <ul>
    <li><b>JobName</b>: ファイル名（拡張子なし）</li>
    <li><b>Pass</b>: ファイルの絶対パス</li>
  </ul>
</details>"#
    ))
}

pub fn result_page(summary: &RunSummary) -> String {
    let mut rows = String::new();
    for record in &summary.manifest {
        rows.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td></tr>\n",
            escape(&record.job_name),
            escape(&record.pass)
        ));
    }

    layout(&format!(
        r#"<h1>ファイルコピー＆CSV出力ツール</h1>
<div class="success">処理が完了しました！
- {copied}個のファイルを '{save_dir}' にコピーしました
- CSVファイルを '{csv_path}' に出力しました</div>
<h2>ファイル一覧プレビュー</h2>
<table>
  <thead><tr><th>JobName</th><th>Pass</th></tr></thead>
  <tbody>
{rows}  </tbody>
</table>
<a class="download" href="/download" download="{csv_file_name}">CSVファイルをダウンロード</a>
<p><a href="/">戻る</a></p>"#,
        copied = summary.copied,
        save_dir = escape(&summary.save_dir.display().to_string()),
        csv_path = escape(&summary.csv_path.display().to_string()),
        csv_file_name = escape(&summary.csv_file_name),
    ))
}

pub fn info_page(message: &str) -> String {
    layout(&format!(
        "<h1>ファイルコピー＆CSV出力ツール</h1>\n<div class=\"info\">{}</div>\n<p><a href=\"/\">戻る</a></p>",
        escape(message)
    ))
}

pub fn error_page(message: &str) -> String {
    layout(&format!(
        "<h1>ファイルコピー＆CSV出力ツール</h1>\n<div class=\"error\">{}</div>\n<p><a href=\"/\">戻る</a></p>",
        escape(message)
    ))
}
