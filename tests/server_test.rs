//! Web画面（アップロード・ダウンロード）のハンドラテスト

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use csvmaker::config::Config;
use csvmaker::export::csv::UTF8_BOM;
use csvmaker::server;
use tempfile::tempdir;
use tower::ServiceExt;

const BOUNDARY: &str = "csvmaker-test-boundary";

fn test_config(root: &std::path::Path) -> Config {
    Config {
        save_dir: root.join("save"),
        csv_output_dir: root.join("csv"),
    }
}

/// `csv_output_dir` 1つと `files` 1つのmultipartボディを組み立てる
fn multipart_body(csv_output_dir: &str, file_name: &str, content: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"csv_output_dir\"\r\n\r\n\
         {csv_output_dir}\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"files\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    )
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("リクエストの構築に失敗")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("レスポンスボディの読み取りに失敗");
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn test_upload_copies_file_and_renders_preview() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = test_config(dir.path());
    let csv_dir = config.csv_output_dir.display().to_string();
    let app = server::app(config);

    let response = app
        .oneshot(upload_request(multipart_body(&csv_dir, "report.pdf", "dummy")))
        .await
        .expect("アップロードの実行に失敗");

    assert_eq!(response.status(), StatusCode::OK);

    let saved = dir.path().join("save").join("report.pdf");
    assert!(saved.exists(), "コピー先にファイルが無い");
    assert_eq!(
        std::fs::read(&saved).expect("コピー結果の読み込みに失敗"),
        b"dummy"
    );

    let csv_count = std::fs::read_dir(dir.path().join("csv"))
        .expect("CSV出力先の読み取りに失敗")
        .count();
    assert_eq!(csv_count, 1, "CSVファイルがちょうど1つでない");

    let html = body_text(response).await;
    assert!(html.contains("処理が完了しました"), "成功メッセージが無い: {html}");
    assert!(html.contains("<td>report</td>"), "プレビューにJobNameが無い: {html}");
}

#[tokio::test]
async fn test_relative_csv_output_dir_is_rejected() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = test_config(dir.path());
    let app = server::app(config);

    let response = app
        .oneshot(upload_request(multipart_body("relative/csv", "a.txt", "x")))
        .await
        .expect("アップロードの実行に失敗");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(
        !dir.path().join("save").join("a.txt").exists(),
        "不正な設定なのにファイルがコピーされた"
    );

    let html = body_text(response).await;
    assert!(html.contains("絶対パス"), "エラーメッセージが無い: {html}");
}

#[tokio::test]
async fn test_download_serves_latest_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = test_config(dir.path());
    let csv_dir = config.csv_output_dir.display().to_string();
    let app = server::app(config);

    let upload = app
        .clone()
        .oneshot(upload_request(multipart_body(&csv_dir, "report.pdf", "dummy")))
        .await
        .expect("アップロードの実行に失敗");
    assert_eq!(upload.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/download")
                .body(Body::empty())
                .expect("リクエストの構築に失敗"),
        )
        .await
        .expect("ダウンロードの実行に失敗");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"), "MIMEが不正: {content_type}");
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        disposition.contains("filelist_"),
        "ダウンロード名が生成ファイル名でない: {disposition}"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("レスポンスボディの読み取りに失敗");
    assert_eq!(&bytes[..3], UTF8_BOM, "先頭3バイトがBOMでない");
}

#[tokio::test]
async fn test_download_before_any_run_is_not_found() {
    let dir = tempdir().expect("Failed to create temp dir");
    let app = server::app(test_config(dir.path()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/download")
                .body(Body::empty())
                .expect("リクエストの構築に失敗"),
        )
        .await
        .expect("ダウンロードの実行に失敗");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
