//! Web画面（axum）。単一画面のアップロードフォームと結果ページを提供する

mod pages;

use crate::config::Config;
use crate::error::CsvMakerError;
use crate::manifest::UploadedFile;
use crate::pipeline::{self, RunSummary};
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info};

struct AppState {
    config: Config,
    /// 直近の実行結果。ダウンロードでディスクを読み直さないために保持する
    last_run: Mutex<Option<RunSummary>>,
}

/// ルーティングと共有状態を組み立てる
pub fn app(config: Config) -> Router {
    let state = Arc::new(AppState {
        config,
        last_run: Mutex::new(None),
    });

    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/download", get(download))
        .with_state(state)
}

pub async fn serve(config: Config, port: u16) -> crate::error::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        save_dir = %config.save_dir.display(),
        csv_output_dir = %config.csv_output_dir.display(),
        "Web画面を起動しました"
    );
    axum::serve(listener, app(config)).await?;
    Ok(())
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(pages::index_page(&state.config))
}

/// アップロードフォームの受け口。`files` パート（複数可）と
/// `csv_output_dir` パートを受け取り、パイプラインを1回実行する
async fn upload(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let mut files = Vec::new();
    let mut csv_output_dir = state.config.csv_output_dir.clone();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_page(
                    StatusCode::BAD_REQUEST,
                    &format!("アップロードの読み取りに失敗しました: {e}"),
                );
            }
        };

        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("csv_output_dir") => match field.text().await {
                Ok(text) if !text.trim().is_empty() => {
                    csv_output_dir = PathBuf::from(text.trim());
                }
                Ok(_) => {}
                Err(e) => {
                    return error_page(
                        StatusCode::BAD_REQUEST,
                        &format!("CSV出力先の読み取りに失敗しました: {e}"),
                    );
                }
            },
            Some("files") => {
                let name = field.file_name().unwrap_or_default().to_string();
                // ファイル未選択のまま送信されると空のパートが届く
                if name.is_empty() {
                    continue;
                }
                match field.bytes().await {
                    Ok(bytes) => files.push(UploadedFile {
                        name,
                        content: bytes.to_vec(),
                    }),
                    Err(e) => {
                        return error_page(
                            StatusCode::BAD_REQUEST,
                            &format!("ファイルの受信に失敗しました: {e}"),
                        );
                    }
                }
            }
            _ => {}
        }
    }

    let mut config = state.config.clone();
    config.csv_output_dir = csv_output_dir;
    // 入力欄からの上書きも絶対パスの制約を満たすこと
    if let Err(e) = config.validate() {
        return error_page(StatusCode::BAD_REQUEST, &e.to_string());
    }

    // ファイル書き込みは同期I/Oなのでブロッキングタスクで実行する
    let result = tokio::task::spawn_blocking(move || pipeline::run(&files, &config)).await;

    match result {
        Ok(Ok(summary)) => {
            let page = pages::result_page(&summary);
            *state
                .last_run
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(summary);
            Html(page).into_response()
        }
        Ok(Err(CsvMakerError::NoFiles)) => {
            Html(pages::info_page("ファイルをアップロードしてください")).into_response()
        }
        Ok(Err(e)) => {
            error!("パイプラインが失敗しました: {e}");
            error_page(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
        Err(e) => {
            error!("タスクの実行に失敗しました: {e}");
            error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "内部エラーが発生しました",
            )
        }
    }
}

/// 直近の実行で生成したCSVを `text/csv` として返す
async fn download(State(state): State<Arc<AppState>>) -> Response {
    let last = state
        .last_run
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();

    match last {
        Some(run) => (
            StatusCode::OK,
            [
                (
                    header::CONTENT_TYPE,
                    "text/csv; charset=utf-8".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", run.csv_file_name),
                ),
            ],
            run.csv_bytes,
        )
            .into_response(),
        None => error_page(StatusCode::NOT_FOUND, "まだCSVが作成されていません"),
    }
}

fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(pages::error_page(message))).into_response()
}
