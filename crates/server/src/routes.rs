use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};

use vouchex_export::{write_workbook, ExportError, REPORT_FILE_NAME, XLSX_CONTENT_TYPE};
use vouchex_import::{pipeline, TallyError};

/// Generous cap for a single day-book export.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/upload", post(upload))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(MAX_UPLOAD_BYTES)),
        )
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn health() -> &'static str {
    "OK"
}

/// Accepts one uploaded export and responds with the generated workbook as
/// a download, or an `{"error": ...}` body on failure. Each request owns its
/// bytes end to end; nothing is shared between uploads.
async fn upload(mut multipart: Multipart) -> Result<Response, ApiError> {
    let mut file_part: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            file_part = Some((file_name, data.to_vec()));
            break;
        }
    }

    let (file_name, data) = file_part.ok_or(ApiError::MissingFile)?;
    if file_name.is_empty() {
        return Err(ApiError::EmptyFileName);
    }

    let table = match pipeline::process(&data) {
        Ok(table) => table,
        Err(e) => {
            warn!("Failed to process {}: {}", file_name, e);
            return Err(e.into());
        }
    };
    info!(
        "Extracted {} receipt vouchers from {}",
        table.row_count(),
        file_name
    );

    let workbook = write_workbook(&table)?;
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        workbook,
    )
        .into_response())
}

#[derive(Error, Debug)]
enum ApiError {
    #[error("No file part in the request")]
    MissingFile,
    #[error("No selected file")]
    EmptyFileName,
    #[error("Malformed upload body: {0}")]
    Upload(#[from] MultipartError),
    #[error(transparent)]
    Process(#[from] TallyError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::EmptyFileName | ApiError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Process(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
