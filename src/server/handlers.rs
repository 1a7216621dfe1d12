//! Request handlers.
//!
//! Every handler catches its own errors and turns them into a generic
//! `{ "error": ... }` JSON reply with the status from `Error::status()`.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Buf;
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use warp::http::header;
use warp::hyper::Body;
use warp::multipart::{FormData, Part};
use warp::reply::{self, Reply, Response};

use crate::archive::{write_zip, ArchiveRecord};
use crate::error::{Error, Result};
use crate::fs::build_tree;
use crate::roster::extract_names;
use crate::server::AppContext;

/// Generic error reply body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct UploadResponse {
    student_names: Vec<String>,
    count: usize,
}

/// Body of `POST /create_folders`.
#[derive(Debug, Deserialize)]
pub struct CreateFoldersRequest {
    pub unit_title: Option<String>,
    #[serde(default)]
    pub student_names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CreateFoldersResponse {
    success: bool,
    folder_id: String,
    message: String,
}

fn error_reply(err: &Error) -> Response {
    warn!(error = %err, "request failed");
    let body = ErrorBody {
        error: err.to_string(),
    };
    reply::with_status(reply::json(&body), err.status()).into_response()
}

/// `POST /upload_roster`: extract student names from an uploaded spreadsheet.
pub async fn upload_roster(
    ctx: Arc<AppContext>,
    form: FormData,
) -> std::result::Result<Response, Infallible> {
    let result = async {
        let (filename, data) = read_file_part(form).await?;
        let names = extract_names(&data, &filename, &ctx.config.roster)?;
        info!(count = names.len(), file = %filename, "roster uploaded");
        Ok::<_, Error>(UploadResponse {
            count: names.len(),
            student_names: names,
        })
    }
    .await;

    Ok(match result {
        Ok(body) => reply::json(&body).into_response(),
        Err(e) => error_reply(&e),
    })
}

/// Find the `file` part of the form and collect its bytes.
async fn read_file_part(mut form: FormData) -> Result<(String, Vec<u8>)> {
    while let Some(part) = form
        .try_next()
        .await
        .map_err(|e| Error::Roster(format!("Multipart read failed: {}", e)))?
    {
        if part.name() != "file" {
            continue;
        }

        let filename = part.filename().unwrap_or("roster").to_string();
        let data = collect_part(part).await?;
        if data.is_empty() {
            return Err(Error::MissingInput("No file selected".to_string()));
        }
        return Ok((filename, data));
    }

    Err(Error::MissingInput("No file provided".to_string()))
}

async fn collect_part(part: Part) -> Result<Vec<u8>> {
    part.stream()
        .try_fold(Vec::new(), |mut acc, mut buf| async move {
            while buf.has_remaining() {
                let chunk = buf.chunk();
                acc.extend_from_slice(chunk);
                let len = chunk.len();
                buf.advance(len);
            }
            Ok(acc)
        })
        .await
        .map_err(|e| Error::Roster(format!("Upload read failed: {}", e)))
}

/// `POST /create_folders`: build the folder tree, zip it, register it.
pub async fn create_folders(
    ctx: Arc<AppContext>,
    req: CreateFoldersRequest,
) -> std::result::Result<Response, Infallible> {
    Ok(match build_archive(&ctx, req) {
        Ok(body) => reply::json(&body).into_response(),
        Err(e) => error_reply(&e),
    })
}

fn build_archive(ctx: &AppContext, req: CreateFoldersRequest) -> Result<CreateFoldersResponse> {
    let unit_title = req
        .unit_title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| Error::MissingInput("Unit title is required".to_string()))?;

    let workdir = tempfile::tempdir()?;
    let unit_path = build_tree(
        workdir.path(),
        &unit_title,
        &req.student_names,
        &ctx.config.folders,
    )?;

    let unit_name = unit_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Archive("Unit folder name is not valid UTF-8".to_string()))?
        .to_string();
    let zip_name = format!("{}.zip", unit_name);
    let zip_path = workdir.path().join(&zip_name);
    write_zip(&unit_path, &zip_path)?;

    let count = req.student_names.len();
    let folder_id = ctx
        .store
        .insert(ArchiveRecord::new(workdir, zip_path, zip_name));
    info!(%folder_id, unit = %unit_name, students = count, "archive created");

    Ok(CreateFoldersResponse {
        success: true,
        folder_id,
        message: format!("Created assessment folders for {} student(s)", count),
    })
}

/// `GET /download_folders/<id>`: serve a registered archive.
pub async fn download_folders(
    ctx: Arc<AppContext>,
    folder_id: String,
) -> std::result::Result<Response, Infallible> {
    Ok(match serve_archive(&ctx, &folder_id).await {
        Ok(resp) => resp,
        Err(e) => error_reply(&e),
    })
}

async fn serve_archive(ctx: &AppContext, folder_id: &str) -> Result<Response> {
    let (zip_path, download_name) = ctx
        .store
        .get(folder_id)
        .ok_or_else(|| Error::ArchiveNotFound(folder_id.to_string()))?;

    let bytes = tokio::fs::read(&zip_path).await?;

    warp::http::Response::builder()
        .header(header::CONTENT_TYPE, "application/zip")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_name),
        )
        .body(Body::from(bytes))
        .map_err(|e| Error::Archive(e.to_string()))
}
