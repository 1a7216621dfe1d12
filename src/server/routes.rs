//! warp route filters.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::error;
use warp::http::StatusCode;
use warp::{reply, Filter, Rejection, Reply};

use crate::server::handlers::{self, ErrorBody};
use crate::server::AppContext;

/// Single-page frontend, embedded at build time.
const INDEX_HTML: &str = include_str!("../../static/index.html");

fn with_ctx(
    ctx: Arc<AppContext>,
) -> impl Filter<Extract = (Arc<AppContext>,), Error = Infallible> + Clone {
    warp::any().map(move || ctx.clone())
}

/// Build the full route tree: frontend, upload, create, download.
pub fn routes(
    ctx: Arc<AppContext>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let max_upload = ctx.config.server.max_upload_bytes;

    let index = warp::path::end()
        .and(warp::get())
        .map(|| reply::html(INDEX_HTML));

    let upload = warp::path("upload_roster")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_ctx(ctx.clone()))
        .and(warp::multipart::form().max_length(max_upload))
        .and_then(handlers::upload_roster);

    let create = warp::path("create_folders")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_ctx(ctx.clone()))
        .and(warp::body::json())
        .and_then(handlers::create_folders);

    let download = warp::path("download_folders")
        .and(warp::get())
        .and(with_ctx(ctx))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and_then(handlers::download_folders);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    index
        .or(upload)
        .or(create)
        .or(download)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

/// Map framework rejections onto the same JSON error shape the handlers use.
async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Upload too large".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else {
        error!(?err, "unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    Ok(reply::with_status(
        reply::json(&ErrorBody { error: message }),
        status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn test_routes() -> (
        Arc<AppContext>,
        impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone,
    ) {
        let ctx = Arc::new(AppContext::new(Config::default()));
        let filter = routes(ctx.clone());
        (ctx, filter)
    }

    #[tokio::test]
    async fn test_index_served() {
        let (_ctx, filter) = test_routes();
        let resp = warp::test::request().path("/").reply(&filter).await;
        assert_eq!(resp.status(), 200);
        assert!(String::from_utf8_lossy(resp.body()).contains("<html"));
    }

    #[tokio::test]
    async fn test_create_and_download_archive() {
        let (ctx, filter) = test_routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/create_folders")
            .json(&json!({
                "unit_title": "Unit 7 Networking",
                "student_names": ["Alice Smith", "Bob Jones"]
            }))
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 200);

        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["success"], true);
        let folder_id = body["folder_id"].as_str().unwrap().to_string();
        assert_eq!(ctx.store.len(), 1);

        let resp = warp::test::request()
            .path(&format!("/download_folders/{}", folder_id))
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "application/zip");
        assert!(resp.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .contains("Unit 7 Networking.zip"));

        let mut archive = zip::ZipArchive::new(Cursor::new(resp.body().to_vec())).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names
            .iter()
            .any(|n| n == "Unit 7 Networking/Alice Smith/Learner Work/"));
        assert!(names
            .iter()
            .any(|n| n == "Unit 7 Networking/Bob Jones/Assignment Files/"));
    }

    #[tokio::test]
    async fn test_download_survives_repeat_requests() {
        let (_ctx, filter) = test_routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/create_folders")
            .json(&json!({ "unit_title": "Unit 1", "student_names": ["A"] }))
            .reply(&filter)
            .await;
        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        let path = format!("/download_folders/{}", body["folder_id"].as_str().unwrap());

        for _ in 0..2 {
            let resp = warp::test::request().path(&path).reply(&filter).await;
            assert_eq!(resp.status(), 200);
        }
    }

    #[tokio::test]
    async fn test_create_requires_unit_title() {
        let (_ctx, filter) = test_routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/create_folders")
            .json(&json!({ "student_names": ["Alice"] }))
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 400);

        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert!(body["error"].as_str().unwrap().contains("Unit title"));
    }

    #[tokio::test]
    async fn test_blank_unit_title_rejected() {
        let (_ctx, filter) = test_routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/create_folders")
            .json(&json!({ "unit_title": "   ", "student_names": [] }))
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_download_unknown_id() {
        let (_ctx, filter) = test_routes();

        let resp = warp::test::request()
            .path("/download_folders/0000-unknown")
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 404);

        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_create_body() {
        let (_ctx, filter) = test_routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/create_folders")
            .header("content-type", "application/json")
            .body("{not json")
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_upload_roster_multipart() {
        let (_ctx, filter) = test_routes();

        let boundary = "----roster-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"roster.xlsx\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n",
                boundary
            )
            .as_bytes(),
        );
        body.extend_from_slice(&crate::roster::reader::fixtures::make_xlsx(&[
            (Some("Reg"), Some("Name")),
            (Some("1"), Some("Alice Smith")),
            (Some("2"), Some("Bob Jones")),
        ]));
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        let resp = warp::test::request()
            .method("POST")
            .path("/upload_roster")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .header("content-length", body.len())
            .body(body)
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 200);

        let parsed: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(parsed["count"], 2);
        assert_eq!(parsed["student_names"][0], "Alice Smith");
    }

    #[tokio::test]
    async fn test_upload_roster_without_file_part() {
        let (_ctx, filter) = test_routes();

        let boundary = "----roster-test-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
            b = boundary
        );

        let resp = warp::test::request()
            .method("POST")
            .path("/upload_roster")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .header("content-length", body.len())
            .body(body)
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), 400);
    }
}
