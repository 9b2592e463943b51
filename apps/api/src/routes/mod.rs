pub mod health;
pub mod resumes;
pub mod score;
pub mod tools;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Tool dispatch for the orchestration layer
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/:name", post(tools::handle_invoke_tool))
        // Composite scoring
        .route("/api/v1/score", post(score::handle_score))
        .route(
            "/api/v1/resumes/extract",
            post(resumes::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::path::Path;
    use tower::ServiceExt;

    fn app(upload_dir: &Path) -> Router {
        let config = Config {
            upload_dir: upload_dir.to_path_buf(),
            ..Config::default()
        };
        build_router(AppState::new(config))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let upload_dir = tempfile::tempdir().unwrap();
        send_with_uploads(upload_dir.path(), request).await
    }

    async fn send_with_uploads(upload_dir: &Path, request: Request<Body>) -> (StatusCode, Value) {
        let response = app(upload_dir).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(filename: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--BOUNDARY\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             {content}\r\n\
             --BOUNDARY--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/extract")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_tools() {
        let request = Request::get("/api/v1/tools").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_invoke_keyword_tool() {
        let request = post_json(
            "/api/v1/tools/keyword_match_tool",
            json!({ "resume_text": "rust", "jd_text": "and the for" }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_percentage"], 1.0);
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_404() {
        let (status, body) = send(post_json("/api/v1/tools/nope", json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_parse_resume_unsupported_is_422() {
        let upload_dir = tempfile::tempdir().unwrap();
        let file = tempfile::Builder::new()
            .suffix(".rtf")
            .tempfile_in(upload_dir.path())
            .unwrap();
        let request = post_json(
            "/api/v1/tools/parse_resume_tool",
            json!({ "file_path": file.path() }),
        );
        let (status, body) = send_with_uploads(upload_dir.path(), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_parse_resume_outside_upload_dir_is_400() {
        let elsewhere = tempfile::tempdir().unwrap();
        let outside = elsewhere.path().join("hostname.txt");
        std::fs::write(&outside, "build-host-01").unwrap();

        let request = post_json(
            "/api/v1/tools/parse_resume_tool",
            json!({ "file_path": outside }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_invoke_tool_with_missing_argument_is_400() {
        let request = post_json(
            "/api/v1/tools/semantic_similarity_tool",
            json!({ "resume_text": "rust engineer" }),
        );
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_endpoint() {
        let request = post_json(
            "/api/v1/score",
            json!({
                "resume_text": "Python engineer with experience, education, skills, projects.",
                "jd_text": "python engineer",
                "skills_alignment": 1.0
            }),
        );
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"]["match_percentage"], 1.0);
        assert_eq!(body["score"]["breakdown"]["skills_alignment"], 100.0);
        assert!(body["similarity"].as_f64().unwrap() > 0.0);
        assert_eq!(
            body["compliance"]["issues"],
            json!(["Resume text is very short."])
        );
    }

    #[tokio::test]
    async fn test_score_rejects_out_of_range_skills() {
        let request = post_json(
            "/api/v1/score",
            json!({ "resume_text": "a", "jd_text": "b", "skills_alignment": 3.0 }),
        );
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_score_requires_job_description() {
        let request = post_json("/api/v1/score", json!({ "resume_text": "Rust engineer" }));
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_score_rejects_unknown_fields() {
        let request = post_json(
            "/api/v1/score",
            json!({ "resume_text": "a", "jd_txt": "b", "jd_text": "c" }),
        );
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_extract_txt_upload() {
        let (status, body) = send(multipart("cv.TXT", "  Rust engineer  ")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "cv.TXT");
        assert_eq!(body["text"], "Rust engineer");
    }

    #[tokio::test]
    async fn test_extract_unsupported_upload() {
        let (status, body) = send(multipart("cv.rtf", "{\\rtf1}")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], "Unsupported file format .rtf");
    }
}
