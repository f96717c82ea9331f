//! HTTP tests for the upload API, run against the router without binding a socket.

use api::api_state::ApiContext;
use api::create_app;
use app_state::{AppSettings, load_settings_from_str};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use std::io::Cursor;
use tower::ServiceExt;

const BOUNDARY: &str = "garment-color-test-boundary";

fn test_settings(max_upload_bytes: usize) -> AppSettings {
    let yaml = format!(
        r#"
analyzer:
  num_colors: 3
  max_colors: 10
  max_width: 500
  locale: ja
  kmeans:
    seed: 0
    max_iterations: 20
    convergence: 0.0025
    runs: 3
api:
  host: 127.0.0.1
  port: 0
  allowed_origins: ["http://localhost:8000"]
  max_upload_bytes: {max_upload_bytes}
  max_concurrent_analyses: 2
  include_preview: true
logging:
  level: info
"#
    );
    load_settings_from_str(&yaml).expect("test settings are valid")
}

fn app() -> axum::Router {
    create_app(ApiContext::new(test_settings(10 * 1024 * 1024)))
}

/// 40x20 image, the left 30 columns red and the rest white.
fn red_and_white_png() -> Vec<u8> {
    let image = RgbImage::from_fn(40, 20, |x, _| {
        if x < 30 {
            Rgb([200, 50, 50])
        } else {
            Rgb([240, 240, 240])
        }
    });
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("encode png");
    bytes.into_inner()
}

enum Part<'a> {
    File {
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("valid request")
}

fn png_part(bytes: &[u8]) -> Part<'_> {
    Part::File {
        filename: "shirt.png",
        content_type: "image/png",
        bytes,
    }
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("request is handled");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body is readable")
        .to_bytes();
    (status, body.to_vec())
}

async fn send_json(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("response is JSON");
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_root_serves_upload_page() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(app(), request).await;
    let html = String::from_utf8(body).expect("utf-8 page");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("服の色自動分類アプリ"));
    assert!(html.contains(r#"action="/uploadfile""#));
    assert!(html.contains(r#"name="file""#));
    assert!(html.contains(r#"href="/docs""#));
    assert!(html.contains(r#"href="/redoc""#));
}

#[tokio::test]
async fn test_redoc_page_is_served() {
    let request = Request::builder()
        .uri("/redoc")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(app(), request).await;
    let html = String::from_utf8(body).expect("utf-8 page");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/uploadfile"));
}

#[tokio::test]
async fn test_openapi_lists_upload_route() {
    let request = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .expect("valid request");
    let (status, json) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/uploadfile"]["post"].is_object());
}

#[tokio::test]
async fn test_upload_returns_colors_and_suggestions() {
    let png = red_and_white_png();
    let (status, json) = send_json(app(), upload_request("/uploadfile", &[png_part(&png)])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["filename"], "shirt.png");
    assert_eq!(json["content_type"], "image/png");
    assert_eq!(json["image_dimensions"]["width"], 40);
    assert_eq!(json["image_dimensions"]["height"], 20);

    let extracted = json["extracted_colors"].as_array().expect("array");
    assert_eq!(extracted.len(), 2);
    assert_eq!(extracted[0]["rgb"], serde_json::json!([200, 50, 50]));
    assert_eq!(extracted[0]["percentage"], 75.0);
    assert_eq!(extracted[1]["percentage"], 25.0);

    let classified = json["classified_colors"].as_array().expect("array");
    assert_eq!(classified[0]["name"], "red");
    assert_eq!(classified[0]["label"], "赤");
    assert_eq!(classified[0]["category"], "warm");
    assert_eq!(classified[0]["category_label"], "暖色");
    assert_eq!(classified[1]["category"], "neutral");
    assert_eq!(classified[1]["category_label"], "ニュートラル");
    assert_eq!(classified[1]["name"], "white");

    let suggestions = json["color_suggestions"].as_array().expect("array");
    assert!(suggestions.contains(&Value::from(
        "赤には、緑を差し色にしてコントラストを楽しむこともできます。"
    )));
    assert_eq!(
        json["message"],
        "画像が正常にアップロードされ、主要な色が抽出・分類され、色の組み合わせが提案されました！"
    );
    assert!(
        json["image_preview"]
            .as_str()
            .is_some_and(|url| url.starts_with("data:image/png;base64,"))
    );
}

#[tokio::test]
async fn test_trailing_slash_route_is_accepted() {
    let png = red_and_white_png();
    let (status, _) = send(app(), upload_request("/uploadfile/", &[png_part(&png)])).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_num_colors_from_query_and_form() {
    let png = red_and_white_png();

    let (status, json) = send_json(
        app(),
        upload_request("/uploadfile?num_colors=1", &[png_part(&png)]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["extracted_colors"].as_array().map(Vec::len), Some(1));

    let (status, json) = send_json(
        app(),
        upload_request(
            "/uploadfile",
            &[
                png_part(&png),
                Part::Text {
                    name: "num_colors",
                    value: "1",
                },
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["extracted_colors"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_num_colors_out_of_range_is_rejected() {
    let png = red_and_white_png();
    for uri in ["/uploadfile?num_colors=0", "/uploadfile?num_colors=11"] {
        let (status, json) = send_json(app(), upload_request(uri, &[png_part(&png)])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().is_some_and(|e| e.contains("num_colors")));
    }
}

#[tokio::test]
async fn test_malformed_num_colors_query_gets_json_error() {
    let png = red_and_white_png();
    let (status, json) = send_json(
        app(),
        upload_request("/uploadfile?num_colors=abc", &[png_part(&png)]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some_and(|e| e.contains("query string")));
}

#[tokio::test]
async fn test_non_multipart_body_gets_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/uploadfile")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"file": "shirt.png"}"#))
        .expect("valid request");
    let (status, json) = send_json(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_unreadable_image_is_rejected() {
    let (status, json) = send_json(
        app(),
        upload_request("/uploadfile", &[png_part(b"this is not an image")]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "画像の読み込みに失敗しました。有効な画像ファイルをアップロードしてください。"
    );
}

#[tokio::test]
async fn test_missing_file_is_rejected() {
    let (status, json) = send_json(
        app(),
        upload_request(
            "/uploadfile",
            &[Part::Text {
                name: "num_colors",
                value: "2",
            }],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().is_some_and(|e| e.contains("file")));
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let app = create_app(ApiContext::new(test_settings(1024)));
    let large = vec![0u8; 8 * 1024];
    let (status, _) = send(app, upload_request("/uploadfile", &[png_part(&large)])).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_identical_uploads_give_identical_results() {
    let png = red_and_white_png();
    let (_, first) = send(app(), upload_request("/uploadfile", &[png_part(&png)])).await;
    let (_, second) = send(app(), upload_request("/uploadfile", &[png_part(&png)])).await;
    assert_eq!(first, second);
}
