//! Join-barrier semantics of the resource loader: all-or-nothing, fail-fast,
//! bounded wait, cooperative cancellation. Served from a local fixture
//! server; no decode happens at this layer, so font slots can carry
//! arbitrary bytes.

use std::io::Cursor;
use std::time::Duration;

use tiny_http::{Response, Server};

use sharecard::{CancelToken, CardError, ResourceLoader, ResourceUrls};

fn png_fixture() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Serve fixture routes on an ephemeral port; returns the base URL.
fn start_fixture_server() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    std::thread::spawn(move || {
        let png = png_fixture();
        for request in server.incoming_requests() {
            let response = match request.url() {
                "/ok.png" => Response::from_data(png.clone()).with_status_code(200),
                "/font.ttf" => Response::from_data(vec![0u8; 64]).with_status_code(200),
                "/slow.png" => {
                    std::thread::sleep(Duration::from_secs(2));
                    Response::from_data(png.clone()).with_status_code(200)
                }
                _ => Response::from_data(b"not found".to_vec()).with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });
    format!("http://127.0.0.1:{port}")
}

fn urls(base: &str, thumbnail_path: &str) -> ResourceUrls {
    ResourceUrls {
        thumbnail: format!("{base}{thumbnail_path}"),
        avatar: format!("{base}/ok.png"),
        qrcode: format!("{base}/ok.png"),
        font_mono: format!("{base}/font.ttf"),
        font_regular: format!("{base}/font.ttf"),
        font_semi_bold: format!("{base}/font.ttf"),
    }
}

#[tokio::test]
async fn all_six_resources_load_together() {
    let base = start_fixture_server();
    let loader = ResourceLoader::new(Duration::from_secs(5)).unwrap();

    let raw = loader
        .load(&urls(&base, "/ok.png"), &CancelToken::new())
        .await
        .unwrap();
    assert_eq!(raw.thumbnail, png_fixture());
    assert_eq!(raw.avatar, raw.qrcode);
    assert_eq!(raw.font_mono.len(), 64);
    assert_eq!(raw.font_regular.len(), 64);
    assert_eq!(raw.font_semi_bold.len(), 64);
}

#[tokio::test]
async fn one_failed_fetch_fails_the_whole_join() {
    let base = start_fixture_server();
    let loader = ResourceLoader::new(Duration::from_secs(5)).unwrap();

    let err = loader
        .load(&urls(&base, "/missing.png"), &CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::ResourceLoad(_)), "got {err}");
    assert!(err.to_string().contains("missing.png"));
}

#[tokio::test]
async fn join_wait_is_bounded() {
    let base = start_fixture_server();
    let loader = ResourceLoader::new(Duration::from_millis(100)).unwrap();

    let err = loader
        .load(&urls(&base, "/slow.png"), &CancelToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::Timeout(_)), "got {err}");
}

#[tokio::test]
async fn pre_cancelled_token_short_circuits() {
    let base = start_fixture_server();
    let loader = ResourceLoader::new(Duration::from_secs(5)).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    let err = loader
        .load(&urls(&base, "/ok.png"), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::Cancelled), "got {err}");
}

#[tokio::test]
async fn cancellation_is_honored_mid_join() {
    let base = start_fixture_server();
    let loader = ResourceLoader::new(Duration::from_secs(5)).unwrap();

    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let err = loader
        .load(&urls(&base, "/slow.png"), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, CardError::Cancelled), "got {err}");
}
