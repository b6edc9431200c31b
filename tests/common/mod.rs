//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use profile_view::config::FetchConfig;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

pub const OCTOCAT_JSON: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "avatar_url": "https://example/a.png",
    "html_url": "https://github.com/octocat",
    "bio": "hi",
    "public_repos": 8
}"#;

/// Fetch settings pointing at `endpoint` with short timeouts.
pub fn fetch_config(endpoint: &str) -> FetchConfig {
    FetchConfig {
        endpoint: endpoint.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Profile JSON whose avatar points at `avatar_url`.
pub fn profile_json(login: &str, avatar_url: &str, bio: Option<&str>) -> String {
    serde_json::json!({
        "login": login,
        "avatar_url": avatar_url,
        "bio": bio,
    })
    .to_string()
}

/// A solid-color PNG, encoded in memory.
pub fn png_bytes(edge: u32, color: [u8; 4]) -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(edge, edge, Rgba(color)));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes.into_inner()
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
