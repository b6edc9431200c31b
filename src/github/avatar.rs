//! Avatar download and circular crop.
//!
//! The image is scaled to a square of `edge` pixels. Rendering packs two
//! vertical pixels into one terminal cell, so an `edge`-pixel avatar takes
//! `edge` columns and `edge / 2` rows.

use async_trait::async_trait;
use image::imageops::FilterType;
use image::DynamicImage;
use reqwest::{Client, StatusCode, Url};
use std::fmt;

use crate::config::FetchConfig;

use super::client::build_http_client;
use super::error::AvatarError;

/// True when pixel `(x, y)` of an `edge`-sized square lies in the inscribed
/// circle. Shared by the cropped image and the neutral placeholder.
pub fn inside_circle(edge: u32, x: u32, y: u32) -> bool {
    let radius = edge as f32 / 2.0;
    let dx = x as f32 + 0.5 - radius;
    let dy = y as f32 + 0.5 - radius;
    dx * dx + dy * dy <= radius * radius
}

/// Square RGBA avatar with everything outside the circle transparent.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarImage {
    edge: u32,
    rgba: Vec<u8>,
}

impl AvatarImage {
    /// Scales `image` to fill an `edge` square and masks it to a circle.
    pub fn from_dynamic(image: &DynamicImage, edge: u32) -> Self {
        let mut rgba = image
            .resize_to_fill(edge, edge, FilterType::Triangle)
            .to_rgba8();

        for (x, y, pixel) in rgba.enumerate_pixels_mut() {
            if !inside_circle(edge, x, y) {
                pixel.0[3] = 0;
            }
        }

        Self {
            edge,
            rgba: rgba.into_raw(),
        }
    }

    /// Decodes PNG or JPEG bytes.
    pub fn decode(bytes: &[u8], edge: u32) -> Result<Self, AvatarError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(&image, edge))
    }

    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// RGB of pixel `(x, y)`, or `None` when it is transparent or out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.edge || y >= self.edge {
            return None;
        }
        let offset = ((y * self.edge + x) * 4) as usize;
        let px = self.rgba.get(offset..offset + 4)?;
        if px[3] == 0 {
            None
        } else {
            Some((px[0], px[1], px[2]))
        }
    }
}

impl fmt::Debug for AvatarImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarImage")
            .field("edge", &self.edge)
            .finish_non_exhaustive()
    }
}

/// Source of the avatar image for a profile.
#[async_trait]
pub trait AvatarSource: Send + Sync {
    async fn load(&self, url: Url) -> Result<AvatarImage, AvatarError>;
}

/// Downloads avatars over HTTP.
pub struct AvatarLoader {
    client: Client,
    edge: u32,
}

impl AvatarLoader {
    pub fn new(config: &FetchConfig, edge: u32) -> reqwest::Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            edge,
        })
    }
}

#[async_trait]
impl AvatarSource for AvatarLoader {
    async fn load(&self, url: Url) -> Result<AvatarImage, AvatarError> {
        let url_text = url.to_string();
        let transport = |source: reqwest::Error| AvatarError::Transport {
            url: url_text.clone(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(AvatarError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        let image = AvatarImage::decode(&bytes, self.edge)?;
        tracing::debug!(edge = self.edge, "Avatar decoded");
        Ok(image)
    }
}
