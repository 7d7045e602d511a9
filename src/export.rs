// Artifact exporter: snapshot the surface as a PNG and hand it to whoever holds form state.

use crate::error::Result;
use crate::types::FrameBuffer;
use base64::{Engine as _, engine::general_purpose};
use image::{ImageBuffer, ImageFormat, Rgba};
use std::io::Cursor;

/// Encoded snapshot of the surface at one point in time. Owned by the receiver once sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl Artifact {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png_bytes(self) -> Vec<u8> {
        self.png
    }

    /// `data:image/png;base64,...`, what a browser canvas would hand out.
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(&self.png))
    }
}

/// Receives every artifact change: Some after a completed stroke, None after a clear.
/// A None means "no signature present".
pub trait ArtifactSink {
    fn on_artifact_change(&mut self, artifact: Option<Artifact>);
}

impl<F> ArtifactSink for F
where
    F: FnMut(Option<Artifact>),
{
    fn on_artifact_change(&mut self, artifact: Option<Artifact>) {
        self(artifact)
    }
}

/// Encode the surface as a PNG with alpha. Untouched pixels stay transparent.
pub fn encode_png(fb: &FrameBuffer) -> Result<Artifact> {
    let (w, h) = (fb.width as u32, fb.height as u32);
    let img = ImageBuffer::from_fn(w, h, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize]; // 0xAARRGGBB
        Rgba([
            ((px >> 16) & 0xFF) as u8,
            ((px >> 8) & 0xFF) as u8,
            (px & 0xFF) as u8,
            ((px >> 24) & 0xFF) as u8,
        ])
    });

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(Artifact { width: w, height: h, png })
}
