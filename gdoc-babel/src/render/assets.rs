//! Image assets extracted while rendering.

use crate::error::ExportError;
use crate::model::InlineImage;

/// Image formats that can be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Gif,
    Jpeg,
}

impl ImageKind {
    /// Classify by content-type subtype (`*/png`, `*/gif`, `*/jpeg`, `*/jpg`).
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.trim().to_ascii_lowercase();
        if content_type.ends_with("/png") {
            Some(ImageKind::Png)
        } else if content_type.ends_with("/gif") {
            Some(ImageKind::Gif)
        } else if content_type.ends_with("/jpeg") || content_type.ends_with("/jpg") {
            Some(ImageKind::Jpeg)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Png => ".png",
            ImageKind::Gif => ".gif",
            ImageKind::Jpeg => ".jpg",
        }
    }
}

/// An image pulled out of the document, to be attached next to the markup.
///
/// The markup refers to it through `cid:<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    /// Name the image after its position among the images of the run.
    pub fn from_image(index: usize, image: &InlineImage) -> Result<Self, ExportError> {
        let kind = ImageKind::from_content_type(&image.content_type).ok_or_else(|| {
            ExportError::UnsupportedAssetType {
                content_type: image.content_type.clone(),
            }
        })?;

        Ok(Self {
            name: format!("Image_{index}{}", kind.extension()),
            content_type: image.content_type.clone(),
            bytes: image.bytes.clone(),
        })
    }

    /// The content-id placeholder used as `src` in the markup.
    pub fn content_id(&self) -> String {
        format!("cid:{}", self.name)
    }
}
