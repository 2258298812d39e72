//! Dispatch of an exported document.
//!
//! Two modes are supported. `print` hands the markup to a log sink and discards the images.
//! `email` composes a message to the document owner: the markup is the HTML body, every
//! image is attached inline under its asset name so the `cid:` placeholders resolve, and
//! the markup is attached once more as `<title>.html`.
//!
//! Sending the message is left to the caller; this module only composes it.

use crate::export::ExportedDocument;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output mode selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Print,
    Email,
}

impl OutputMode {
    /// Whether image assets must be kept for attachment.
    pub fn retains_assets(self) -> bool {
        matches!(self, OutputMode::Email)
    }
}

/// A file attached to the composed email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// An email carrying an exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    /// Images referenced from the body, keyed by their content id.
    pub inline_images: Vec<Attachment>,
    /// Downloadable attachments: every image, then the markup itself.
    pub attachments: Vec<Attachment>,
}

impl EmailMessage {
    pub fn compose(document: &ExportedDocument, recipient: &str) -> Self {
        let images: Vec<Attachment> = document
            .assets
            .iter()
            .map(|asset| Attachment {
                file_name: asset.name.clone(),
                mime_type: asset.content_type.clone(),
                content: asset.bytes.clone(),
            })
            .collect();

        let html_name = document.html_file_name();
        let mut attachments = images.clone();
        attachments.push(Attachment {
            file_name: html_name.clone(),
            mime_type: "text/html".to_string(),
            content: document.markup.clone().into_bytes(),
        });

        Self {
            to: recipient.to_string(),
            subject: html_name,
            html_body: document.markup.clone(),
            inline_images: images,
            attachments,
        }
    }

    /// Look up an inline image by the name used in its `cid:` placeholder.
    pub fn inline_image(&self, content_id: &str) -> Option<&Attachment> {
        self.inline_images
            .iter()
            .find(|image| image.file_name == content_id)
    }
}

/// What to hand to the transport for one exported document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Print(String),
    Email(EmailMessage),
}

impl Dispatch {
    pub fn prepare(document: ExportedDocument, mode: OutputMode, recipient: &str) -> Self {
        if mode.retains_assets() {
            return Dispatch::Email(EmailMessage::compose(&document, recipient));
        }
        if !document.assets.is_empty() {
            log::debug!(
                "{mode:?} mode: dropping {} image assets",
                document.assets.len()
            );
        }
        Dispatch::Print(document.markup)
    }
}

/// Write the markup to a log sink.
pub fn print_markup<W: Write>(sink: &mut W, markup: &str) -> io::Result<()> {
    writeln!(sink, "{markup}")?;
    sink.flush()
}
