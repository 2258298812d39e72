//! Materializes a composed email on disk.
//!
//! Sending mail is out of scope for the command line. Instead the message is written to a
//! directory: one file per attachment, plus `message.json` describing the envelope and
//! which attachments are referenced inline from the body.

use crate::error::CliError;
use gdoc_babel::EmailMessage;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "message.json";

/// File names in the manifest are the names written to disk.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    to: &'a str,
    subject: &'a str,
    inline_images: Vec<String>,
    attachments: Vec<ManifestAttachment<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestAttachment<'a> {
    file_name: String,
    mime_type: &'a str,
    bytes: usize,
}

impl<'a> From<&'a EmailMessage> for Manifest<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Manifest {
            to: &message.to,
            subject: &message.subject,
            inline_images: message
                .inline_images
                .iter()
                .map(|image| safe_file_name(&image.file_name))
                .collect(),
            attachments: message
                .attachments
                .iter()
                .map(|attachment| ManifestAttachment {
                    file_name: safe_file_name(&attachment.file_name),
                    mime_type: &attachment.mime_type,
                    bytes: attachment.content.len(),
                })
                .collect(),
        }
    }
}

/// Directory used when none is given: `<title>-export` under the working directory.
pub fn default_out_dir(title: &str) -> PathBuf {
    PathBuf::from(format!("{}-export", safe_file_name(title)))
}

/// Replace path separators so a document title can be used as a file name.
pub fn safe_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// Write every attachment and the manifest into `dir`, creating it if needed.
pub fn write_message(dir: &Path, message: &EmailMessage) -> Result<PathBuf, CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    for attachment in &message.attachments {
        let path = dir.join(safe_file_name(&attachment.file_name));
        fs::write(&path, &attachment.content).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {} ({} bytes)", path.display(), attachment.content.len());
    }

    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest = serde_json::to_string_pretty(&Manifest::from(message))?;
    fs::write(&manifest_path, manifest).map_err(|source| CliError::Write {
        path: manifest_path.clone(),
        source,
    })?;

    Ok(manifest_path)
}
