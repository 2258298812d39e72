//! Export runs: tree building followed by rendering.
//!
//! Each run owns a fresh [`TreeBuilder`], forest and asset list. A run either returns the
//! complete markup together with every asset, or fails on the first unsupported image.

use crate::error::ExportError;
use crate::model::SourceElement;
use crate::render::{ImageAsset, RenderOptions, Rendered, Renderer};
use crate::source::SourceDocument;
use crate::tree::TreeBuilder;

/// Result of exporting a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub title: String,
    pub markup: String,
    pub assets: Vec<ImageAsset>,
}

impl ExportedDocument {
    /// File name of the markup when attached: `<title>.html`.
    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.title)
    }
}

/// Export a flat element sequence.
pub fn export_elements<I>(elements: I, options: &RenderOptions) -> Result<Rendered, ExportError>
where
    I: IntoIterator<Item = SourceElement>,
{
    let mut builder = TreeBuilder::new();
    builder.extend(elements);
    let inserted = builder.inserted();
    let forest = builder.into_forest();

    log::debug!(
        "built forest of {} top-level nodes from {} elements",
        forest.len(),
        inserted
    );

    Renderer::new(options.clone()).render(&forest)
}

/// Export a source document.
pub fn export_document(
    document: &SourceDocument,
    options: &RenderOptions,
) -> Result<ExportedDocument, ExportError> {
    let rendered = export_elements(document.body.iter().cloned(), options).map_err(|err| {
        log::warn!("export failed for '{}': {err}", document.title);
        err
    })?;

    log::info!(
        "exported '{}': {} elements, {} images",
        document.title,
        document.body.len(),
        rendered.assets.len()
    );

    Ok(ExportedDocument {
        title: document.title.clone(),
        markup: rendered.markup,
        assets: rendered.assets,
    })
}
