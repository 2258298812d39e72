//! HTML export for flat rich-text documents
//!
//!     This crate turns a word-processor document, as handed out by its API, into an
//!     indented HTML fragment plus the images it references. The document API exposes the
//!     body as a flat sequence of paragraphs, list items and inline images; list items only
//!     carry an absolute nesting depth. The export has to rebuild the nested lists before it
//!     can emit `ul`/`ol` blocks.
//!
//! Architecture
//!
//!     The work is split in two stages over an explicit intermediate tree:
//!
//!         SourceElement* --TreeBuilder--> Forest --Renderer--> markup + ImageAsset*
//!
//!     Tree building never fails; rendering fails only on an image type that cannot be
//!     attached. Dispatching the result (printing it or composing an email) is a separate,
//!     final step.
//!
//!     This is a pure lib: it powers gdoc-cli but makes no assumption about a shell. Nothing
//!     here prints, reads env vars or touches files, except `SourceDocument::from_path`.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── source.rs               # JSON source documents
//!     ├── export.rs               # One export run: build, then render
//!     ├── dispatch.rs             # Print / email composition
//!     ├── model
//!     │   ├── elements.rs         # Paragraph, ListItem, InlineImage
//!     │   └── text.rs             # Attribute-indexed rich text and runs
//!     ├── tree
//!     │   ├── builder.rs          # Flat to nested list reconstruction
//!     │   └── treeviz.rs          # Debug visualization of a forest
//!     └── render
//!         ├── markup.rs           # Indented blocks and escaping
//!         ├── inline.rs           # Run formatting
//!         └── assets.rs           # Image naming and content ids
//!
//! Testing
//!     tests
//!     ├── tree
//!     ├── render
//!     └── export
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
//!
//! Core Algorithms
//!
//!     The list reconstruction is the subtle part, see ./tree/builder.rs. It reproduces a
//!     best-effort descent of one level per step, including its quirks on depth jumps.

pub mod dispatch;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod source;
pub mod tree;

pub use dispatch::{Dispatch, EmailMessage, OutputMode};
pub use error::{ExportError, SourceError};
pub use export::{export_document, export_elements, ExportedDocument};
pub use model::SourceElement;
pub use render::{ImageAsset, RenderOptions, Rendered, Renderer};
pub use source::SourceDocument;
pub use tree::{build_forest, Forest, ForestNode, ListGroup, TreeBuilder};
