//! # snipdesk-core - Core Domain Types
//!
//! Foundation crate for the snippet workspace. Provides domain types, error
//! handling, the snippet manifest format, the persisted snapshot format, and
//! the small text algorithms the UI relies on.
//!
//! This crate has **zero internal dependencies** and no browser dependency --
//! it only depends on external crates (serde, chrono, thiserror, regex, toml,
//! tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Snippet`] - Titled, language-tagged source text with optional [`Thumbnail`]
//! - [`Tutorial`] - Titled link to an external video
//!
//! ### Manifest (`manifest`)
//! - [`Manifest`], [`Category`], [`ManifestEntry`] - `snippets.json` listing
//!
//! ### Snapshot (`snapshot`)
//! - [`WorkspaceSnapshot`] - Persisted `{snippets, tutorials}` record
//!
//! ### Algorithms
//! - [`convert_to_embed_url()`] - YouTube/Vimeo link to embed URL
//! - [`escape_html()`] - Escape code for markup rendering
//! - [`CollapseState`], [`line_count()`] - Long-block collapse heuristic
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod collapse;
pub mod embed;
pub mod error;
pub mod html;
pub mod manifest;
pub mod prelude;
pub mod snapshot;
pub mod types;

pub use collapse::{line_count, should_collapse, CollapseState, DEFAULT_COLLAPSE_THRESHOLD};
pub use embed::convert_to_embed_url;
pub use error::{Error, Result, ResultExt};
pub use html::escape_html;
pub use manifest::{Category, Manifest, ManifestEntry, DEFAULT_MANIFEST_PATH};
pub use snapshot::{
    SnippetRecord, TutorialRecord, WorkspaceSnapshot, DEFAULT_STORAGE_KEY, SNAPSHOT_VERSION,
};
pub use types::{language_class, non_empty, Snippet, Thumbnail, Tutorial};
