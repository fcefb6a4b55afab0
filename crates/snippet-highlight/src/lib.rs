#![warn(missing_docs)]
//! `snippet-highlight` - A headless engine for highlighting embedded code blocks.
//!
//! # Overview
//!
//! `snippet-highlight` is the engine behind an editor add-on that paints a background
//! decoration over embedded code blocks (`<?php ... ?>`, short-tag `<? ... ?>`) in
//! documents of configurable languages. The crate is host-agnostic: everything that
//! touches an actual editor window (decorations, the status indicator, prompts,
//! configuration storage) lives behind the `snippet-highlight-host` boundary crate.
//! What remains here is pure logic:
//!
//! - **Block scanning**: find marker-delimited block spans in document text
//! - **Color validation**: syntactic validation of user/config-supplied color strings
//! - **Configuration**: shape-checked settings with built-in defaults
//! - **Render planning**: turn state + configuration + text into a render instruction
//!
//! # Quick Start
//!
//! ```rust
//! use snippet_highlight::{BlockScanner, HighlightConfig, HighlightState, RenderEdit, plan_render};
//!
//! let scanner = BlockScanner::new();
//! let state = HighlightState::default();
//! let config = HighlightConfig::default();
//!
//! let edit = plan_render(&scanner, &state, &config, "php", "<h1><?php echo $title; ?></h1>");
//! match edit {
//!     RenderEdit::ReplaceHighlights { ranges, .. } => assert_eq!(ranges.len(), 1),
//!     RenderEdit::ClearHighlights => unreachable!(),
//! }
//! ```
//!
//! # Module Description
//!
//! - [`scanner`] - marker-pair block scanning
//! - [`color`] - color string validation
//! - [`config`] - configuration shape-checking and defaults
//! - [`render`] - highlight state and render planning
//!
//! # Offsets
//!
//! All public offsets are **character offsets** (Unicode scalar values), half-open.
//! Hosts working in UTF-16 or byte coordinates are expected to convert at the boundary.

pub mod color;
pub mod config;
pub mod render;
pub mod scanner;

pub use color::is_valid_color;
pub use config::{
    CONFIG_NAMESPACE, DEFAULT_BACKGROUND_COLOR, DEFAULT_SUPPORTED_LANGUAGES, HighlightConfig,
    KEY_BACKGROUND_COLOR, KEY_SUPPORTED_LANGUAGES,
};
pub use render::{HighlightState, RenderEdit, plan_render};
pub use scanner::{BlockScanner, HighlightRange};
