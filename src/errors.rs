//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`OrnamentError`] covers:
//! - Unresolved scene handles (node, material, audio player)
//! - Configuration loading and parsing
//!
//! The animator itself never returns these from its per-frame operations.
//! Lookup failures are logged and the affected feature degrades to a no-op.
//!
//! ```rust,ignore
//! use ornament::errors::Result;
//! use ornament::AnimatorSettings;
//!
//! fn load() -> Result<AnimatorSettings> {
//!     AnimatorSettings::load("ornament.json")
//! }
//! ```

use thiserror::Error;

use crate::scene::{AudioHandle, MaterialHandle, NodeHandle};

/// The main error type for the ornament crate.
#[derive(Error, Debug)]
pub enum OrnamentError {
    // ========================================================================
    // Scene Lookup Errors
    // ========================================================================
    /// The animator was started without a visual node.
    #[error("Ornament node not assigned")]
    NodeUnassigned,

    /// A node handle no longer resolves in the scene.
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeHandle),

    /// A material handle no longer resolves in the scene.
    #[error("Material not found: {0:?}")]
    MaterialNotFound(MaterialHandle),

    /// An audio player handle no longer resolves in the scene.
    #[error("Audio player not found: {0:?}")]
    AudioNotFound(AudioHandle),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, OrnamentError>`.
pub type Result<T> = std::result::Result<T, OrnamentError>;
