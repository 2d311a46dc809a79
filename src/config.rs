//! Configuration for fieldcodec
//!
//! Centralized decode limits and diagnostic defaults.

/// Default upper bound on a decoded collection count
pub const DEFAULT_MAX_COLLECTION_LEN: u32 = 16 * 1024 * 1024;

/// Default upper bound on collection nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a [`Codec`](crate::Codec)
#[derive(Debug, Clone)]
pub struct CodecConfig {
    // -------------------------------------------------------------------------
    // Decode Limits
    // -------------------------------------------------------------------------
    /// Largest element count accepted from a collection header.
    /// Elements are only created as their records are read; this bounds
    /// the count itself, not memory.
    pub max_collection_len: u32,

    /// Deepest collection nesting accepted in either direction.
    /// Only reachable by recursive types.
    pub max_depth: usize,

    /// Fail decode when input remains after the root type is described
    pub reject_trailing_bytes: bool,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Hex groups per line when dumping buffers (0 = single line)
    pub hex_line_width: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_collection_len: DEFAULT_MAX_COLLECTION_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing_bytes: true,
            hex_line_width: 16,
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct ConfigBuilder {
    config: CodecConfig,
}

impl ConfigBuilder {
    /// Set the largest accepted collection count
    pub fn max_collection_len(mut self, count: u32) -> Self {
        self.config.max_collection_len = count;
        self
    }

    /// Set the deepest accepted collection nesting
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Accept or reject unread input after decode
    pub fn reject_trailing_bytes(mut self, reject: bool) -> Self {
        self.config.reject_trailing_bytes = reject;
        self
    }

    /// Set the hex dump line width
    pub fn hex_line_width(mut self, width: usize) -> Self {
        self.config.hex_line_width = width;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}
