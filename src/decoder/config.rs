//! Import configuration

/// What to do with triangles whose indices point past the vertex list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexPolicy {
    /// Hand the triangle to the host unchanged
    #[default]
    PassThrough,
    /// Fail the import
    Reject,
    /// Drop the triangle and log a warning
    SkipInvalid,
}

/// Configuration for importing 3MF files
///
/// # Example
///
/// ```
/// use threemf_codec::{ImportConfig, IndexPolicy};
///
/// let config = ImportConfig::new().with_index_policy(IndexPolicy::Reject);
/// assert_eq!(config.index_policy(), IndexPolicy::Reject);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportConfig {
    index_policy: IndexPolicy,
}

impl ImportConfig {
    /// Default configuration: triangle indices are passed through unchecked
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for out-of-range triangle indices
    pub fn with_index_policy(mut self, policy: IndexPolicy) -> Self {
        self.index_policy = policy;
        self
    }

    /// Policy for out-of-range triangle indices
    pub fn index_policy(&self) -> IndexPolicy {
        self.index_policy
    }
}
