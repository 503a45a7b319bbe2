//! Encoder and decoder options.

/// What to do with presence mask bits that have no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownBitsPolicy {
    /// Fail with [`DecodeError::UnknownGuardBits`](crate::DecodeError::UnknownGuardBits).
    #[default]
    Reject,
    /// Log a warning and decode the known bits only.
    ///
    /// The payloads of unknown guards have no known width, so anything after
    /// the known payloads in that guard set will be misread.
    Ignore,
}

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub unknown_bits: UnknownBitsPolicy,
    /// Fail if bytes remain after the last group.
    pub require_exact_length: bool,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_bits(mut self, policy: UnknownBitsPolicy) -> Self {
        self.unknown_bits = policy;
        self
    }

    pub fn require_exact_length(mut self, require: bool) -> Self {
        self.require_exact_length = require;
        self
    }
}

/// Options for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Run [`validate_config`](crate::validate::validate_config) before encoding.
    pub validate: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoding that rejects configurations failing semantic validation.
    pub fn validated() -> Self {
        Self { validate: true }
    }
}
