/// Buffer sizing for the streaming scanners.
///
/// The buffer starts at `initial_capacity` bytes and doubles whenever a
/// single segment does not fit. Segments of up to `max_segment_size` bytes
/// are always accepted; the buffer keeps [`ScanConfig::MIN_BUFFER`] bytes of
/// lookahead room past that. A segment that still does not fit is a
/// terminal [`crate::SegmentError::TooLong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub initial_capacity: usize,
    pub max_segment_size: usize,
}

impl ScanConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;
    pub const DEFAULT_MAX_SEGMENT_SIZE: usize = 64 * 1024;
    /// Smallest usable buffer: one full UTF-8 sequence plus a lookahead pair.
    pub const MIN_BUFFER: usize = 8;

    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_segment_size: Self::DEFAULT_MAX_SEGMENT_SIZE,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScanConfigBuilder {
    config: ScanConfig,
}

impl ScanConfigBuilder {
    pub fn initial_capacity(mut self, bytes: usize) -> Self {
        self.config.initial_capacity = bytes;
        self
    }

    pub fn max_segment_size(mut self, bytes: usize) -> Self {
        self.config.max_segment_size = bytes;
        self
    }

    /// Clamp both sizes to [`ScanConfig::MIN_BUFFER`] and make sure the
    /// maximum is never below the initial capacity.
    pub fn build(self) -> ScanConfig {
        let initial_capacity = self.config.initial_capacity.max(ScanConfig::MIN_BUFFER);
        let max_segment_size = self.config.max_segment_size.max(initial_capacity);
        ScanConfig {
            initial_capacity,
            max_segment_size,
        }
    }
}
