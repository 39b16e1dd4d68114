//! Parallel extraction configuration.

/// Configuration for slab-parallel extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Cell layers per slab along z. Zero is treated as one.
    pub slab_depth: u32,
    /// Worker threads; zero uses rayon's global pool.
    pub num_threads: usize,
}

impl ParallelConfig {
    /// Create a new parallel configuration.
    ///
    /// # Arguments
    /// * `slab_depth` - Cell layers per slab (typically 16)
    /// * `num_threads` - Worker threads, or 0 for the global pool
    #[inline]
    pub const fn new(slab_depth: u32, num_threads: usize) -> Self {
        Self {
            slab_depth,
            num_threads,
        }
    }

    /// Set the slab depth.
    #[inline]
    pub const fn with_slab_depth(mut self, slab_depth: u32) -> Self {
        self.slab_depth = slab_depth;
        self
    }

    /// Set the number of worker threads.
    #[inline]
    pub const fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Slab depth as used by the extractor (never zero).
    #[inline]
    pub const fn effective_slab_depth(&self) -> u32 {
        if self.slab_depth == 0 {
            1
        } else {
            self.slab_depth
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self::new(16, 0)
    }
}
