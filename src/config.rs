use std::time::Duration;

/// Fixed parameters of a drawing pad session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PadConfig {
    pub width: u32,
    pub height: u32,
    /// Number of cells along the horizontal axis.
    pub grid_size: u32,
    pub frame_delay: Duration,
    pub title: &'static str,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            grid_size: 100,
            frame_delay: Duration::from_millis(16),
            title: "Grid Drawing Pad",
        }
    }
}

impl PadConfig {
    #[must_use]
    pub const fn cell_size(&self) -> u32 {
        self.width / self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_eight_pixels() {
        let config = PadConfig::default();
        assert_eq!(config.cell_size(), 8);
        assert_eq!((config.width, config.height), (800, 800));
    }
}
