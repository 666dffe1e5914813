//! Application-level configuration types

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{PanelConfig, TouchConfig};

/// Largest download chunk the pipeline keeps on its stack
pub const MAX_CHUNK_SIZE: usize = 1024;

/// Maximum staging path length
pub const MAX_PATH_LEN: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input is not valid TOML or has the wrong shape
    Parse,
    /// Chunk size is zero or above [`MAX_CHUNK_SIZE`]
    InvalidChunkSize,
    /// Download timeout is zero
    InvalidTimeout,
    /// QR module size is zero
    InvalidModuleSize,
    /// Staging path is empty
    InvalidStagingPath,
}

/// Image download configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FetchConfig {
    /// Bytes requested per network read (1..=MAX_CHUNK_SIZE)
    pub chunk_size: usize,
    /// Wall-clock budget for the whole download
    pub timeout_ms: u32,
    /// Pause when the network has nothing buffered
    pub idle_delay_ms: u32,
    /// Name of the staging object
    pub staging_path: String<MAX_PATH_LEN>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let mut staging_path = String::new();
        let _ = staging_path.push_str("/temp.jpg");
        Self {
            chunk_size: 512,
            timeout_ms: 15_000,
            idle_delay_ms: 1,
            staging_path,
        }
    }
}

/// QR rendering defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QrConfig {
    /// Pixels per module side
    pub module_size: u8,
    /// Light module color `[r, g, b]`
    pub background: [u8; 3],
    /// Dark module color `[r, g, b]`
    pub foreground: [u8; 3],
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            module_size: 4,
            background: [255, 255, 255],
            foreground: [0, 0, 0],
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub panel: PanelConfig,
    pub touch: TouchConfig,
    pub fetch: FetchConfig,
    pub qr: QrConfig,
}

impl BoardConfig {
    /// Create the default configuration for the JC3248W535EN board
    pub fn new() -> Self {
        Self::default()
    }

    /// Check values the drivers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.chunk_size == 0 || self.fetch.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize);
        }
        if self.fetch.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.fetch.staging_path.is_empty() {
            return Err(ConfigError::InvalidStagingPath);
        }
        if self.qr.module_size == 0 {
            return Err(ConfigError::InvalidModuleSize);
        }
        Ok(())
    }
}
