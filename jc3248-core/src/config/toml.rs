//! TOML configuration loader
//!
//! Example:
//!
//! ```toml
//! [touch]
//! address = 0x3B
//! reset_low_ms = 200
//!
//! [fetch]
//! chunk_size = 1024
//! timeout_ms = 10000
//!
//! [qr]
//! module_size = 3
//! foreground = [0, 0, 128]
//! ```
//!
//! Sections and keys that are left out keep their board defaults.

use super::types::{BoardConfig, ConfigError};

/// Parse and validate a TOML board configuration
pub fn parse_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let config: BoardConfig = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let input = r#"
            [touch]
            address = 0x38
            reset_low_ms = 50

            [fetch]
            chunk_size = 1024
            staging_path = "/img.bin"

            [qr]
            foreground = [0, 0, 128]
        "#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.touch.address, 0x38);
        assert_eq!(config.touch.reset_low_ms, 50);
        assert_eq!(config.touch.reset_high_ms, 200);
        assert_eq!(config.fetch.chunk_size, 1024);
        assert_eq!(config.fetch.timeout_ms, 15_000);
        assert_eq!(config.fetch.staging_path.as_str(), "/img.bin");
        assert_eq!(config.qr.foreground, [0, 0, 128]);
        assert_eq!(config.qr.module_size, 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_eq!(
            parse_config("[fetch]\nchunk_size = 0\n"),
            Err(ConfigError::InvalidChunkSize)
        );
        assert_eq!(parse_config("[fetch\n"), Err(ConfigError::Parse));
    }
}
