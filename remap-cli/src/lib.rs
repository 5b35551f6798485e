//! Host-side tooling around `remap-types`: configuration, saved keymap
//! documents and the `remap` command line.

use std::num::ParseIntError;

pub mod cli;
pub mod config;
pub mod keymap_data;
pub mod lookup;

/// Parse a keycode written in decimal or as `0x`-prefixed hex.
///
/// The result may be wider than a keycode; callers decide what to do with it.
pub fn parse_code(s: &str) -> Result<u32, ParseIntError> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(parse_code("0x4204"), Ok(0x4204));
        assert_eq!(parse_code("0X5bf1"), Ok(0x5BF1));
        assert_eq!(parse_code("16900"), Ok(16900));
        assert_eq!(parse_code(" 0x5C_00 "), Ok(0x5C00));
        assert_eq!(parse_code("0x56000"), Ok(0x56000));
        assert!(parse_code("KC_A").is_err());
        assert!(parse_code("0x").is_err());
    }
}
