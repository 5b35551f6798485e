//! `remap` subcommands.
//!
//! Each subcommand writes to the given writer so it can be driven from tests.

pub mod decode;
pub mod inspect;
pub mod ranges;

use std::io::Write;

use serde::Serialize;

pub use decode::{DecodeArgs, DecodedCode};
pub use inspect::InspectArgs;
pub use ranges::RangesArgs;

use crate::config::{OutputFormat, Radix};
use crate::lookup::OverlayLookup;

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub format: OutputFormat,
    pub radix: Radix,
    pub lookup: OverlayLookup,
}

impl Context {
    /// Write `value` as pretty JSON followed by a newline.
    pub fn write_json<T: Serialize>(&self, out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}
