use std::io::Write;

use anyhow::Context as _;
use clap::Args;
use log::debug;
use remap_types::keymap::KeymapLookup;
use remap_types::{Composition, KeycodeCompositionKind, decode};
use serde::Serialize;

use super::Context;
use crate::config::{OutputFormat, Radix};
use crate::parse_code;

/// Classify keycodes and show what they do
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Keycodes, decimal or 0x-prefixed hex
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
}

/// One decoded keycode, as printed by `remap decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedCode {
    pub code: u32,
    pub kind: Option<KeycodeCompositionKind>,
    pub notation: Option<String>,
    pub composition: Option<Composition>,
}

impl DecodedCode {
    /// Decode a value which may be wider than a keycode.
    pub fn new<L: KeymapLookup + ?Sized>(value: u32, lookup: &L) -> Self {
        let composition = u16::try_from(value).ok().and_then(|code| decode(code, lookup));
        Self {
            code: value,
            kind: KeycodeCompositionKind::classify_raw(value),
            notation: composition.as_ref().map(ToString::to_string),
            composition,
        }
    }

    /// `<code>  <kind>  <notation>` on one line.
    pub fn text_line(&self, radix: Radix) -> String {
        let kind: &str = self.kind.map(Into::into).unwrap_or("-");
        let notation = match (&self.notation, u16::try_from(self.code)) {
            (Some(notation), _) => notation.as_str(),
            (None, Ok(_)) => "unassigned",
            (None, Err(_)) => "out of range",
        };
        format!("{:<8}{:<18}{}", radix.format(self.code), kind, notation)
    }
}

impl DecodeArgs {
    pub fn execute(&self, ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
        let decoded = self
            .codes
            .iter()
            .map(|raw| {
                let value = parse_code(raw).with_context(|| format!("Invalid keycode '{raw}'"))?;
                debug!("Decoding {raw} ({value:#06X})");
                Ok(DecodedCode::new(value, &ctx.lookup))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        match ctx.format {
            OutputFormat::Json => ctx.write_json(out, &decoded)?,
            OutputFormat::Text => {
                for d in &decoded {
                    writeln!(out, "{}", d.text_line(ctx.radix))?;
                }
            }
        }
        Ok(())
    }
}
