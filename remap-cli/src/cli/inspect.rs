use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use serde::Serialize;

use super::{Context, DecodedCode};
use crate::config::OutputFormat;
use crate::keymap_data::SavedKeymapData;

/// Decode every key of a saved keymap document
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Saved keymap JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    title: &'a str,
    product_name: &'a str,
    layers: Vec<BTreeMap<&'a str, DecodedCode>>,
}

impl InspectArgs {
    pub fn execute(&self, ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
        let data = SavedKeymapData::load(&self.file)
            .with_context(|| format!("Failed to inspect '{}'", self.file.display()))?;

        let layers: Vec<BTreeMap<&str, DecodedCode>> = data
            .keycodes
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|(pos, code)| (pos.as_str(), DecodedCode::new((*code).into(), &ctx.lookup)))
                    .collect()
            })
            .collect();

        match ctx.format {
            OutputFormat::Json => {
                let report = InspectReport {
                    title: &data.title,
                    product_name: &data.product_name,
                    layers,
                };
                ctx.write_json(out, &report)?;
            }
            OutputFormat::Text => {
                writeln!(out, "{} ({} layers)", data.title, layers.len())?;
                for (i, layer) in layers.iter().enumerate() {
                    writeln!(out, "layer {i}")?;
                    for (pos, decoded) in layer {
                        writeln!(out, "  {:<8}{}", pos, decoded.text_line(ctx.radix))?;
                    }
                }
            }
        }
        Ok(())
    }
}
