use std::io::Write;

use clap::Args;
use remap_types::KeycodeCompositionKind;
use serde::Serialize;
use strum::IntoEnumIterator;

use super::Context;
use crate::config::OutputFormat;

/// Print how the keycode space is divided between composition kinds
#[derive(Debug, Clone, Default, Args)]
pub struct RangesArgs {}

/// A contiguous run of keycodes. `kind` is `None` for unassigned codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeRange {
    pub kind: Option<KeycodeCompositionKind>,
    pub start: u16,
    pub end: u16,
}

/// The whole keycode space in ascending order, unassigned gaps included.
pub fn code_ranges() -> Vec<CodeRange> {
    let mut assigned: Vec<_> = KeycodeCompositionKind::iter()
        .map(|kind| {
            let range = kind.range();
            CodeRange {
                kind: Some(kind),
                start: *range.start(),
                end: *range.end(),
            }
        })
        .collect();
    assigned.sort_by_key(|r| r.start);

    let mut ranges = Vec::with_capacity(assigned.len() + 2);
    let mut next: u32 = 0;
    for range in assigned {
        if u32::from(range.start) > next {
            ranges.push(CodeRange {
                kind: None,
                start: next as u16,
                end: range.start - 1,
            });
        }
        next = u32::from(range.end) + 1;
        ranges.push(range);
    }
    ranges
}

impl RangesArgs {
    pub fn execute(&self, ctx: &Context, out: &mut dyn Write) -> anyhow::Result<()> {
        let ranges = code_ranges();
        match ctx.format {
            OutputFormat::Json => ctx.write_json(out, &ranges)?,
            OutputFormat::Text => {
                for r in &ranges {
                    let kind: &str = r.kind.map(Into::into).unwrap_or("unassigned");
                    writeln!(
                        out,
                        "{}..={}  {}",
                        ctx.radix.format(r.start.into()),
                        ctx.radix.format(r.end.into()),
                        kind
                    )?;
                }
            }
        }
        Ok(())
    }
}
