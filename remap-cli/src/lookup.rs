use std::collections::BTreeMap;

use remap_types::KeycodeTable;
use remap_types::keymap::{KeycodeInfo, KeymapEntry, KeymapLookup, bounded};

/// The built-in keycode table with user label overrides on top.
#[derive(Debug, Clone, Default)]
pub struct OverlayLookup {
    table: KeycodeTable,
    labels: BTreeMap<u16, String>,
}

impl OverlayLookup {
    pub fn new(labels: BTreeMap<u16, String>) -> Self {
        Self {
            table: KeycodeTable,
            labels,
        }
    }
}

impl KeymapLookup for OverlayLookup {
    fn keymap(&self, code: u16) -> KeymapEntry {
        let mut entry = self.table.keymap(code);
        let Some(label) = self.labels.get(&code) else {
            return entry;
        };
        match entry.keycode_info.as_mut() {
            Some(info) if !entry.is_any => info.label = bounded(label),
            _ => {
                // An unknown code becomes known under its label
                entry.is_any = false;
                entry.keycode_info = Some(KeycodeInfo::new(code, label, label, label));
            }
        }
        entry
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_override_known_label() {
        let lookup = OverlayLookup::new(BTreeMap::from([(0x04, "A!".to_string())]));
        let entry = lookup.keymap(0x04);
        assert_eq!(entry.label(), Some("A!"));
        assert_eq!(entry.short_name(), Some("KC_A"));
        assert_eq!(lookup.keymap(0x05).label(), Some("B"));
    }

    #[test]
    fn test_override_unknown_code() {
        let lookup = OverlayLookup::new(BTreeMap::from([(0x5CFF, "Magic".to_string())]));
        let entry = lookup.keymap(0x5CFF);
        assert!(!entry.is_any);
        assert_eq!(entry.short_name(), Some("Magic"));
    }
}
