//! Keymap entries and the lookup which resolves a keycode to one.
//!
//! Compositions which embed a key never name it themselves. They ask a
//! [`KeymapLookup`] for the [`KeymapEntry`] of the embedded code, so the
//! caller decides where names and labels come from.
use core::fmt::Write;

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};
use strum::EnumCount;

use crate::keycode::{HidKeyCode, QuantumKeyCode};
use crate::kind::KeycodeCompositionKind;
use crate::modifier::{ModDirection, Modifiers};

pub const KEYCODE_NAME_SIZE: usize = 32;
pub const KEYCODE_LABEL_SIZE: usize = 32;
/// Room for every kind, each held at most once.
pub const MAX_ENTRY_KINDS: usize = KeycodeCompositionKind::COUNT;

pub type KeycodeLabel = String<KEYCODE_LABEL_SIZE>;

/// Copy `s` into a bounded string, dropping the characters that don't fit.
pub fn bounded<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeycodeName {
    pub long: String<KEYCODE_NAME_SIZE>,
    pub short: String<KEYCODE_NAME_SIZE>,
}

/// Display metadata of a known keycode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeycodeInfo {
    pub code: u16,
    pub name: KeycodeName,
    pub label: KeycodeLabel,
}

impl KeycodeInfo {
    pub fn new(code: u16, long: &str, short: &str, label: &str) -> Self {
        Self {
            code,
            name: KeycodeName {
                long: bounded(long),
                short: bounded(short),
            },
            label: bounded(label),
        }
    }
}

impl From<HidKeyCode> for KeycodeInfo {
    fn from(key: HidKeyCode) -> Self {
        KeycodeInfo::new(key as u16, key.long_name(), key.short_name(), key.label())
    }
}

impl From<QuantumKeyCode> for KeycodeInfo {
    fn from(key: QuantumKeyCode) -> Self {
        KeycodeInfo::new(key as u16, key.long_name(), key.short_name(), key.label())
    }
}

/// What a key does, as far as the lookup knows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeymapEntry {
    pub code: u16,
    /// The code isn't resolved to a known key
    pub is_any: bool,
    pub kinds: Vec<KeycodeCompositionKind, MAX_ENTRY_KINDS>,
    pub direction: ModDirection,
    pub modifiers: Modifiers,
    pub keycode_info: Option<KeycodeInfo>,
}

impl KeymapEntry {
    /// A bare entry: no kinds, no modifiers, no metadata.
    pub fn new(code: u16) -> Self {
        Self {
            code,
            is_any: false,
            kinds: Vec::new(),
            direction: ModDirection::Left,
            modifiers: Modifiers::new(),
            keycode_info: None,
        }
    }

    /// An entry for a code nothing is known about. Its label is the hex code.
    pub fn unknown(code: u16) -> Self {
        let mut label = KeycodeLabel::new();
        // 6 chars always fit
        let _ = write!(label, "{:#06X}", code);
        let mut entry = Self::new(code);
        entry.is_any = true;
        if let Some(kind) = KeycodeCompositionKind::classify(code) {
            entry = entry.with_kind(kind);
        }
        entry.keycode_info = Some(KeycodeInfo {
            code,
            name: KeycodeName {
                long: label.clone(),
                short: label.clone(),
            },
            label,
        });
        entry
    }

    pub fn with_info(mut self, info: KeycodeInfo) -> Self {
        self.keycode_info = Some(info);
        self
    }

    pub fn with_kind(mut self, kind: KeycodeCompositionKind) -> Self {
        if !self.kinds.contains(&kind) {
            let pushed = self.kinds.push(kind);
            debug_assert!(pushed.is_ok(), "kinds holds each kind at most once");
        }
        self
    }

    /// Short QMK name, if the entry is known by name.
    pub fn short_name(&self) -> Option<&str> {
        self.keycode_info.as_ref().map(|info| info.name.short.as_str())
    }

    pub fn long_name(&self) -> Option<&str> {
        self.keycode_info.as_ref().map(|info| info.name.long.as_str())
    }

    pub fn label(&self) -> Option<&str> {
        self.keycode_info.as_ref().map(|info| info.label.as_str())
    }
}

/// Resolve a keycode to its keymap entry.
///
/// Implementations must be total: a code nobody knows still gets an entry,
/// typically [`KeymapEntry::unknown`].
pub trait KeymapLookup {
    fn keymap(&self, code: u16) -> KeymapEntry;
}

impl<F> KeymapLookup for F
where
    F: Fn(u16) -> KeymapEntry,
{
    fn keymap(&self, code: u16) -> KeymapEntry {
        self(code)
    }
}

/// The built-in table of basic and quantum keycodes.
#[derive(Debug, Default, Copy, Clone)]
pub struct KeycodeTable;

impl KeycodeTable {
    /// Metadata of a known keycode.
    pub fn info(&self, code: u16) -> Option<KeycodeInfo> {
        match u8::try_from(code) {
            Ok(byte) => HidKeyCode::from_repr(byte).map(KeycodeInfo::from),
            Err(_) => QuantumKeyCode::from_repr(code).map(KeycodeInfo::from),
        }
    }
}

impl KeymapLookup for KeycodeTable {
    fn keymap(&self, code: u16) -> KeymapEntry {
        match self.info(code) {
            Some(info) => {
                let mut entry = KeymapEntry::new(code).with_info(info);
                if let Some(kind) = KeycodeCompositionKind::classify(code) {
                    entry = entry.with_kind(kind);
                }
                entry
            }
            None => KeymapEntry::unknown(code),
        }
    }
}
