//! Modifier keys and their bit encoding inside keycodes.
//!
//! Several composition families carry a modifier set. The set is stored as a
//! 4-bit mask (Ctrl, Shift, Alt, Gui from bit 0 upwards) with an optional
//! direction bit directly above it selecting the left- or right-hand keys.
//! Where that 5-bit field lives inside the 16-bit code is decided by each
//! composition, see [`ModifierCombination::from_code`] and
//! [`ModifierCombination::into_code`].
use core::ops::BitOr;

use bitfield_struct::bitfield;
use heapless::Vec;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Which hand's modifier keys a modifier set refers to.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModDirection {
    #[default]
    Left = 0,
    Right = 1,
}

/// A single modifier key, valued by its bit in the 4-bit mask.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize, EnumIter)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Modifier {
    Ctrl = 0b0001,
    Shift = 0b0010,
    Alt = 0b0100,
    Gui = 0b1000,
}

pub const MOD_LEFT: ModDirection = ModDirection::Left;
pub const MOD_RIGHT: ModDirection = ModDirection::Right;

pub const MOD_CTL: Modifier = Modifier::Ctrl;
pub const MOD_SFT: Modifier = Modifier::Shift;
pub const MOD_ALT: Modifier = Modifier::Alt;
pub const MOD_GUI: Modifier = Modifier::Gui;

/// The direction bit, as it appears above the mask.
pub const MOD_RIGHT_BIT: u8 = 0b1_0000;

/// All modifiers that can be held at once, in canonical order.
pub type Modifiers = Vec<Modifier, 4>;

impl Modifier {
    /// Bit value of this modifier for the given hand: `0x01..=0x08` on the
    /// left, `0x11..=0x18` on the right.
    pub const fn bits(self, direction: ModDirection) -> u8 {
        match direction {
            ModDirection::Left => self as u8,
            ModDirection::Right => MOD_RIGHT_BIT | self as u8,
        }
    }

    /// QMK name of the modifier bit, e.g. `MOD_LCTL`.
    pub const fn qmk_name(self, direction: ModDirection) -> &'static str {
        match (direction, self) {
            (ModDirection::Left, Modifier::Ctrl) => "MOD_LCTL",
            (ModDirection::Left, Modifier::Shift) => "MOD_LSFT",
            (ModDirection::Left, Modifier::Alt) => "MOD_LALT",
            (ModDirection::Left, Modifier::Gui) => "MOD_LGUI",
            (ModDirection::Right, Modifier::Ctrl) => "MOD_RCTL",
            (ModDirection::Right, Modifier::Shift) => "MOD_RSFT",
            (ModDirection::Right, Modifier::Alt) => "MOD_RALT",
            (ModDirection::Right, Modifier::Gui) => "MOD_RGUI",
        }
    }

    /// Name of the QMK modifier-wrapping function, e.g. `LCTL` in `LCTL(KC_A)`.
    pub const fn qmk_function(self, direction: ModDirection) -> &'static str {
        match (direction, self) {
            (ModDirection::Left, Modifier::Ctrl) => "LCTL",
            (ModDirection::Left, Modifier::Shift) => "LSFT",
            (ModDirection::Left, Modifier::Alt) => "LALT",
            (ModDirection::Left, Modifier::Gui) => "LGUI",
            (ModDirection::Right, Modifier::Ctrl) => "RCTL",
            (ModDirection::Right, Modifier::Shift) => "RSFT",
            (ModDirection::Right, Modifier::Alt) => "RALT",
            (ModDirection::Right, Modifier::Gui) => "RGUI",
        }
    }
}

/// To represent all combinations of modifiers, 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq, Hash)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const MASK_BITS: u8 = 0b0_1111;
    pub const FIELD_BITS: u8 = 0b1_1111;

    /// Build a combination from a direction and any number of modifiers.
    /// Repeated modifiers are merged.
    pub fn from_parts(direction: ModDirection, modifiers: &[Modifier]) -> Self {
        let mask = modifiers.iter().fold(0u8, |acc, m| acc | *m as u8);
        Self::from_mask(direction, mask)
    }

    /// Build a combination from a direction and a raw 4-bit mask. Bits above the
    /// mask are discarded.
    pub const fn from_mask(direction: ModDirection, mask: u8) -> Self {
        let right = matches!(direction, ModDirection::Right);
        Self::from_bits(mask & Self::MASK_BITS).with_right(right)
    }

    /// Extract the 5-bit field starting at `offset` of `code`.
    pub const fn from_code(code: u16, offset: u32) -> Self {
        Self::from_bits(((code >> offset) as u8) & Self::FIELD_BITS)
    }

    /// Place the 5-bit field at `offset` and OR it with `base`.
    pub const fn into_code(self, base: u16, offset: u32) -> u16 {
        base | (((self.into_bits() & Self::FIELD_BITS) as u16) << offset)
    }

    pub const fn direction(self) -> ModDirection {
        if self.right() { ModDirection::Right } else { ModDirection::Left }
    }

    /// The 4-bit modifier mask without the direction bit.
    pub const fn mask(self) -> u8 {
        self.into_bits() & Self::MASK_BITS
    }

    pub const fn contains(self, modifier: Modifier) -> bool {
        self.mask() & modifier as u8 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.mask() == 0
    }

    /// Set modifiers in canonical order: Ctrl, Shift, Alt, Gui.
    pub fn modifiers(self) -> Modifiers {
        Modifier::iter().filter(|m| self.contains(*m)).collect()
    }
}
