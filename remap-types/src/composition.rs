//! Structured forms of 16-bit keycodes.
//!
//! Each composition is an immutable value built either from its fields, when
//! assembling a keycode to write to a keyboard, or from a keycode read back from
//! one. Building from fields never fails: every field is masked to the bit width
//! it occupies in the keycode.
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};
use strum::FromRepr;

use crate::error::InvalidVariantError;
use crate::keymap::{KeymapEntry, KeymapLookup};
use crate::kind::KeycodeCompositionKind;
use crate::modifier::{ModDirection, Modifier, ModifierCombination, Modifiers};

const KEY_MASK: u16 = 0x00FF;

/// A composition family with a fixed keycode range.
pub trait KeycodeComposition: Sized {
    const KIND: KeycodeCompositionKind;

    /// The 16-bit keycode.
    fn code(&self) -> u16;

    /// Decode `code`, which must belong to [`Self::KIND`].
    ///
    /// Bits outside the fields of the composition are ignored.
    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self;

    fn try_decode<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Result<Self, InvalidVariantError> {
        if Self::KIND.contains(code) {
            Ok(Self::decode_unchecked(code, lookup))
        } else {
            Err(InvalidVariantError::new(code, Self::KIND))
        }
    }
}

/// A plain key, `0x0000..=0x00FF`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicComposition {
    key: KeymapEntry,
}

impl BasicComposition {
    pub fn new(key: KeymapEntry) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeymapEntry {
        &self.key
    }
}

impl KeycodeComposition for BasicComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::Basic;

    fn code(&self) -> u16 {
        self.key.code & KEY_MASK
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        Self::new(lookup.keymap(code & KEY_MASK))
    }
}

/// A key sent together with modifiers, `0x0100..=0x1FFF`.
///
/// | 15..13 | 12  | 11..8 | 7..0 |
/// | ------ | --- | ----- | ---- |
/// | 000    | L/R | mods  | key  |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModsComposition {
    modifiers: ModifierCombination,
    key: KeymapEntry,
}

impl ModsComposition {
    pub fn new(direction: ModDirection, modifiers: &[Modifier], key: KeymapEntry) -> Self {
        Self {
            modifiers: ModifierCombination::from_parts(direction, modifiers),
            key,
        }
    }

    pub fn direction(&self) -> ModDirection {
        self.modifiers.direction()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.modifiers()
    }

    pub fn modifier_combination(&self) -> ModifierCombination {
        self.modifiers
    }

    pub fn key(&self) -> &KeymapEntry {
        &self.key
    }
}

impl KeycodeComposition for ModsComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::Mods;

    fn code(&self) -> u16 {
        self.modifiers.into_code(self.key.code & KEY_MASK, 8)
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        Self {
            modifiers: ModifierCombination::from_code(code, 8),
            key: lookup.keymap(code & KEY_MASK),
        }
    }
}

/// Legacy action function, `0x2000..=0x2FFF`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FunctionComposition {
    function_id: u16,
}

impl FunctionComposition {
    pub const ID_MASK: u16 = 0x0FFF;

    pub const fn new(function_id: u16) -> Self {
        Self {
            function_id: function_id & Self::ID_MASK,
        }
    }

    pub const fn function_id(&self) -> u16 {
        self.function_id
    }
}

impl KeycodeComposition for FunctionComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::Function;

    fn code(&self) -> u16 {
        0x2000 | self.function_id
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self::new(code)
    }
}

/// Legacy macro, `0x3000..=0x3FFF`. The top bit of the id marks a tap macro.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroComposition {
    macro_id: u16,
}

impl MacroComposition {
    pub const ID_MASK: u16 = 0x0FFF;
    pub const TAP_BIT: u16 = 0x0800;

    pub const fn new(macro_id: u16) -> Self {
        Self {
            macro_id: macro_id & Self::ID_MASK,
        }
    }

    pub const fn macro_id(&self) -> u16 {
        self.macro_id
    }

    pub const fn is_tap(&self) -> bool {
        self.macro_id & Self::TAP_BIT != 0
    }
}

impl KeycodeComposition for MacroComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::Macro;

    fn code(&self) -> u16 {
        0x3000 | self.macro_id
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self::new(code)
    }
}

/// Layer when held, key when tapped, `0x4000..=0x4FFF`. Layers 0..=15.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerTapComposition {
    layer: u8,
    key: KeymapEntry,
}

impl LayerTapComposition {
    pub const LAYER_MASK: u8 = 0x0F;

    pub fn new(layer: u8, key: KeymapEntry) -> Self {
        Self {
            layer: layer & Self::LAYER_MASK,
            key,
        }
    }

    pub fn layer(&self) -> u8 {
        self.layer
    }

    pub fn key(&self) -> &KeymapEntry {
        &self.key
    }
}

impl KeycodeComposition for LayerTapComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::LayerTap;

    fn code(&self) -> u16 {
        0x4000 | ((self.layer as u16) << 8) | (self.key.code & KEY_MASK)
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        Self::new((code >> 8) as u8, lookup.keymap(code & KEY_MASK))
    }
}

/// Activate a layer and deactivate all others, `0x5000..=0x50FF`.
///
/// Encoded as `0x5010 | layer` with layers 0..=15; the other codes of the
/// range decode by their low nibble.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToComposition {
    layer: u8,
}

impl ToComposition {
    pub const LAYER_MASK: u8 = 0x0F;

    pub const fn new(layer: u8) -> Self {
        Self {
            layer: layer & Self::LAYER_MASK,
        }
    }

    pub const fn layer(&self) -> u8 {
        self.layer
    }
}

impl KeycodeComposition for ToComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::To;

    fn code(&self) -> u16 {
        0x5010 | self.layer as u16
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self::new(code as u8)
    }
}

/// Compositions made of a fixed high byte and a layer in the low byte.
macro_rules! layer_composition {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $base:literal) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name {
            layer: u8,
        }

        impl $name {
            pub const fn new(layer: u8) -> Self {
                Self { layer }
            }

            pub const fn layer(&self) -> u8 {
                self.layer
            }
        }

        impl KeycodeComposition for $name {
            const KIND: KeycodeCompositionKind = KeycodeCompositionKind::$kind;

            fn code(&self) -> u16 {
                $base | self.layer as u16
            }

            fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
                Self::new(code as u8)
            }
        }
    };
}

layer_composition!(
    /// Layer active while held, `0x5100..=0x51FF`.
    MomentaryComposition,
    Momentary,
    0x5100
);
layer_composition!(
    /// Set the default layer, `0x5200..=0x52FF`.
    DefLayerComposition,
    DefLayer,
    0x5200
);
layer_composition!(
    /// Toggle a layer, `0x5300..=0x53FF`.
    ToggleLayerComposition,
    ToggleLayer,
    0x5300
);
layer_composition!(
    /// Layer active for the next key press only, `0x5400..=0x54FF`.
    OneShotLayerComposition,
    OneShotLayer,
    0x5400
);
layer_composition!(
    /// Momentary when held, toggle when tapped repeatedly, `0x5800..=0x58FF`.
    LayerTapToggleComposition,
    LayerTapToggle,
    0x5800
);

/// Modifiers held for the next key press only, `0x5500..=0x55FF`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OneShotModComposition {
    modifiers: ModifierCombination,
}

impl OneShotModComposition {
    pub fn new(direction: ModDirection, modifiers: &[Modifier]) -> Self {
        Self {
            modifiers: ModifierCombination::from_parts(direction, modifiers),
        }
    }

    pub fn direction(&self) -> ModDirection {
        self.modifiers.direction()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.modifiers()
    }

    pub fn modifier_combination(&self) -> ModifierCombination {
        self.modifiers
    }
}

impl KeycodeComposition for OneShotModComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::OneShotMod;

    fn code(&self) -> u16 {
        self.modifiers.into_code(0x5500, 0)
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self {
            modifiers: ModifierCombination::from_code(code, 0),
        }
    }
}

/// Tap dance, `0x5700..=0x57FF`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceComposition {
    id: u8,
}

impl TapDanceComposition {
    pub const fn new(id: u8) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> u8 {
        self.id
    }
}

impl KeycodeComposition for TapDanceComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::TapDance;

    fn code(&self) -> u16 {
        0x5700 | self.id as u16
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self::new(code as u8)
    }
}

/// Layer active with modifiers held, `0x5900..=0x59FF`.
///
/// Layers 0..=15. The modifiers have no direction bit and are always left-hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerModComposition {
    layer: u8,
    modifiers: ModifierCombination,
}

impl LayerModComposition {
    pub const LAYER_MASK: u8 = 0x0F;

    pub fn new(layer: u8, modifiers: &[Modifier]) -> Self {
        Self {
            layer: layer & Self::LAYER_MASK,
            modifiers: ModifierCombination::from_parts(ModDirection::Left, modifiers),
        }
    }

    pub fn layer(&self) -> u8 {
        self.layer
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.modifiers()
    }

    pub fn modifier_combination(&self) -> ModifierCombination {
        self.modifiers
    }
}

impl KeycodeComposition for LayerModComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::LayerMod;

    fn code(&self) -> u16 {
        0x5900 | ((self.layer as u16) << 4) | self.modifiers.mask() as u16
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self {
            layer: ((code >> 4) as u8) & Self::LAYER_MASK,
            modifiers: ModifierCombination::from_mask(ModDirection::Left, code as u8),
        }
    }
}

/// Swap-hands operations, stored in the low byte of a swap-hands keycode.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum SwapHandsOption {
    Toggle = 0xF0,
    TapToggle = 0xF1,
    /// Swap while held
    OnOff = 0xF2,
    /// Unswap while held
    OffOn = 0xF3,
    Off = 0xF4,
    On = 0xF5,
    OneShot = 0xF6,
}

pub const OP_SH_TOGGLE: SwapHandsOption = SwapHandsOption::Toggle;
pub const OP_SH_TAP_TOGGLE: SwapHandsOption = SwapHandsOption::TapToggle;
pub const OP_SH_ON_OFF: SwapHandsOption = SwapHandsOption::OnOff;
pub const OP_SH_OFF_ON: SwapHandsOption = SwapHandsOption::OffOn;
pub const OP_SH_OFF: SwapHandsOption = SwapHandsOption::Off;
pub const OP_SH_ON: SwapHandsOption = SwapHandsOption::On;
pub const OP_SH_ONESHOT: SwapHandsOption = SwapHandsOption::OneShot;

impl SwapHandsOption {
    pub const fn qmk_name(self) -> &'static str {
        match self {
            SwapHandsOption::Toggle => "SH_TG",
            SwapHandsOption::TapToggle => "SH_TT",
            SwapHandsOption::OnOff => "SH_MON",
            SwapHandsOption::OffOn => "SH_MOFF",
            SwapHandsOption::Off => "SH_OFF",
            SwapHandsOption::On => "SH_ON",
            SwapHandsOption::OneShot => "SH_OS",
        }
    }
}

/// Swap hands, `0x5B00..=0x5BFF`: either swap while holding a key, or one of
/// the [`SwapHandsOption`]s.
///
/// A key whose code collides with an option byte encodes to that option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapHandsComposition {
    Key(KeymapEntry),
    Option(SwapHandsOption),
}

impl SwapHandsComposition {
    pub fn with_key(key: KeymapEntry) -> Self {
        SwapHandsComposition::Key(key)
    }

    pub fn with_option(option: SwapHandsOption) -> Self {
        SwapHandsComposition::Option(option)
    }

    pub fn is_swap_hands_option(&self) -> bool {
        matches!(self, SwapHandsComposition::Option(_))
    }

    pub fn key(&self) -> Option<&KeymapEntry> {
        match self {
            SwapHandsComposition::Key(key) => Some(key),
            SwapHandsComposition::Option(_) => None,
        }
    }

    pub fn swap_hands_option(&self) -> Option<SwapHandsOption> {
        match self {
            SwapHandsComposition::Key(_) => None,
            SwapHandsComposition::Option(option) => Some(*option),
        }
    }
}

impl From<SwapHandsOption> for SwapHandsComposition {
    fn from(option: SwapHandsOption) -> Self {
        SwapHandsComposition::Option(option)
    }
}

impl KeycodeComposition for SwapHandsComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::SwapHands;

    fn code(&self) -> u16 {
        match self {
            SwapHandsComposition::Key(key) => 0x5B00 | (key.code & KEY_MASK),
            SwapHandsComposition::Option(option) => 0x5B00 | *option as u16,
        }
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        match SwapHandsOption::from_repr(code as u8) {
            Some(option) => SwapHandsComposition::Option(option),
            None => SwapHandsComposition::Key(lookup.keymap(code & KEY_MASK)),
        }
    }
}

/// Modifiers when held, key when tapped, `0x6000..=0x7FFF`.
///
/// | 15..13 | 12  | 11..8 | 7..0 |
/// | ------ | --- | ----- | ---- |
/// | 011    | L/R | mods  | key  |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModTapComposition {
    modifiers: ModifierCombination,
    key: KeymapEntry,
}

impl ModTapComposition {
    pub fn new(direction: ModDirection, modifiers: &[Modifier], key: KeymapEntry) -> Self {
        Self {
            modifiers: ModifierCombination::from_parts(direction, modifiers),
            key,
        }
    }

    pub fn direction(&self) -> ModDirection {
        self.modifiers.direction()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers.modifiers()
    }

    pub fn modifier_combination(&self) -> ModifierCombination {
        self.modifiers
    }

    pub fn key(&self) -> &KeymapEntry {
        &self.key
    }
}

impl KeycodeComposition for ModTapComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::ModTap;

    fn code(&self) -> u16 {
        self.modifiers.into_code(0x6000 | (self.key.code & KEY_MASK), 8)
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        Self {
            modifiers: ModifierCombination::from_code(code, 8),
            key: lookup.keymap(code & KEY_MASK),
        }
    }
}

/// A unicode character from the basic multilingual plane, `0x8000..=0xFFFF`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnicodeComposition {
    char_code: u16,
}

impl UnicodeComposition {
    pub const CHAR_MASK: u16 = 0x7FFF;

    pub const fn new(char_code: u16) -> Self {
        Self {
            char_code: char_code & Self::CHAR_MASK,
        }
    }

    pub const fn char_code(&self) -> u16 {
        self.char_code
    }

    /// The character, if the code point is a valid scalar value.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.char_code as u32)
    }
}

impl KeycodeComposition for UnicodeComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::Unicode;

    fn code(&self) -> u16 {
        0x8000 | self.char_code
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, _lookup: &L) -> Self {
        Self::new(code)
    }
}

/// Quantum keycodes with no inner structure, `0x5C00..=0x5FFF`. The code is passed through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LooseKeycodeComposition {
    key: KeymapEntry,
}

impl LooseKeycodeComposition {
    pub fn new(key: KeymapEntry) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeymapEntry {
        &self.key
    }
}

impl KeycodeComposition for LooseKeycodeComposition {
    const KIND: KeycodeCompositionKind = KeycodeCompositionKind::LooseKeycode;

    fn code(&self) -> u16 {
        self.key.code
    }

    fn decode_unchecked<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Self {
        Self::new(lookup.keymap(code))
    }
}

macro_rules! composition_enum {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Any decoded keycode.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Composition {
            $( $variant($ty), )*
        }

        impl Composition {
            pub fn code(&self) -> u16 {
                match self {
                    $( Composition::$variant(c) => c.code(), )*
                }
            }

            pub fn kind(&self) -> KeycodeCompositionKind {
                match self {
                    $( Composition::$variant(_) => <$ty as KeycodeComposition>::KIND, )*
                }
            }

            /// Decode a code of the given kind.
            pub(crate) fn decode_kind<L: KeymapLookup + ?Sized>(
                kind: KeycodeCompositionKind,
                code: u16,
                lookup: &L,
            ) -> Self {
                match kind {
                    $(
                        KeycodeCompositionKind::$variant => {
                            Composition::$variant(<$ty>::decode_unchecked(code, lookup))
                        }
                    )*
                }
            }
        }

        $(
            impl From<$ty> for Composition {
                fn from(c: $ty) -> Self {
                    Composition::$variant(c)
                }
            }
        )*
    };
}

composition_enum!(
    Basic(BasicComposition),
    Mods(ModsComposition),
    Function(FunctionComposition),
    Macro(MacroComposition),
    LayerTap(LayerTapComposition),
    To(ToComposition),
    Momentary(MomentaryComposition),
    DefLayer(DefLayerComposition),
    ToggleLayer(ToggleLayerComposition),
    OneShotLayer(OneShotLayerComposition),
    OneShotMod(OneShotModComposition),
    TapDance(TapDanceComposition),
    LayerTapToggle(LayerTapToggleComposition),
    LayerMod(LayerModComposition),
    SwapHands(SwapHandsComposition),
    ModTap(ModTapComposition),
    Unicode(UnicodeComposition),
    LooseKeycode(LooseKeycodeComposition),
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::modifier::{MOD_ALT, MOD_CTL, MOD_GUI, MOD_LEFT, MOD_RIGHT, MOD_SFT};

    const ALL_MODS: [Modifier; 4] = [MOD_CTL, MOD_SFT, MOD_ALT, MOD_GUI];

    fn key(code: u16) -> KeymapEntry {
        KeymapEntry::new(code)
    }

    #[test]
    fn test_basic_code() {
        assert_eq!(BasicComposition::new(key(0x04)).code(), 0x0004);
        assert_eq!(BasicComposition::new(key(0xFF)).code(), 0x00FF);
        assert_eq!(BasicComposition::new(key(0x100)).code(), 0x0000);
    }

    #[test]
    fn test_mods_code() {
        assert_eq!(ModsComposition::new(MOD_RIGHT, &ALL_MODS, key(0x04)).code(), 0x1F04);
        assert_eq!(ModsComposition::new(MOD_LEFT, &ALL_MODS, key(0x00)).code(), 0x0F00);
        assert_eq!(ModsComposition::new(MOD_LEFT, &ALL_MODS, key(0xFF)).code(), 0x0FFF);
        assert_eq!(ModsComposition::new(MOD_RIGHT, &ALL_MODS, key(0xFF)).code(), 0x1FFF);
        assert_eq!(ModsComposition::new(MOD_LEFT, &ALL_MODS, key(0x100)).code(), 0x0F00);
        assert_eq!(ModsComposition::new(MOD_RIGHT, &ALL_MODS, key(0x100)).code(), 0x1F00);
    }

    #[test]
    fn test_function_and_macro_code() {
        assert_eq!(FunctionComposition::new(0).code(), 0x2000);
        assert_eq!(FunctionComposition::new(0xFFF).code(), 0x2FFF);
        assert_eq!(FunctionComposition::new(0x1000).code(), 0x2000);

        let m = MacroComposition::new(0);
        assert_eq!(m.code(), 0x3000);
        assert!(!m.is_tap());
        let m = MacroComposition::new(0xFFF);
        assert_eq!(m.code(), 0x3FFF);
        assert!(m.is_tap());
        assert_eq!(MacroComposition::new(0x1000).code(), 0x3000);
    }

    #[test]
    fn test_layer_tap_code() {
        assert_eq!(LayerTapComposition::new(2, key(0x04)).code(), 0x4204);
        assert_eq!(LayerTapComposition::new(0, key(0x00)).code(), 0x4000);
        assert_eq!(LayerTapComposition::new(15, key(0xFF)).code(), 0x4FFF);
        assert_eq!(LayerTapComposition::new(16, key(0x100)).code(), 0x4000);
    }

    #[test]
    fn test_layer_codes() {
        assert_eq!(ToComposition::new(4).code(), 0x5014);
        assert_eq!(ToComposition::new(0).code(), 0x5010);
        assert_eq!(ToComposition::new(15).code(), 0x501F);
        assert_eq!(ToComposition::new(16).code(), 0x5010);

        assert_eq!(MomentaryComposition::new(4).code(), 0x5104);
        assert_eq!(DefLayerComposition::new(15).code(), 0x520F);
        assert_eq!(ToggleLayerComposition::new(0).code(), 0x5300);
        assert_eq!(OneShotLayerComposition::new(4).code(), 0x5404);
        assert_eq!(LayerTapToggleComposition::new(15).code(), 0x580F);
        assert_eq!(MomentaryComposition::new(0xFF).code(), 0x51FF);
    }

    #[test]
    fn test_one_shot_mod_code() {
        assert_eq!(OneShotModComposition::new(MOD_RIGHT, &ALL_MODS).code(), 0x551F);
        assert_eq!(OneShotModComposition::new(MOD_LEFT, &ALL_MODS).code(), 0x550F);
        assert_eq!(OneShotModComposition::new(MOD_RIGHT, &[]).code(), 0x5510);
        assert_eq!(OneShotModComposition::new(MOD_LEFT, &[]).code(), 0x5500);
    }

    #[test]
    fn test_tap_dance_code() {
        assert_eq!(TapDanceComposition::new(2).code(), 0x5702);
        assert_eq!(TapDanceComposition::new(0).code(), 0x5700);
        assert_eq!(TapDanceComposition::new(0xFF).code(), 0x57FF);
    }

    #[test]
    fn test_layer_mod_code() {
        assert_eq!(LayerModComposition::new(4, &[MOD_CTL, MOD_ALT]).code(), 0x5945);
        assert_eq!(LayerModComposition::new(0, &[]).code(), 0x5900);
        assert_eq!(LayerModComposition::new(15, &[MOD_CTL, MOD_ALT, MOD_GUI, MOD_SFT]).code(), 0x59FF);
        assert_eq!(LayerModComposition::new(16, &[]).code(), 0x5900);
    }

    #[test]
    fn test_swap_hands_code() {
        assert_eq!(SwapHandsComposition::with_key(key(0x04)).code(), 0x5B04);
        assert_eq!(SwapHandsComposition::with_key(key(0x00)).code(), 0x5B00);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_TOGGLE).code(), 0x5BF0);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_TAP_TOGGLE).code(), 0x5BF1);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_ON_OFF).code(), 0x5BF2);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_OFF_ON).code(), 0x5BF3);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_OFF).code(), 0x5BF4);
        assert_eq!(SwapHandsComposition::with_option(OP_SH_ON).code(), 0x5BF5);
        assert_eq!(SwapHandsComposition::from(OP_SH_ONESHOT).code(), 0x5BF6);
    }

    #[test]
    fn test_swap_hands_accessors() {
        let sh = SwapHandsComposition::with_option(OP_SH_OFF);
        assert!(sh.is_swap_hands_option());
        assert!(sh.key().is_none());
        assert_eq!(sh.swap_hands_option(), Some(OP_SH_OFF));

        let sh = SwapHandsComposition::with_key(key(0x04));
        assert!(!sh.is_swap_hands_option());
        assert_eq!(sh.key().map(|k| k.code), Some(0x04));
        assert_eq!(sh.swap_hands_option(), None);
    }

    #[test]
    fn test_mod_tap_code() {
        assert_eq!(ModTapComposition::new(MOD_RIGHT, &ALL_MODS, key(0x04)).code(), 0x7F04);
        assert_eq!(ModTapComposition::new(MOD_LEFT, &ALL_MODS, key(0x00)).code(), 0x6F00);
        assert_eq!(ModTapComposition::new(MOD_RIGHT, &ALL_MODS, key(0x00)).code(), 0x7F00);
        assert_eq!(ModTapComposition::new(MOD_LEFT, &ALL_MODS, key(0xFF)).code(), 0x6FFF);
        assert_eq!(ModTapComposition::new(MOD_RIGHT, &ALL_MODS, key(0xFF)).code(), 0x7FFF);
        assert_eq!(ModTapComposition::new(MOD_LEFT, &ALL_MODS, key(0x100)).code(), 0x6F00);
        assert_eq!(ModTapComposition::new(MOD_LEFT, &[], key(0xFF)).code(), 0x60FF);
        assert_eq!(ModTapComposition::new(MOD_RIGHT, &[], key(0xFF)).code(), 0x70FF);
    }

    #[test]
    fn test_unicode_code() {
        assert_eq!(UnicodeComposition::new(0).code(), 0x8000);
        assert_eq!(UnicodeComposition::new(0x7FFF).code(), 0xFFFF);
        assert_eq!(UnicodeComposition::new(0x8000).code(), 0x8000);
        assert_eq!(UnicodeComposition::new(0xFFFF).code(), 0xFFFF);
        assert_eq!(UnicodeComposition::new(0x3042).as_char(), Some('あ'));
    }

    #[test]
    fn test_loose_keycode_code() {
        assert_eq!(LooseKeycodeComposition::new(key(0x5C00)).code(), 0x5C00);
        assert_eq!(LooseKeycodeComposition::new(key(0x5FFF)).code(), 0x5FFF);
    }

    #[test]
    fn test_decode_ignores_unused_bits() {
        let lookup = |code: u16| KeymapEntry::new(code);
        // Bits 5..=7 are not part of the one-shot modifier field
        let osm = OneShotModComposition::decode_unchecked(0x55F5, &lookup);
        assert_eq!(osm.direction(), MOD_RIGHT);
        assert_eq!(osm.modifiers().as_slice(), &[MOD_CTL, MOD_ALT]);
        assert_eq!(osm.code(), 0x5515);

        let to = ToComposition::decode_unchecked(0x5005, &lookup);
        assert_eq!(to.layer(), 5);
        assert_eq!(to.code(), 0x5015);
    }

    #[test]
    fn test_try_decode_wrong_kind() {
        let lookup = |code: u16| KeymapEntry::new(code);
        let err = BasicComposition::try_decode(0x0100, &lookup).unwrap_err();
        assert_eq!(err.expected, KeycodeCompositionKind::Basic);
        assert_eq!(err.actual, Some(KeycodeCompositionKind::Mods));
        assert!(MomentaryComposition::try_decode(0x5104, &lookup).is_ok());
    }

    #[test]
    fn test_composition_from() {
        let c: Composition = MomentaryComposition::new(1).into();
        assert_eq!(c.kind(), KeycodeCompositionKind::Momentary);
        assert_eq!(c.code(), 0x5101);
    }
}
