//! Classify a raw keycode and build its composition.
use log::{debug, trace};

use crate::composition::*;
use crate::error::InvalidVariantError;
use crate::keymap::KeymapLookup;
use crate::kind::KeycodeCompositionKind;

/// Decodes one keycode, resolving embedded keys through `lookup`.
///
/// ```ignore
/// let factory = KeycodeCompositionFactory::new(0x4204, &KeycodeTable);
/// assert!(factory.is_layer_tap());
/// let lt = factory.create_layer_tap_composition()?;
/// assert_eq!(lt.layer(), 2);
/// ```
pub struct KeycodeCompositionFactory<'a, L: KeymapLookup + ?Sized> {
    code: u16,
    lookup: &'a L,
}

macro_rules! factory_methods {
    ($($is:ident, $create:ident => $ty:ty;)*) => {
        $(
            pub fn $is(&self) -> bool {
                self.kind() == Some(<$ty as KeycodeComposition>::KIND)
            }

            pub fn $create(&self) -> Result<$ty, InvalidVariantError> {
                self.create::<$ty>()
            }
        )*
    };
}

impl<'a, L: KeymapLookup + ?Sized> KeycodeCompositionFactory<'a, L> {
    pub fn new(code: u16, lookup: &'a L) -> Self {
        Self { code, lookup }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn kind(&self) -> Option<KeycodeCompositionKind> {
        KeycodeCompositionKind::classify(self.code)
    }

    /// Decode as `C`, failing when the code belongs to another kind.
    pub fn create<C: KeycodeComposition>(&self) -> Result<C, InvalidVariantError> {
        C::try_decode(self.code, self.lookup)
    }

    /// Decode as whatever kind the code is. `None` for unassigned codes.
    pub fn decode(&self) -> Option<Composition> {
        match self.kind() {
            Some(kind) => {
                trace!("Decoding {:#06X} as {}", self.code, kind);
                Some(Composition::decode_kind(kind, self.code, self.lookup))
            }
            None => {
                debug!("Keycode {:#06X} is not assigned to any composition", self.code);
                None
            }
        }
    }

    factory_methods! {
        is_basic, create_basic_composition => BasicComposition;
        is_mods, create_mods_composition => ModsComposition;
        is_function, create_function_composition => FunctionComposition;
        is_macro, create_macro_composition => MacroComposition;
        is_layer_tap, create_layer_tap_composition => LayerTapComposition;
        is_to, create_to_composition => ToComposition;
        is_momentary, create_momentary_composition => MomentaryComposition;
        is_def_layer, create_def_layer_composition => DefLayerComposition;
        is_toggle_layer, create_toggle_layer_composition => ToggleLayerComposition;
        is_one_shot_layer, create_one_shot_layer_composition => OneShotLayerComposition;
        is_one_shot_mod, create_one_shot_mod_composition => OneShotModComposition;
        is_tap_dance, create_tap_dance_composition => TapDanceComposition;
        is_layer_tap_toggle, create_layer_tap_toggle_composition => LayerTapToggleComposition;
        is_layer_mod, create_layer_mod_composition => LayerModComposition;
        is_swap_hands, create_swap_hands_composition => SwapHandsComposition;
        is_mod_tap, create_mod_tap_composition => ModTapComposition;
        is_unicode, create_unicode_composition => UnicodeComposition;
        is_loose_keycode, create_loose_keycode_composition => LooseKeycodeComposition;
    }
}

/// Decode `code` in one go.
pub fn decode<L: KeymapLookup + ?Sized>(code: u16, lookup: &L) -> Option<Composition> {
    KeycodeCompositionFactory::new(code, lookup).decode()
}
