//! QMK-style notation of compositions, e.g. `LT(2, KC_A)` or `OSM(MOD_RCTL|MOD_RSFT)`.
use core::fmt::{self, Display, Formatter};

use crate::composition::*;
use crate::keymap::KeymapEntry;
use crate::modifier::ModifierCombination;

/// Short name of the key, or its hex code when the key isn't known by name.
struct KeyName<'a>(&'a KeymapEntry);

impl Display for KeyName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.short_name() {
            Some(name) if !self.0.is_any => f.write_str(name),
            _ => write!(f, "{:#06X}", self.0.code),
        }
    }
}

/// Modifier bits joined with `|`, `0` when none is set.
struct ModBits(ModifierCombination);

impl Display for ModBits {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let direction = self.0.direction();
        let modifiers = self.0.modifiers();
        if modifiers.is_empty() {
            return f.write_str("0");
        }
        for (i, m) in modifiers.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(m.qmk_name(direction))?;
        }
        Ok(())
    }
}

impl Display for Composition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Composition::Basic(c) => KeyName(c.key()).fmt(f),
            Composition::Mods(c) => {
                // Nested wrappers: LCTL(LSFT(KC_A))
                let direction = c.direction();
                let modifiers = c.modifiers();
                for m in modifiers.iter() {
                    write!(f, "{}(", m.qmk_function(direction))?;
                }
                KeyName(c.key()).fmt(f)?;
                for _ in modifiers.iter() {
                    f.write_str(")")?;
                }
                Ok(())
            }
            Composition::Function(c) => write!(f, "FUNC({})", c.function_id()),
            Composition::Macro(c) => {
                if c.is_tap() {
                    write!(f, "MACROTAP({})", c.macro_id() & !MacroComposition::TAP_BIT)
                } else {
                    write!(f, "M({})", c.macro_id())
                }
            }
            Composition::LayerTap(c) => write!(f, "LT({}, {})", c.layer(), KeyName(c.key())),
            Composition::To(c) => write!(f, "TO({})", c.layer()),
            Composition::Momentary(c) => write!(f, "MO({})", c.layer()),
            Composition::DefLayer(c) => write!(f, "DF({})", c.layer()),
            Composition::ToggleLayer(c) => write!(f, "TG({})", c.layer()),
            Composition::OneShotLayer(c) => write!(f, "OSL({})", c.layer()),
            Composition::OneShotMod(c) => write!(f, "OSM({})", ModBits(c.modifier_combination())),
            Composition::TapDance(c) => write!(f, "TD({})", c.id()),
            Composition::LayerTapToggle(c) => write!(f, "TT({})", c.layer()),
            Composition::LayerMod(c) => write!(f, "LM({}, {})", c.layer(), ModBits(c.modifier_combination())),
            Composition::SwapHands(SwapHandsComposition::Option(option)) => f.write_str(option.qmk_name()),
            Composition::SwapHands(SwapHandsComposition::Key(key)) => write!(f, "SH_T({})", KeyName(key)),
            Composition::ModTap(c) => write!(f, "MT({}, {})", ModBits(c.modifier_combination()), KeyName(c.key())),
            Composition::Unicode(c) => write!(f, "UC({:#06X})", c.char_code()),
            Composition::LooseKeycode(c) => KeyName(c.key()).fmt(f),
        }
    }
}
