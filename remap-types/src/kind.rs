//! The partition of the 16-bit keycode space into composition families.
use core::ops::RangeInclusive;

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

/// Family of a 16-bit keycode.
///
/// Every `u16` belongs to exactly one kind, except `0x5600..=0x56FF` and
/// `0x5A00..=0x5AFF` which are unassigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, MaxSize, Display, IntoStaticStr, EnumIter, EnumCount)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeycodeCompositionKind {
    Basic,
    Mods,
    Function,
    Macro,
    LayerTap,
    To,
    Momentary,
    DefLayer,
    ToggleLayer,
    OneShotLayer,
    OneShotMod,
    TapDance,
    LayerTapToggle,
    LayerMod,
    SwapHands,
    ModTap,
    Unicode,
    LooseKeycode,
}

impl KeycodeCompositionKind {
    /// Classify a keycode. `None` for the unassigned ranges.
    pub const fn classify(code: u16) -> Option<Self> {
        use KeycodeCompositionKind::*;
        let kind = match code {
            0x0000..=0x00FF => Basic,
            0x0100..=0x1FFF => Mods,
            0x2000..=0x2FFF => Function,
            0x3000..=0x3FFF => Macro,
            0x4000..=0x4FFF => LayerTap,
            0x5000..=0x50FF => To,
            0x5100..=0x51FF => Momentary,
            0x5200..=0x52FF => DefLayer,
            0x5300..=0x53FF => ToggleLayer,
            0x5400..=0x54FF => OneShotLayer,
            0x5500..=0x55FF => OneShotMod,
            0x5600..=0x56FF => return None,
            0x5700..=0x57FF => TapDance,
            0x5800..=0x58FF => LayerTapToggle,
            0x5900..=0x59FF => LayerMod,
            0x5A00..=0x5AFF => return None,
            0x5B00..=0x5BFF => SwapHands,
            0x5C00..=0x5FFF => LooseKeycode,
            0x6000..=0x7FFF => ModTap,
            0x8000..=0xFFFF => Unicode,
        };
        Some(kind)
    }

    /// Classify a value which may be wider than a keycode, e.g. parsed from user input.
    pub const fn classify_raw(value: u32) -> Option<Self> {
        if value > u16::MAX as u32 {
            return None;
        }
        Self::classify(value as u16)
    }

    /// All codes of this kind.
    pub const fn range(self) -> RangeInclusive<u16> {
        use KeycodeCompositionKind::*;
        match self {
            Basic => 0x0000..=0x00FF,
            Mods => 0x0100..=0x1FFF,
            Function => 0x2000..=0x2FFF,
            Macro => 0x3000..=0x3FFF,
            LayerTap => 0x4000..=0x4FFF,
            To => 0x5000..=0x50FF,
            Momentary => 0x5100..=0x51FF,
            DefLayer => 0x5200..=0x52FF,
            ToggleLayer => 0x5300..=0x53FF,
            OneShotLayer => 0x5400..=0x54FF,
            OneShotMod => 0x5500..=0x55FF,
            TapDance => 0x5700..=0x57FF,
            LayerTapToggle => 0x5800..=0x58FF,
            LayerMod => 0x5900..=0x59FF,
            SwapHands => 0x5B00..=0x5BFF,
            LooseKeycode => 0x5C00..=0x5FFF,
            ModTap => 0x6000..=0x7FFF,
            Unicode => 0x8000..=0xFFFF,
        }
    }

    pub fn contains(self, code: u16) -> bool {
        self.range().contains(&code)
    }
}

#[cfg(test)]
mod test {
    use core::fmt::Write;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(KeycodeCompositionKind::classify(0x0000), Some(KeycodeCompositionKind::Basic));
        assert_eq!(KeycodeCompositionKind::classify(0x0100), Some(KeycodeCompositionKind::Mods));
        assert_eq!(KeycodeCompositionKind::classify(0x1FFF), Some(KeycodeCompositionKind::Mods));
        assert_eq!(KeycodeCompositionKind::classify(0x50FF), Some(KeycodeCompositionKind::To));
        assert_eq!(KeycodeCompositionKind::classify(0x5600), None);
        assert_eq!(KeycodeCompositionKind::classify(0x5AFF), None);
        assert_eq!(KeycodeCompositionKind::classify(0x5C00), Some(KeycodeCompositionKind::LooseKeycode));
        assert_eq!(KeycodeCompositionKind::classify(0x7FFF), Some(KeycodeCompositionKind::ModTap));
        assert_eq!(KeycodeCompositionKind::classify(0x8000), Some(KeycodeCompositionKind::Unicode));
    }

    #[test]
    fn test_classify_raw() {
        assert_eq!(KeycodeCompositionKind::classify_raw(0x56000), None);
        assert_eq!(KeycodeCompositionKind::classify_raw(0x1_0000), None);
        assert_eq!(
            KeycodeCompositionKind::classify_raw(0xFFFF),
            Some(KeycodeCompositionKind::Unicode)
        );
    }

    #[test]
    fn test_range_agrees_with_classify() {
        for kind in KeycodeCompositionKind::iter() {
            let range = kind.range();
            assert_eq!(KeycodeCompositionKind::classify(*range.start()), Some(kind));
            assert_eq!(KeycodeCompositionKind::classify(*range.end()), Some(kind));
        }
    }

    #[test]
    fn test_kind_names() {
        let mut s: heapless::String<32> = heapless::String::new();
        write!(s, "{}", KeycodeCompositionKind::LayerTapToggle).unwrap();
        assert_eq!(s, "layer_tap_toggle");
        let name: &'static str = KeycodeCompositionKind::OneShotMod.into();
        assert_eq!(name, "one_shot_mod");
    }
}
