pub mod common;

use postcard::experimental::max_size::MaxSize;
use remap_types::composition::*;
use remap_types::keymap::KeymapEntry;
use remap_types::modifier::{MOD_ALT, MOD_CTL, MOD_GUI, MOD_LEFT, MOD_RIGHT, MOD_SFT, ModDirection, ModifierCombination};
use remap_types::{Composition, KeycodeCompositionKind, KeycodeTable, decode};
use strum::IntoEnumIterator;

use crate::common::{ALL_MODS, echo_lookup};

/// Codes whose decoding re-encodes to themselves.
fn is_canonical(kind: KeycodeCompositionKind, code: u16) -> bool {
    match kind {
        KeycodeCompositionKind::To => (0x5010..=0x501F).contains(&code),
        KeycodeCompositionKind::OneShotMod => code & 0x00E0 == 0,
        _ => true,
    }
}

#[test]
fn test_every_code_has_at_most_one_kind() {
    for code in 0..=u16::MAX {
        let kind = KeycodeCompositionKind::classify(code);
        let matching: Vec<_> = KeycodeCompositionKind::iter().filter(|k| k.contains(code)).collect();
        match kind {
            Some(kind) => assert_eq!(matching, vec![kind], "code {code:#06X}"),
            None => {
                assert!(matching.is_empty(), "code {code:#06X}");
                assert!((0x5600..=0x56FF).contains(&code) || (0x5A00..=0x5AFF).contains(&code));
            }
        }
    }
}

#[test]
fn test_decode_then_encode_every_code() {
    for code in 0..=u16::MAX {
        let Some(composition) = decode(code, &echo_lookup) else {
            assert_eq!(KeycodeCompositionKind::classify(code), None);
            continue;
        };
        assert_eq!(Some(composition.kind()), KeycodeCompositionKind::classify(code));
        if is_canonical(composition.kind(), code) {
            assert_eq!(composition.code(), code, "code {code:#06X}");
        } else {
            // Re-encoding lands on the canonical code of the same kind
            assert!(composition.kind().contains(composition.code()));
        }
    }
}

#[test]
fn test_decode_with_keycode_table_keeps_codes() {
    for code in (0x0000..=0x1FFF).chain(0x5B00..=0x5FFF).chain(0x6000..=0x7FFF) {
        let composition = decode(code, &KeycodeTable).unwrap();
        assert_eq!(composition.code(), code, "code {code:#06X}");
    }
}

#[test]
fn test_encode_then_decode_fields() {
    for key in 0..=0xFFu16 {
        let basic = BasicComposition::new(KeymapEntry::new(key));
        assert_eq!(decode(basic.code(), &echo_lookup), Some(basic.into()));

        for layer in 0..16 {
            let lt = LayerTapComposition::new(layer, KeymapEntry::new(key));
            assert_eq!(decode(lt.code(), &echo_lookup), Some(lt.into()));
        }

        for direction in [MOD_LEFT, MOD_RIGHT] {
            let mt = ModTapComposition::new(direction, &[MOD_SFT, MOD_GUI], KeymapEntry::new(key));
            assert_eq!(decode(mt.code(), &echo_lookup), Some(mt.into()));

            let mods = ModsComposition::new(direction, &[MOD_ALT], KeymapEntry::new(key));
            assert_eq!(decode(mods.code(), &echo_lookup), Some(mods.into()));
        }
    }

    for layer in 0..=u8::MAX {
        let c: Composition = MomentaryComposition::new(layer).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
        let c: Composition = LayerTapToggleComposition::new(layer).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
        let c: Composition = TapDanceComposition::new(layer).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
    }

    for layer in 0..16 {
        let c: Composition = ToComposition::new(layer).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
        let c: Composition = LayerModComposition::new(layer, &[MOD_CTL, MOD_GUI]).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
    }

    for id in [0, 1, 0x7FF, 0x800, 0xFFF] {
        let c: Composition = FunctionComposition::new(id).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
        let c: Composition = MacroComposition::new(id).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
    }

    for option in [
        OP_SH_TOGGLE,
        OP_SH_TAP_TOGGLE,
        OP_SH_ON_OFF,
        OP_SH_OFF_ON,
        OP_SH_OFF,
        OP_SH_ON,
        OP_SH_ONESHOT,
    ] {
        let c: Composition = SwapHandsComposition::with_option(option).into();
        assert_eq!(decode(c.code(), &echo_lookup), Some(c));
    }
}

#[test]
fn test_modifier_round_trip() {
    let osm = OneShotModComposition::new(ModDirection::Right, &[MOD_GUI, MOD_CTL, MOD_ALT, MOD_SFT]);
    let Some(Composition::OneShotMod(decoded)) = decode(osm.code(), &echo_lookup) else {
        panic!("not a one-shot modifier");
    };
    assert_eq!(decoded.direction(), ModDirection::Right);
    assert_eq!(decoded.modifiers().as_slice(), &ALL_MODS);
}

#[test]
fn test_masking() {
    assert_eq!(BasicComposition::new(KeymapEntry::new(0x100)).code(), 0x0000);
    assert_eq!(LayerTapComposition::new(16, KeymapEntry::new(0x04)).code(), 0x4004);
    assert_eq!(LayerTapComposition::new(16, KeymapEntry::new(0x100)).code(), 0x4000);
    assert_eq!(UnicodeComposition::new(0x7FFF).code(), 0xFFFF);
    assert_eq!(KeycodeCompositionKind::classify_raw(0x56000), None);
}

#[test]
fn test_json_shape() {
    let c: Composition = MomentaryComposition::new(1).into();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"momentary":{"layer":1}}"#);

    let c = decode(0x4204, &KeycodeTable).unwrap();
    let json = serde_json::to_string(&c).unwrap();
    let back: Composition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);

    let kind = serde_json::to_string(&KeycodeCompositionKind::LayerTapToggle).unwrap();
    assert_eq!(kind, r#""layer_tap_toggle""#);

    let c: Composition = SwapHandsComposition::with_option(OP_SH_TAP_TOGGLE).into();
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"swap_hands":{"option":"tap_toggle"}}"#);
    let back: Composition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn test_mods_without_modifiers_is_basic() {
    let mods = ModsComposition::new(MOD_LEFT, &[], KeymapEntry::new(0x04));
    assert_eq!(mods.code(), 0x0004);
    assert_eq!(KeycodeCompositionKind::classify(mods.code()), Some(KeycodeCompositionKind::Basic));
    let Some(Composition::Basic(basic)) = decode(mods.code(), &echo_lookup) else {
        panic!("not a basic key");
    };
    assert_eq!(basic.key().code, 0x04);
}

#[test]
fn test_swap_hands_key_on_option_byte() {
    let sh = SwapHandsComposition::with_key(KeymapEntry::new(0xF1));
    assert_eq!(sh.code(), 0x5BF1);
    let decoded = decode(sh.code(), &echo_lookup).unwrap();
    assert_eq!(decoded, Composition::SwapHands(SwapHandsComposition::Option(OP_SH_TAP_TOGGLE)));

    // Next to the option bytes the key form survives
    let sh = SwapHandsComposition::with_key(KeymapEntry::new(0xEF));
    let Some(Composition::SwapHands(SwapHandsComposition::Key(key))) = decode(sh.code(), &echo_lookup) else {
        panic!("not a swap-hands key");
    };
    assert_eq!(key.code, 0xEF);
}

#[test]
fn test_postcard_fixed_size_types() {
    let mut buf = [0u8; 16];

    let m = ModifierCombination::from_parts(MOD_RIGHT, &[MOD_CTL]);
    let bytes = postcard::to_slice(&m, &mut buf).unwrap();
    assert!(bytes.len() <= ModifierCombination::POSTCARD_MAX_SIZE);
    let back: ModifierCombination = postcard::from_bytes(bytes).unwrap();
    assert_eq!(back, m);

    let osm = OneShotModComposition::new(MOD_LEFT, &[MOD_SFT]);
    let bytes = postcard::to_slice(&osm, &mut buf).unwrap();
    assert!(bytes.len() <= OneShotModComposition::POSTCARD_MAX_SIZE);
    let back: OneShotModComposition = postcard::from_bytes(bytes).unwrap();
    assert_eq!(back, osm);

    let bytes = postcard::to_slice(&OP_SH_ONESHOT, &mut buf).unwrap();
    assert!(bytes.len() <= SwapHandsOption::POSTCARD_MAX_SIZE);
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Composition>();
    assert_send_sync::<KeymapEntry>();
    assert_send_sync::<KeycodeTable>();
    assert_send_sync::<remap_types::InvalidVariantError>();
    assert_send_sync::<remap_types::KeycodeCompositionFactory<'static, KeycodeTable>>();
}
