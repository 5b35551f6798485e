use remap_types::keymap::{KeycodeInfo, KeymapEntry};
use remap_types::modifier::{MOD_ALT, MOD_CTL, MOD_GUI, MOD_SFT, Modifier};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[allow(dead_code)]
pub const ALL_MODS: [Modifier; 4] = [MOD_CTL, MOD_SFT, MOD_ALT, MOD_GUI];

/// Lookup returning a bare entry for every code.
#[allow(dead_code)]
pub fn echo_lookup(code: u16) -> KeymapEntry {
    KeymapEntry::new(code)
}

/// Entry for `KC_A` as a keyboard would report it.
#[allow(dead_code)]
pub fn kc_a() -> KeymapEntry {
    KeymapEntry::new(0x04).with_info(KeycodeInfo::new(0x04, "KC_A", "KC_A", "A"))
}
