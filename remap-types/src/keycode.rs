//! Keycodes known by name.
//!
//! [`HidKeyCode`] covers the basic keycode page `0x00..=0xFF` in QMK numbering,
//! [`QuantumKeyCode`] the commonly used loose keycodes in `0x5C00..=0x5FFF`.
//! Each keycode carries its QMK long name, its short alias and a label for
//! display on a keycap.
use serde::{Deserialize, Serialize};
use strum::FromRepr;

macro_rules! keycode_table {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident : $repr:ident {
            $( $(#[$doc:meta])* $variant:ident = $value:literal => ($long:literal, $short:literal, $label:literal), )*
        }
    ) => {
        $(#[$enum_meta])*
        #[repr($repr)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, FromRepr)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $( $(#[$doc])* $variant = $value, )*
        }

        impl $name {
            /// Full QMK name, e.g. `KC_ENTER`.
            pub const fn long_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $long, )*
                }
            }

            /// Shortest QMK alias, e.g. `KC_ENT`.
            pub const fn short_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $short, )*
                }
            }

            /// Text printed on the keycap.
            pub const fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )*
                }
            }
        }
    };
}

keycode_table! {
    /// Basic keycodes. The lower byte of every key-embedding composition is one of these.
    pub enum HidKeyCode: u8 {
        /// Reserved, no-key.
        No = 0x00 => ("KC_NO", "XXXXXXX", ""),
        /// Falls through to the next active layer.
        Transparent = 0x01 => ("KC_TRANSPARENT", "KC_TRNS", "▽"),
        PostFail = 0x02 => ("KC_POST_FAIL", "KC_POST_FAIL", "PostFail"),
        Undefined = 0x03 => ("KC_UNDEFINED", "KC_UNDEFINED", "Undefined"),
        A = 0x04 => ("KC_A", "KC_A", "A"),
        B = 0x05 => ("KC_B", "KC_B", "B"),
        C = 0x06 => ("KC_C", "KC_C", "C"),
        D = 0x07 => ("KC_D", "KC_D", "D"),
        E = 0x08 => ("KC_E", "KC_E", "E"),
        F = 0x09 => ("KC_F", "KC_F", "F"),
        G = 0x0A => ("KC_G", "KC_G", "G"),
        H = 0x0B => ("KC_H", "KC_H", "H"),
        I = 0x0C => ("KC_I", "KC_I", "I"),
        J = 0x0D => ("KC_J", "KC_J", "J"),
        K = 0x0E => ("KC_K", "KC_K", "K"),
        L = 0x0F => ("KC_L", "KC_L", "L"),
        M = 0x10 => ("KC_M", "KC_M", "M"),
        N = 0x11 => ("KC_N", "KC_N", "N"),
        O = 0x12 => ("KC_O", "KC_O", "O"),
        P = 0x13 => ("KC_P", "KC_P", "P"),
        Q = 0x14 => ("KC_Q", "KC_Q", "Q"),
        R = 0x15 => ("KC_R", "KC_R", "R"),
        S = 0x16 => ("KC_S", "KC_S", "S"),
        T = 0x17 => ("KC_T", "KC_T", "T"),
        U = 0x18 => ("KC_U", "KC_U", "U"),
        V = 0x19 => ("KC_V", "KC_V", "V"),
        W = 0x1A => ("KC_W", "KC_W", "W"),
        X = 0x1B => ("KC_X", "KC_X", "X"),
        Y = 0x1C => ("KC_Y", "KC_Y", "Y"),
        Z = 0x1D => ("KC_Z", "KC_Z", "Z"),
        Kc1 = 0x1E => ("KC_1", "KC_1", "1"),
        Kc2 = 0x1F => ("KC_2", "KC_2", "2"),
        Kc3 = 0x20 => ("KC_3", "KC_3", "3"),
        Kc4 = 0x21 => ("KC_4", "KC_4", "4"),
        Kc5 = 0x22 => ("KC_5", "KC_5", "5"),
        Kc6 = 0x23 => ("KC_6", "KC_6", "6"),
        Kc7 = 0x24 => ("KC_7", "KC_7", "7"),
        Kc8 = 0x25 => ("KC_8", "KC_8", "8"),
        Kc9 = 0x26 => ("KC_9", "KC_9", "9"),
        Kc0 = 0x27 => ("KC_0", "KC_0", "0"),
        Enter = 0x28 => ("KC_ENTER", "KC_ENT", "Enter"),
        Escape = 0x29 => ("KC_ESCAPE", "KC_ESC", "Esc"),
        Backspace = 0x2A => ("KC_BSPACE", "KC_BSPC", "Bksp"),
        Tab = 0x2B => ("KC_TAB", "KC_TAB", "Tab"),
        Space = 0x2C => ("KC_SPACE", "KC_SPC", "Space"),
        Minus = 0x2D => ("KC_MINUS", "KC_MINS", "-"),
        Equal = 0x2E => ("KC_EQUAL", "KC_EQL", "="),
        LeftBracket = 0x2F => ("KC_LBRACKET", "KC_LBRC", "["),
        RightBracket = 0x30 => ("KC_RBRACKET", "KC_RBRC", "]"),
        Backslash = 0x31 => ("KC_BSLASH", "KC_BSLS", "\\"),
        /// Non-US `#` and `~`
        NonusHash = 0x32 => ("KC_NONUS_HASH", "KC_NUHS", "#"),
        Semicolon = 0x33 => ("KC_SCOLON", "KC_SCLN", ";"),
        Quote = 0x34 => ("KC_QUOTE", "KC_QUOT", "'"),
        Grave = 0x35 => ("KC_GRAVE", "KC_GRV", "`"),
        Comma = 0x36 => ("KC_COMMA", "KC_COMM", ","),
        Dot = 0x37 => ("KC_DOT", "KC_DOT", "."),
        Slash = 0x38 => ("KC_SLASH", "KC_SLSH", "/"),
        CapsLock = 0x39 => ("KC_CAPSLOCK", "KC_CAPS", "Caps"),
        F1 = 0x3A => ("KC_F1", "KC_F1", "F1"),
        F2 = 0x3B => ("KC_F2", "KC_F2", "F2"),
        F3 = 0x3C => ("KC_F3", "KC_F3", "F3"),
        F4 = 0x3D => ("KC_F4", "KC_F4", "F4"),
        F5 = 0x3E => ("KC_F5", "KC_F5", "F5"),
        F6 = 0x3F => ("KC_F6", "KC_F6", "F6"),
        F7 = 0x40 => ("KC_F7", "KC_F7", "F7"),
        F8 = 0x41 => ("KC_F8", "KC_F8", "F8"),
        F9 = 0x42 => ("KC_F9", "KC_F9", "F9"),
        F10 = 0x43 => ("KC_F10", "KC_F10", "F10"),
        F11 = 0x44 => ("KC_F11", "KC_F11", "F11"),
        F12 = 0x45 => ("KC_F12", "KC_F12", "F12"),
        PrintScreen = 0x46 => ("KC_PSCREEN", "KC_PSCR", "PrtSc"),
        ScrollLock = 0x47 => ("KC_SCROLLLOCK", "KC_SLCK", "ScrLk"),
        Pause = 0x48 => ("KC_PAUSE", "KC_PAUS", "Pause"),
        Insert = 0x49 => ("KC_INSERT", "KC_INS", "Ins"),
        Home = 0x4A => ("KC_HOME", "KC_HOME", "Home"),
        PageUp = 0x4B => ("KC_PGUP", "KC_PGUP", "PgUp"),
        Delete = 0x4C => ("KC_DELETE", "KC_DEL", "Del"),
        End = 0x4D => ("KC_END", "KC_END", "End"),
        PageDown = 0x4E => ("KC_PGDOWN", "KC_PGDN", "PgDn"),
        Right = 0x4F => ("KC_RIGHT", "KC_RGHT", "→"),
        Left = 0x50 => ("KC_LEFT", "KC_LEFT", "←"),
        Down = 0x51 => ("KC_DOWN", "KC_DOWN", "↓"),
        Up = 0x52 => ("KC_UP", "KC_UP", "↑"),
        NumLock = 0x53 => ("KC_NUMLOCK", "KC_NLCK", "NumLk"),
        KpSlash = 0x54 => ("KC_KP_SLASH", "KC_PSLS", "/"),
        KpAsterisk = 0x55 => ("KC_KP_ASTERISK", "KC_PAST", "*"),
        KpMinus = 0x56 => ("KC_KP_MINUS", "KC_PMNS", "-"),
        KpPlus = 0x57 => ("KC_KP_PLUS", "KC_PPLS", "+"),
        KpEnter = 0x58 => ("KC_KP_ENTER", "KC_PENT", "Enter"),
        Kp1 = 0x59 => ("KC_KP_1", "KC_P1", "1"),
        Kp2 = 0x5A => ("KC_KP_2", "KC_P2", "2"),
        Kp3 = 0x5B => ("KC_KP_3", "KC_P3", "3"),
        Kp4 = 0x5C => ("KC_KP_4", "KC_P4", "4"),
        Kp5 = 0x5D => ("KC_KP_5", "KC_P5", "5"),
        Kp6 = 0x5E => ("KC_KP_6", "KC_P6", "6"),
        Kp7 = 0x5F => ("KC_KP_7", "KC_P7", "7"),
        Kp8 = 0x60 => ("KC_KP_8", "KC_P8", "8"),
        Kp9 = 0x61 => ("KC_KP_9", "KC_P9", "9"),
        Kp0 = 0x62 => ("KC_KP_0", "KC_P0", "0"),
        KpDot = 0x63 => ("KC_KP_DOT", "KC_PDOT", "."),
        /// Non-US `\` and `|`
        NonusBackslash = 0x64 => ("KC_NONUS_BSLASH", "KC_NUBS", "\\"),
        Application = 0x65 => ("KC_APPLICATION", "KC_APP", "App"),
        KbPower = 0x66 => ("KC_POWER", "KC_POWER", "Power"),
        KpEqual = 0x67 => ("KC_KP_EQUAL", "KC_PEQL", "="),
        F13 = 0x68 => ("KC_F13", "KC_F13", "F13"),
        F14 = 0x69 => ("KC_F14", "KC_F14", "F14"),
        F15 = 0x6A => ("KC_F15", "KC_F15", "F15"),
        F16 = 0x6B => ("KC_F16", "KC_F16", "F16"),
        F17 = 0x6C => ("KC_F17", "KC_F17", "F17"),
        F18 = 0x6D => ("KC_F18", "KC_F18", "F18"),
        F19 = 0x6E => ("KC_F19", "KC_F19", "F19"),
        F20 = 0x6F => ("KC_F20", "KC_F20", "F20"),
        F21 = 0x70 => ("KC_F21", "KC_F21", "F21"),
        F22 = 0x71 => ("KC_F22", "KC_F22", "F22"),
        F23 = 0x72 => ("KC_F23", "KC_F23", "F23"),
        F24 = 0x73 => ("KC_F24", "KC_F24", "F24"),
        Execute = 0x74 => ("KC_EXECUTE", "KC_EXEC", "Exec"),
        Help = 0x75 => ("KC_HELP", "KC_HELP", "Help"),
        Menu = 0x76 => ("KC_MENU", "KC_MENU", "Menu"),
        Select = 0x77 => ("KC_SELECT", "KC_SLCT", "Select"),
        Stop = 0x78 => ("KC_STOP", "KC_STOP", "Stop"),
        Again = 0x79 => ("KC_AGAIN", "KC_AGIN", "Again"),
        Undo = 0x7A => ("KC_UNDO", "KC_UNDO", "Undo"),
        Cut = 0x7B => ("KC_CUT", "KC_CUT", "Cut"),
        Copy = 0x7C => ("KC_COPY", "KC_COPY", "Copy"),
        Paste = 0x7D => ("KC_PASTE", "KC_PSTE", "Paste"),
        Find = 0x7E => ("KC_FIND", "KC_FIND", "Find"),
        KbMute = 0x7F => ("KC__MUTE", "KC__MUTE", "Mute"),
        KbVolumeUp = 0x80 => ("KC__VOLUP", "KC__VOLUP", "Vol+"),
        KbVolumeDown = 0x81 => ("KC__VOLDOWN", "KC__VOLDOWN", "Vol-"),
        LockingCapsLock = 0x82 => ("KC_LOCKING_CAPS", "KC_LCAP", "Caps"),
        LockingNumLock = 0x83 => ("KC_LOCKING_NUM", "KC_LNUM", "NumLk"),
        LockingScrollLock = 0x84 => ("KC_LOCKING_SCROLL", "KC_LSCR", "ScrLk"),
        KpComma = 0x85 => ("KC_KP_COMMA", "KC_PCMM", ","),
        KpEqualAs400 = 0x86 => ("KC_KP_EQUAL_AS400", "KC_KP_EQUAL_AS400", "="),
        International1 = 0x87 => ("KC_INT1", "KC_RO", "\\"),
        International2 = 0x88 => ("KC_INT2", "KC_KANA", "Kana"),
        International3 = 0x89 => ("KC_INT3", "KC_JYEN", "¥"),
        International4 = 0x8A => ("KC_INT4", "KC_HENK", "Henkan"),
        International5 = 0x8B => ("KC_INT5", "KC_MHEN", "Muhenkan"),
        International6 = 0x8C => ("KC_INT6", "KC_INT6", "Int6"),
        International7 = 0x8D => ("KC_INT7", "KC_INT7", "Int7"),
        International8 = 0x8E => ("KC_INT8", "KC_INT8", "Int8"),
        International9 = 0x8F => ("KC_INT9", "KC_INT9", "Int9"),
        Language1 = 0x90 => ("KC_LANG1", "KC_HAEN", "Lang1"),
        Language2 = 0x91 => ("KC_LANG2", "KC_HANJ", "Lang2"),
        Language3 = 0x92 => ("KC_LANG3", "KC_LANG3", "Lang3"),
        Language4 = 0x93 => ("KC_LANG4", "KC_LANG4", "Lang4"),
        Language5 = 0x94 => ("KC_LANG5", "KC_LANG5", "Lang5"),
        Language6 = 0x95 => ("KC_LANG6", "KC_LANG6", "Lang6"),
        Language7 = 0x96 => ("KC_LANG7", "KC_LANG7", "Lang7"),
        Language8 = 0x97 => ("KC_LANG8", "KC_LANG8", "Lang8"),
        Language9 = 0x98 => ("KC_LANG9", "KC_LANG9", "Lang9"),
        AlternateErase = 0x99 => ("KC_ALT_ERASE", "KC_ERAS", "Erase"),
        SystemRequest = 0x9A => ("KC_SYSREQ", "KC_SYSREQ", "SysReq"),
        Cancel = 0x9B => ("KC_CANCEL", "KC_CANCEL", "Cancel"),
        Clear = 0x9C => ("KC_CLEAR", "KC_CLR", "Clear"),
        Prior = 0x9D => ("KC_PRIOR", "KC_PRIOR", "Prior"),
        Return = 0x9E => ("KC_RETURN", "KC_RETURN", "Return"),
        Separator = 0x9F => ("KC_SEPARATOR", "KC_SEPARATOR", "Sep"),
        Out = 0xA0 => ("KC_OUT", "KC_OUT", "Out"),
        Oper = 0xA1 => ("KC_OPER", "KC_OPER", "Oper"),
        ClearAgain = 0xA2 => ("KC_CLEAR_AGAIN", "KC_CLEAR_AGAIN", "ClrAgn"),
        Crsel = 0xA3 => ("KC_CRSEL", "KC_CRSEL", "CrSel"),
        Exsel = 0xA4 => ("KC_EXSEL", "KC_EXSEL", "ExSel"),
        SystemPower = 0xA5 => ("KC_SYSTEM_POWER", "KC_PWR", "Power"),
        SystemSleep = 0xA6 => ("KC_SYSTEM_SLEEP", "KC_SLEP", "Sleep"),
        SystemWake = 0xA7 => ("KC_SYSTEM_WAKE", "KC_WAKE", "Wake"),
        AudioMute = 0xA8 => ("KC_AUDIO_MUTE", "KC_MUTE", "Mute"),
        AudioVolUp = 0xA9 => ("KC_AUDIO_VOL_UP", "KC_VOLU", "Vol+"),
        AudioVolDown = 0xAA => ("KC_AUDIO_VOL_DOWN", "KC_VOLD", "Vol-"),
        MediaNextTrack = 0xAB => ("KC_MEDIA_NEXT_TRACK", "KC_MNXT", "Next"),
        MediaPrevTrack = 0xAC => ("KC_MEDIA_PREV_TRACK", "KC_MPRV", "Prev"),
        MediaStop = 0xAD => ("KC_MEDIA_STOP", "KC_MSTP", "Stop"),
        MediaPlayPause = 0xAE => ("KC_MEDIA_PLAY_PAUSE", "KC_MPLY", "Play"),
        MediaSelect = 0xAF => ("KC_MEDIA_SELECT", "KC_MSEL", "Select"),
        MediaEject = 0xB0 => ("KC_MEDIA_EJECT", "KC_EJCT", "Eject"),
        Mail = 0xB1 => ("KC_MAIL", "KC_MAIL", "Mail"),
        Calculator = 0xB2 => ("KC_CALCULATOR", "KC_CALC", "Calc"),
        MyComputer = 0xB3 => ("KC_MY_COMPUTER", "KC_MYCM", "MyComp"),
        WwwSearch = 0xB4 => ("KC_WWW_SEARCH", "KC_WSCH", "Search"),
        WwwHome = 0xB5 => ("KC_WWW_HOME", "KC_WHOM", "Home"),
        WwwBack = 0xB6 => ("KC_WWW_BACK", "KC_WBAK", "Back"),
        WwwForward = 0xB7 => ("KC_WWW_FORWARD", "KC_WFWD", "Fwd"),
        WwwStop = 0xB8 => ("KC_WWW_STOP", "KC_WSTP", "Stop"),
        WwwRefresh = 0xB9 => ("KC_WWW_REFRESH", "KC_WREF", "Refresh"),
        WwwFavorites = 0xBA => ("KC_WWW_FAVORITES", "KC_WFAV", "Fav"),
        MediaFastForward = 0xBB => ("KC_MEDIA_FAST_FORWARD", "KC_MFFD", "FF"),
        MediaRewind = 0xBC => ("KC_MEDIA_REWIND", "KC_MRWD", "Rew"),
        BrightnessUp = 0xBD => ("KC_BRIGHTNESS_UP", "KC_BRIU", "Bri+"),
        BrightnessDown = 0xBE => ("KC_BRIGHTNESS_DOWN", "KC_BRID", "Bri-"),
        LCtrl = 0xE0 => ("KC_LCTRL", "KC_LCTL", "LCtrl"),
        LShift = 0xE1 => ("KC_LSHIFT", "KC_LSFT", "LShift"),
        LAlt = 0xE2 => ("KC_LALT", "KC_LALT", "LAlt"),
        LGui = 0xE3 => ("KC_LGUI", "KC_LGUI", "LGui"),
        RCtrl = 0xE4 => ("KC_RCTRL", "KC_RCTL", "RCtrl"),
        RShift = 0xE5 => ("KC_RSHIFT", "KC_RSFT", "RShift"),
        RAlt = 0xE6 => ("KC_RALT", "KC_RALT", "RAlt"),
        RGui = 0xE7 => ("KC_RGUI", "KC_RGUI", "RGui"),
        MouseUp = 0xF0 => ("KC_MS_UP", "KC_MS_U", "Mouse↑"),
        MouseDown = 0xF1 => ("KC_MS_DOWN", "KC_MS_D", "Mouse↓"),
        MouseLeft = 0xF2 => ("KC_MS_LEFT", "KC_MS_L", "Mouse←"),
        MouseRight = 0xF3 => ("KC_MS_RIGHT", "KC_MS_R", "Mouse→"),
        MouseBtn1 = 0xF4 => ("KC_MS_BTN1", "KC_BTN1", "Btn1"),
        MouseBtn2 = 0xF5 => ("KC_MS_BTN2", "KC_BTN2", "Btn2"),
        MouseBtn3 = 0xF6 => ("KC_MS_BTN3", "KC_BTN3", "Btn3"),
        MouseBtn4 = 0xF7 => ("KC_MS_BTN4", "KC_BTN4", "Btn4"),
        MouseBtn5 = 0xF8 => ("KC_MS_BTN5", "KC_BTN5", "Btn5"),
        MouseWheelUp = 0xF9 => ("KC_MS_WH_UP", "KC_WH_U", "Wheel↑"),
        MouseWheelDown = 0xFA => ("KC_MS_WH_DOWN", "KC_WH_D", "Wheel↓"),
        MouseWheelLeft = 0xFB => ("KC_MS_WH_LEFT", "KC_WH_L", "Wheel←"),
        MouseWheelRight = 0xFC => ("KC_MS_WH_RIGHT", "KC_WH_R", "Wheel→"),
        MouseAccel0 = 0xFD => ("KC_MS_ACCEL0", "KC_ACL0", "Accel0"),
        MouseAccel1 = 0xFE => ("KC_MS_ACCEL1", "KC_ACL1", "Accel1"),
        MouseAccel2 = 0xFF => ("KC_MS_ACCEL2", "KC_ACL2", "Accel2"),
    }
}

keycode_table! {
    /// Quantum keycodes which are not compositions of other keycodes.
    /// Only the commonly used ones are named; the rest of the range is passed through as-is.
    pub enum QuantumKeyCode: u16 {
        /// Jump to bootloader
        Reset = 0x5C00 => ("RESET", "RESET", "Reset"),
        Debug = 0x5C01 => ("DEBUG", "DEBUG", "Debug"),
        MagicToggleNkro = 0x5C14 => ("MAGIC_TOGGLE_NKRO", "NK_TOGG", "NKRO"),
        /// Escape, or grave when shift/gui is held
        GraveEscape = 0x5C16 => ("GRAVE_ESC", "KC_GESC", "Esc/`"),
        AudioOn = 0x5C1D => ("AU_ON", "AU_ON", "Audio On"),
        AudioOff = 0x5C1E => ("AU_OFF", "AU_OFF", "Audio Off"),
        AudioToggle = 0x5C1F => ("AU_TOG", "AU_TOG", "Audio Tog"),
        BacklightOn = 0x5CBB => ("BL_ON", "BL_ON", "BL On"),
        BacklightOff = 0x5CBC => ("BL_OFF", "BL_OFF", "BL Off"),
        BacklightDown = 0x5CBD => ("BL_DEC", "BL_DEC", "BL-"),
        BacklightUp = 0x5CBE => ("BL_INC", "BL_INC", "BL+"),
        BacklightToggle = 0x5CBF => ("BL_TOGG", "BL_TOGG", "BL Tog"),
        BacklightStep = 0x5CC0 => ("BL_STEP", "BL_STEP", "BL Step"),
        BacklightBreathing = 0x5CC1 => ("BL_BRTG", "BL_BRTG", "BL Breath"),
        RgbToggle = 0x5CC2 => ("RGB_TOG", "RGB_TOG", "RGB Tog"),
        RgbModeForward = 0x5CC3 => ("RGB_MODE_FORWARD", "RGB_MOD", "RGB Mode+"),
        RgbModeReverse = 0x5CC4 => ("RGB_MODE_REVERSE", "RGB_RMOD", "RGB Mode-"),
        RgbHueUp = 0x5CC5 => ("RGB_HUI", "RGB_HUI", "Hue+"),
        RgbHueDown = 0x5CC6 => ("RGB_HUD", "RGB_HUD", "Hue-"),
        RgbSatUp = 0x5CC7 => ("RGB_SAI", "RGB_SAI", "Sat+"),
        RgbSatDown = 0x5CC8 => ("RGB_SAD", "RGB_SAD", "Sat-"),
        RgbValUp = 0x5CC9 => ("RGB_VAI", "RGB_VAI", "Bright+"),
        RgbValDown = 0x5CCA => ("RGB_VAD", "RGB_VAD", "Bright-"),
        RgbSpeedUp = 0x5CCB => ("RGB_SPI", "RGB_SPI", "Speed+"),
        RgbSpeedDown = 0x5CCC => ("RGB_SPD", "RGB_SPD", "Speed-"),
        /// Left shift when held, `(` when tapped
        SpaceCadetLShift = 0x5CD7 => ("KC_LSPO", "KC_LSPO", "LS/("),
        /// Right shift when held, `)` when tapped
        SpaceCadetRShift = 0x5CD8 => ("KC_RSPC", "KC_RSPC", "RS/)"),
        /// Right shift when held, enter when tapped
        SpaceCadetShiftEnter = 0x5CD9 => ("KC_SFTENT", "KC_SFTENT", "RS/Enter"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hid_keycode_from_repr() {
        assert_eq!(HidKeyCode::from_repr(0x04), Some(HidKeyCode::A));
        assert_eq!(HidKeyCode::from_repr(0xE5), Some(HidKeyCode::RShift));
        assert_eq!(HidKeyCode::from_repr(0xFF), Some(HidKeyCode::MouseAccel2));
        // Unassigned in the basic page
        assert_eq!(HidKeyCode::from_repr(0xC0), None);
        assert_eq!(HidKeyCode::from_repr(0xE8), None);
    }

    #[test]
    fn test_hid_keycode_names() {
        assert_eq!(HidKeyCode::A.long_name(), "KC_A");
        assert_eq!(HidKeyCode::A.label(), "A");
        assert_eq!(HidKeyCode::Enter.long_name(), "KC_ENTER");
        assert_eq!(HidKeyCode::Enter.short_name(), "KC_ENT");
        assert_eq!(HidKeyCode::MouseBtn1.short_name(), "KC_BTN1");
    }

    #[test]
    fn test_quantum_keycode() {
        assert_eq!(QuantumKeyCode::from_repr(0x5C00), Some(QuantumKeyCode::Reset));
        assert_eq!(QuantumKeyCode::Reset.long_name(), "RESET");
        assert_eq!(QuantumKeyCode::GraveEscape.short_name(), "KC_GESC");
        assert_eq!(QuantumKeyCode::from_repr(0x5FFF), None);
    }
}
