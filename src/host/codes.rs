//! Numeric vocabulary of the host contract.
//!
//! Scancodes are USB HID keyboard usage ids, mouse buttons and gamepad
//! buttons/axes follow the layout most host libraries expose.

#[allow(missing_docs)]
pub mod scancode {
    pub const UNKNOWN: u32 = 0;

    pub const A: u32 = 4;
    pub const B: u32 = 5;
    pub const C: u32 = 6;
    pub const D: u32 = 7;
    pub const E: u32 = 8;
    pub const F: u32 = 9;
    pub const G: u32 = 10;
    pub const H: u32 = 11;
    pub const I: u32 = 12;
    pub const J: u32 = 13;
    pub const K: u32 = 14;
    pub const L: u32 = 15;
    pub const M: u32 = 16;
    pub const N: u32 = 17;
    pub const O: u32 = 18;
    pub const P: u32 = 19;
    pub const Q: u32 = 20;
    pub const R: u32 = 21;
    pub const S: u32 = 22;
    pub const T: u32 = 23;
    pub const U: u32 = 24;
    pub const V: u32 = 25;
    pub const W: u32 = 26;
    pub const X: u32 = 27;
    pub const Y: u32 = 28;
    pub const Z: u32 = 29;

    pub const NUM_1: u32 = 30;
    pub const NUM_2: u32 = 31;
    pub const NUM_3: u32 = 32;
    pub const NUM_4: u32 = 33;
    pub const NUM_5: u32 = 34;
    pub const NUM_6: u32 = 35;
    pub const NUM_7: u32 = 36;
    pub const NUM_8: u32 = 37;
    pub const NUM_9: u32 = 38;
    pub const NUM_0: u32 = 39;

    pub const RETURN: u32 = 40;
    pub const ESCAPE: u32 = 41;
    pub const BACKSPACE: u32 = 42;
    pub const TAB: u32 = 43;
    pub const SPACE: u32 = 44;
    pub const MINUS: u32 = 45;
    pub const EQUALS: u32 = 46;
    pub const LEFTBRACKET: u32 = 47;
    pub const RIGHTBRACKET: u32 = 48;
    pub const BACKSLASH: u32 = 49;
    pub const NONUSHASH: u32 = 50;
    pub const SEMICOLON: u32 = 51;
    pub const APOSTROPHE: u32 = 52;
    pub const GRAVE: u32 = 53;
    pub const COMMA: u32 = 54;
    pub const PERIOD: u32 = 55;
    pub const SLASH: u32 = 56;
    pub const CAPSLOCK: u32 = 57;

    pub const F1: u32 = 58;
    pub const F2: u32 = 59;
    pub const F3: u32 = 60;
    pub const F4: u32 = 61;
    pub const F5: u32 = 62;
    pub const F6: u32 = 63;
    pub const F7: u32 = 64;
    pub const F8: u32 = 65;
    pub const F9: u32 = 66;
    pub const F10: u32 = 67;
    pub const F11: u32 = 68;
    pub const F12: u32 = 69;

    pub const PRINTSCREEN: u32 = 70;
    pub const SCROLLLOCK: u32 = 71;
    pub const PAUSE: u32 = 72;
    pub const INSERT: u32 = 73;
    pub const HOME: u32 = 74;
    pub const PAGEUP: u32 = 75;
    pub const DELETE: u32 = 76;
    pub const END: u32 = 77;
    pub const PAGEDOWN: u32 = 78;
    pub const RIGHT: u32 = 79;
    pub const LEFT: u32 = 80;
    pub const DOWN: u32 = 81;
    pub const UP: u32 = 82;

    pub const NUMLOCKCLEAR: u32 = 83;
    pub const KP_DIVIDE: u32 = 84;
    pub const KP_MULTIPLY: u32 = 85;
    pub const KP_MINUS: u32 = 86;
    pub const KP_PLUS: u32 = 87;
    pub const KP_ENTER: u32 = 88;
    pub const KP_1: u32 = 89;
    pub const KP_2: u32 = 90;
    pub const KP_3: u32 = 91;
    pub const KP_4: u32 = 92;
    pub const KP_5: u32 = 93;
    pub const KP_6: u32 = 94;
    pub const KP_7: u32 = 95;
    pub const KP_8: u32 = 96;
    pub const KP_9: u32 = 97;
    pub const KP_0: u32 = 98;
    pub const KP_PERIOD: u32 = 99;

    pub const NONUSBACKSLASH: u32 = 100;
    pub const APPLICATION: u32 = 101;
    pub const POWER: u32 = 102;
    pub const KP_EQUALS: u32 = 103;
    pub const F13: u32 = 104;
    pub const F14: u32 = 105;
    pub const F15: u32 = 106;
    pub const F16: u32 = 107;
    pub const F17: u32 = 108;
    pub const F18: u32 = 109;
    pub const F19: u32 = 110;
    pub const F20: u32 = 111;
    pub const F21: u32 = 112;
    pub const F22: u32 = 113;
    pub const F23: u32 = 114;
    pub const F24: u32 = 115;
    pub const EXECUTE: u32 = 116;
    pub const HELP: u32 = 117;
    pub const MENU: u32 = 118;
    pub const SELECT: u32 = 119;
    pub const STOP: u32 = 120;
    pub const AGAIN: u32 = 121;
    pub const UNDO: u32 = 122;
    pub const CUT: u32 = 123;
    pub const COPY: u32 = 124;
    pub const PASTE: u32 = 125;
    pub const FIND: u32 = 126;
    pub const MUTE: u32 = 127;
    pub const VOLUMEUP: u32 = 128;
    pub const VOLUMEDOWN: u32 = 129;
    pub const KP_COMMA: u32 = 133;

    pub const INTERNATIONAL1: u32 = 135;
    pub const INTERNATIONAL2: u32 = 136;
    pub const INTERNATIONAL3: u32 = 137;
    pub const INTERNATIONAL4: u32 = 138;
    pub const INTERNATIONAL5: u32 = 139;
    pub const LANG1: u32 = 144;
    pub const LANG2: u32 = 145;

    pub const ALTERASE: u32 = 153;
    pub const SYSREQ: u32 = 154;
    pub const CANCEL: u32 = 155;
    pub const CLEAR: u32 = 156;
    pub const PRIOR: u32 = 157;
    pub const RETURN2: u32 = 158;
    pub const SEPARATOR: u32 = 159;
    pub const OUT: u32 = 160;
    pub const OPER: u32 = 161;
    pub const CLEARAGAIN: u32 = 162;

    pub const KP_00: u32 = 176;
    pub const KP_000: u32 = 177;
    pub const KP_LEFTPAREN: u32 = 182;
    pub const KP_RIGHTPAREN: u32 = 183;
    pub const KP_LEFTBRACE: u32 = 184;
    pub const KP_RIGHTBRACE: u32 = 185;
    pub const KP_TAB: u32 = 186;
    pub const KP_BACKSPACE: u32 = 187;
    pub const KP_A: u32 = 188;
    pub const KP_B: u32 = 189;
    pub const KP_C: u32 = 190;
    pub const KP_D: u32 = 191;
    pub const KP_E: u32 = 192;
    pub const KP_F: u32 = 193;
    pub const KP_XOR: u32 = 194;
    pub const KP_POWER: u32 = 195;
    pub const KP_PERCENT: u32 = 196;
    pub const KP_LESS: u32 = 197;
    pub const KP_GREATER: u32 = 198;
    pub const KP_AMPERSAND: u32 = 199;
    pub const KP_COLON: u32 = 203;
    pub const KP_HASH: u32 = 204;
    pub const KP_SPACE: u32 = 205;
    pub const KP_CLEAR: u32 = 216;

    pub const LCTRL: u32 = 224;
    pub const LSHIFT: u32 = 225;
    pub const LALT: u32 = 226;
    pub const LGUI: u32 = 227;
    pub const RCTRL: u32 = 228;
    pub const RSHIFT: u32 = 229;
    pub const RALT: u32 = 230;
    pub const RGUI: u32 = 231;
}

pub mod mouse_button {
    /// Buttons outside the five standard ones.
    pub const UNKNOWN: u8 = 0;
    pub const LEFT: u8 = 1;
    pub const MIDDLE: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const X1: u8 = 4;
    pub const X2: u8 = 5;
}

/// Standard gamepad button layout.
pub mod gamepad_button {
    pub const INVALID: i32 = -1;
    pub const A: i32 = 0;
    pub const B: i32 = 1;
    pub const X: i32 = 2;
    pub const Y: i32 = 3;
    pub const BACK: i32 = 4;
    pub const GUIDE: i32 = 5;
    pub const START: i32 = 6;
    pub const LEFT_STICK: i32 = 7;
    pub const RIGHT_STICK: i32 = 8;
    pub const LEFT_SHOULDER: i32 = 9;
    pub const RIGHT_SHOULDER: i32 = 10;
    pub const DPAD_UP: i32 = 11;
    pub const DPAD_DOWN: i32 = 12;
    pub const DPAD_LEFT: i32 = 13;
    pub const DPAD_RIGHT: i32 = 14;

    /// Buttons past this code (misc, paddles, touchpad) have no stable mapping.
    pub const COUNT: i32 = 15;
}

/// Standard gamepad axis layout.
pub mod gamepad_axis {
    pub const INVALID: i32 = -1;
    pub const LEFT_X: i32 = 0;
    pub const LEFT_Y: i32 = 1;
    pub const RIGHT_X: i32 = 2;
    pub const RIGHT_Y: i32 = 3;
    pub const TRIGGER_LEFT: i32 = 4;
    pub const TRIGGER_RIGHT: i32 = 5;

    pub const COUNT: i32 = 6;
}
