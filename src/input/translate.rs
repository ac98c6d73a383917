use crate::host::{gamepad_axis, gamepad_button, mouse_button, scancode};

use super::{GamepadAxis, GamepadButton, Key, MouseButton};

/// Translates a host scancode into a [Key].
///
/// Scancodes without a stable key return [Key::Unknown].
pub fn key_from_scancode(code: u32) -> Key {
    match code {
        scancode::UNKNOWN => Key::Unknown,
        scancode::A => Key::A,
        scancode::B => Key::B,
        scancode::C => Key::C,
        scancode::D => Key::D,
        scancode::E => Key::E,
        scancode::F => Key::F,
        scancode::G => Key::G,
        scancode::H => Key::H,
        scancode::I => Key::I,
        scancode::J => Key::J,
        scancode::K => Key::K,
        scancode::L => Key::L,
        scancode::M => Key::M,
        scancode::N => Key::N,
        scancode::O => Key::O,
        scancode::P => Key::P,
        scancode::Q => Key::Q,
        scancode::R => Key::R,
        scancode::S => Key::S,
        scancode::T => Key::T,
        scancode::U => Key::U,
        scancode::V => Key::V,
        scancode::W => Key::W,
        scancode::X => Key::X,
        scancode::Y => Key::Y,
        scancode::Z => Key::Z,
        scancode::NUM_1 => Key::D1,
        scancode::NUM_2 => Key::D2,
        scancode::NUM_3 => Key::D3,
        scancode::NUM_4 => Key::D4,
        scancode::NUM_5 => Key::D5,
        scancode::NUM_6 => Key::D6,
        scancode::NUM_7 => Key::D7,
        scancode::NUM_8 => Key::D8,
        scancode::NUM_9 => Key::D9,
        scancode::NUM_0 => Key::D0,
        scancode::RETURN => Key::Enter,
        scancode::ESCAPE => Key::Escape,
        scancode::BACKSPACE => Key::Backspace,
        scancode::TAB => Key::Tab,
        scancode::SPACE => Key::Space,
        scancode::MINUS => Key::Minus,
        scancode::EQUALS => Key::Equals,
        scancode::LEFTBRACKET => Key::LeftBracket,
        scancode::RIGHTBRACKET => Key::RightBracket,
        scancode::BACKSLASH => Key::Backslash,
        scancode::SEMICOLON => Key::Semicolon,
        scancode::APOSTROPHE => Key::Apostrophe,
        scancode::GRAVE => Key::Tilde,
        scancode::COMMA => Key::Comma,
        scancode::PERIOD => Key::Period,
        scancode::SLASH => Key::Slash,
        scancode::CAPSLOCK => Key::Capslock,
        scancode::F1 => Key::F1,
        scancode::F2 => Key::F2,
        scancode::F3 => Key::F3,
        scancode::F4 => Key::F4,
        scancode::F5 => Key::F5,
        scancode::F6 => Key::F6,
        scancode::F7 => Key::F7,
        scancode::F8 => Key::F8,
        scancode::F9 => Key::F9,
        scancode::F10 => Key::F10,
        scancode::F11 => Key::F11,
        scancode::F12 => Key::F12,
        scancode::PRINTSCREEN => Key::PrintScreen,
        scancode::SCROLLLOCK => Key::ScrollLock,
        scancode::PAUSE => Key::Pause,
        scancode::INSERT => Key::Insert,
        scancode::HOME => Key::Home,
        scancode::PAGEUP => Key::PageUp,
        scancode::DELETE => Key::Delete,
        scancode::END => Key::End,
        scancode::PAGEDOWN => Key::PageDown,
        scancode::RIGHT => Key::Right,
        scancode::LEFT => Key::Left,
        scancode::DOWN => Key::Down,
        scancode::UP => Key::Up,
        scancode::KP_DIVIDE => Key::KeypadDivide,
        scancode::KP_MULTIPLY => Key::KeypadMultiply,
        scancode::KP_MINUS => Key::KeypadMinus,
        scancode::KP_PLUS => Key::KeypadPlus,
        scancode::KP_ENTER => Key::KeypadEnter,
        scancode::KP_1 => Key::Keypad1,
        scancode::KP_2 => Key::Keypad2,
        scancode::KP_3 => Key::Keypad3,
        scancode::KP_4 => Key::Keypad4,
        scancode::KP_5 => Key::Keypad5,
        scancode::KP_6 => Key::Keypad6,
        scancode::KP_7 => Key::Keypad7,
        scancode::KP_8 => Key::Keypad8,
        scancode::KP_9 => Key::Keypad9,
        scancode::KP_0 => Key::Keypad0,
        scancode::APPLICATION => Key::Application,
        scancode::KP_EQUALS => Key::KeypadEquals,
        scancode::F13 => Key::F13,
        scancode::F14 => Key::F14,
        scancode::F15 => Key::F15,
        scancode::F16 => Key::F16,
        scancode::F17 => Key::F17,
        scancode::F18 => Key::F18,
        scancode::F19 => Key::F19,
        scancode::F20 => Key::F20,
        scancode::F21 => Key::F21,
        scancode::F22 => Key::F22,
        scancode::F23 => Key::F23,
        scancode::F24 => Key::F24,
        scancode::EXECUTE => Key::Execute,
        scancode::HELP => Key::Help,
        scancode::MENU => Key::Menu,
        scancode::SELECT => Key::Select,
        scancode::STOP => Key::Stop,
        scancode::UNDO => Key::Undo,
        scancode::CUT => Key::Cut,
        scancode::COPY => Key::Copy,
        scancode::PASTE => Key::Paste,
        scancode::FIND => Key::Find,
        scancode::MUTE => Key::Mute,
        scancode::VOLUMEUP => Key::VolumeUp,
        scancode::VOLUMEDOWN => Key::VolumeDown,
        scancode::KP_COMMA => Key::KeypadComma,
        scancode::ALTERASE => Key::AltErase,
        scancode::SYSREQ => Key::SysReq,
        scancode::CANCEL => Key::Cancel,
        scancode::CLEAR => Key::Clear,
        scancode::PRIOR => Key::Prior,
        scancode::RETURN2 => Key::Enter2,
        scancode::SEPARATOR => Key::Separator,
        scancode::OUT => Key::Out,
        scancode::OPER => Key::Oper,
        scancode::CLEARAGAIN => Key::ClearAgain,
        scancode::KP_00 => Key::Keypad00,
        scancode::KP_000 => Key::Keypad000,
        scancode::KP_LEFTPAREN => Key::KeypadLeftParen,
        scancode::KP_RIGHTPAREN => Key::KeypadRightParen,
        scancode::KP_LEFTBRACE => Key::KeypadLeftBrace,
        scancode::KP_RIGHTBRACE => Key::KeypadRightBrace,
        scancode::KP_TAB => Key::KeypadTab,
        scancode::KP_BACKSPACE => Key::KeypadBackspace,
        scancode::KP_A => Key::KeypadA,
        scancode::KP_B => Key::KeypadB,
        scancode::KP_C => Key::KeypadC,
        scancode::KP_D => Key::KeypadD,
        scancode::KP_E => Key::KeypadE,
        scancode::KP_F => Key::KeypadF,
        scancode::KP_XOR => Key::KeypadXor,
        scancode::KP_POWER => Key::KeypadPower,
        scancode::KP_PERCENT => Key::KeypadPercent,
        scancode::KP_LESS => Key::KeypadLess,
        scancode::KP_GREATER => Key::KeypadGreater,
        scancode::KP_AMPERSAND => Key::KeypadAmpersand,
        scancode::KP_COLON => Key::KeypadColon,
        scancode::KP_HASH => Key::KeypadHash,
        scancode::KP_SPACE => Key::KeypadSpace,
        scancode::KP_CLEAR => Key::KeypadClear,
        scancode::LCTRL => Key::LeftControl,
        scancode::LSHIFT => Key::LeftShift,
        scancode::LALT => Key::LeftAlt,
        scancode::LGUI => Key::LeftOS,
        scancode::RCTRL => Key::RightControl,
        scancode::RSHIFT => Key::RightShift,
        scancode::RALT => Key::RightAlt,
        scancode::RGUI => Key::RightOS,
        _ => Key::Unknown,
    }
}

pub fn mouse_button_from_host(button: u8) -> MouseButton {
    match button {
        mouse_button::LEFT => MouseButton::Left,
        mouse_button::RIGHT => MouseButton::Right,
        mouse_button::MIDDLE => MouseButton::Middle,
        _ => MouseButton::None,
    }
}

/// Translates a host gamepad button code.
///
/// The guide button is reported as [GamepadButton::Select]; misc, paddle
/// and touchpad buttons have no stable counterpart and map to
/// [GamepadButton::None].
pub fn gamepad_button_from_host(button: i32) -> GamepadButton {
    match button {
        gamepad_button::INVALID => GamepadButton::None,
        gamepad_button::A => GamepadButton::A,
        gamepad_button::B => GamepadButton::B,
        gamepad_button::X => GamepadButton::X,
        gamepad_button::Y => GamepadButton::Y,
        gamepad_button::BACK => GamepadButton::Back,
        gamepad_button::GUIDE => GamepadButton::Select,
        gamepad_button::START => GamepadButton::Start,
        gamepad_button::LEFT_STICK => GamepadButton::LeftStick,
        gamepad_button::RIGHT_STICK => GamepadButton::RightStick,
        gamepad_button::LEFT_SHOULDER => GamepadButton::LeftShoulder,
        gamepad_button::RIGHT_SHOULDER => GamepadButton::RightShoulder,
        gamepad_button::DPAD_UP => GamepadButton::Up,
        gamepad_button::DPAD_DOWN => GamepadButton::Down,
        gamepad_button::DPAD_LEFT => GamepadButton::Left,
        gamepad_button::DPAD_RIGHT => GamepadButton::Right,
        _ => GamepadButton::None,
    }
}

pub fn gamepad_axis_from_host(axis: i32) -> GamepadAxis {
    match axis {
        gamepad_axis::INVALID => GamepadAxis::None,
        gamepad_axis::LEFT_X => GamepadAxis::LeftX,
        gamepad_axis::LEFT_Y => GamepadAxis::LeftY,
        gamepad_axis::RIGHT_X => GamepadAxis::RightX,
        gamepad_axis::RIGHT_Y => GamepadAxis::RightY,
        gamepad_axis::TRIGGER_LEFT => GamepadAxis::LeftTrigger,
        gamepad_axis::TRIGGER_RIGHT => GamepadAxis::RightTrigger,
        _ => GamepadAxis::None,
    }
}

/// Maps a signed 16 bit axis reading onto `[-1.0, 1.0]`.
///
/// Each sign is divided by its own bound, so both ends of the `i16` range
/// land exactly on -1.0 and 1.0.
pub fn normalize_axis(value: i16) -> f32 {
    if value >= 0 {
        value as f32 / 32767.0
    } else {
        value as f32 / 32768.0
    }
}
