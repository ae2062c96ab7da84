use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const BSSID: Color = Color::Magenta;
pub const SSID: Color = Color::BrightCyan;
pub const VENDOR: Color = Color::Yellow;

pub const HIGH: Color = Color::Red;
pub const MEDIUM: Color = Color::BrightYellow;
pub const LOW: Color = Color::Blue;
pub const INFO: Color = Color::Green;
