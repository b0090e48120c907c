use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 204, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 196, b: 87 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 214, g: 214, b: 214 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 120, g: 220, b: 140 };
pub const HOSTNAME: Color = Color::TrueColor { r: 170, g: 150, b: 255 };
pub const URL: Color = Color::TrueColor { r: 110, g: 180, b: 255 };

pub const SEVERITY_CRITICAL: Color = Color::TrueColor { r: 200, g: 40, b: 80 };
pub const SEVERITY_HIGH: Color = Color::Red;
pub const SEVERITY_MEDIUM: Color = Color::Yellow;
pub const SEVERITY_LOW: Color = Color::Green;
pub const SEVERITY_INFO: Color = Color::Blue;
