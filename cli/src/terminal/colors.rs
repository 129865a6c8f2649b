use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 95, g: 215, b: 135 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 208, g: 208, b: 208 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 95, g: 175, b: 255 };
pub const ALIVE: Color = Color::Green;
pub const DEAD: Color = Color::Red;
