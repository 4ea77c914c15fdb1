use colored::Color;

pub const PRIMARY: Color = Color::BrightWhite;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const FREE: Color = Color::Green;
pub const OCCUPIED: Color = Color::Yellow;
pub const VEHICLE_ID: Color = Color::BrightMagenta;
pub const FEE: Color = Color::BrightGreen;
