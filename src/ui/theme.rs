use ratatui::style::Color;

// Brand
pub const ACCENT: Color = Color::Rgb(218, 118, 89); // warm orange
pub const ACCENT_DIM: Color = Color::Rgb(178, 98, 69);
pub const SUCCESS: Color = Color::Rgb(134, 188, 111); // soft green
pub const WARNING: Color = Color::Rgb(229, 192, 123); // amber
pub const ERROR: Color = Color::Rgb(224, 108, 117);

// Text
pub const TEXT: Color = Color::Rgb(240, 240, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_MUTED: Color = Color::Rgb(144, 144, 144);

// Backgrounds
pub const BG_BASE: Color = Color::Rgb(34, 34, 32);
pub const BG_SURFACE: Color = Color::Rgb(51, 51, 49);
pub const BG_ELEVATED: Color = Color::Rgb(66, 66, 64);

// Borders
pub const BORDER: Color = Color::Rgb(66, 66, 64);
