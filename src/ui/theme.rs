use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TOTAL_ITEMS: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const TOTAL_CALORIES: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Chart slice colours, cycled by jar position.
pub const CHART_COLORS: [Color; 15] = [
    Color::Rgb(0x3b, 0x82, 0xf6),
    Color::Rgb(0xef, 0x44, 0x44),
    Color::Rgb(0x10, 0xb9, 0x81),
    Color::Rgb(0xf5, 0x9e, 0x0b),
    Color::Rgb(0x8b, 0x5c, 0xf6),
    Color::Rgb(0xec, 0x48, 0x99),
    Color::Rgb(0x14, 0xb8, 0xa6),
    Color::Rgb(0xf9, 0x73, 0x16),
    Color::Rgb(0x84, 0xcc, 0x16),
    Color::Rgb(0x63, 0x66, 0xf1),
    Color::Rgb(0xf4, 0x3f, 0x5e),
    Color::Rgb(0x06, 0xb6, 0xd4),
    Color::Rgb(0x64, 0x74, 0x8b),
    Color::Rgb(0xdc, 0x26, 0x26),
    Color::Rgb(0x05, 0x96, 0x69),
];

pub fn chart_color(index: usize) -> Color {
    CHART_COLORS[index % CHART_COLORS.len()]
}
