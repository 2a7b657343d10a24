//! Color palette - slate background with a red accent

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub const SLATE: Self = Self {
        fg_primary: Color::Rgb(241, 245, 249),   // #f1f5f9 slate-100
        fg_secondary: Color::Rgb(148, 163, 184), // #94a3b8 slate-400
        fg_muted: Color::Rgb(100, 116, 139),     // #64748b slate-500
        accent: Color::Rgb(239, 68, 68),         // #ef4444 red-500
        border: Color::Rgb(30, 41, 59),          // #1e293b slate-800
        success: Color::Rgb(22, 163, 74),        // #16a34a green-600
        info: Color::Rgb(96, 165, 250),          // #60a5fa blue-400
        warning: Color::Rgb(234, 179, 8),        // #eab308 yellow-500
        error: Color::Rgb(248, 113, 113),        // #f87171 red-400
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::SLATE
    }
}
