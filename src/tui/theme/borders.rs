//! Border styles

use ratatui::symbols::border;

/// Rounded everywhere; the focused input box gets the thick set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    pub fn focused_set() -> border::Set<'static> {
        border::THICK
    }
}
