pub mod card;
pub mod form;
pub mod help;
pub mod root;
pub mod tabs;
