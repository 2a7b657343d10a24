//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    // Brand
    pub youtube: &'static str,

    // Intents
    pub search: &'static str,
    pub user: &'static str,
    pub download: &'static str,

    // Form
    pub play: &'static str,
    pub settings: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub help: &'static str,

    // Card fields
    pub eye: &'static str,
    pub thumbs_up: &'static str,
    pub clock: &'static str,
    pub image: &'static str,
    pub link: &'static str,

    pub bullet: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            youtube: "\u{f167}",   // nf-fa-youtube_play

            search: "\u{f002}",    // nf-fa-search
            user: "\u{f007}",      // nf-fa-user
            download: "\u{f019}",  // nf-fa-download

            play: "\u{f04b}",      // nf-fa-play
            settings: "\u{f013}",  // nf-fa-cog

            success: "\u{f058}",   // nf-fa-check_circle
            error: "\u{f06a}",     // nf-fa-exclamation_circle
            warning: "\u{f071}",   // nf-fa-warning
            help: "\u{f059}",      // nf-fa-question_circle

            eye: "\u{f06e}",       // nf-fa-eye
            thumbs_up: "\u{f164}", // nf-fa-thumbs_up
            clock: "\u{f017}",     // nf-fa-clock_o
            image: "\u{f03e}",     // nf-fa-picture_o
            link: "\u{f0c1}",      // nf-fa-link

            bullet: "•",
        }
    }

    pub fn for_intent(&self, intent: crate::lookup::Intent) -> &'static str {
        match intent {
            crate::lookup::Intent::VideoLookup => self.search,
            crate::lookup::Intent::ChannelLookup => self.user,
            crate::lookup::Intent::DownloadLookup => self.download,
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = tick as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}
