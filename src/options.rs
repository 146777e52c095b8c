use std::time::Duration;

use serenity::all::ReactionType;

use crate::button::{ButtonKind, ButtonSpec};
use crate::messages::MessageOverrides;
use crate::page::Page;

/// How long a paginator listens for button presses before freezing the view.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Discord caps action rows at five buttons.
pub const MAX_BUTTONS_PER_ROW: usize = 5;

/// Construction-time configuration for a [`crate::Paginator`].
///
/// Only `pages` is required; every other knob has a documented default and a
/// chainable setter.
#[derive(Debug, Clone)]
pub struct PaginatorOptions {
    /// The ordered pages to flip through.
    pub pages: Vec<Page>,
    /// Listening window, measured from attachment. Defaults to 60 seconds.
    pub timeout: Duration,
    /// Explicit button layout. When empty, a default layout is derived.
    pub buttons: Vec<ButtonSpec>,
    /// With no explicit buttons: `true` derives the full default set,
    /// `false` falls back to a minimal previous/stop/next row.
    pub use_default_buttons: bool,
    /// Per-kind label overrides for derived buttons.
    pub button_labels: ButtonLabels,
    /// Per-kind emoji overrides for derived buttons.
    pub button_emojis: ButtonEmojis,
    /// Partial response-message overrides, merged with the defaults.
    pub response_messages: MessageOverrides,
    /// Append "Page X of Y" to each rendered footer. Defaults to `true`.
    pub show_page_numbers: bool,
    /// Reject button presses from anyone but the starter. Defaults to `true`.
    pub author_only: bool,
    /// Buttons per action row, clipped to the platform ceiling of 5.
    pub max_buttons_per_row: usize,
    /// Add a jump button to the default layout. Defaults to `false`.
    pub allow_jumping: bool,
    /// Add a page-info button to the default layout. Defaults to `false`.
    pub show_page_info: bool,
    /// Wrap around at both edges instead of clamping. Defaults to `false`.
    pub loop_pages: bool,
}

impl PaginatorOptions {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            timeout: DEFAULT_TIMEOUT,
            buttons: Vec::new(),
            use_default_buttons: true,
            button_labels: ButtonLabels::default(),
            button_emojis: ButtonEmojis::default(),
            response_messages: MessageOverrides::default(),
            show_page_numbers: true,
            author_only: true,
            max_buttons_per_row: MAX_BUTTONS_PER_ROW,
            allow_jumping: false,
            show_page_info: false,
            loop_pages: false,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn buttons(mut self, buttons: Vec<ButtonSpec>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn use_default_buttons(mut self, use_default_buttons: bool) -> Self {
        self.use_default_buttons = use_default_buttons;
        self
    }

    pub fn button_labels(mut self, labels: ButtonLabels) -> Self {
        self.button_labels = labels;
        self
    }

    pub fn button_emojis(mut self, emojis: ButtonEmojis) -> Self {
        self.button_emojis = emojis;
        self
    }

    pub fn response_messages(mut self, overrides: MessageOverrides) -> Self {
        self.response_messages = overrides;
        self
    }

    pub fn show_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = show;
        self
    }

    pub fn author_only(mut self, author_only: bool) -> Self {
        self.author_only = author_only;
        self
    }

    pub fn max_buttons_per_row(mut self, max: usize) -> Self {
        self.max_buttons_per_row = max;
        self
    }

    pub fn allow_jumping(mut self, allow: bool) -> Self {
        self.allow_jumping = allow;
        self
    }

    pub fn show_page_info(mut self, show: bool) -> Self {
        self.show_page_info = show;
        self
    }

    pub fn loop_pages(mut self, loop_pages: bool) -> Self {
        self.loop_pages = loop_pages;
        self
    }
}

/// Per-kind label overrides. Unset kinds keep their built-in label.
#[derive(Debug, Clone, Default)]
pub struct ButtonLabels {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
    pub stop: Option<String>,
    pub jump: Option<String>,
    pub info: Option<String>,
}

impl ButtonLabels {
    pub fn get(&self, kind: ButtonKind) -> Option<&str> {
        match kind {
            ButtonKind::First => self.first.as_deref(),
            ButtonKind::Previous => self.previous.as_deref(),
            ButtonKind::Next => self.next.as_deref(),
            ButtonKind::Last => self.last.as_deref(),
            ButtonKind::Stop => self.stop.as_deref(),
            ButtonKind::Jump => self.jump.as_deref(),
            ButtonKind::Info => self.info.as_deref(),
        }
    }
}

/// Per-kind emoji overrides. Unset kinds keep their built-in emoji.
#[derive(Debug, Clone, Default)]
pub struct ButtonEmojis {
    pub first: Option<ReactionType>,
    pub previous: Option<ReactionType>,
    pub next: Option<ReactionType>,
    pub last: Option<ReactionType>,
    pub stop: Option<ReactionType>,
    pub jump: Option<ReactionType>,
    pub info: Option<ReactionType>,
}

impl ButtonEmojis {
    pub fn get(&self, kind: ButtonKind) -> Option<&ReactionType> {
        match kind {
            ButtonKind::First => self.first.as_ref(),
            ButtonKind::Previous => self.previous.as_ref(),
            ButtonKind::Next => self.next.as_ref(),
            ButtonKind::Last => self.last.as_ref(),
            ButtonKind::Stop => self.stop.as_ref(),
            ButtonKind::Jump => self.jump.as_ref(),
            ButtonKind::Info => self.info.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let options = PaginatorOptions::new(Vec::new());
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert!(options.buttons.is_empty());
        assert!(options.use_default_buttons);
        assert!(options.show_page_numbers);
        assert!(options.author_only);
        assert_eq!(options.max_buttons_per_row, 5);
        assert!(!options.allow_jumping);
        assert!(!options.show_page_info);
        assert!(!options.loop_pages);
    }

    #[test]
    fn setters_chain() {
        let options = PaginatorOptions::new(Vec::new())
            .timeout(Duration::from_secs(300))
            .loop_pages(true)
            .author_only(false)
            .allow_jumping(true);
        assert_eq!(options.timeout, Duration::from_secs(300));
        assert!(options.loop_pages);
        assert!(!options.author_only);
        assert!(options.allow_jumping);
    }

    #[test]
    fn label_overrides_resolve_per_kind() {
        let labels = ButtonLabels {
            next: Some("Forward".to_string()),
            ..ButtonLabels::default()
        };
        assert_eq!(labels.get(ButtonKind::Next), Some("Forward"));
        assert_eq!(labels.get(ButtonKind::Previous), None);
    }
}
