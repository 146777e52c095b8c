use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, ReactionType};

/// Namespace prefix for all paginator button custom IDs, so the collector can
/// pick its own buttons out of every component event on a shared message.
pub const CUSTOM_ID_PREFIX: &str = "paginator_";

/// The closed set of navigation button kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    First,
    Previous,
    Next,
    Last,
    Stop,
    Jump,
    Info,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 7] = [
        ButtonKind::First,
        ButtonKind::Previous,
        ButtonKind::Next,
        ButtonKind::Last,
        ButtonKind::Stop,
        ButtonKind::Jump,
        ButtonKind::Info,
    ];

    /// Wire name used in custom IDs.
    pub fn wire_name(self) -> &'static str {
        match self {
            ButtonKind::First => "first",
            ButtonKind::Previous => "previous",
            ButtonKind::Next => "next",
            ButtonKind::Last => "last",
            ButtonKind::Stop => "stop",
            ButtonKind::Jump => "jump",
            ButtonKind::Info => "info",
        }
    }

    /// Full namespaced custom ID (`paginator_<kind>`).
    pub fn custom_id(self) -> String {
        format!("{}{}", CUSTOM_ID_PREFIX, self.wire_name())
    }

    /// Parse a namespaced custom ID back into a kind.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        let name = custom_id.strip_prefix(CUSTOM_ID_PREFIX)?;
        match name {
            "first" => Some(ButtonKind::First),
            "previous" => Some(ButtonKind::Previous),
            "next" => Some(ButtonKind::Next),
            "last" => Some(ButtonKind::Last),
            "stop" => Some(ButtonKind::Stop),
            "jump" => Some(ButtonKind::Jump),
            "info" => Some(ButtonKind::Info),
            _ => None,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            ButtonKind::First => "First Page",
            ButtonKind::Previous => "Previous",
            ButtonKind::Next => "Next",
            ButtonKind::Last => "Last Page",
            ButtonKind::Stop => "Close",
            ButtonKind::Jump => "Jump to...",
            ButtonKind::Info => "Page Info",
        }
    }

    pub fn default_emoji(self) -> &'static str {
        match self {
            ButtonKind::First => "⏮️",
            ButtonKind::Previous => "◀️",
            ButtonKind::Next => "▶️",
            ButtonKind::Last => "⏭️",
            ButtonKind::Stop => "❌",
            ButtonKind::Jump => "🔢",
            ButtonKind::Info => "ℹ️",
        }
    }

    pub fn default_style(self) -> ButtonStyle {
        match self {
            ButtonKind::Stop => ButtonStyle::Danger,
            ButtonKind::Jump | ButtonKind::Info => ButtonStyle::Secondary,
            ButtonKind::First | ButtonKind::Previous | ButtonKind::Next | ButtonKind::Last => {
                ButtonStyle::Primary
            }
        }
    }
}

/// Caller-supplied configuration for a single button in the row.
///
/// Unset fields fall back to the paginator's per-kind override tables, then
/// to the built-in defaults. Buttons are ordered by `position` ascending;
/// ties keep their insertion order.
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    pub kind: ButtonKind,
    pub label: Option<String>,
    pub emoji: Option<ReactionType>,
    pub style: Option<ButtonStyle>,
    pub position: i32,
}

impl ButtonSpec {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            label: None,
            emoji: None,
            style: None,
            position: 0,
        }
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn emoji<E: Into<ReactionType>>(mut self, emoji: E) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

/// Whether a button should render disabled for the given cursor state.
///
/// `First`/`Previous` lock at the front edge and `Next`/`Last` at the back
/// edge unless looping is on; everything else is always pressable.
pub fn is_disabled(kind: ButtonKind, cursor: usize, page_count: usize, loop_pages: bool) -> bool {
    match kind {
        ButtonKind::First | ButtonKind::Previous => cursor == 0 && !loop_pages,
        ButtonKind::Next | ButtonKind::Last => cursor + 1 >= page_count && !loop_pages,
        ButtonKind::Stop | ButtonKind::Jump | ButtonKind::Info => false,
    }
}

/// Partition built buttons into action rows of at most `per_row` each.
pub(crate) fn chunk_rows(buttons: Vec<CreateButton>, per_row: usize) -> Vec<CreateActionRow> {
    buttons
        .chunks(per_row.max(1))
        .map(|chunk| CreateActionRow::Buttons(chunk.to_vec()))
        .collect()
}

/// Ready-made button layouts.
pub mod presets {
    use super::{ButtonKind, ButtonSpec};

    /// Previous, Stop, Next.
    pub fn minimal() -> Vec<ButtonSpec> {
        vec![
            ButtonSpec::new(ButtonKind::Previous).position(0),
            ButtonSpec::new(ButtonKind::Stop).position(1),
            ButtonSpec::new(ButtonKind::Next).position(2),
        ]
    }

    /// Just Previous and Next.
    pub fn simple() -> Vec<ButtonSpec> {
        vec![
            ButtonSpec::new(ButtonKind::Previous).position(0),
            ButtonSpec::new(ButtonKind::Next).position(1),
        ]
    }

    /// Every kind, full navigation.
    pub fn advanced() -> Vec<ButtonSpec> {
        vec![
            ButtonSpec::new(ButtonKind::First).position(0),
            ButtonSpec::new(ButtonKind::Previous).position(1),
            ButtonSpec::new(ButtonKind::Info).position(2),
            ButtonSpec::new(ButtonKind::Next).position(3),
            ButtonSpec::new(ButtonKind::Last).position(4),
            ButtonSpec::new(ButtonKind::Jump).position(5),
            ButtonSpec::new(ButtonKind::Stop).position(6),
        ]
    }
}
