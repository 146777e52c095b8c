use std::time::Duration;

use serenity::all::{
    Colour, CommandInteraction, ComponentInteraction, Context, CreateActionRow, CreateButton,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage,
    EditMessage, Message, ReactionType, Timestamp, UserId,
};
use serenity::futures::StreamExt;

use crate::button::{self, ButtonKind, ButtonSpec, CUSTOM_ID_PREFIX};
use crate::hey;
use crate::messages::{MessageKey, MessageOverrides, ResponseMessages};
use crate::options::{ButtonEmojis, ButtonLabels, PaginatorOptions, MAX_BUTTONS_PER_ROW};
use crate::page::Page;

/// What a handled button press did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressOutcome {
    /// The shown message was updated in place.
    Updated,
    /// Nothing about the shown message changed (rejection, info, jump).
    Ignored,
    /// The session was closed by the stop button.
    Stopped,
}

/// Button-driven embed paginator.
///
/// Holds an ordered set of [`Page`]s and a cursor, renders the current page
/// with a navigation row, and advances the cursor from button presses until
/// the session is stopped or its timeout window ends.
pub struct Paginator {
    pages: Vec<Page>,
    cursor: usize,
    active: bool,
    author_id: Option<UserId>,
    timeout: Duration,
    buttons: Vec<ButtonSpec>,
    button_labels: ButtonLabels,
    button_emojis: ButtonEmojis,
    messages: ResponseMessages,
    show_page_numbers: bool,
    author_only: bool,
    max_buttons_per_row: usize,
    loop_pages: bool,
}

impl Paginator {
    pub fn new(options: PaginatorOptions) -> Self {
        let PaginatorOptions {
            pages,
            timeout,
            buttons,
            use_default_buttons,
            button_labels,
            button_emojis,
            response_messages,
            show_page_numbers,
            author_only,
            max_buttons_per_row,
            allow_jumping,
            show_page_info,
            loop_pages,
        } = options;

        let mut messages = ResponseMessages::default();
        messages.apply(response_messages);

        let max_buttons_per_row = if max_buttons_per_row > MAX_BUTTONS_PER_ROW {
            hey!(
                "max_buttons_per_row {} is above the Discord row limit of {}, clipping",
                max_buttons_per_row,
                MAX_BUTTONS_PER_ROW
            );
            MAX_BUTTONS_PER_ROW
        } else {
            max_buttons_per_row.max(1)
        };

        Self {
            pages,
            cursor: 0,
            active: false,
            author_id: None,
            timeout,
            buttons: resolve_layout(buttons, use_default_buttons, allow_jumping, show_page_info),
            button_labels,
            button_emojis,
            messages,
            show_page_numbers,
            author_only,
            max_buttons_per_row,
            loop_pages,
        }
    }

    /// Zero-based index of the currently shown page.
    pub fn current_page(&self) -> usize {
        self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether a listener is currently attached.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Render the current page, decorated with "Page X of Y" when page
    /// numbers are on.
    pub fn current_embed(&self) -> CreateEmbed {
        let page_text = self
            .show_page_numbers
            .then(|| format!("Page {} of {}", self.cursor + 1, self.pages.len()));
        self.pages
            .get(self.cursor)
            .cloned()
            .unwrap_or_default()
            .render(page_text.as_deref())
    }

    /// Build the navigation rows for the current cursor position.
    pub fn button_rows(&self) -> Vec<CreateActionRow> {
        let buttons: Vec<CreateButton> = self
            .buttons
            .iter()
            .map(|spec| self.build_button(spec))
            .collect();
        button::chunk_rows(buttons, self.max_buttons_per_row)
    }

    /// The decorated current page together with its navigation rows.
    pub fn current_view(&self) -> (CreateEmbed, Vec<CreateActionRow>) {
        (self.current_embed(), self.button_rows())
    }

    /// Start from a slash command. Produces exactly one initial reply, then
    /// listens on it until stop or timeout.
    pub async fn start(&mut self, ctx: &Context, cmd: &CommandInteraction) -> serenity::Result<()> {
        if self.pages.is_empty() {
            let response = CreateInteractionResponseMessage::new()
                .content(self.messages.get(MessageKey::NoEmbedsError))
                .ephemeral(true);
            cmd.create_response(&ctx.http, CreateInteractionResponse::Message(response))
                .await?;
            return Ok(());
        }

        // A single page needs no buttons and no listener.
        if self.pages.len() == 1 {
            let response = CreateInteractionResponseMessage::new().embed(self.current_embed());
            cmd.create_response(&ctx.http, CreateInteractionResponse::Message(response))
                .await?;
            return Ok(());
        }

        let (embed, rows) = self.current_view();
        let response = CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(rows);
        cmd.create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await?;
        let message = cmd.get_response(&ctx.http).await?;

        self.listen(ctx, message, cmd.user.id).await
    }

    /// Start from a plain message. Produces exactly one reply message, then
    /// listens on it until stop or timeout.
    pub async fn start_message(&mut self, ctx: &Context, msg: &Message) -> serenity::Result<()> {
        if self.pages.is_empty() {
            let builder = CreateMessage::new()
                .content(self.messages.get(MessageKey::NoEmbedsError))
                .reference_message(msg);
            msg.channel_id.send_message(&ctx.http, builder).await?;
            return Ok(());
        }

        if self.pages.len() == 1 {
            let builder = CreateMessage::new()
                .embed(self.current_embed())
                .reference_message(msg);
            msg.channel_id.send_message(&ctx.http, builder).await?;
            return Ok(());
        }

        let (embed, rows) = self.current_view();
        let builder = CreateMessage::new()
            .embed(embed)
            .components(rows)
            .reference_message(msg);
        let message = msg.channel_id.send_message(&ctx.http, builder).await?;

        self.listen(ctx, message, msg.author.id).await
    }

    /// Attach the button listener to an already-sent message.
    ///
    /// The timeout is a single absolute window measured from attachment:
    /// presses do not extend it, so a busy session still freezes at the
    /// original deadline.
    pub async fn listen(
        &mut self,
        ctx: &Context,
        mut message: Message,
        author_id: UserId,
    ) -> serenity::Result<()> {
        self.author_id = Some(author_id);
        self.active = true;

        let mut presses = message
            .await_component_interaction(&ctx.shard)
            .timeout(self.timeout)
            .filter(|press| press.data.custom_id.starts_with(CUSTOM_ID_PREFIX))
            .stream();

        while let Some(press) = presses.next().await {
            if self.handle_press(ctx, &press).await? == PressOutcome::Stopped {
                break;
            }
        }

        // Timeout expiry: freeze the view by stripping the buttons. The
        // message may already be deleted or unwritable, so this is best
        // effort only.
        if self.active {
            self.active = false;
            let builder = EditMessage::new()
                .embed(self.current_embed())
                .components(Vec::new());
            let _ = message.edit(&ctx.http, builder).await;
        }

        Ok(())
    }

    async fn handle_press(
        &mut self,
        ctx: &Context,
        press: &ComponentInteraction,
    ) -> serenity::Result<PressOutcome> {
        if self.is_foreign_actor(press.user.id) {
            let response = CreateInteractionResponseMessage::new()
                .content(self.messages.get(MessageKey::AuthorOnlyError))
                .ephemeral(true);
            press
                .create_response(&ctx.http, CreateInteractionResponse::Message(response))
                .await?;
            return Ok(PressOutcome::Ignored);
        }

        let Some(kind) = ButtonKind::from_custom_id(&press.data.custom_id) else {
            // Not one of ours; some other handler on the message owns it.
            return Ok(PressOutcome::Ignored);
        };

        match kind {
            ButtonKind::Stop => {
                let response = CreateInteractionResponseMessage::new()
                    .embed(self.current_embed())
                    .components(Vec::new());
                press
                    .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(response))
                    .await?;
                self.active = false;
                return Ok(PressOutcome::Stopped);
            }
            ButtonKind::Info => {
                self.send_page_info(ctx, press).await?;
                return Ok(PressOutcome::Ignored);
            }
            ButtonKind::Jump => {
                self.send_jump_stub(ctx, press).await?;
                return Ok(PressOutcome::Ignored);
            }
            ButtonKind::First | ButtonKind::Previous | ButtonKind::Next | ButtonKind::Last => {
                // The cursor moves before the transport call; a failed update
                // leaves the view stale but never out of range.
                self.cursor = step(kind, self.cursor, self.pages.len(), self.loop_pages);
            }
        }

        let (embed, rows) = self.current_view();
        let response = CreateInteractionResponseMessage::new()
            .embed(embed)
            .components(rows);
        press
            .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(response))
            .await?;
        Ok(PressOutcome::Updated)
    }

    fn is_foreign_actor(&self, actor: UserId) -> bool {
        self.author_only && self.author_id.is_some_and(|author| author != actor)
    }

    async fn send_page_info(
        &self,
        ctx: &Context,
        press: &ComponentInteraction,
    ) -> serenity::Result<()> {
        let embed = CreateEmbed::new()
            .title(self.messages.get(MessageKey::PageInfoTitle))
            .description(self.messages.get(MessageKey::PageInfoDescription))
            .field(
                self.messages.get(MessageKey::CurrentPageField),
                (self.cursor + 1).to_string(),
                true,
            )
            .field(
                self.messages.get(MessageKey::TotalPagesField),
                self.pages.len().to_string(),
                true,
            )
            .field(
                self.messages.get(MessageKey::TimeRemainingField),
                self.messages.get(MessageKey::TimeRemainingValue),
                true,
            )
            .color(Colour::BLURPLE)
            .timestamp(Timestamp::now());

        let response = CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true);
        press
            .create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await
    }

    async fn send_jump_stub(
        &self,
        ctx: &Context,
        press: &ComponentInteraction,
    ) -> serenity::Result<()> {
        let content = self
            .messages
            .get(MessageKey::JumpToPageContent)
            .replace("{current}", &(self.cursor + 1).to_string())
            .replace("{total}", &self.pages.len().to_string());

        let response = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true);
        press
            .create_response(&ctx.http, CreateInteractionResponse::Message(response))
            .await
    }

    fn build_button(&self, spec: &ButtonSpec) -> CreateButton {
        let kind = spec.kind;
        let label = spec
            .label
            .clone()
            .or_else(|| self.button_labels.get(kind).map(str::to_owned))
            .unwrap_or_else(|| kind.default_label().to_owned());
        let emoji = spec
            .emoji
            .clone()
            .or_else(|| self.button_emojis.get(kind).cloned())
            .unwrap_or_else(|| ReactionType::Unicode(kind.default_emoji().to_owned()));
        let style = spec.style.unwrap_or_else(|| kind.default_style());

        CreateButton::new(kind.custom_id())
            .label(label)
            .emoji(emoji)
            .style(style)
            .disabled(button::is_disabled(
                kind,
                self.cursor,
                self.pages.len(),
                self.loop_pages,
            ))
    }

    /// Rewrite a single response message.
    pub fn update_response_message<S: Into<String>>(&mut self, key: MessageKey, value: S) {
        self.messages.set(key, value);
    }

    /// Rewrite several response messages at once.
    pub fn update_response_messages(&mut self, overrides: MessageOverrides) {
        self.messages.apply(overrides);
    }

    pub fn get_response_message(&self, key: MessageKey) -> String {
        self.messages.get(key).to_owned()
    }

    /// A defensive copy of the whole response-message table.
    pub fn response_messages(&self) -> ResponseMessages {
        self.messages.clone()
    }
}

/// Resolve the construction-time button layout.
fn resolve_layout(
    explicit: Vec<ButtonSpec>,
    use_default_buttons: bool,
    allow_jumping: bool,
    show_page_info: bool,
) -> Vec<ButtonSpec> {
    if !explicit.is_empty() {
        let mut buttons = explicit;
        buttons.sort_by_key(|spec| spec.position);
        return buttons;
    }

    if !use_default_buttons {
        return button::presets::minimal();
    }

    let mut buttons = vec![
        ButtonSpec::new(ButtonKind::First).position(0),
        ButtonSpec::new(ButtonKind::Previous).position(1),
        ButtonSpec::new(ButtonKind::Stop).position(2),
        ButtonSpec::new(ButtonKind::Next).position(3),
        ButtonSpec::new(ButtonKind::Last).position(4),
    ];
    if allow_jumping {
        buttons.push(ButtonSpec::new(ButtonKind::Jump).position(5));
    }
    if show_page_info {
        buttons.push(ButtonSpec::new(ButtonKind::Info).position(6));
    }
    buttons
}

/// Cursor transition for a navigation press. `page_count` must be non-zero.
fn step(kind: ButtonKind, cursor: usize, page_count: usize, loop_pages: bool) -> usize {
    match kind {
        ButtonKind::First => 0,
        ButtonKind::Previous => {
            if loop_pages && cursor == 0 {
                page_count - 1
            } else {
                cursor.saturating_sub(1)
            }
        }
        ButtonKind::Next => {
            if loop_pages && cursor + 1 == page_count {
                0
            } else {
                (cursor + 1).min(page_count - 1)
            }
        }
        ButtonKind::Last => page_count - 1,
        ButtonKind::Stop | ButtonKind::Jump | ButtonKind::Info => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(count: usize) -> Vec<Page> {
        (1..=count)
            .map(|n| Page::new().title(format!("Page {}", n)))
            .collect()
    }

    fn kinds(buttons: &[ButtonSpec]) -> Vec<ButtonKind> {
        buttons.iter().map(|spec| spec.kind).collect()
    }

    #[test]
    fn cursor_clamps_without_looping() {
        let n = 4;
        let mut cursor = 0;
        for _ in 0..10 {
            cursor = step(ButtonKind::Previous, cursor, n, false);
            assert_eq!(cursor, 0);
        }
        for _ in 0..10 {
            cursor = step(ButtonKind::Next, cursor, n, false);
            assert!(cursor < n);
        }
        assert_eq!(cursor, n - 1);
    }

    #[test]
    fn cursor_wraps_with_looping() {
        let n = 4;
        assert_eq!(step(ButtonKind::Previous, 0, n, true), n - 1);
        assert_eq!(step(ButtonKind::Next, n - 1, n, true), 0);
        // away from the edges, looping behaves like clamping
        assert_eq!(step(ButtonKind::Previous, 2, n, true), 1);
        assert_eq!(step(ButtonKind::Next, 1, n, true), 2);
    }

    #[test]
    fn first_and_last_are_absolute() {
        for cursor in 0..5 {
            assert_eq!(step(ButtonKind::First, cursor, 5, false), 0);
            assert_eq!(step(ButtonKind::Last, cursor, 5, false), 4);
            assert_eq!(step(ButtonKind::First, cursor, 5, true), 0);
            assert_eq!(step(ButtonKind::Last, cursor, 5, true), 4);
        }
    }

    #[test]
    fn non_navigation_kinds_leave_cursor_alone() {
        assert_eq!(step(ButtonKind::Stop, 2, 5, false), 2);
        assert_eq!(step(ButtonKind::Jump, 2, 5, false), 2);
        assert_eq!(step(ButtonKind::Info, 2, 5, false), 2);
    }

    #[test]
    fn default_layout_is_the_base_five() {
        let paginator = Paginator::new(PaginatorOptions::new(pages(3)));
        assert_eq!(
            kinds(&paginator.buttons),
            vec![
                ButtonKind::First,
                ButtonKind::Previous,
                ButtonKind::Stop,
                ButtonKind::Next,
                ButtonKind::Last,
            ]
        );
    }

    #[test]
    fn jump_and_info_extend_the_default_layout() {
        let paginator = Paginator::new(
            PaginatorOptions::new(pages(3))
                .allow_jumping(true)
                .show_page_info(true),
        );
        let layout = kinds(&paginator.buttons);
        assert_eq!(layout.len(), 7);
        assert_eq!(layout[5], ButtonKind::Jump);
        assert_eq!(layout[6], ButtonKind::Info);
    }

    #[test]
    fn opting_out_of_defaults_gives_the_minimal_row() {
        let paginator =
            Paginator::new(PaginatorOptions::new(pages(3)).use_default_buttons(false));
        assert_eq!(
            kinds(&paginator.buttons),
            vec![ButtonKind::Previous, ButtonKind::Stop, ButtonKind::Next]
        );
    }

    #[test]
    fn explicit_buttons_sort_by_position_stably() {
        let layout = vec![
            ButtonSpec::new(ButtonKind::Stop).position(1),
            ButtonSpec::new(ButtonKind::Previous),
            ButtonSpec::new(ButtonKind::Next),
        ];
        let paginator = Paginator::new(PaginatorOptions::new(pages(3)).buttons(layout));
        // both position-0 buttons keep their insertion order, stop sinks last
        assert_eq!(
            kinds(&paginator.buttons),
            vec![ButtonKind::Previous, ButtonKind::Next, ButtonKind::Stop]
        );
    }

    #[test]
    fn single_page_is_decorated_one_of_one() {
        let paginator = Paginator::new(PaginatorOptions::new(pages(1)));
        let value = serde_json::to_value(paginator.current_embed()).unwrap();
        assert_eq!(value["footer"]["text"], "Page 1 of 1");
    }

    #[test]
    fn page_numbers_can_be_disabled() {
        let paginator =
            Paginator::new(PaginatorOptions::new(pages(2)).show_page_numbers(false));
        let value = serde_json::to_value(paginator.current_embed()).unwrap();
        assert!(value.get("footer").is_none());
    }

    #[test]
    fn rendered_buttons_carry_namespaced_ids_and_disabled_states() {
        let paginator = Paginator::new(PaginatorOptions::new(pages(5)));
        let value = serde_json::to_value(paginator.button_rows()).unwrap();
        let row = value[0]["components"].as_array().unwrap();
        assert_eq!(row.len(), 5);

        // cursor 0, no looping: first/previous disabled, next/last enabled
        assert_eq!(row[0]["custom_id"], "paginator_first");
        assert_eq!(row[0]["disabled"].as_bool(), Some(true));
        assert_eq!(row[1]["custom_id"], "paginator_previous");
        assert_eq!(row[1]["disabled"].as_bool(), Some(true));
        assert_eq!(row[3]["custom_id"], "paginator_next");
        assert!(!row[3]["disabled"].as_bool().unwrap_or(false));
        assert_eq!(row[4]["custom_id"], "paginator_last");
        assert!(!row[4]["disabled"].as_bool().unwrap_or(false));
    }

    #[test]
    fn seven_buttons_split_into_two_rows() {
        let paginator = Paginator::new(
            PaginatorOptions::new(pages(3))
                .allow_jumping(true)
                .show_page_info(true),
        );
        let rows = paginator.button_rows();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn row_width_above_the_ceiling_is_clipped() {
        let paginator =
            Paginator::new(PaginatorOptions::new(pages(3)).max_buttons_per_row(9));
        assert_eq!(paginator.max_buttons_per_row, MAX_BUTTONS_PER_ROW);
        let paginator = Paginator::new(PaginatorOptions::new(pages(3)).max_buttons_per_row(0));
        assert_eq!(paginator.max_buttons_per_row, 1);
    }

    #[test]
    fn button_overrides_beat_tables_beat_defaults() {
        let labels = ButtonLabels {
            next: Some("Forward".to_string()),
            ..ButtonLabels::default()
        };
        let layout = vec![
            ButtonSpec::new(ButtonKind::Previous).label("Back"),
            ButtonSpec::new(ButtonKind::Next).position(1),
            ButtonSpec::new(ButtonKind::Stop).position(2),
        ];
        let paginator = Paginator::new(
            PaginatorOptions::new(pages(3))
                .buttons(layout)
                .button_labels(labels),
        );
        let value = serde_json::to_value(paginator.button_rows()).unwrap();
        let row = value[0]["components"].as_array().unwrap();
        assert_eq!(row[0]["label"], "Back");
        assert_eq!(row[1]["label"], "Forward");
        assert_eq!(row[2]["label"], "Close");
    }

    #[test]
    fn author_gate_only_rejects_foreigners() {
        let mut paginator =
            Paginator::new(PaginatorOptions::new(pages(3)));
        paginator.author_id = Some(UserId::new(7));
        assert!(paginator.is_foreign_actor(UserId::new(8)));
        assert!(!paginator.is_foreign_actor(UserId::new(7)));

        let mut open = Paginator::new(PaginatorOptions::new(pages(3)).author_only(false));
        open.author_id = Some(UserId::new(7));
        assert!(!open.is_foreign_actor(UserId::new(8)));
    }

    #[test]
    fn response_message_round_trip() {
        let mut paginator = Paginator::new(PaginatorOptions::new(pages(2)));
        paginator.update_response_message(MessageKey::AuthorOnlyError, "X");
        assert_eq!(paginator.get_response_message(MessageKey::AuthorOnlyError), "X");

        let copy = paginator.response_messages();
        assert_eq!(copy.get(MessageKey::AuthorOnlyError), "X");
    }
}
