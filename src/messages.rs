/// Keys into the paginator's response-message table.
///
/// Every user-facing string the paginator produces is addressed by one of
/// these, so callers can rewrite any of them (translation, tone, branding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AuthorOnlyError,
    NoEmbedsError,
    PageInfoTitle,
    PageInfoDescription,
    CurrentPageField,
    TotalPagesField,
    TimeRemainingField,
    TimeRemainingValue,
    JumpToPageContent,
    PageChanged,
    PaginatorClosed,
}

/// The full response-message table with every entry populated.
#[derive(Debug, Clone)]
pub struct ResponseMessages {
    /// Shown (ephemeral) when a non-author presses a button with
    /// `author_only` on.
    pub author_only_error: String,
    /// Shown when the paginator is started with zero pages.
    pub no_embeds_error: String,
    /// Title of the page-info panel.
    pub page_info_title: String,
    /// Description of the page-info panel.
    pub page_info_description: String,
    /// Field name for the current page number.
    pub current_page_field: String,
    /// Field name for the total page count.
    pub total_pages_field: String,
    /// Field name for the time-remaining entry.
    pub time_remaining_field: String,
    /// Field value for the time-remaining entry.
    pub time_remaining_value: String,
    /// Jump-stub message. `{current}` and `{total}` are substituted with
    /// 1-based page numbers.
    pub jump_to_page_content: String,
    /// Reserved for callers reacting to page changes; unused by the core loop.
    pub page_changed: String,
    /// Reserved for callers reacting to closes; unused by the core loop.
    pub paginator_closed: String,
}

impl Default for ResponseMessages {
    fn default() -> Self {
        Self {
            author_only_error: "❌ Only the person who ran the command can use these buttons!"
                .to_string(),
            no_embeds_error: "❌ There are no pages to display!".to_string(),
            page_info_title: "📊 Page Information".to_string(),
            page_info_description: "Details about this pagination session.".to_string(),
            current_page_field: "📄 Current Page".to_string(),
            total_pages_field: "📚 Total Pages".to_string(),
            time_remaining_field: "⏱️ Time Remaining".to_string(),
            time_remaining_value: "Until auto-close".to_string(),
            jump_to_page_content:
                "🔢 Currently on page {current} of {total}. Page selection is not available yet."
                    .to_string(),
            page_changed: "✨ Page changed!".to_string(),
            paginator_closed: "👋 Paginator closed!".to_string(),
        }
    }
}

impl ResponseMessages {
    pub fn get(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::AuthorOnlyError => &self.author_only_error,
            MessageKey::NoEmbedsError => &self.no_embeds_error,
            MessageKey::PageInfoTitle => &self.page_info_title,
            MessageKey::PageInfoDescription => &self.page_info_description,
            MessageKey::CurrentPageField => &self.current_page_field,
            MessageKey::TotalPagesField => &self.total_pages_field,
            MessageKey::TimeRemainingField => &self.time_remaining_field,
            MessageKey::TimeRemainingValue => &self.time_remaining_value,
            MessageKey::JumpToPageContent => &self.jump_to_page_content,
            MessageKey::PageChanged => &self.page_changed,
            MessageKey::PaginatorClosed => &self.paginator_closed,
        }
    }

    pub fn set<S: Into<String>>(&mut self, key: MessageKey, value: S) {
        let slot = match key {
            MessageKey::AuthorOnlyError => &mut self.author_only_error,
            MessageKey::NoEmbedsError => &mut self.no_embeds_error,
            MessageKey::PageInfoTitle => &mut self.page_info_title,
            MessageKey::PageInfoDescription => &mut self.page_info_description,
            MessageKey::CurrentPageField => &mut self.current_page_field,
            MessageKey::TotalPagesField => &mut self.total_pages_field,
            MessageKey::TimeRemainingField => &mut self.time_remaining_field,
            MessageKey::TimeRemainingValue => &mut self.time_remaining_value,
            MessageKey::JumpToPageContent => &mut self.jump_to_page_content,
            MessageKey::PageChanged => &mut self.page_changed,
            MessageKey::PaginatorClosed => &mut self.paginator_closed,
        };
        *slot = value.into();
    }

    /// Merge a partial override record into the table, key by key.
    pub fn apply(&mut self, overrides: MessageOverrides) {
        let MessageOverrides {
            author_only_error,
            no_embeds_error,
            page_info_title,
            page_info_description,
            current_page_field,
            total_pages_field,
            time_remaining_field,
            time_remaining_value,
            jump_to_page_content,
            page_changed,
            paginator_closed,
        } = overrides;

        if let Some(value) = author_only_error {
            self.author_only_error = value;
        }
        if let Some(value) = no_embeds_error {
            self.no_embeds_error = value;
        }
        if let Some(value) = page_info_title {
            self.page_info_title = value;
        }
        if let Some(value) = page_info_description {
            self.page_info_description = value;
        }
        if let Some(value) = current_page_field {
            self.current_page_field = value;
        }
        if let Some(value) = total_pages_field {
            self.total_pages_field = value;
        }
        if let Some(value) = time_remaining_field {
            self.time_remaining_field = value;
        }
        if let Some(value) = time_remaining_value {
            self.time_remaining_value = value;
        }
        if let Some(value) = jump_to_page_content {
            self.jump_to_page_content = value;
        }
        if let Some(value) = page_changed {
            self.page_changed = value;
        }
        if let Some(value) = paginator_closed {
            self.paginator_closed = value;
        }
    }
}

/// Partial response-message record supplied by the caller; unset entries keep
/// their defaults.
#[derive(Debug, Clone, Default)]
pub struct MessageOverrides {
    pub author_only_error: Option<String>,
    pub no_embeds_error: Option<String>,
    pub page_info_title: Option<String>,
    pub page_info_description: Option<String>,
    pub current_page_field: Option<String>,
    pub total_pages_field: Option<String>,
    pub time_remaining_field: Option<String>,
    pub time_remaining_value: Option<String>,
    pub jump_to_page_content: Option<String>,
    pub page_changed: Option<String>,
    pub paginator_closed: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trip() {
        let mut messages = ResponseMessages::default();
        messages.set(MessageKey::AuthorOnlyError, "X");
        assert_eq!(messages.get(MessageKey::AuthorOnlyError), "X");
    }

    #[test]
    fn apply_merges_key_by_key() {
        let mut messages = ResponseMessages::default();
        let untouched = messages.no_embeds_error.clone();

        messages.apply(MessageOverrides {
            author_only_error: Some("mine".to_string()),
            jump_to_page_content: Some("{current}/{total}".to_string()),
            ..MessageOverrides::default()
        });

        assert_eq!(messages.get(MessageKey::AuthorOnlyError), "mine");
        assert_eq!(messages.get(MessageKey::JumpToPageContent), "{current}/{total}");
        assert_eq!(messages.get(MessageKey::NoEmbedsError), untouched);
    }

    #[test]
    fn default_jump_template_carries_placeholders() {
        let messages = ResponseMessages::default();
        let template = messages.get(MessageKey::JumpToPageContent);
        assert!(template.contains("{current}"));
        assert!(template.contains("{total}"));
    }
}
