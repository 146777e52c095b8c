use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter};

/// One unit of paginated content.
///
/// Pages are plain data owned by the caller; the paginator never mutates one
/// in place, it only renders decorated copies.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<Colour>,
    pub footer: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub fields: Vec<PageField>,
}

/// A single embed field on a [`Page`].
#[derive(Debug, Clone)]
pub struct PageField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: Colour) -> Self {
        self.color = Some(color);
        self
    }

    pub fn footer<S: Into<String>>(mut self, footer: S) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn image<S: Into<String>>(mut self, url: S) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn thumbnail<S: Into<String>>(mut self, url: S) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn field<N: Into<String>, V: Into<String>>(mut self, name: N, value: V, inline: bool) -> Self {
        self.fields.push(PageField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Render this page into an embed, without any page-number decoration.
    pub fn to_embed(&self) -> CreateEmbed {
        self.render(None)
    }

    /// Render this page, appending `page_text` (e.g. "Page 2 of 5") to the
    /// footer. The page's own footer text is preserved in front of it.
    pub(crate) fn render(&self, page_text: Option<&str>) -> CreateEmbed {
        let mut embed = CreateEmbed::new();

        if let Some(title) = &self.title {
            embed = embed.title(title.clone());
        }
        if let Some(description) = &self.description {
            embed = embed.description(description.clone());
        }
        if let Some(color) = self.color {
            embed = embed.color(color);
        }
        if let Some(url) = &self.image {
            embed = embed.image(url.clone());
        }
        if let Some(url) = &self.thumbnail {
            embed = embed.thumbnail(url.clone());
        }
        for field in &self.fields {
            embed = embed.field(field.name.clone(), field.value.clone(), field.inline);
        }

        let footer_text = match (&self.footer, page_text) {
            (Some(footer), Some(page)) => Some(format!("{} • {}", footer, page)),
            (Some(footer), None) => Some(footer.clone()),
            (None, Some(page)) => Some(page.to_string()),
            (None, None) => None,
        };
        if let Some(text) = footer_text {
            embed = embed.footer(CreateEmbedFooter::new(text));
        }

        embed
    }
}
