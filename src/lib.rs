//! Button-driven embed pagination for serenity bots.
//!
//! Build a list of [`Page`]s, hand them to a [`Paginator`], and start it from
//! a slash command or a plain message. The paginator renders the current page
//! with a navigation row, follows button presses, and freezes the view after
//! its timeout window.
//!
//! ```no_run
//! use embed_paginator::{Page, Paginator, PaginatorOptions};
//! # async fn run(ctx: &serenity::all::Context, cmd: &serenity::all::CommandInteraction) -> serenity::Result<()> {
//! let pages = vec![
//!     Page::new().title("Chapter 1").description("In the beginning..."),
//!     Page::new().title("Chapter 2").description("...there were buttons."),
//! ];
//!
//! let mut paginator = Paginator::new(PaginatorOptions::new(pages));
//! paginator.start(ctx, cmd).await?;
//! # Ok(())
//! # }
//! ```

pub mod button;
pub mod logging;
pub mod messages;
pub mod options;
pub mod page;
pub mod paginator;

pub use button::{presets, ButtonKind, ButtonSpec, CUSTOM_ID_PREFIX};
pub use messages::{MessageKey, MessageOverrides, ResponseMessages};
pub use options::{ButtonEmojis, ButtonLabels, PaginatorOptions, DEFAULT_TIMEOUT, MAX_BUTTONS_PER_ROW};
pub use page::{Page, PageField};
pub use paginator::Paginator;
