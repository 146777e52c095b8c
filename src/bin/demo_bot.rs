use std::env;
use std::time::Duration;

use serenity::all::{
    ActivityData, Colour, Command, CommandInteraction, Context, CreateCommand, EventHandler,
    GatewayIntents, Interaction, OnlineStatus, Ready,
};
use serenity::{async_trait, Client};

use embed_paginator::{nay, yay, Page, Paginator, PaginatorOptions};
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};

struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        register_command(
            &ctx,
            CreateCommand::new("tour").description("A short multi-page tour of the paginator"),
        )
        .await;
        register_command(
            &ctx,
            CreateCommand::new("library")
                .description("A longer showcase with looping, jumping and page info"),
        )
        .await;

        yay!("{} is connected!", ready.user.name);

        ctx.set_presence(
            Some(ActivityData::custom("Flipping through pages")),
            OnlineStatus::Online,
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            match command.data.name.as_str() {
                "tour" => run_tour(&ctx, &command).await,
                "library" => run_library(&ctx, &command).await,
                _ => {
                    command_response(&ctx, &command, "Unknown command!").await;
                }
            }
        }
    }
}

async fn run_tour(ctx: &Context, cmd: &CommandInteraction) {
    let pages = vec![
        Page::new()
            .title("📖 Welcome to the paginator demo!")
            .description("Use the buttons below to move between pages.")
            .color(Colour::BLURPLE)
            .field("Navigation", "First, previous, next and last page buttons", false)
            .field("Closing", "The ❌ button freezes the view early", false),
        Page::new()
            .title("🎨 Pages are plain content")
            .description("Titles, descriptions, colors, fields, images and footers.")
            .color(Colour::DARK_GREEN)
            .footer("This page brought its own footer"),
        Page::new()
            .title("⏱️ Sessions expire")
            .description(
                "After the timeout window the buttons disappear and the view freezes in place.",
            )
            .color(Colour::GOLD),
    ];

    let mut paginator = Paginator::new(PaginatorOptions::new(pages));
    if let Err(e) = paginator.start(ctx, cmd).await {
        nay!("Failed to run the tour paginator: {}", e);
    }
}

async fn run_library(ctx: &Context, cmd: &CommandInteraction) {
    let pages: Vec<Page> = (1..=12)
        .map(|shelf| {
            Page::new()
                .title(format!("📚 Shelf {}", shelf))
                .description("Looping is on, so navigation wraps around at both ends.")
                .color(Colour::DARK_TEAL)
                .field("Jump", "The 🔢 button shows the jump stub", true)
                .field("Info", "The ℹ️ button shows session details", true)
        })
        .collect();

    let options = PaginatorOptions::new(pages)
        .timeout(Duration::from_secs(180))
        .loop_pages(true)
        .allow_jumping(true)
        .show_page_info(true);

    let mut paginator = Paginator::new(options);
    if let Err(e) = paginator.start(ctx, cmd).await {
        nay!("Failed to run the library paginator: {}", e);
    }
}

async fn command_response<S: Into<String>>(ctx: &Context, command: &CommandInteraction, msg: S) {
    let data = CreateInteractionResponseMessage::new().content(msg.into());
    let builder = CreateInteractionResponse::Message(data);
    if let Err(err) = command.create_response(&ctx.http, builder).await {
        nay!("Failed to respond to command: {}", err)
    }
}

async fn register_command(ctx: &Context, cmd: CreateCommand) {
    if let Err(e) = Command::create_global_command(&ctx.http, cmd).await {
        nay!("Failed to register a command: {}", e);
    }
}

#[tokio::main]
async fn main() {
    yay!("📖 Paginator demo bot is starting up!");

    dotenv::dotenv().expect("Failed to load .env file");

    let Ok(token) = env::var("DISCORD_TOKEN") else {
        nay!("DISCORD_TOKEN not found in environment");
        return;
    };

    // Slash commands and button presses arrive without any privileged intents.
    let intents = GatewayIntents::empty();

    let Ok(mut client) = Client::builder(token, intents).event_handler(Handler).await else {
        nay!("Error creating client");
        return;
    };

    if let Err(err) = client.start().await {
        nay!("Client error: {}", err);
    }
}
