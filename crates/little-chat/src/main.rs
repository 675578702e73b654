//! A terminal front end for a single chat session.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use little_chat::Config;
use little_chat::input::PromptReader;
use little_chat::core::conversation::{Message, Origin};
use little_chat::core::{Notification, NotificationLevel};
use little_chat::render::format_message;
use owo_colors::OwoColorize;
use tokio::select;
use tokio::sync::mpsc;
use tokio::time::sleep;

enum SessionEvent {
    Message(Message),
    Notification(Notification),
    Idle,
}

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    debug!("loaded {config:?}");
    if config.endpoint().is_none() {
        eprintln!(
            "LITTLE_CHAT_ENDPOINT is not set, replies will be placeholders"
        );
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let chat = config
        .chat_builder()
        .on_message({
            let event_tx = event_tx.clone();
            move |msg| {
                event_tx.send(SessionEvent::Message(msg.clone())).ok();
            }
        })
        .on_notification({
            let event_tx = event_tx.clone();
            move |notification| {
                event_tx
                    .send(SessionEvent::Notification(notification.clone()))
                    .ok();
            }
        })
        .on_idle(move || {
            event_tx.send(SessionEvent::Idle).ok();
        })
        .build();

    match chat.snapshot().await {
        Ok(snapshot) => {
            for msg in &snapshot.messages {
                print_message(msg);
            }
        }
        Err(err) => {
            error!("{err}");
            return;
        }
    }

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    let mut prompts = PromptReader::stdin();

    'outer: loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = prompts.next_prompt().await else {
            break;
        };
        // Blank input never starts a request, so there is nothing to wait
        // for.
        if line.trim().is_empty() {
            continue;
        }
        if let Err(err) = chat.submit(line) {
            error!("{err}");
            break;
        }

        let mut progress_bar = None;

        loop {
            // Create a new progress bar if it has been finished.
            progress_bar
                .get_or_insert_with(|| {
                    let progress_bar = ProgressBar::new_spinner();
                    progress_bar.set_style(progress_style.clone());
                    progress_bar.set_message("🤔 Thinking...");
                    progress_bar
                })
                .inc(1);

            let sleep = sleep(Duration::from_millis(100));
            let event = select! {
                event = event_rx.recv() => {
                    let Some(event) = event else {
                        break 'outer;
                    };
                    event
                },
                _ = sleep => {
                    continue;
                }
            };

            // Finish the progress bar before printing anything else.
            if let Some(progress_bar) = &progress_bar {
                progress_bar.finish_and_clear();
            }
            progress_bar = None;

            match event {
                SessionEvent::Message(msg) => {
                    // The user's own line is already on screen.
                    if msg.origin() == Origin::Assistant {
                        print_message(&msg);
                    }
                }
                SessionEvent::Notification(notification) => {
                    print_notification(&notification);
                }
                SessionEvent::Idle => {
                    break;
                }
            }
        }
    }
}

fn print_message(msg: &Message) {
    println!(
        "{}{}",
        BAR_CHAR.bright_cyan(),
        format_message(msg).bright_white()
    );
}

fn print_notification(notification: &Notification) {
    let text = format!(
        "{} {}",
        notification.title().bold(),
        notification.description()
    );
    match notification.level() {
        NotificationLevel::Success => {
            println!("{}{}", BAR_CHAR.bright_green(), text.dimmed());
        }
        NotificationLevel::Error => {
            println!("{}⚠️  {}", BAR_CHAR.bright_red(), text.bright_red());
        }
    }
}
