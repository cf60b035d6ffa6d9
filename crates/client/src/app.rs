//! Interactive line-oriented game loop.
//!
//! Reads one intent per line and forwards it to the session handle:
//!
//! - `<name>` submits a guess
//! - `?<prefix>` updates the draft and shows autocomplete suggestions
//! - `/hint`, `/giveup`, `/reset`, `/quit` do what they say
//!
//! The loop never interprets game rules itself; it renders snapshots and
//! relays rejections verbatim.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use runtime::{RuntimeError, SessionEvent, SessionHandle};

use crate::render;

pub async fn run(handle: SessionHandle) -> Result<()> {
    let mut events = handle.subscribe();
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    println!("Guess the hidden creature! Type a name, ?prefix, /hint, /giveup, /reset or /quit.");
    render::snapshot(&handle.snapshot().await?);

    loop {
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" => break,
            "/hint" => match handle.request_hint().await {
                Ok(hint) => println!("Hint: {}", hint.text),
                Err(error) => println!("{error}"),
            },
            "/giveup" => match handle.give_up().await {
                Ok(()) => {}
                Err(error) => println!("{error}"),
            },
            "/reset" => match handle.reset().await {
                Ok(()) => println!("New battle started."),
                Err(error) => println!("{error}"),
            },
            prefix if prefix.starts_with('?') => {
                if let Err(error) = handle.update_draft(prefix.trim_start_matches('?')).await {
                    println!("{error}");
                }
            }
            guess => match handle.submit_guess(guess).await {
                Ok(_) => {}
                Err(RuntimeError::InvalidIdentifier { query }) => {
                    println!("\"{query}\" is not a creature this database knows.");
                }
                Err(error) => println!("{error}"),
            },
        }

        drain_events(&mut events);
        render::snapshot(&handle.snapshot().await?);
    }

    Ok(())
}

/// Surfaces notable events accumulated since the last intent.
fn drain_events(events: &mut tokio::sync::broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::Won {
                target,
                guess_count,
            } => {
                println!(
                    "Congratulations! You caught {} in {} guesses.",
                    target.name.to_uppercase(),
                    guess_count
                );
            }
            SessionEvent::GaveUp { target } => {
                println!("The hidden creature was {}.", target.name.to_uppercase());
            }
            _ => {}
        }
    }
}
