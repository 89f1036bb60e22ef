use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::{EventFinderError, Resolver, Session};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::render::Render;

pub fn run(
    resolver: &Resolver,
    config: &EventFinderConfig,
    fixed_today: Option<NaiveDate>,
) -> Result<()> {
    print_welcome(resolver);

    let mut session = Session::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Ask me about an academic event (or type 'exit' to quit)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;

        if matches!(input.trim().to_lowercase().as_str(), "exit" | "quit") {
            println!("Thanks for using the Academic Event Finder! Have a great day!");
            return Ok(());
        }

        let today = super::today(config, fixed_today)?;

        match resolver.resolve(&mut session, &input, today) {
            Ok(outcome) => {
                debug!(state = ?session.state(), "turn resolved");
                println!("\n{}\n", outcome.render());
            }
            Err(EventFinderError::InvalidQuery) => {
                println!("{}", "Type an event name or a date like 'tomorrow'.".dimmed());
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_welcome(resolver: &Resolver) {
    println!("\n{}", "Welcome to the Academic Event Finder!".bold());
    println!(
        "{}",
        format!(
            "Indexed {} distinct events. Ask about them by name or date.",
            resolver.index().name_count()
        )
        .dimmed()
    );
    println!("Try something like:");
    println!("  - When is Spring Break?");
    println!("  - What events are happening tomorrow?");
    println!("  - Is there an exam next week?");
    println!();
}
