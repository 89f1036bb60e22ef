use anyhow::Result;
use chrono::NaiveDate;
use eventfinder_core::config::EventFinderConfig;
use eventfinder_core::{Resolver, Session};

use crate::render::Render;

pub fn run(
    resolver: &Resolver,
    config: &EventFinderConfig,
    today: Option<NaiveDate>,
    query: &str,
    json: bool,
) -> Result<()> {
    let today = super::today(config, today)?;
    let mut session = Session::new();

    let outcome = resolver.resolve(&mut session, query, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.render());
    }

    Ok(())
}
