// src/main.rs
use color_eyre::eyre::Result;

use mlb_scrape::{cli, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    let params = cli::parse()?;
    runner::run(&params)?;
    Ok(())
}
