//! Interactive menu shown when no subcommand is given.

use crate::commands;
use crate::state::AppState;
use careerwatch_core::Keyword;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub async fn interactive(state: &AppState) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("careerwatch")
            .items(&["Search URLs for a keyword", "Manage URLs", "Exit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                let keyword: String = Input::with_theme(&theme)
                    .with_prompt("Keyword to search (e.g. manager)")
                    .validate_with(|input: &String| {
                        Keyword::new(input.as_str())
                            .map(|_| ())
                            .map_err(|e| e.to_string())
                    })
                    .interact_text()?;

                // A failed run returns to the menu.
                if let Err(e) = commands::search::run(state, &keyword).await {
                    eprintln!("{} {e:#}", style("Error:").red());
                }
            }
            1 => manage_urls(state, &theme)?,
            _ => {
                println!("Bye!");
                return Ok(());
            }
        }
    }
}

fn manage_urls(state: &AppState, theme: &ColorfulTheme) -> anyhow::Result<()> {
    loop {
        println!();
        let choice = Select::with_theme(theme)
            .with_prompt("Manage URLs")
            .items(&["Add a URL", "Remove a URL", "List URLs", "Back"])
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => {
                let company: String = Input::with_theme(theme)
                    .with_prompt("Company name")
                    .interact_text()?;
                let url: String = Input::with_theme(theme)
                    .with_prompt("Careers page URL")
                    .interact_text()?;
                commands::targets::add(state, &company, &url)
            }
            1 => {
                let key: String = Input::with_theme(theme)
                    .with_prompt("URL or company to remove")
                    .interact_text()?;
                commands::targets::remove(state, &key)
            }
            2 => commands::targets::list(state),
            _ => return Ok(()),
        };

        if let Err(e) = outcome {
            eprintln!("{} {e:#}", style("Error:").red());
        }
    }
}
