//! URL list management.

use crate::state::AppState;
use careerwatch_core::Target;
use careerwatch_store::StoreError;
use console::style;

pub fn add(state: &AppState, company: &str, url: &str) -> anyhow::Result<()> {
    state.store.add(Target::new(company, url))?;
    println!(
        "{} {} ({})",
        style("Added").green(),
        company.trim(),
        style(url.trim()).underlined()
    );
    Ok(())
}

/// Remove by URL or company name. An unknown key is reported, not an error.
pub fn remove(state: &AppState, key: &str) -> anyhow::Result<()> {
    match state.store.remove(key) {
        Ok(removed) => {
            for target in removed {
                println!(
                    "{} {} ({})",
                    style("Removed").green(),
                    target.company,
                    style(&target.url).underlined()
                );
            }
            Ok(())
        }
        Err(StoreError::NotFound(key)) => {
            println!("{}", style(format!("No stored URL matches '{key}'.")).yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn list(state: &AppState) -> anyhow::Result<()> {
    let targets = state.store.load()?;
    if targets.is_empty() {
        println!("No URLs added yet.");
        return Ok(());
    }

    println!("Current URLs:");
    for (idx, target) in targets.iter().enumerate() {
        println!(
            "{:>3}. {}: {}",
            idx + 1,
            style(&target.company).bold(),
            style(&target.url).underlined()
        );
    }
    Ok(())
}
