//! Advise command handler
//!
//! Builds the academic-advisor prompt from stored data and calls the
//! generative-text service, falling back through the configured model list.

use acadtrack::config::Config;
use acadtrack::core::advisor::{build_advice_prompt, AdvisorClient};
use acadtrack::core::storage::CourseStore;
use acadtrack::{error, verbose};

use super::{current_user, open_store};

/// At most this many insight lines are shown
const MAX_INSIGHT_LINES: usize = 5;

/// Run the advise command.
pub fn run(show_prompt: bool, config: &Config) {
    if let Err(err) = advise(show_prompt, config) {
        error!("Advise command failed: {err}");
        eprintln!("{err}");
    }
}

fn advise(show_prompt: bool, config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;
    let courses = CourseStore::new(&store).for_user(user.id);

    if courses.is_empty() {
        println!("No courses recorded yet. Add courses before requesting advice.");
        return Ok(());
    }

    let prompt = build_advice_prompt(&user, &courses, config.academic.required_credits);

    if show_prompt {
        println!("{prompt}");
        return Ok(());
    }

    let client = AdvisorClient::from_config(config);
    let advice = client
        .generate(&prompt)
        .map_err(|e| format!("✗ Failed to generate advice: {e}"))?;

    verbose!("Advice generated by model: {}", advice.model);

    println!("\n=== AI Academic Insights ===");
    for line in advice
        .text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_INSIGHT_LINES)
    {
        println!("{line}");
    }

    Ok(())
}
