#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use medset_term::infrastructure::openers::OpenerManager;
use medset_term::infrastructure::prompts::DialoguerPrompt;
use medset_term::infrastructure::terminal::{detect_geometry, CrosstermKeyboard};
use medset_term::{destruct_terminal_for_panic, Config, Navigator, NavigatorProps};

use crate::cli::Cli;
use crate::logging;

/// Runs the whole program for parsed arguments. The version query is answered before
/// configuration, logging or the menu are touched.
pub async fn run(cli: Cli) -> Result<()> {
    if cli.handle_version(&mut io::stdout())? {
        return Ok(());
    }

    Config::load().await?;
    let _log_guard = logging::init()?;

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let mut navigator = Navigator::new(NavigatorProps {
        prompt: Box::<DialoguerPrompt>::default(),
        keyboard: Box::<CrosstermKeyboard>::default(),
        opener: OpenerManager::get(Config::opener())?,
        output: Box::new(io::stdout()),
        geometry: Box::new(detect_geometry),
        animation: Config::animation(),
    });

    let termination = navigator.run().await?;
    tracing::info!(?termination, code = termination.exit_code(), "exiting");

    return Ok(());
}
