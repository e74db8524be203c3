#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;

use std::io::Write;

use anyhow::Result;

use crate::domain::models::FollowUsOption;
use crate::domain::models::KeyboardBox;
use crate::domain::models::Link;
use crate::domain::models::ListPromptBox;
use crate::domain::models::MainMenuOption;
use crate::domain::models::MenuItem;
use crate::domain::models::NavigationResult;
use crate::domain::models::Screen;
use crate::domain::models::TerminalGeometry;
use crate::domain::models::Termination;
use crate::domain::models::UrlOpenerBox;
use crate::domain::models::FAREWELL;
use crate::domain::models::FOLLOW_US_PROMPT;
use crate::domain::models::MAIN_MENU_PROMPT;
use crate::domain::services::ActionDispatcher;
use crate::domain::services::Animation;
use crate::domain::services::BannerRenderer;
use crate::domain::services::Console;
use crate::domain::services::KeystrokePrompt;

pub type GeometryReader = Box<dyn Fn() -> TerminalGeometry + Send + Sync>;

pub struct NavigatorProps {
    pub prompt: ListPromptBox,
    pub keyboard: KeyboardBox,
    pub opener: UrlOpenerBox,
    pub output: Box<dyn Write + Send>,
    pub geometry: GeometryReader,
    pub animation: Option<Animation>,
}

/// The menu state machine: `MainMenu` and `FollowUs` loop until a transition lands in
/// `Terminated`. Exactly one prompt is outstanding at a time.
pub struct Navigator {
    prompt: ListPromptBox,
    keystrokes: KeystrokePrompt,
    dispatcher: ActionDispatcher,
    console: Console,
    banner: BannerRenderer,
    geometry: GeometryReader,
}

impl Navigator {
    pub fn new(props: NavigatorProps) -> Navigator {
        return Navigator {
            prompt: props.prompt,
            keystrokes: KeystrokePrompt::new(props.keyboard),
            dispatcher: ActionDispatcher::new(props.opener),
            console: Console::new(props.output),
            banner: BannerRenderer::new(props.animation),
            geometry: props.geometry,
        };
    }

    /// Clears the screen, shows the banner once, then runs the menu until it terminates.
    pub async fn run(&mut self) -> Result<Termination> {
        self.console.clear_screen()?;
        let geometry = (self.geometry)();
        self.banner.render(geometry, &mut self.console).await?;

        let mut screen = Screen::MainMenu;
        loop {
            screen = self.step(screen).await?;
            if let Screen::Terminated(termination) = screen {
                tracing::info!(?termination, "menu terminated");
                return Ok(termination);
            }
        }
    }

    pub async fn step(&mut self, screen: Screen) -> Result<Screen> {
        let next = match screen {
            Screen::MainMenu => self.main_menu().await?,
            Screen::FollowUs => self.follow_us().await?,
            Screen::Terminated(termination) => Screen::Terminated(termination),
        };

        tracing::debug!(from = ?screen, to = ?next, "transition");
        return Ok(next);
    }

    async fn choose<T: MenuItem>(prompt: &ListPromptBox, message: &str) -> Result<T> {
        let index = prompt.select(message, &T::display_labels()).await?;
        T::from_index(index)
    }

    async fn main_menu(&mut self) -> Result<Screen> {
        let choice: MainMenuOption = Navigator::choose(&self.prompt, MAIN_MENU_PROMPT).await?;

        match choice {
            MainMenuOption::FollowUs => Ok(Screen::FollowUs),
            MainMenuOption::Exit => self.farewell(),
            MainMenuOption::ExploreDatasets | MainMenuOption::AccessDatasets => {
                self.follow_link(choice.link()).await
            }
        }
    }

    async fn follow_us(&mut self) -> Result<Screen> {
        let choice: FollowUsOption = Navigator::choose(&self.prompt, FOLLOW_US_PROMPT).await?;
        self.follow_link(choice.link()).await
    }

    /// Opens the link and waits for the user's decision. Without a link, goes straight back
    /// to the main menu.
    async fn follow_link(&mut self, link: Option<Link>) -> Result<Screen> {
        let Some(link) = link else {
            return Ok(Screen::MainMenu);
        };

        self.console.success(&link.status)?;
        self.dispatcher.open(link.url).await?;

        match self.keystrokes.wait_for_decision(&mut self.console).await? {
            NavigationResult::Exit => self.farewell(),
            NavigationResult::Back => Ok(Screen::MainMenu),
            NavigationResult::Terminate => Ok(Screen::Terminated(Termination::ForceQuit)),
        }
    }

    fn farewell(&mut self) -> Result<Screen> {
        self.console.warn(FAREWELL)?;
        return Ok(Screen::Terminated(Termination::Farewell));
    }
}
