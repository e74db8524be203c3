#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;

use anyhow::Result;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::domain::models::MedsetError;

pub const MAIN_MENU_PROMPT: &str = "What would you like to do?";
pub const FOLLOW_US_PROMPT: &str = "Connect with us on:";
pub const FAREWELL: &str = "✨ Thank you for using Med Datasets! ✨";

/// An external resource bound to a menu option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: &'static str,
    pub status: String,
}

/// Strips a leading decorative glyph token such as "🔍 " from a menu label.
///
/// Only the first whitespace-delimited token is considered, and only when it carries no
/// alphanumeric character, so plain labels pass through untouched.
pub fn strip_decoration(label: &str) -> &str {
    let trimmed = label.trim();
    if let Some((first, rest)) = trimmed.split_once(char::is_whitespace) {
        if !first.chars().any(char::is_alphanumeric) {
            return rest.trim_start();
        }
    }

    return trimmed;
}

/// A closed set of options presented by one list prompt.
pub trait MenuItem: IntoEnumIterator + Copy {
    fn label(&self) -> &'static str;
    fn glyph(&self) -> Option<&'static str>;
    fn link(&self) -> Option<Link>;

    fn display_label(&self) -> String {
        match self.glyph() {
            Some(glyph) => format!("{glyph} {}", self.label()),
            None => self.label().to_string(),
        }
    }

    fn display_labels() -> Vec<String> {
        Self::iter().map(|e| e.display_label()).collect()
    }

    fn from_index(index: usize) -> Result<Self> {
        let offered = Self::iter().count();
        match Self::iter().nth(index) {
            Some(option) => Ok(option),
            None => Err(MedsetError::InvalidSelection { index, offered }.into()),
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let canonical = strip_decoration(label);
        Self::iter().find(|e| e.label() == canonical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MainMenuOption {
    ExploreDatasets,
    AccessDatasets,
    FollowUs,
    Exit,
}

impl MenuItem for MainMenuOption {
    fn label(&self) -> &'static str {
        match self {
            MainMenuOption::ExploreDatasets => "Explore Datasets",
            MainMenuOption::AccessDatasets => "Access Datasets",
            MainMenuOption::FollowUs => "Follow Us",
            MainMenuOption::Exit => "Exit",
        }
    }

    fn glyph(&self) -> Option<&'static str> {
        let glyph = match self {
            MainMenuOption::ExploreDatasets => "🔍",
            MainMenuOption::AccessDatasets => "📂",
            MainMenuOption::FollowUs => "👥",
            MainMenuOption::Exit => "🚪",
        };

        Some(glyph)
    }

    fn link(&self) -> Option<Link> {
        match self {
            MainMenuOption::ExploreDatasets => Some(Link {
                url: "https://link.datamaster.tech/main",
                status: "🔍 Opening the data explorer...".to_string(),
            }),
            MainMenuOption::AccessDatasets => Some(Link {
                url: "https://link.datamaster.tech/lsqzy",
                status: "📂 Opening the data access portal...".to_string(),
            }),
            MainMenuOption::FollowUs | MainMenuOption::Exit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FollowUsOption {
    HuggingFace,
    Kaggle,
    ProductHunt,
    LinkedIn,
    BackToMainMenu,
}

impl FollowUsOption {
    fn url(&self) -> Option<&'static str> {
        match self {
            FollowUsOption::HuggingFace => Some("https://link.datamaster.tech/huggingface"),
            FollowUsOption::Kaggle => Some("https://link.datamaster.tech/kaggle"),
            FollowUsOption::ProductHunt => Some("https://link.datamaster.tech/producthunt"),
            FollowUsOption::LinkedIn => Some("https://link.datamaster.tech/linkedin"),
            FollowUsOption::BackToMainMenu => None,
        }
    }
}

impl MenuItem for FollowUsOption {
    fn label(&self) -> &'static str {
        match self {
            FollowUsOption::HuggingFace => "HuggingFace",
            FollowUsOption::Kaggle => "Kaggle",
            FollowUsOption::ProductHunt => "ProductHunt",
            FollowUsOption::LinkedIn => "LinkedIn",
            FollowUsOption::BackToMainMenu => "Back to main menu",
        }
    }

    fn glyph(&self) -> Option<&'static str> {
        match self {
            FollowUsOption::BackToMainMenu => Some("↩️"),
            _ => None,
        }
    }

    fn link(&self) -> Option<Link> {
        let url = self.url()?;

        Some(Link {
            url,
            status: format!("Opening {} profile...", self.label()),
        })
    }
}
