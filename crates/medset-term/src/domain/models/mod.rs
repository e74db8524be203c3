mod error;
mod geometry;
mod key;
mod keyboard;
mod menu;
mod navigation;
mod opener;
mod prompt;

pub use error::*;
pub use geometry::*;
pub use key::*;
pub use keyboard::*;
pub use menu::*;
pub use navigation::*;
pub use opener::*;
pub use prompt::*;
