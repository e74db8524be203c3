mod browser;
mod print;

use anyhow::Result;

pub use browser::BrowserOpener;
pub use print::PrintOpener;

use crate::domain::models::OpenerName;
use crate::domain::models::UrlOpenerBox;

pub struct OpenerManager {}

impl OpenerManager {
    pub fn get(name: OpenerName) -> Result<UrlOpenerBox> {
        match name {
            OpenerName::Browser => Ok(Box::<BrowserOpener>::default()),
            OpenerName::Print => Ok(Box::new(PrintOpener::new(Box::new(std::io::stdout())))),
        }
    }
}
