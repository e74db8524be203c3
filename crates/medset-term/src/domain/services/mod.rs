mod banner;
mod dispatcher;
mod keystroke;
mod output;

pub use banner::*;
pub use dispatcher::*;
pub use keystroke::*;
pub use output::*;
