//! Chain handlers: request logging and the menu dialog.

mod dialog;
mod logging;

pub use dialog::DialogHandler;
pub use logging::LoggingHandler;
