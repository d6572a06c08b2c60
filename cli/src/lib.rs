mod app;
pub use app::App;

mod cli;
pub use cli::{Cli, Command, FormatArg, VariantArg};

pub mod config;
pub mod logging;
