pub mod providers;
pub mod util;

mod errors;
pub use errors::ProviderError;

pub use providers::nyt::{self, NytVariant};
