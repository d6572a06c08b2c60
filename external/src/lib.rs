mod error;
pub use error::ExternalError;

mod payload_file;
pub use payload_file::load_payload;

mod puzzle_file;
pub use puzzle_file::{DocumentFormat, PuzzleFile};

mod clue_sheet;
pub use clue_sheet::export_clue_sheet;
