pub mod keyword;
pub mod record;

pub use keyword::KeywordResult;
pub use record::{CurrentSelection, ExtractionRecord};
