pub mod engine_scraper;
pub mod fetcher;
pub mod report;

pub use engine_scraper::*;
pub use fetcher::*;
pub use report::*;
