pub mod email;
pub mod engine;
pub mod search_target;

pub use email::*;
pub use engine::*;
pub use search_target::*;
