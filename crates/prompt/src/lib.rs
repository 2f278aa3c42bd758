mod builder;
mod context;
mod fallback;
pub mod history;

pub use builder::PromptBuilder;
pub use context::{SessionContext, WITCHING_HOUR};
pub use fallback::fallback_response;
pub use history::{HistoryProvider, NoHistory};
