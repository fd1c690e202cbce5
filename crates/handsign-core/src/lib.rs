pub mod config;
pub mod error;
pub mod events;
pub mod skeleton;
pub mod source;
pub mod types;

pub use config::HandSignConfig;
pub use error::{HandSignError, Result};
pub use events::RecognitionEvent;
pub use types::*;
