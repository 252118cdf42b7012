pub mod input;
pub mod output;

pub use input::{resolve_input, HookInput, PayloadError};
pub use output::HookStatus;
