/// Final hook result, reported to Claude Code through the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// Nothing to do, or every matched command succeeded.
    Success,
    /// At least one matched command failed. Claude Code shows stderr to the model.
    Blocking,
}

impl HookStatus {
    pub fn code(self) -> i32 {
        match self {
            HookStatus::Success => 0,
            HookStatus::Blocking => 2,
        }
    }
}
