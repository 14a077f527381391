//! Process exit codes.

/// Exit codes for the lndup process.
///
/// - 0: Completed the full sweep (per-pair errors do not change this)
/// - 1: Unexpected fatal error
/// - 10: No candidates found after pattern expansion
///
/// Usage errors exit with clap's own status (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The candidate sweep ran to completion.
    Success = 0,
    /// An unexpected error aborted the run.
    GeneralError = 1,
    /// Pattern expansion produced zero candidates.
    NoCandidates = 10,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NoCandidates.as_i32(), 10);
    }
}
