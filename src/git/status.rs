//! Status markers attached to every sync log line

/// Status enum representing the outcome of one sync step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The clone or pull completed successfully
    Ok,
    /// A producer-side problem or a target that cannot be synced
    Warning,
    /// The external git operation failed
    Failed,
}

impl Status {
    /// Returns the bracketed marker that prefixes log lines
    pub fn marker(&self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Warning => "[WARNING]",
            Status::Failed => "[FAILED]",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}
