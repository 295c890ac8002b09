use engine_logging::engine_debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("no active tab source configured")]
    Unavailable,
    #[error("tab command `{program}` could not be started: {reason}")]
    Spawn { program: String, reason: String },
    #[error("tab command `{program}` exited with {status}")]
    CommandFailed { program: String, status: String },
    #[error("tab command `{program}` printed no url")]
    Empty { program: String },
}

/// Resolves the URL of the browser tab the user is looking at.
#[async_trait::async_trait]
pub trait TabLocator: Send + Sync {
    async fn current_url(&self) -> Result<String, TabError>;
}

/// Answers with a fixed URL, or fails when none was configured.
#[derive(Debug, Clone, Default)]
pub struct StaticTabLocator {
    url: Option<String>,
}

impl StaticTabLocator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    pub fn unavailable() -> Self {
        Self { url: None }
    }
}

#[async_trait::async_trait]
impl TabLocator for StaticTabLocator {
    async fn current_url(&self) -> Result<String, TabError> {
        self.url.clone().ok_or(TabError::Unavailable)
    }
}

/// Runs an external helper and takes the first non-empty line of its stdout.
#[derive(Debug, Clone)]
pub struct CommandTabLocator {
    program: String,
    args: Vec<String>,
}

impl CommandTabLocator {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl TabLocator for CommandTabLocator {
    async fn current_url(&self) -> Result<String, TabError> {
        let output = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| TabError::Spawn {
                program: self.program.clone(),
                reason: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(TabError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let url = stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| TabError::Empty {
                program: self.program.clone(),
            })?;
        engine_debug!("Active tab resolved to {}", url);
        Ok(url.to_string())
    }
}
