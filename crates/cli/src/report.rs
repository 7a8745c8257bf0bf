//! Demo summaries and their text/JSON rendering.

use std::fmt;

use serde::Serialize;

use recordkeep_core::{DomainError, ErrorKind};
use recordkeep_infra::StorageError;

use crate::args::OutputFormat;

/// Result of one demonstration step, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Ok { detail: String },
    Failed { kind: String, message: String },
}

impl Scenario {
    /// Record a domain-level step. Failures are logged and kept, never dropped.
    pub fn domain<T>(
        name: &str,
        result: Result<T, DomainError>,
        detail: impl FnOnce(&T) -> String,
    ) -> Self {
        Self::from_result(name, result.map_err(|e| (e.kind(), e.to_string())), detail)
    }

    pub fn storage<T>(
        name: &str,
        result: Result<T, StorageError>,
        detail: impl FnOnce(&T) -> String,
    ) -> Self {
        Self::from_result(name, result.map_err(|e| (e.kind(), e.to_string())), detail)
    }

    fn from_result<T>(
        name: &str,
        result: Result<T, (ErrorKind, String)>,
        detail: impl FnOnce(&T) -> String,
    ) -> Self {
        let outcome = match result {
            Ok(value) => Outcome::Ok {
                detail: detail(&value),
            },
            Err((kind, message)) => {
                tracing::warn!(scenario = name, %kind, "{message}");
                Outcome::Failed {
                    kind: kind.to_string(),
                    message,
                }
            }
        };
        Self {
            name: name.to_string(),
            outcome,
        }
    }

    /// Error kind label when the step failed.
    pub fn failure_kind(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { kind, .. } => Some(kind),
            Outcome::Ok { .. } => None,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Ok { detail } => write!(f, "  [ok]     {}: {detail}", self.name),
            Outcome::Failed { kind, message } => {
                write!(f, "  [{kind}] {}: {message}", self.name)
            }
        }
    }
}

pub(crate) fn write_scenarios(f: &mut fmt::Formatter<'_>, scenarios: &[Scenario]) -> fmt::Result {
    writeln!(f, "Scenarios:")?;
    for s in scenarios {
        writeln!(f, "{s}")?;
    }
    Ok(())
}

/// Print a summary to stdout in the requested format.
pub fn emit<S>(summary: &S, format: OutputFormat) -> anyhow::Result<()>
where
    S: Serialize + fmt::Display,
{
    match format {
        OutputFormat::Text => println!("{summary}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}
