//! Error handling and display for the CLI.

use armid::{IdError, ParseError};
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} IDs failed validation")]
    ValidationFailed { failed: usize, total: usize },

    #[error("No subscription given. Pass --subscription or set ARMID_SUBSCRIPTION_ID.")]
    MissingSubscription,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(parse_err) = err.downcast_ref::<ParseError>() {
        if let Some(hint) = hint_for(parse_err.reason()) {
            eprintln!("\n{}", hint.yellow());
        }
        return;
    }

    if let Some(CliError::MissingSubscription) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: Set `subscription_id` in the config file to avoid passing it every time.".yellow()
        );
    }
}

fn hint_for(reason: &IdError) -> Option<&'static str> {
    match reason {
        IdError::MissingSegment(_) | IdError::UnexpectedProvider { .. } => Some(
            "Hint: Segment names are case-sensitive. Run `armid normalize` to repair casing.",
        ),
        IdError::UnexpectedTrailingSegments { .. } => {
            Some("Hint: The ID may belong to a nested resource. Run `armid kinds` to list templates.")
        }
        IdError::MalformedIdentifier { .. } => {
            Some("Hint: IDs look like /subscriptions/{id}/resourceGroups/{name}/providers/...")
        }
        IdError::EmptySegment(_) | IdError::MissingRequiredElement(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_casing_errors() {
        let hint = hint_for(&IdError::MissingSegment("disks".to_string())).unwrap();
        assert!(hint.contains("armid normalize"));
        assert!(hint_for(&IdError::EmptySegment("disks".to_string())).is_none());
    }

    #[test]
    fn test_validation_failed_message() {
        let err = CliError::ValidationFailed { failed: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 IDs failed validation");
    }
}
