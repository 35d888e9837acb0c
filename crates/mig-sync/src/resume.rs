use crate::{MigrateError, Prompter, Result as MigrateResult, RunDir};

use std::fmt;

use log::info;
use mig_core::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Export,
    Import,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Export => write!(f, "export"),
            Phase::Import => write!(f, "import"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    Continue,
    Restart,
    Exit,
}

impl ResumeAction {
    fn label(self) -> &'static str {
        match self {
            ResumeAction::Continue => "Continue",
            ResumeAction::Restart => "Restart",
            ResumeAction::Exit => "Exit",
        }
    }
}

/// Ask how to proceed with existing manifest data.
///
/// `Continue` is offered only while work is pending and is then the default;
/// a complete manifest defaults to `Exit`.
pub async fn choose_action(
    prompter: &dyn Prompter,
    phase: Phase,
    progress: Progress,
) -> MigrateResult<ResumeAction> {
    let (actions, default) = if progress.is_complete() {
        (vec![ResumeAction::Restart, ResumeAction::Exit], 1)
    } else {
        (
            vec![
                ResumeAction::Continue,
                ResumeAction::Restart,
                ResumeAction::Exit,
            ],
            0,
        )
    };
    let labels: Vec<String> = actions
        .iter()
        .map(|action| action.label().to_string())
        .collect();

    let message =
        format!("Existing {phase} data found ({progress}), how do you want to proceed?");
    let index = prompter.select(&message, &labels, default).await?;
    let action = actions
        .get(index)
        .copied()
        .ok_or_else(|| MigrateError::configuration(format!("invalid choice {index}")))?;

    info!("{} {} data: {}", action.label(), phase, progress);
    Ok(action)
}

/// Pick the run to import from; asks only when there is more than one,
/// defaulting to the newest.
pub async fn choose_run(prompter: &dyn Prompter, mut runs: Vec<RunDir>) -> MigrateResult<RunDir> {
    match runs.len() {
        0 => Err(MigrateError::configuration("no exported runs found")),
        1 => Ok(runs.remove(0)),
        count => {
            let labels: Vec<String> = runs.iter().map(|run| run.id.clone()).collect();
            let index = prompter
                .select("Choose an export to restore", &labels, count - 1)
                .await?;
            if index >= count {
                return Err(MigrateError::configuration(format!(
                    "invalid choice {index}"
                )));
            }
            Ok(runs.swap_remove(index))
        }
    }
}
