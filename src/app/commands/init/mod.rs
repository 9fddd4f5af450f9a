//! Project scaffolding pipeline.
//!
//! Steps run strictly in order: collect answers, resolve the target path,
//! resolve a directory conflict, copy the template, patch the descriptor name,
//! then strip i18n when it was declined. Cancellation is only possible up to
//! the conflict step; later failures leave the filesystem as it is.

pub mod conflict;
pub mod i18n;
pub mod materialize;
pub mod metadata;

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::app::AppContext;
use crate::app::progress::Status;
use crate::domain::{
    AnswerRecord, AppError, Framework, ProjectName, ScaffoldTarget, resolve_target,
};
use crate::ports::{Prompter, TemplateStore};

pub use conflict::Resolution;
pub use i18n::StripSummary;

/// Inputs for one `init` run. Unset answers are asked interactively.
#[derive(Debug, Clone, Default)]
pub struct InitRequest {
    /// Project name or path as typed on the command line.
    pub target: Option<String>,
    /// Replace an existing directory without asking.
    pub force: bool,
    pub framework: Option<Framework>,
    pub need_i18n: Option<bool>,
    /// Directory relative targets are resolved against.
    pub cwd: PathBuf,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created(ScaffoldReport),
    /// A prompt was cancelled before anything was written.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub answers: AnswerRecord,
    pub target: ScaffoldTarget,
    pub files_copied: usize,
    pub name_patched: bool,
    pub stripped: StripSummary,
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CollectingAnswers,
    ResolvingPath,
    ResolvingConflict,
    Copying,
    PatchingMetadata,
    StrippingFeatures,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::CollectingAnswers => "collecting answers",
            Stage::ResolvingPath => "resolving path",
            Stage::ResolvingConflict => "resolving conflict",
            Stage::Copying => "copying template",
            Stage::PatchingMetadata => "patching package.json",
            Stage::StrippingFeatures => "removing i18n",
            Stage::Done => "done",
        };
        f.write_str(label)
    }
}

/// Execute the init pipeline.
pub fn execute<P, T>(ctx: &AppContext<P, T>, request: &InitRequest) -> Result<InitOutcome, AppError>
where
    P: Prompter,
    T: TemplateStore,
{
    debug!(stage = %Stage::CollectingAnswers);
    let Some(answers) = collect_answers(ctx.prompter(), request)? else {
        return Ok(InitOutcome::Cancelled);
    };

    debug!(stage = %Stage::ResolvingPath);
    let mut target =
        resolve_target(request.target.as_deref(), answers.project_name.as_str(), &request.cwd);

    // Load the template before touching the target so a missing template
    // fails without side effects.
    let files = ctx.templates().template_files(answers.framework)?;

    debug!(stage = %Stage::ResolvingConflict, path = %target.path.display());
    target.existed_before = target.path.exists();
    if conflict::resolve(ctx.prompter(), &target.path, request.force)? == Resolution::Cancelled {
        return Ok(InitOutcome::Cancelled);
    }

    let status = Status::begin(&format!("Scaffolding project in {}...", target.path.display()));

    debug!(stage = %Stage::Copying, source = %ctx.templates().describe(answers.framework));
    let files_copied = materialize::copy_template(&files, &target.path)?;

    debug!(stage = %Stage::PatchingMetadata);
    // A failed patch logs a warning; keep it off the spinner line.
    let name_patched =
        status.suspend(|| metadata::patch_name(&target.path, answers.project_name.as_str()));

    debug!(stage = %Stage::StrippingFeatures, need_i18n = answers.need_i18n);
    let stripped = i18n::strip(&target.path, answers.framework, answers.need_i18n)?;

    status.finish();
    debug!(stage = %Stage::Done, files = files_copied);

    Ok(InitOutcome::Created(ScaffoldReport {
        answers,
        target,
        files_copied,
        name_patched,
        stripped,
    }))
}

/// Build the answer record, prompting only for values the request leaves unset.
///
/// A target argument supplies the project name as its final path segment.
/// Returns `Ok(None)` as soon as any prompt is cancelled.
fn collect_answers<P: Prompter>(
    prompter: &P,
    request: &InitRequest,
) -> Result<Option<AnswerRecord>, AppError> {
    let project_name = match request.target.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(arg) => resolve_target(Some(arg), arg, &request.cwd).project_name,
        None => match prompter.ask_project_name()? {
            Some(name) => name,
            None => return Ok(None),
        },
    };
    let project_name = ProjectName::new(&project_name)?;

    let framework = match request.framework {
        Some(framework) => framework,
        None => match prompter.ask_framework()? {
            Some(framework) => framework,
            None => return Ok(None),
        },
    };

    let need_i18n = match request.need_i18n {
        Some(need_i18n) => need_i18n,
        None => match prompter.ask_need_i18n()? {
            Some(need_i18n) => need_i18n,
            None => return Ok(None),
        },
    };

    Ok(Some(AnswerRecord::new(project_name, framework, need_i18n)))
}
