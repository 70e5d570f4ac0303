use thiserror::Error;

use crate::genai::GenAiError;

/// Error from a generation run.
///
/// Only the text stage can fail a run. Image-stage failures are recovered
/// inside the workflow with a placeholder image and never surface here.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("text generation failed: {0}")]
    TextStage(#[from] GenAiError),

    #[error("generated recipe is incomplete: {0} is empty")]
    IncompleteContent(&'static str),

    #[error("a generation run is already in progress")]
    RunInProgress,
}
