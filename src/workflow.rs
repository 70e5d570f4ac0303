//! Generation workflow: the two-stage call sequence, its status machine, and
//! record assembly.
//!
//! One run goes `idle -> generating-text -> generating-image -> complete ->
//! idle`. Only the text stage can fail the run (`-> error`); an image-stage
//! failure is recovered with a placeholder image. A caller retries after an
//! error by calling [`GenerationWorkflow::start`] again.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::watch;

use crate::error::GenerateError;
use crate::genai::{GenAiError, ImageProvider, TextProvider, TextRequest};
use crate::prompts::{photo, recipe};
use crate::store::RecipeStore;
use crate::types::{GenerateRecipeParams, GenerationStatus, Recipe, RecipeContent};

/// Fallback image when the image model responds without an inline image part.
pub const PLACEHOLDER_NO_IMAGE: &str = "https://picsum.photos/800/600?grayscale";

/// Fallback image when the image-generation call itself fails.
pub const PLACEHOLDER_IMAGE_ERROR: &str = "https://picsum.photos/800/600?blur=2";

/// How long `complete` stays observable before the status returns to `idle`.
const IDLE_RESET_DELAY: Duration = Duration::from_millis(500);

/// Orchestrates one generation run at a time: text stage, image stage,
/// assembly, commit.
///
/// Status is published on a watch channel; any consumer (UI task, tests,
/// logging) can [`subscribe`](Self::subscribe) and react. The workflow is the
/// only writer to the store and only ever commits fully assembled records.
pub struct GenerationWorkflow {
    store: Arc<RwLock<RecipeStore>>,
    text: Arc<dyn TextProvider>,
    image: Arc<dyn ImageProvider>,
    status: Arc<watch::Sender<GenerationStatus>>,
    in_flight: AtomicBool,
}

impl GenerationWorkflow {
    pub fn new(
        store: Arc<RwLock<RecipeStore>>,
        text: Arc<dyn TextProvider>,
        image: Arc<dyn ImageProvider>,
    ) -> Self {
        let (status, _) = watch::channel(GenerationStatus::Idle);
        Self {
            store,
            text,
            image,
            status: Arc::new(status),
            in_flight: AtomicBool::new(false),
        }
    }

    /// The current run status.
    pub fn status(&self) -> GenerationStatus {
        *self.status.borrow()
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<GenerationStatus> {
        self.status.subscribe()
    }

    /// The store this workflow commits to.
    pub fn store(&self) -> &Arc<RwLock<RecipeStore>> {
        &self.store
    }

    /// Run the full generation sequence for the given params and commit the
    /// resulting record.
    ///
    /// The caller is responsible for ensuring `params.prompt` is non-empty.
    /// A second `start` while a run is in flight is rejected with
    /// [`GenerateError::RunInProgress`] without touching the status or the
    /// store.
    pub async fn start(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerateError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(GenerateError::RunInProgress);
        }

        let result = self.run(params).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run(&self, params: &GenerateRecipeParams) -> Result<Recipe, GenerateError> {
        self.transition(GenerationStatus::GeneratingText);

        let content = match self.text_stage(params).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(error = %e, "text stage failed, abandoning run");
                self.transition(GenerationStatus::Error);
                return Err(e);
            }
        };

        self.transition(GenerationStatus::GeneratingImage);
        let image_url = self.image_stage(&content).await;

        let recipe = Recipe::assemble(content, image_url);
        self.store.write().unwrap().prepend(recipe.clone());

        self.transition(GenerationStatus::Complete);
        tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "generation run complete");

        // Hold `complete` briefly so consumers can react, then go back to
        // idle. A retry that has already moved the status on is not clobbered.
        let status = Arc::clone(&self.status);
        tokio::spawn(async move {
            tokio::time::sleep(IDLE_RESET_DELAY).await;
            status.send_if_modified(|current| {
                if *current == GenerationStatus::Complete {
                    *current = GenerationStatus::Idle;
                    true
                } else {
                    false
                }
            });
        });

        Ok(recipe)
    }

    async fn text_stage(
        &self,
        params: &GenerateRecipeParams,
    ) -> Result<RecipeContent, GenerateError> {
        let request = TextRequest {
            instruction: recipe::render_recipe_prompt(
                &params.prompt,
                params.dietary_restrictions.as_deref(),
            ),
            system_instruction: Some(recipe::RECIPE_SYSTEM_INSTRUCTION.to_string()),
            response_schema: Some(recipe::recipe_response_schema()),
        };

        tracing::debug!(
            provider = self.text.provider_name(),
            model = self.text.model_name(),
            "calling text model"
        );

        let raw = self.text.generate(&request).await?;

        let content: RecipeContent = serde_json::from_str(&raw)
            .map_err(|e| GenAiError::ParseError(format!("recipe JSON did not match schema: {}", e)))?;

        // A record is only complete with at least one ingredient and step.
        if content.ingredients.is_empty() {
            return Err(GenerateError::IncompleteContent("ingredients"));
        }
        if content.instructions.is_empty() {
            return Err(GenerateError::IncompleteContent("instructions"));
        }

        Ok(content)
    }

    /// Resolve an image reference for the generated content. Never fails:
    /// any image-stage problem degrades to a placeholder URL.
    async fn image_stage(&self, content: &RecipeContent) -> String {
        let prompt = photo::render_photo_prompt(&content.title, &content.description);

        tracing::debug!(
            provider = self.image.provider_name(),
            model = self.image.model_name(),
            "calling image model"
        );

        match self.image.generate(&prompt).await {
            Ok(output) => match output.first_inline_image() {
                Some(data) => format!("data:image/png;base64,{}", data),
                None => {
                    tracing::warn!("image response had no inline image part, using placeholder");
                    PLACEHOLDER_NO_IMAGE.to_string()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "image generation failed, using placeholder");
                PLACEHOLDER_IMAGE_ERROR.to_string()
            }
        }
    }

    fn transition(&self, next: GenerationStatus) {
        tracing::debug!(status = next.as_str(), "generation status");
        self.status.send_replace(next);
    }
}
