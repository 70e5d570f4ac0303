pub mod config;
pub mod error;
pub mod genai;
pub mod prompts;
pub mod seed;
pub mod store;
pub mod types;
pub mod workflow;

pub use config::{ConfigError, GenConfig};
pub use error::GenerateError;
pub use genai::{
    create_providers_from_env, FakeImageProvider, FakeTextProvider, GeminiClient, GenAiError,
    ImageOutput, ImagePart, ImageProvider, TextProvider, TextRequest,
};
pub use store::RecipeStore;
pub use types::{Difficulty, GenerateRecipeParams, GenerationStatus, Recipe, RecipeContent};
pub use workflow::{GenerationWorkflow, PLACEHOLDER_IMAGE_ERROR, PLACEHOLDER_NO_IMAGE};
