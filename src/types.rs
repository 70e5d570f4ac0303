use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Status of the current generation run, in execution order.
///
/// Exactly one run's status is observable at a time (the workflow rejects
/// overlapping runs), so consumers can treat this as "what the app is doing
/// right now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStatus {
    Idle,
    GeneratingText,
    GeneratingImage,
    Complete,
    Error,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Idle => "idle",
            GenerationStatus::GeneratingText => "generating-text",
            GenerationStatus::GeneratingImage => "generating-image",
            GenerationStatus::Complete => "complete",
            GenerationStatus::Error => "error",
        }
    }
}

/// User input for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRecipeParams {
    pub prompt: String,
    pub dietary_restrictions: Option<String>,
}

/// The text-stage output: everything the text model is asked to produce.
///
/// All eight fields are required - a response missing any of them fails to
/// deserialize, which the workflow treats as a text-stage failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeContent {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: Difficulty,
    pub chef_notes: String,
    pub tags: Vec<String>,
}

/// A fully assembled recipe. Immutable once created - there are no mutators,
/// and the store never edits records in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Display order, preserved as produced.
    pub ingredients: Vec<String>,
    /// Execution order, preserved exactly as produced.
    pub instructions: Vec<String>,
    /// Free-text duration label, e.g. "45 mins".
    pub cooking_time: String,
    pub difficulty: Difficulty,
    pub chef_notes: String,
    /// Insertion order, duplicates allowed.
    pub tags: Vec<String>,
    /// Remote URL or inline data URI. None means no image yet.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Assemble a new record from text-stage content and a resolved image
    /// reference, assigning a fresh id and creation timestamp.
    pub fn assemble(content: RecipeContent, image_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: content.title,
            description: content.description,
            ingredients: content.ingredients,
            instructions: content.instructions,
            cooking_time: content.cooking_time,
            difficulty: content.difficulty,
            chef_notes: content.chef_notes,
            tags: content.tags,
            image_url: Some(image_url),
            created_at: Utc::now(),
        }
    }
}
