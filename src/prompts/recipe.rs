//! Recipe prompt: instruction text and the strict response schema for the
//! text-generation stage.

use serde_json::{json, Value as JsonValue};

/// System instruction sent alongside every recipe request.
pub const RECIPE_SYSTEM_INSTRUCTION: &str = "You are a professional chef. Output strictly JSON.";

/// Render the recipe instruction with the user's request and optional
/// dietary restrictions.
pub fn render_recipe_prompt(request: &str, dietary_restrictions: Option<&str>) -> String {
    let dietary_line = match dietary_restrictions {
        Some(d) => format!("Dietary restrictions: {}.\n", d),
        None => String::new(),
    };

    format!(
        r#"You are a world-class Michelin star chef writing a new blog post.
Create a detailed recipe based on this request: "{request}".
{dietary_line}
Make the description evocative and storytelling-based, like a high-end food blog.
Keep instructions clear and professional."#,
        request = request,
        dietary_line = dietary_line
    )
}

/// The response schema for recipe content. All eight fields are required so
/// the response can be parsed without ambiguity.
pub fn recipe_response_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "instructions": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "cookingTime": { "type": "STRING" },
            "difficulty": {
                "type": "STRING",
                "enum": ["Easy", "Medium", "Hard", "Expert"]
            },
            "chefNotes": { "type": "STRING" },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "title", "description", "ingredients", "instructions",
            "cookingTime", "difficulty", "chefNotes", "tags"
        ]
    })
}
