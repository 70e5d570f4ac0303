//! Photo prompt for the image-generation stage.

/// Render the photo prompt from the generated title and description.
///
/// Deterministic: same recipe content always yields the same prompt.
pub fn render_photo_prompt(title: &str, description: &str) -> String {
    format!(
        "Professional food photography of {}, {}, overhead shot, studio lighting, \
         high resolution, delicious, culinary magazine style, 4k.",
        title, description
    )
}
