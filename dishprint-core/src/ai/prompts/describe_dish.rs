//! Prompts for describing a dish photo.
//!
//! Two questions are asked about each photo: a short caption of the whole
//! image, and a direct question about its ingredients. Both answers are
//! scanned for ingredient names, so plain food words matter more than style.

pub const DISH_CAPTION_PROMPT_NAME: &str = "dish_caption";
pub const DISH_INGREDIENTS_PROMPT_NAME: &str = "dish_ingredients";

pub fn render_caption_prompt() -> String {
    "Write a one-sentence caption describing the dish in this photo. \
Use plain, common food words. Return only the caption."
        .to_string()
}

pub fn render_ingredients_prompt() -> String {
    "Question: What ingredients are in this dish? Answer:".to_string()
}
