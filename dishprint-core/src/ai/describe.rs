//! Describing a dish photo with a vision model.

use crate::ai::prompts::describe_dish::{
    render_caption_prompt, render_ingredients_prompt, DISH_CAPTION_PROMPT_NAME,
    DISH_INGREDIENTS_PROMPT_NAME,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, ImageData, Usage};
use crate::image::ValidatedImage;
use crate::types::DishDescription;

pub struct DescribeResult {
    pub description: DishDescription,
    /// True only if both answers came from cache.
    pub cached: bool,
    pub usage: Usage,
}

/// Caption a dish photo and ask the model which ingredients it contains.
pub async fn describe_dish(
    ai_client: &dyn AiClient,
    image: &ValidatedImage,
) -> Result<DescribeResult, AiError> {
    let image_data = ImageData::from_bytes(&image.data, image.content_type.clone());

    let caption_request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            render_caption_prompt(),
            vec![image_data.clone()],
        )],
        max_tokens: Some(50),
        temperature: Some(0.2),
    };
    let caption = ai_client
        .complete(DISH_CAPTION_PROMPT_NAME, caption_request)
        .await?;

    let details_request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            render_ingredients_prompt(),
            vec![image_data],
        )],
        max_tokens: Some(100),
        temperature: Some(0.2),
    };
    let details = ai_client
        .complete(DISH_INGREDIENTS_PROMPT_NAME, details_request)
        .await?;

    tracing::debug!(
        caption = %caption.content,
        details = %details.content,
        "Described dish"
    );

    let mut usage = caption.usage.clone();
    usage.add(&details.usage);

    Ok(DescribeResult {
        description: DishDescription {
            caption: caption.content.trim().to_string(),
            details: details.content.trim().to_string(),
        },
        cached: caption.cached && details.cached,
        usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    fn image() -> ValidatedImage {
        ValidatedImage {
            data: vec![1, 2, 3],
            content_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_describe_dish() {
        let client = FakeAiClient::new()
            .with_response(DISH_CAPTION_PROMPT_NAME, "  a plate of steak and fries\n")
            .with_response(DISH_INGREDIENTS_PROMPT_NAME, "beef, potatoes");

        let result = describe_dish(&client, &image()).await.unwrap();
        assert_eq!(result.description.caption, "a plate of steak and fries");
        assert_eq!(result.description.details, "beef, potatoes");
        assert!(!result.cached);
    }

    #[tokio::test]
    async fn test_describe_dish_propagates_errors() {
        let client = FakeAiClient::new().with_response(DISH_CAPTION_PROMPT_NAME, "soup");
        let result = describe_dish(&client, &image()).await;
        assert!(result.is_err());
    }
}
