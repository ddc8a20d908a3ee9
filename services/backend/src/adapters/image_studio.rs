//! services/backend/src/adapters/image_studio.rs
//!
//! This module contains the adapter for the listing photo studio.
//! It implements the `ImageStudioService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    types::{
        chat::{
            ChatCompletionRequestMessageContentPartImageArgs,
            ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
            CreateChatCompletionRequestArgs, ImageUrlArgs,
        },
        images::{CreateImageEditRequestArgs, Image, ImageInput, ImageModel},
    },
    Client, error::OpenAIError,
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use tracing::warn;

use rentflow_core::{
    domain::InlineImage,
    ports::{ImageStudioService, PortError, PortResult},
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `ImageStudioService` against an OpenAI-compatible API.
///
/// Analysis goes through the chat endpoint with the photo attached as a data
/// URL; edits go through the image edit endpoint with a dedicated image model.
#[derive(Clone)]
pub struct GeminiImageStudioAdapter {
    client: Client<OpenAIConfig>,
    vision_model: String,
    edit_model: String,
}

impl GeminiImageStudioAdapter {
    /// Creates a new `GeminiImageStudioAdapter`.
    pub fn new(client: Client<OpenAIConfig>, vision_model: String, edit_model: String) -> Self {
        Self {
            client,
            vision_model,
            edit_model,
        }
    }

    fn data_url(image: &InlineImage) -> String {
        format!(
            "data:{};base64,{}",
            image.mime_type,
            general_purpose::STANDARD.encode(&image.data)
        )
    }

    async fn describe(&self, image: &InlineImage) -> PortResult<String> {
        // The photo goes first so the question reads as a caption on it.
        let parts = vec![
            ChatCompletionRequestMessageContentPartImageArgs::default()
                .image_url(
                    ImageUrlArgs::default()
                        .url(Self::data_url(image))
                        .build()
                        .map_err(|e| PortError::Unexpected(e.to_string()))?,
                )
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestMessageContentPartTextArgs::default()
                .text("Analyze this image. Identify room type, style, and 3 key features.")
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(parts)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.vision_model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty());

        Ok(content.unwrap_or_else(|| "Could not analyze image.".to_string()))
    }

    async fn restyle(&self, image: &InlineImage, instruction: &str) -> PortResult<Option<String>> {
        let filename = match image.mime_type.as_str() {
            "image/jpeg" => "photo.jpg",
            _ => "photo.png",
        };

        let request = CreateImageEditRequestArgs::default()
            .image(ImageInput::from_vec_u8(
                filename.to_string(),
                image.data.clone(),
            ))
            .prompt(instruction)
            .model(ImageModel::Other(self.edit_model.clone()))
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .images()
            .edit(request)
            .await
            .map_err(|e: OpenAIError| PortError::Unexpected(e.to_string()))?;

        let edited = response.data.into_iter().next().map(|img| match img.as_ref() {
            Image::Url { url, .. } => url.clone(),
            Image::B64Json { b64_json, .. } => format!("data:image/png;base64,{}", b64_json),
        });

        Ok(edited)
    }
}

//=========================================================================================
// `ImageStudioService` Trait Implementation
//=========================================================================================

#[async_trait]
impl ImageStudioService for GeminiImageStudioAdapter {
    async fn analyze_image(&self, image: &InlineImage) -> String {
        match self.describe(image).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Image analysis failed: {}", e);
                "Error analyzing image.".to_string()
            }
        }
    }

    async fn edit_image(&self, image: &InlineImage, instruction: &str) -> Option<String> {
        match self.restyle(image, instruction).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Image edit failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_carries_the_mime_type() {
        let image = InlineImage {
            mime_type: "image/jpeg".to_string(),
            data: vec![0xFF, 0xD8, 0xFF],
        };

        let url = GeminiImageStudioAdapter::data_url(&image);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(url.len() > "data:image/jpeg;base64,".len());
    }
}
