//! LLM-backed image descriptions.
//!
//! The converter treats description as an injected collaborator: anything
//! implementing [`DescribeImage`] can supply descriptions, and
//! [`OpenAiVision`] is the production implementation backed by the OpenAI
//! chat completions API.

use anyhow::{Context, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Produces a text description for a single image.
pub trait DescribeImage {
    /// Describes one image from its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error when no description could be produced; the
    /// caller substitutes a placeholder and continues.
    fn describe(&self, image: &[u8]) -> Result<String>;
}

const MODEL: &str = "gpt-4o";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.1;

const DESCRIPTION_PROMPT: &str = "\
Please provide a clear, concise description of this image. Focus on:
1. The main subject or content of the image
2. Important visual elements, data, or information shown
3. The type of image (chart, diagram, photo, etc.)
4. Any text or labels visible in the image

Keep the description factual and suitable for AI processing.";

/// Vision client for the OpenAI chat completions API.
///
/// Requests are blocking, sequential, and have no client-side timeout;
/// the endpoint can be redirected with the `OPENAI_API_BASE` environment
/// variable.
pub struct OpenAiVision {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiVision {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let base_url = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }
}

impl DescribeImage for OpenAiVision {
    fn describe(&self, image: &[u8]) -> Result<String> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: DESCRIPTION_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: data_url(image),
                        },
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .context("failed to reach the OpenAI API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            anyhow::bail!("OpenAI API returned {status}: {body}");
        }

        let chat: ChatResponse = response
            .json()
            .context("failed to parse the OpenAI API response")?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("OpenAI response contained no description")?;

        Ok(content.trim().to_string())
    }
}

/// Base64 data URL for the image, with the MIME type sniffed from the
/// bytes and image/jpeg as the fallback.
fn data_url(image: &[u8]) -> String {
    let mime = image::guess_format(image)
        .map(|format| format.to_mime_type())
        .unwrap_or("image/jpeg");
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    format!("data:{mime};base64,{encoded}")
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn data_url_sniffs_png() {
        let url = data_url(PNG_MAGIC);
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn data_url_falls_back_to_jpeg() {
        let url = data_url(b"no magic here");
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn request_payload_shape() {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: "describe".to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: data_url(PNG_MAGIC),
                        },
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 500);
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert!(json["messages"][0]["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }

    #[test]
    fn response_content_parses() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"A small chart."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("A small chart.")
        );
    }
}
