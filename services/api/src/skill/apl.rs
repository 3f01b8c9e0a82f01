//! Visual responses.
//!
//! Devices with a screen get an APL `RenderDocument` directive built from the
//! bundled layout document and a `bodyTemplate6Data` datasource. Everything
//! else gets a `Standard` card with the same two lines of text.

use super::{error::SkillError, input::HandlerInput};
use crate::models::{Card, CardImage, Directive};
use buybitcoin_core::price::FiatCurrency;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

pub const PAGER_TOKEN: &str = "pagerToken";
pub const BACKGROUND_IMAGE_URL: &str = "https://yakkie.app/wp-content/uploads/2019/09/bbback.png";
pub const LAUNCH_LOGO_URL: &str = "https://yakkie.app/wp-content/uploads/2019/09/buybitcoin.png";
pub const RESULT_LOGO_URL: &str = "https://yakkie.app/wp-content/uploads/2019/08/logo-noB.png";
pub const CARD_IMAGE_URL: &str = "https://yakkie.app/wp-content/uploads/2019/09/bbcard.png";

/// The on-screen suggestion, phrased in the currency the user is using.
pub fn hint_text(currency: FiatCurrency) -> &'static str {
    match currency {
        FiatCurrency::Usd => "Try, \"How many Bitcoin can I buy with 100 dollars?\"",
        FiatCurrency::Eur => "Try, \"How many Bitcoin can I buy with 100 euro?\"",
    }
}

/// Reads the APL layout from disk each time a visual response is built.
#[derive(Debug, Clone)]
pub struct AplDocuments {
    path: PathBuf,
}

impl AplDocuments {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Value, SkillError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SkillError::DocumentRead {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_str(&text).map_err(SkillError::DocumentParse)
    }
}

/// Text shown on screen alongside the spoken answer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualContent {
    pub primary_text: String,
    pub secondary_text: String,
    pub logo_url: &'static str,
    pub hint_text: &'static str,
}

impl VisualContent {
    pub fn datasources(&self) -> Value {
        let background = |size: &str| {
            json!({
                "url": BACKGROUND_IMAGE_URL,
                "size": size,
                "widthPixels": 0,
                "heightPixels": 0
            })
        };
        json!({
            "bodyTemplate6Data": {
                "type": "object",
                "objectId": "bt6Sample",
                "backgroundImage": {
                    "sources": [background("small"), background("large")]
                },
                "textContent": {
                    "primaryText": { "type": "PlainText", "text": self.primary_text },
                    "secondaryText": { "type": "PlainText", "text": self.secondary_text }
                },
                "logoUrl": self.logo_url,
                "hintText": self.hint_text
            }
        })
    }

    pub fn card(&self) -> Card {
        Card::Standard {
            title: self.primary_text.clone(),
            text: self.secondary_text.clone(),
            image: Some(CardImage {
                small_image_url: CARD_IMAGE_URL.to_string(),
                large_image_url: CARD_IMAGE_URL.to_string(),
            }),
        }
    }
}

/// Adds the visual part of the response: a rendered document when the device
/// supports APL, a card otherwise.
pub async fn attach_visual(
    input: &mut HandlerInput,
    documents: &AplDocuments,
    content: &VisualContent,
) -> Result<(), SkillError> {
    if input.supports_apl() {
        let document = documents.load().await?;
        input.response_builder.add_directive(Directive::RenderDocument {
            token: PAGER_TOKEN.to_string(),
            document,
            datasources: content.datasources(),
        });
    } else {
        input.response_builder.set_card(content.card());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::test_support::{TestEnvelope, seeded_rng};
    use std::io::Write;

    fn content() -> VisualContent {
        VisualContent {
            primary_text: "25000.0 USD".to_string(),
            secondary_text: "2.5 BTC".to_string(),
            logo_url: RESULT_LOGO_URL,
            hint_text: hint_text(FiatCurrency::Usd),
        }
    }

    fn document_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_datasources_shape() {
        let data = content().datasources();
        let template = &data["bodyTemplate6Data"];

        assert_eq!(template["textContent"]["primaryText"]["text"], "25000.0 USD");
        assert_eq!(template["textContent"]["secondaryText"]["text"], "2.5 BTC");
        assert_eq!(template["logoUrl"], RESULT_LOGO_URL);
        assert_eq!(template["backgroundImage"]["sources"][1]["size"], "large");
        assert!(template["hintText"].as_str().unwrap().contains("100 dollars"));
    }

    #[test]
    fn test_card_mirrors_text() {
        match content().card() {
            Card::Standard { title, text, image } => {
                assert_eq!(title, "25000.0 USD");
                assert_eq!(text, "2.5 BTC");
                assert_eq!(image.unwrap().large_image_url, CARD_IMAGE_URL);
            }
        }
    }

    #[tokio::test]
    async fn test_load_document() {
        let file = document_file(r#"{"type": "APL", "version": "1.1"}"#);
        let document = AplDocuments::new(file.path()).load().await.unwrap();
        assert_eq!(document["type"], "APL");
    }

    #[tokio::test]
    async fn test_bundled_document_reads_datasource() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/aplbuybitcoin.json");
        let document = AplDocuments::new(path).load().await.unwrap();

        assert_eq!(document["type"], "APL");
        assert_eq!(document["mainTemplate"]["parameters"][0], "payload");
        assert!(document.to_string().contains("bodyTemplate6Data"));
    }

    #[tokio::test]
    async fn test_load_missing_document() {
        let err = AplDocuments::new("/definitely/not/here.json")
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, SkillError::DocumentRead { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[tokio::test]
    async fn test_load_invalid_document() {
        let file = document_file("{ not json");
        let err = AplDocuments::new(file.path()).load().await.unwrap_err();
        assert!(matches!(err, SkillError::DocumentParse(_)));
    }

    #[tokio::test]
    async fn test_attach_visual_with_screen() {
        let file = document_file(r#"{"type": "APL"}"#);
        let documents = AplDocuments::new(file.path());
        let mut input = HandlerInput::new(TestEnvelope::launch().with_apl().build(), seeded_rng());

        attach_visual(&mut input, &documents, &content()).await.unwrap();
        let response = input.response_builder.response();

        assert!(response.card.is_none());
        match &response.directives[..] {
            [Directive::RenderDocument { token, document, datasources }] => {
                assert_eq!(token, PAGER_TOKEN);
                assert_eq!(document["type"], "APL");
                assert_eq!(
                    datasources["bodyTemplate6Data"]["textContent"]["primaryText"]["text"],
                    "25000.0 USD"
                );
            }
            other => panic!("Expected one RenderDocument directive, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_attach_visual_without_screen_never_reads_document() {
        let documents = AplDocuments::new("/definitely/not/here.json");
        let mut input = HandlerInput::new(TestEnvelope::launch().build(), seeded_rng());

        attach_visual(&mut input, &documents, &content()).await.unwrap();
        let response = input.response_builder.response();

        assert!(response.directives.is_empty());
        assert!(response.card.is_some());
    }
}
