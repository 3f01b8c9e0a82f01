//! The two questions the skill actually answers.
//!
//! Both intents share the same slots: `integer` and `decimal` (the two halves
//! of a spoken number), `fiat` (USD or EUR) and `crypto` (the asset name).
//! `HowMuchIsCryptoInFiat` reads the number as units of the asset,
//! `HowManyCryptoCanIBuy` reads it as an amount of fiat.

use crate::{
    models::Response,
    skill::{
        SkillError,
        apl::{AplDocuments, RESULT_LOGO_URL, VisualContent, attach_visual, hint_text},
        dispatch::{RequestHandler, is_intent_name},
        input::HandlerInput,
        slots::get_slot_values,
    },
};
use async_trait::async_trait;
use buybitcoin_core::{
    conversion::{Amount, ConversionRequest, format_number},
    phrases,
    price::{CryptoAsset, FiatCurrency, PriceClient},
};
use std::sync::Arc;
use tracing::info;

pub const HOW_MUCH_INTENT: &str = "HowMuchIsCryptoInFiat";
pub const HOW_MANY_INTENT: &str = "HowManyCryptoCanIBuy";

/// A conversion question plus the asset name as the user's slot spelled it.
struct Question {
    request: ConversionRequest,
    asset_label: String,
}

fn read_question(input: &HandlerInput) -> Result<Question, SkillError> {
    let intent = input.intent().ok_or(SkillError::MissingIntent)?;
    let slots = get_slot_values(&intent.slots);

    let amount = Amount::from_parts(slots.resolved("integer"), slots.resolved("decimal"))?;
    let currency: FiatCurrency = slots
        .resolved("fiat")
        .ok_or(SkillError::MissingSlot("fiat"))?
        .parse()?;

    let (asset, asset_label) = match slots.resolved("crypto") {
        Some(label) => {
            let asset = CryptoAsset::from_spoken(label)
                .ok_or_else(|| SkillError::UnsupportedAsset(label.to_string()))?;
            (asset, label.to_string())
        }
        None => (CryptoAsset::default(), CryptoAsset::default().name().to_string()),
    };

    Ok(Question {
        request: ConversionRequest {
            amount,
            asset,
            currency,
        },
        asset_label,
    })
}

/// "How much is 2.5 Bitcoin in U.S. dollars?"
pub struct HowMuchIsCryptoInFiatHandler {
    prices: Arc<dyn PriceClient>,
    documents: AplDocuments,
}

impl HowMuchIsCryptoInFiatHandler {
    pub fn new(prices: Arc<dyn PriceClient>, documents: AplDocuments) -> Self {
        Self { prices, documents }
    }
}

#[async_trait]
impl RequestHandler for HowMuchIsCryptoInFiatHandler {
    fn name(&self) -> &'static str {
        "HowMuchIsCryptoInFiatHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_intent_name(input, HOW_MUCH_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In HowMuchIsCryptoInFiatHandler");

        let Question {
            request,
            asset_label,
        } = read_question(input)?;
        let quote = self.prices.quote(request.asset, request.currency).await?;
        let worth = request.worth(quote.price)?;
        info!(amount = request.amount.value(), price = quote.price, worth, "Converted to fiat");

        let speech = format!(
            "{} {} is worth {} {}.",
            request.amount,
            asset_label,
            format_number(worth),
            request.currency.spoken_name()
        );
        let follow_up = input.pick(phrases::FOLLOW_UPS);
        let reprompt = input.pick(phrases::FOLLOW_UPS);
        input
            .response_builder
            .speak(format!("{speech} {follow_up}"))
            .ask(reprompt);

        let content = VisualContent {
            primary_text: format!("{} {}", format_number(worth), request.currency.code()),
            secondary_text: format!("{} {}", request.amount, request.asset.ticker()),
            logo_url: RESULT_LOGO_URL,
            hint_text: hint_text(request.currency),
        };
        attach_visual(input, &self.documents, &content).await?;

        Ok(input.response_builder.response())
    }
}

/// "How many Bitcoin can I buy for 100 Euro?"
pub struct HowManyCryptoCanIBuyHandler {
    prices: Arc<dyn PriceClient>,
    documents: AplDocuments,
}

impl HowManyCryptoCanIBuyHandler {
    pub fn new(prices: Arc<dyn PriceClient>, documents: AplDocuments) -> Self {
        Self { prices, documents }
    }
}

#[async_trait]
impl RequestHandler for HowManyCryptoCanIBuyHandler {
    fn name(&self) -> &'static str {
        "HowManyCryptoCanIBuyHandler"
    }

    fn can_handle(&self, input: &HandlerInput) -> bool {
        is_intent_name(input, HOW_MANY_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<Response, SkillError> {
        info!("In HowManyCryptoCanIBuyHandler");

        let Question {
            request,
            asset_label,
        } = read_question(input)?;
        let quote = self.prices.quote(request.asset, request.currency).await?;
        let quantity = request.affordable(quote.price)?;
        info!(amount = request.amount.value(), price = quote.price, quantity, "Converted to asset");

        let speech = format!(
            "With {} {} you can buy {} {}.",
            request.amount,
            request.currency.spoken_name(),
            format_number(quantity),
            asset_label
        );
        let follow_up = input.pick(phrases::FOLLOW_UPS);
        let reprompt = input.pick(phrases::FOLLOW_UPS);
        input
            .response_builder
            .speak(format!("{speech} {follow_up}"))
            .ask(reprompt);

        let content = VisualContent {
            primary_text: format!("{} {}", format_number(quantity), request.asset.ticker()),
            secondary_text: format!("{} {}", request.amount, request.currency.code()),
            logo_url: RESULT_LOGO_URL,
            hint_text: hint_text(request.currency),
        };
        attach_visual(input, &self.documents, &content).await?;

        Ok(input.response_builder.response())
    }
}
