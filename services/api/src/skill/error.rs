use buybitcoin_core::{
    conversion::ConversionError,
    price::{PriceError, UnsupportedCurrency},
};
use std::path::PathBuf;

/// Anything that can make a handler fail to produce a response.
///
/// These never reach the user directly: the catch-all exception handler turns
/// them into an apology.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("no handler accepts request type '{request_type}' (intent: {intent:?})")]
    NoHandler {
        request_type: String,
        intent: Option<String>,
    },
    #[error("request carries no intent")]
    MissingIntent,
    #[error("required slot '{0}' is empty")]
    MissingSlot(&'static str),
    #[error(transparent)]
    UnsupportedCurrency(#[from] UnsupportedCurrency),
    #[error("unsupported crypto asset '{0}'")]
    UnsupportedAsset(String),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Price(#[from] PriceError),
    #[error("failed to read visual document {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("visual document is not valid JSON: {0}")]
    DocumentParse(#[source] serde_json::Error),
}
