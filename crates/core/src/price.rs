//! Spot Price Lookup
//!
//! `PriceClient` is the seam between the skill and whichever service quotes
//! prices. The production implementation talks to CryptoCompare's
//! `/data/price` endpoint, which answers with a flat object keyed by currency
//! code, e.g. `{"USD": 10000.0, "EUR": 9000.0}`.

use async_trait::async_trait;
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr, time::Duration};
use tracing::{debug, info};

pub use reqwest::{StatusCode, Url};

/// Fiat currencies the skill can quote in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiatCurrency {
    Usd,
    Eur,
}

impl FiatCurrency {
    /// The ISO 4217 code, as used by the pricing API and on screen.
    pub fn code(&self) -> &'static str {
        match self {
            FiatCurrency::Usd => "USD",
            FiatCurrency::Eur => "EUR",
        }
    }

    /// How the currency is read out in a sentence.
    pub fn spoken_name(&self) -> &'static str {
        match self {
            FiatCurrency::Usd => "U.S. dollars",
            FiatCurrency::Eur => "Euros",
        }
    }
}

impl fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a slot value does not name a supported fiat currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported fiat currency '{0}'")]
pub struct UnsupportedCurrency(pub String);

impl FromStr for FiatCurrency {
    type Err = UnsupportedCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(FiatCurrency::Usd),
            "EUR" => Ok(FiatCurrency::Eur),
            _ => Err(UnsupportedCurrency(s.to_string())),
        }
    }
}

/// Crypto assets with a known ticker on the pricing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CryptoAsset {
    #[default]
    Bitcoin,
    Ethereum,
    Litecoin,
    BitcoinCash,
    Ripple,
}

impl CryptoAsset {
    pub fn ticker(&self) -> &'static str {
        match self {
            CryptoAsset::Bitcoin => "BTC",
            CryptoAsset::Ethereum => "ETH",
            CryptoAsset::Litecoin => "LTC",
            CryptoAsset::BitcoinCash => "BCH",
            CryptoAsset::Ripple => "XRP",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CryptoAsset::Bitcoin => "Bitcoin",
            CryptoAsset::Ethereum => "Ethereum",
            CryptoAsset::Litecoin => "Litecoin",
            CryptoAsset::BitcoinCash => "Bitcoin Cash",
            CryptoAsset::Ripple => "Ripple",
        }
    }

    /// Map a resolved slot value (either a name or a ticker) to an asset.
    ///
    /// Matching ignores case and whitespace, so "bitcoin cash", "BitcoinCash"
    /// and "bch" all resolve to the same asset.
    pub fn from_spoken(value: &str) -> Option<Self> {
        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "BITCOIN" | "BTC" => Some(CryptoAsset::Bitcoin),
            "ETHEREUM" | "ETHER" | "ETH" => Some(CryptoAsset::Ethereum),
            "LITECOIN" | "LTC" => Some(CryptoAsset::Litecoin),
            "BITCOINCASH" | "BCH" => Some(CryptoAsset::BitcoinCash),
            "RIPPLE" | "XRP" => Some(CryptoAsset::Ripple),
            _ => None,
        }
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The unit price of one asset in one fiat currency, fetched per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub asset: CryptoAsset,
    pub currency: FiatCurrency,
    pub price: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("price request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("price API returned status {status}")]
    Status { status: StatusCode },
    #[error("could not decode price response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("price API reported an error: {0}")]
    Api(String),
    #[error("price response has no {currency} quote for {asset}")]
    MissingCurrency {
        asset: CryptoAsset,
        currency: FiatCurrency,
    },
}

/// Anything that can quote a spot price.
#[async_trait]
pub trait PriceClient: Send + Sync {
    async fn quote(
        &self,
        asset: CryptoAsset,
        currency: FiatCurrency,
    ) -> Result<PriceQuote, PriceError>;
}

/// Pull the quote for `currency` out of a `/data/price` response body.
///
/// The lookup is by currency code, so the order in which the API lists its
/// fields does not matter. CryptoCompare reports errors with a 200 status and
/// a `{"Response": "Error", "Message": ...}` body; those surface as
/// `PriceError::Api`.
pub fn parse_quote(
    body: &[u8],
    asset: CryptoAsset,
    currency: FiatCurrency,
) -> Result<PriceQuote, PriceError> {
    let fields: HashMap<String, Value> = serde_json::from_slice(body)?;

    if fields.get("Response").and_then(Value::as_str) == Some("Error") {
        let message = fields
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(PriceError::Api(message.to_string()));
    }

    let price = fields
        .get(currency.code())
        .and_then(Value::as_f64)
        .ok_or(PriceError::MissingCurrency { asset, currency })?;

    Ok(PriceQuote {
        asset,
        currency,
        price,
    })
}

/// `PriceClient` backed by the CryptoCompare REST API.
#[derive(Debug, Clone)]
pub struct CryptoCompareClient {
    client: reqwest::Client,
    base: Url,
    api_key: Option<String>,
    exchange: Option<String>,
}

impl CryptoCompareClient {
    pub const DEFAULT_URL: &'static str = "https://min-api.cryptocompare.com/data/price";

    /// Creates a client for the given endpoint.
    ///
    /// # Arguments
    ///
    /// * `base` - The `/data/price` endpoint URL.
    /// * `timeout` - Upper bound for the whole request, connect included.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, PriceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            api_key: None,
            exchange: None,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Restrict quotes to one exchange (CryptoCompare's `e` parameter).
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    fn quote_url(&self, asset: CryptoAsset, currency: FiatCurrency) -> Url {
        let mut url = self.base.clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("fsym", asset.ticker());
            qp.append_pair("tsyms", currency.code());
            if let Some(key) = &self.api_key {
                qp.append_pair("api_key", key);
            }
            if let Some(exchange) = &self.exchange {
                qp.append_pair("e", exchange);
            }
        }
        url
    }
}

#[async_trait]
impl PriceClient for CryptoCompareClient {
    async fn quote(
        &self,
        asset: CryptoAsset,
        currency: FiatCurrency,
    ) -> Result<PriceQuote, PriceError> {
        let url = self.quote_url(asset, currency);
        debug!(fsym = asset.ticker(), tsym = currency.code(), "Requesting spot price");

        let resp = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PriceError::Status { status });
        }

        let body = resp.bytes().await?;
        let quote = parse_quote(&body, asset, currency)?;
        info!(asset = %asset, currency = %currency, price = quote.price, "Fetched spot price");
        Ok(quote)
    }
}

/// A `PriceClient` with a fixed price table.
///
/// Used for local development and tests, where hitting the real API would
/// make results depend on the market.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceClient {
    prices: HashMap<(CryptoAsset, FiatCurrency), f64>,
}

impl StaticPriceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, asset: CryptoAsset, currency: FiatCurrency, price: f64) -> Self {
        self.prices.insert((asset, currency), price);
        self
    }
}

#[async_trait]
impl PriceClient for StaticPriceClient {
    async fn quote(
        &self,
        asset: CryptoAsset,
        currency: FiatCurrency,
    ) -> Result<PriceQuote, PriceError> {
        self.prices
            .get(&(asset, currency))
            .map(|&price| PriceQuote {
                asset,
                currency,
                price,
            })
            .ok_or(PriceError::MissingCurrency { asset, currency })
    }
}
