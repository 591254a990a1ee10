//! Thin asynchronous client for the Fuzzwork market aggregates endpoint.
//!
//! One GET covers the catalogue's entire id closure; the JSON response is
//! keyed by type id with buy/sell percentile statistics per entry. The
//! endpoint serializes most numbers as strings, so the DTO layer accepts
//! either representation.

use std::collections::HashMap;

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{ItemPriceStats, PriceSnapshot, SideStats, TypeId};

const DEFAULT_BASE_URL: &str = "https://market.fuzzwork.co.uk/aggregates/";
/// The Forge (Jita market).
const DEFAULT_REGION_ID: u32 = 10000002;
const USER_AGENT: &str = concat!("ore-harvest/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum MarketClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed aggregate payload: {0}")]
    Payload(String),
}

#[derive(Clone)]
pub struct MarketClient {
    http: Client,
    base_url: Url,
    region_id: u32,
}

impl MarketClient {
    pub fn new() -> Result<Self, MarketClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base: &str) -> Result<Self, MarketClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            region_id: DEFAULT_REGION_ID,
        })
    }

    pub fn with_region(mut self, region_id: u32) -> Self {
        self.region_id = region_id;
        self
    }

    /// Fetches a complete snapshot for the given ids. The result replaces
    /// any previous snapshot wholesale; nothing is merged.
    pub async fn fetch_aggregates(
        &self,
        ids: &[TypeId],
    ) -> Result<PriceSnapshot, MarketClientError> {
        let url = self.aggregates_url(ids);
        println!("[market] requesting aggregates for {} types", ids.len());

        let response = self.http.get(url).send().await?.error_for_status()?;
        let payload: HashMap<String, ItemStatsDto> = response.json().await?;

        let mut snapshot = PriceSnapshot::with_capacity(payload.len());
        for (key, dto) in payload {
            let id: TypeId = key.parse().map_err(|_| {
                MarketClientError::Payload(format!("non-numeric type id key: {key}"))
            })?;
            snapshot.insert(id, dto.into());
        }
        Ok(snapshot)
    }

    fn aggregates_url(&self, ids: &[TypeId]) -> Url {
        let types = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("region", &self.region_id.to_string())
            .append_pair("types", &types);
        url
    }
}

#[derive(Debug, Deserialize)]
struct ItemStatsDto {
    buy: SideStatsDto,
    sell: SideStatsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SideStatsDto {
    #[serde(default, deserialize_with = "lenient_f64")]
    weighted_average: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    max: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    min: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    stddev: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    median: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    volume: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    order_count: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    percentile: f64,
}

impl From<ItemStatsDto> for ItemPriceStats {
    fn from(dto: ItemStatsDto) -> Self {
        Self {
            buy: dto.buy.into(),
            sell: dto.sell.into(),
        }
    }
}

impl From<SideStatsDto> for SideStats {
    fn from(dto: SideStatsDto) -> Self {
        Self {
            weighted_average: dto.weighted_average,
            max: dto.max,
            min: dto.min,
            stddev: dto.stddev,
            median: dto.median,
            volume: dto.volume,
            order_count: dto.order_count,
            percentile: dto.percentile,
        }
    }
}

/// Accepts `"4.95"`, `4.95`, and `42` alike.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct NumberOrString;

    impl<'de> serde::de::Visitor<'de> for NumberOrString {
        type Value = f64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number or a numeric string")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as f64)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            value.parse().map_err(serde::de::Error::custom)
        }
    }

    deserializer.deserialize_any(NumberOrString)
}
