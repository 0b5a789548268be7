use serde::{Deserialize, Deserializer};

use crate::core::YfError;

/// Yahoo's `{ "raw": 1.23, "fmt": "1.23" }` value wrapper.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawNum<T> {
    pub raw: Option<T>,
    pub fmt: Option<String>,
}

pub fn from_raw<T>(raw: Option<RawNum<T>>) -> Option<T> {
    raw.and_then(|n| n.raw)
}

/// `deserialize_with` helper that unwraps a `{raw, fmt}` object straight into
/// `Option<T>`. Pair it with `#[serde(default)]` so a missing key is `None`.
pub(crate) fn de_raw<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<RawNum<T>>::deserialize(d).map(from_raw)
}

/// `{ "code": ..., "description": ... }`, reported inside a `200 OK` body.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProviderError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl From<ProviderError> for YfError {
    fn from(e: ProviderError) -> Self {
        Self::Provider {
            code: e.code.unwrap_or_default(),
            description: e.description.unwrap_or_default(),
        }
    }
}

/// Fails with the provider's error if the envelope carried one.
pub fn check_provider(error: Option<ProviderError>) -> Result<(), YfError> {
    error.map_or(Ok(()), |e| Err(e.into()))
}

/// The common `{ "result": [...], "error": {...} }` envelope.
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    pub result: Option<Vec<T>>,
    pub error: Option<ProviderError>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
        }
    }
}

impl<T> Envelope<T> {
    /// All results, or the provider error if one was reported. An error object
    /// wins over whatever the result list holds.
    pub fn into_results(self) -> Result<Vec<T>, YfError> {
        check_provider(self.error)?;
        Ok(self.result.unwrap_or_default())
    }

    /// The first result; an empty list becomes [`YfError::NoData`].
    pub fn into_first(self, what: &'static str, symbol: &str) -> Result<T, YfError> {
        self.into_results()?
            .into_iter()
            .next()
            .ok_or_else(|| YfError::NoData {
                what,
                symbol: symbol.to_string(),
            })
    }
}
