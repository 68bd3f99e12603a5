//! Wire types for the search backend.
//!
//! The contract is exactly what the backend serves:
//! `POST /api/upload` (multipart, field `image`) and `POST /api/search`
//! (JSON `{ filename }`). Optional fields are absent on the failure path,
//! so everything beyond `success` is defaulted.

use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `POST /api/upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    // Backend error bodies omit `success` entirely; absent means failed.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body of `POST /api/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub filename: String,
}

/// Response body of `POST /api/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub marketplace_results: Option<MarketplaceResults>,
    #[serde(default)]
    pub product_info: Option<ProductInfo>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketplaceResults {
    #[serde(default)]
    pub marketplace_searches: Vec<MarketplaceSearch>,
}

/// One marketplace venue to present to the user.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceSearch {
    // The backend emits string ids ("trendyol_search"); older payloads used
    // plain numbers. Accept both.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_results: u64,
    pub search_url: String,
}

/// Product metadata extracted by the backend's image analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInfo {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub brand: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
