//! DTOs for mapping creation endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::Mapping;

/// Body of `POST /new`.
///
/// Only presence and length are checked here; URL format is the mapping
/// service's decision so that both create routes reject the same inputs.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMappingRequest {
    #[validate(length(min = 1, max = 2048, message = "url must be 1-2048 characters"))]
    pub url: String,
}

/// Short URL paired with the original URL it resolves to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub short_url: String,
    pub original_url: String,
}

impl From<Mapping> for MappingResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            short_url: mapping.short_url,
            original_url: mapping.record.original_url,
        }
    }
}
