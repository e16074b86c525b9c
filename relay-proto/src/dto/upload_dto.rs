use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    pub success: bool,
    pub message: String,
    pub file_ids: Vec<String>,
    /// The downstream webhook's JSON body, relayed verbatim.
    #[schema(value_type = Option<Object>)]
    pub downstream_response: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponseDto {
    pub success: bool,
    pub message: String,
    /// Internal error detail, exposed outside production mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
