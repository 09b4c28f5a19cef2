//! Request/query types (Deserialize)

use serde::Deserialize;

use crate::api_error::ApiError;

/// Query string shared by the per-user dashboard views.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl UserQuery {
    /// The required `userId` parameter, or a 400 when absent or blank.
    pub fn require_user_id(&self) -> Result<&str, ApiError> {
        match self.user_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(ApiError::BadRequest("userId query parameter is required".to_owned())),
        }
    }
}
