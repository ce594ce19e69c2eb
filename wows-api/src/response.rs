use serde::Deserialize;

use crate::error::Error;

/// Top-level envelope wrapping every World of Warships API response.
#[derive(Deserialize)]
pub(crate) struct ApiResponse<T> {
    status: String,
    data: Option<T>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, treating any status other than `"ok"` as a failure.
    pub(crate) fn into_result(self, path: &str) -> Result<T, Error> {
        if self.status != "ok" {
            let (code, message, field) = match self.error {
                Some(error) => (
                    error.code,
                    error.message.unwrap_or_else(|| "UNKNOWN_ERROR".to_string()),
                    error.field,
                ),
                None => (None, format!("unexpected status {:?}", self.status), None),
            };

            return Err(Error::Api {
                path: path.to_string(),
                code,
                message,
                field,
            });
        }

        self.data.ok_or_else(|| Error::MissingData(path.to_string()))
    }
}
