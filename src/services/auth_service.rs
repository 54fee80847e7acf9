use gloo_net::http::Request;

use crate::models::{Credentials, LoginResponse};
use crate::utils::constants::BACKEND_URL;

/// Send the credentials to the backend and decode its verdict.
///
/// The body is decoded regardless of the HTTP status: the backend reports
/// rejections through the `success`/`error` fields, not through status codes.
pub async fn perform_login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let url = format!("{}/api/login", BACKEND_URL);
    let request_body = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
