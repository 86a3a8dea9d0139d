use crate::{
    client::model::error::ApiError,
    model::api::{ApiResponse, ErrorDto, MessageDto},
};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Reads the error message of a failed response, preferring the `ErrorDto` body
async fn error_message(response: Response) -> String {
    match response.text().await {
        Ok(body) => message_from_body(&body),
        Err(_) => "Unknown error".to_string(),
    }
}

/// Extracts the message of an `ErrorDto` body, falling back to the raw text
fn message_from_body(body: &str) -> String {
    match serde_json::from_str::<ErrorDto>(body) {
        Ok(error_dto) => error_dto.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
    } else {
        let message = error_message(response).await;

        Err(ApiError::new(status, message))
    }
}

/// Parses an `ApiResponse` envelope and returns its payload
pub async fn parse_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let envelope = parse_response::<ApiResponse<T>>(response).await?;

    envelope
        .data
        .ok_or_else(|| ApiError::new(500, "Response did not include data"))
}

/// Parses a `MessageDto` success response, returning its message
pub async fn parse_message(response: Response) -> Result<String, ApiError> {
    parse_response::<MessageDto>(response)
        .await
        .map(|dto| dto.message)
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a PUT request with JSON content type
pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

/// Create a DELETE request
pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}
