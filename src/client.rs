/// HTTP calls to the rental backend.
/// The backend itself lives elsewhere; this module only knows the two routes the front end uses.
use crate::models::booking::BookingDetails;
use crate::models::review::Review;
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use thiserror::Error;

pub const API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub fn reviews_url(property_id: &str) -> String {
    format!(
        "{}/properties/{}/reviews",
        API_BASE,
        urlencoding::encode(property_id)
    )
}

pub fn bookings_url() -> String {
    format!("{}/bookings", API_BASE)
}

fn check_status(response: Response) -> Result<Response, ClientError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status()))
    }
}

/// `GET /api/properties/{id}/reviews`
pub async fn fetch_reviews(property_id: &str) -> Result<Vec<Review>, ClientError> {
    let url = reviews_url(property_id);
    log!("[REVIEWS] Fetching {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    let response = check_status(response)?;

    let reviews = response
        .json::<Vec<Review>>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    log!("[REVIEWS] Received {} reviews for {}", reviews.len(), property_id);
    Ok(reviews)
}

/// `POST /api/bookings`. Only the status code matters, the body is ignored.
pub async fn submit_booking(details: &BookingDetails) -> Result<(), ClientError> {
    let url = bookings_url();
    log!("[BOOKING] Submitting booking to {}", url);

    let response = Request::post(&url)
        .json(details)
        .map_err(|e| ClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    check_status(response)?;
    Ok(())
}
