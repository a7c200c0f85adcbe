// src/models/review.rs
use serde::{Deserialize, Serialize};

/// Shown in place of the author when a review has no user attached.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,                 // Unique ID of the review
    #[serde(default)]
    pub comment: String,            // Free-text comment left by the guest
    #[serde(default)]
    pub rating: Option<f64>,        // Star rating, 1 to 5, may be fractional
    #[serde(default)]
    pub user: Option<ReviewUser>,   // Author, if the backend sends one
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewUser {
    #[serde(default)]
    pub name: String,
}

impl Review {
    /// Display name of the author, falling back to [`ANONYMOUS`].
    pub fn author_name(&self) -> &str {
        match &self.user {
            Some(user) if !user.name.is_empty() => &user.name,
            _ => ANONYMOUS,
        }
    }

    /// A zero rating is treated the same as a missing one.
    /// Whole ratings print without a fraction (`4.0` shows as `4`).
    pub fn rating_label(&self) -> Option<String> {
        match self.rating {
            Some(rating) if rating != 0.0 => Some(format!("⭐ {}/5", rating)),
            _ => None,
        }
    }
}
