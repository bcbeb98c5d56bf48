use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct CreateReviewRequest {
    /// Display name of the reviewer
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            product_id: review.product_id.to_string(),
            user_id: review.user_id.to_string(),
            name: review.name,
            description: review.description,
            date: review.date,
        }
    }
}
