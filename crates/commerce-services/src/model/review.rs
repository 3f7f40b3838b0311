use chrono::{DateTime, Utc};
use rpc_framework::Record;
use serde::{Deserialize, Serialize};

/// A review of a confirmed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub order_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(id: String, params: ReviewCreate) -> Self {
        Self {
            id,
            user_id: params.user_id,
            order_id: params.order_id,
            rating: params.rating,
            comment: params.comment,
            created_at: Utc::now(),
        }
    }
}

impl Record for Review {
    const KIND: &'static str = "Review";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for `CreateReview`. The rating is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    pub user_id: String,
    pub order_id: String,
    pub rating: i32,
    pub comment: String,
}
