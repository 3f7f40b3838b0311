//! Wire messages of the review service.

use crate::model::{Review, ReviewCreate};
use rpc_framework::Operation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload")]
pub enum ReviewCall {
    CreateReview(ReviewCreate),
    GetReview { id: String },
}

impl Operation for ReviewCall {
    fn operation(&self) -> &'static str {
        match self {
            ReviewCall::CreateReview(_) => "CreateReview",
            ReviewCall::GetReview { .. } => "GetReview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewReply {
    Review(Review),
}
