use super::calls::{ReviewCall, ReviewReply};
use super::error::ReviewError;
use crate::clients::{IdentityClient, OrderClient};
use crate::model::{Review, ReviewCreate};
use async_trait::async_trait;
use rpc_framework::{RecordStore, Service, Status};
use tracing::{info, instrument, warn};

/// Owns review records. Validates the reviewer and the order before storing.
pub struct ReviewService {
    reviews: RecordStore<Review>,
    identity: IdentityClient,
    orders: OrderClient,
}

impl ReviewService {
    pub fn new(identity: IdentityClient, orders: OrderClient) -> Self {
        Self {
            reviews: RecordStore::sequential("review"),
            identity,
            orders,
        }
    }

    /// Stores a review of a confirmed order.
    ///
    /// The order status is read once; a status change after the check does
    /// not undo the review.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, order_id = %params.order_id))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<Review, ReviewError> {
        if let Err(status) = self.identity.get_user(&params.user_id).await {
            warn!(%status, "User validation failed");
            return Err(ReviewError::InvalidUser(status));
        }

        let order = match self.orders.get_order(&params.order_id).await {
            Ok(order) => order,
            Err(status) => {
                warn!(%status, "Order lookup failed");
                return Err(ReviewError::InvalidOrder(status));
            }
        };

        if !order.is_confirmed() {
            return Err(ReviewError::OrderNotConfirmed {
                order_id: order.id,
                status: order.status,
            });
        }

        let review = self
            .reviews
            .insert_with(|id| Review::new(id, params))
            .await;
        info!(review_id = %review.id, rating = review.rating, "Review created");
        Ok(review)
    }

    pub async fn get_review(&self, id: &str) -> Result<Review, ReviewError> {
        self.reviews
            .get(id)
            .await
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl Service for ReviewService {
    const NAME: &'static str = "ReviewService";
    type Call = ReviewCall;
    type Reply = ReviewReply;

    async fn handle(&self, call: ReviewCall) -> Result<ReviewReply, Status> {
        let review = match call {
            ReviewCall::CreateReview(params) => self.create_review(params).await?,
            ReviewCall::GetReview { id } => self.get_review(&id).await?,
        };
        Ok(ReviewReply::Review(review))
    }
}
