//! # Review Client
use crate::model::{Review, ReviewCreate};
use crate::review::{ReviewCall, ReviewReply, ReviewService};
use rpc_framework::{RemoteClient, ServiceClient, Status};
use tracing::instrument;

/// Client for the review service.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ServiceClient<ReviewService>,
}

impl ReviewClient {
    pub fn new(inner: ServiceClient<ReviewService>) -> Self {
        Self { inner }
    }

    /// Client for a review service listening at `addr`.
    pub fn connect(addr: &str) -> Self {
        Self::new(ServiceClient::http(addr))
    }

    #[instrument(skip(self, params), fields(order_id = %params.order_id))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<Review, Status> {
        let ReviewReply::Review(review) =
            self.dispatch(ReviewCall::CreateReview(params)).await?;
        Ok(review)
    }

    #[instrument(skip(self))]
    pub async fn get_review(&self, id: &str) -> Result<Review, Status> {
        let ReviewReply::Review(review) = self
            .dispatch(ReviewCall::GetReview { id: id.to_string() })
            .await?;
        Ok(review)
    }
}

impl RemoteClient<ReviewService> for ReviewClient {
    fn inner(&self) -> &ServiceClient<ReviewService> {
        &self.inner
    }
}
