//! # Identity Client
//!
//! Provides a high-level API for calling the identity service, in-process or
//! over HTTP.
use crate::identity::{IdentityCall, IdentityReply, IdentityService};
use crate::model::{AuthResult, User, UserCreate};
use rpc_framework::{RemoteClient, ServiceClient, Status};
use tracing::instrument;

/// Client for the identity service.
#[derive(Clone)]
pub struct IdentityClient {
    inner: ServiceClient<IdentityService>,
}

impl IdentityClient {
    pub fn new(inner: ServiceClient<IdentityService>) -> Self {
        Self { inner }
    }

    /// Client for an identity service listening at `addr`.
    pub fn connect(addr: &str) -> Self {
        Self::new(ServiceClient::http(addr))
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, Status> {
        match self.dispatch(IdentityCall::CreateUser(params)).await? {
            IdentityReply::User(user) => Ok(user),
            other => Err(Status::unexpected_reply("CreateUser", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> Result<User, Status> {
        match self
            .dispatch(IdentityCall::GetUser { id: id.to_string() })
            .await?
        {
            IdentityReply::User(user) => Ok(user),
            other => Err(Status::unexpected_reply("GetUser", &other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn authenticate(&self, email: &str) -> Result<AuthResult, Status> {
        match self
            .dispatch(IdentityCall::Authenticate {
                email: email.to_string(),
            })
            .await?
        {
            IdentityReply::Auth(auth) => Ok(auth),
            other => Err(Status::unexpected_reply("Authenticate", &other)),
        }
    }
}

impl RemoteClient<IdentityService> for IdentityClient {
    fn inner(&self) -> &ServiceClient<IdentityService> {
        &self.inner
    }
}
