use super::calls::{IdentityCall, IdentityReply};
use super::error::IdentityError;
use crate::model::{AuthResult, User, UserCreate};
use async_trait::async_trait;
use rpc_framework::{RecordStore, Service, Status};
use tracing::{debug, instrument};

/// Owns user records. Has no outbound dependencies.
pub struct IdentityService {
    users: RecordStore<User>,
}

impl IdentityService {
    pub fn new() -> Self {
        Self {
            users: RecordStore::random(),
        }
    }

    /// Registers a user. The uniqueness scan and the insert share one write
    /// lock, so two concurrent registrations of one email cannot both succeed.
    #[instrument(skip(self), fields(email = %params.email))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, IdentityError> {
        self.users
            .try_insert_with(|id, mut existing| {
                if existing.any(|user| user.email == params.email) {
                    return Err(IdentityError::EmailTaken(params.email));
                }
                Ok(User {
                    id,
                    email: params.email,
                    name: params.name,
                    phone: params.phone,
                })
            })
            .await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, IdentityError> {
        self.users
            .get(id)
            .await
            .ok_or_else(|| IdentityError::NotFound { id: id.to_string() })
    }

    /// Looks a user up by email and issues a placeholder token. No
    /// credential is checked.
    pub async fn authenticate(&self, email: &str) -> Result<AuthResult, IdentityError> {
        let user = self
            .users
            .find(|user| user.email == email)
            .await
            .ok_or_else(|| IdentityError::UnknownEmail {
                email: email.to_string(),
            })?;
        debug!(user_id = %user.id, "Authenticated");
        Ok(AuthResult::for_user(user))
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Service for IdentityService {
    const NAME: &'static str = "IdentityService";
    type Call = IdentityCall;
    type Reply = IdentityReply;

    async fn handle(&self, call: IdentityCall) -> Result<IdentityReply, Status> {
        let reply = match call {
            IdentityCall::CreateUser(params) => IdentityReply::User(self.create_user(params).await?),
            IdentityCall::GetUser { id } => IdentityReply::User(self.get_user(&id).await?),
            IdentityCall::Authenticate { email } => {
                IdentityReply::Auth(self.authenticate(&email).await?)
            }
        };
        Ok(reply)
    }
}
