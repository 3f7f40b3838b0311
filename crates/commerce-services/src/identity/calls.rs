//! Wire messages of the identity service.

use crate::model::{AuthResult, User, UserCreate};
use rpc_framework::Operation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload")]
pub enum IdentityCall {
    CreateUser(UserCreate),
    GetUser { id: String },
    Authenticate { email: String },
}

impl Operation for IdentityCall {
    fn operation(&self) -> &'static str {
        match self {
            IdentityCall::CreateUser(_) => "CreateUser",
            IdentityCall::GetUser { .. } => "GetUser",
            IdentityCall::Authenticate { .. } => "Authenticate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IdentityReply {
    User(User),
    Auth(AuthResult),
}
