//! Session capability
//!
//! Authentication is an external collaborator. The core only needs to know
//! who is signed in and how to sign out, so the capability is injected
//! explicitly rather than read from a global.

use crate::ClientResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Current-user view exposed by the session provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Opaque auth capability: current user plus sign-out
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<UserInfo>;

    /// End the session
    async fn sign_out(&self) -> ClientResult<()>;
}

/// Fixed session for demos and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user: Option<UserInfo>,
}

impl StaticSession {
    pub fn signed_in(user: UserInfo) -> Self {
        Self { user: Some(user) }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<UserInfo> {
        self.user.clone()
    }

    async fn sign_out(&self) -> ClientResult<()> {
        Ok(())
    }
}
