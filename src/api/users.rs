//! User endpoints

use crate::client::{api_get, ConnectionConfig};
use crate::error::Result;
use crate::models::User;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SingleUser {
    user: User,
}

/// Get a single user by their ID.
pub async fn get_user(config: &ConnectionConfig, id: u64) -> Result<User> {
    let response: SingleUser = api_get(config, &format!("profiles/{id}")).await?;
    Ok(response.user)
}
