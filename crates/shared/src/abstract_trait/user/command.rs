use crate::{
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// Fails with `AlreadyExists` when the email is taken.
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError>;
}
