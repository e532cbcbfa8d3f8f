use crate::{
    abstract_trait::SubscriberRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Subscriber as SubscriberModel,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct SubscriberPgRepository {
    db: ConnectionPool,
}

impl SubscriberPgRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriberRepositoryTrait for SubscriberPgRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, SubscriberModel>(
            "SELECT subscriber_id, email, created_at FROM subscribers WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up subscriber {email}: {err:?}");
            RepositoryError::from(err)
        })
    }

    async fn create(&self, email: &str) -> Result<SubscriberModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let subscriber = sqlx::query_as::<_, SubscriberModel>(
            r#"
            INSERT INTO subscribers (subscriber_id, email, created_at)
            VALUES ($1, $2, current_timestamp)
            RETURNING subscriber_id, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to store subscriber {email}: {err:?}");
            RepositoryError::from_unique(err, "Email already subscribed")
        })?;

        info!("✅ Stored subscriber ID {}", subscriber.subscriber_id);
        Ok(subscriber)
    }
}
