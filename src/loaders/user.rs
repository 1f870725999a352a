use async_trait::async_trait;
use uuid::Uuid;

use crate::batch_function::BatchFunction;
use crate::error::StoreError;
use crate::model::User;
use crate::store::StoreHandle;

/// User records keyed by primary id. Single shape: an unknown id resolves to
/// `None`. This is the loader behind the `author` field of a post.
pub struct UserById;

#[async_trait]
impl BatchFunction<Uuid, User> for UserById {
    type Context = StoreHandle;

    async fn load(keys: &[Uuid], store: &StoreHandle) -> Result<Vec<(Uuid, User)>, StoreError> {
        let users = store.users_by_ids(keys).await?;
        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }
}
