use async_trait::async_trait;
use uuid::Uuid;

use crate::batch_function::BatchFunction;
use crate::error::StoreError;
use crate::model::Profile;
use crate::store::StoreHandle;

/// Profiles keyed by their owning user id, not the profile's own id: the
/// requester is always a user resolving its `profile` field. Single shape,
/// and a user without a profile resolves to `None`.
pub struct ProfileByUser;

#[async_trait]
impl BatchFunction<Uuid, Profile> for ProfileByUser {
    type Context = StoreHandle;

    async fn load(
        keys: &[Uuid],
        store: &StoreHandle,
    ) -> Result<Vec<(Uuid, Profile)>, StoreError> {
        let profiles = store.profiles_by_user_ids(keys).await?;
        Ok(profiles.into_iter().map(|profile| (profile.user_id, profile)).collect())
    }
}
