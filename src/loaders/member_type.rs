use async_trait::async_trait;

use crate::batch_function::BatchFunction;
use crate::error::StoreError;
use crate::model::{MemberType, MemberTypeId};
use crate::store::StoreHandle;

/// Member type reference rows keyed by tier id. Single shape.
pub struct MemberTypeById;

#[async_trait]
impl BatchFunction<MemberTypeId, MemberType> for MemberTypeById {
    type Context = StoreHandle;

    async fn load(
        keys: &[MemberTypeId],
        store: &StoreHandle,
    ) -> Result<Vec<(MemberTypeId, MemberType)>, StoreError> {
        let member_types = store.member_types_by_ids(keys).await?;
        Ok(member_types.into_iter().map(|member_type| (member_type.id, member_type)).collect())
    }
}
