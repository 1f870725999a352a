//! Storage-service boundary.
//!
//! The rest of the crate only ever talks to storage through the [`Store`]
//! trait: relation loaders use the keyed batch fetches, root resolvers use
//! the direct reads, and the command surface uses the mutations. One store
//! instance is built at process startup and passed around as a
//! [`StoreHandle`]; it is shared by every request and must tolerate
//! concurrent outstanding calls.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, MemberType, MemberTypeId, Post, Profile, User,
};

pub use memory::MemoryStore;

/// Shared, process-wide handle to the storage service.
pub type StoreHandle = Arc<dyn Store>;

/// Keyed reads and single-record commands over the relational tables.
///
/// The `*_by_ids` family is the batch-fetch shape the loaders depend on:
/// "all rows whose key column is in this set", returned unordered, with
/// absent keys simply contributing no rows. Grouping rows back to their
/// requesting keys is the loaders' job, not the store's.
#[async_trait]
pub trait Store: Send + Sync {
    async fn users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, StoreError>;
    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, StoreError>;
    async fn member_types_by_ids(
        &self,
        ids: &[MemberTypeId],
    ) -> Result<Vec<MemberType>, StoreError>;
    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, StoreError>;

    async fn all_users(&self) -> Result<Vec<User>, StoreError>;
    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError>;
    async fn all_posts(&self) -> Result<Vec<Post>, StoreError>;
    async fn all_member_types(&self) -> Result<Vec<MemberType>, StoreError>;

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError>;
    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
    async fn member_type_by_id(&self, id: MemberTypeId)
        -> Result<Option<MemberType>, StoreError>;

    async fn create_user(&self, input: CreateUserInput) -> Result<User, StoreError>;
    async fn update_user(&self, id: Uuid, change: ChangeUserInput) -> Result<User, StoreError>;
    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;

    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, StoreError>;
    async fn update_profile(
        &self,
        id: Uuid,
        change: ChangeProfileInput,
    ) -> Result<Profile, StoreError>;
    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError>;

    async fn create_post(&self, input: CreatePostInput) -> Result<Post, StoreError>;
    async fn update_post(&self, id: Uuid, change: ChangePostInput) -> Result<Post, StoreError>;
    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError>;

    /// Links `subscriber_id` to `author_id` and returns the subscriber.
    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<User, StoreError>;
    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<(), StoreError>;
}
