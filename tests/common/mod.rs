//! Shared test store: a seeded [`MemoryStore`] wrapped with batch-call
//! recording and a fault switch for the member type fetch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use graphload::model::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, MemberType, MemberTypeId, Post, Profile, User,
};
use graphload::{MemoryStore, Store, StoreError};
use uuid::Uuid;

pub struct RecordingStore {
    inner: MemoryStore,
    pub user_batches: Mutex<Vec<Vec<Uuid>>>,
    pub profile_batches: Mutex<Vec<Vec<Uuid>>>,
    pub member_type_batches: Mutex<Vec<Vec<MemberTypeId>>>,
    pub post_batches: Mutex<Vec<Vec<Uuid>>>,
    pub fail_member_types: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            user_batches: Mutex::new(Vec::new()),
            profile_batches: Mutex::new(Vec::new()),
            member_type_batches: Mutex::new(Vec::new()),
            post_batches: Mutex::new(Vec::new()),
            fail_member_types: AtomicBool::new(false),
        }
    }

    pub fn profile_batch_count(&self) -> usize {
        self.profile_batches.lock().unwrap().len()
    }

    pub fn post_batch_count(&self) -> usize {
        self.post_batches.lock().unwrap().len()
    }

    pub fn user_batch_count(&self) -> usize {
        self.user_batches.lock().unwrap().len()
    }
}

#[async_trait]
impl Store for RecordingStore {
    async fn users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, StoreError> {
        self.user_batches.lock().unwrap().push(ids.to_vec());
        self.inner.users_by_ids(ids).await
    }

    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, StoreError> {
        self.profile_batches.lock().unwrap().push(user_ids.to_vec());
        self.inner.profiles_by_user_ids(user_ids).await
    }

    async fn member_types_by_ids(
        &self,
        ids: &[MemberTypeId],
    ) -> Result<Vec<MemberType>, StoreError> {
        self.member_type_batches.lock().unwrap().push(ids.to_vec());
        if self.fail_member_types.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("member type table offline".to_owned()));
        }
        self.inner.member_types_by_ids(ids).await
    }

    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, StoreError> {
        self.post_batches.lock().unwrap().push(author_ids.to_vec());
        self.inner.posts_by_author_ids(author_ids).await
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        self.inner.all_users().await
    }

    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        self.inner.all_profiles().await
    }

    async fn all_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.inner.all_posts().await
    }

    async fn all_member_types(&self) -> Result<Vec<MemberType>, StoreError> {
        self.inner.all_member_types().await
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        self.inner.user_by_id(id).await
    }

    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        self.inner.profile_by_id(id).await
    }

    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        self.inner.post_by_id(id).await
    }

    async fn member_type_by_id(
        &self,
        id: MemberTypeId,
    ) -> Result<Option<MemberType>, StoreError> {
        self.inner.member_type_by_id(id).await
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<User, StoreError> {
        self.inner.create_user(input).await
    }

    async fn update_user(&self, id: Uuid, change: ChangeUserInput) -> Result<User, StoreError> {
        self.inner.update_user(id, change).await
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner.delete_user(id).await
    }

    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, StoreError> {
        self.inner.create_profile(input).await
    }

    async fn update_profile(
        &self,
        id: Uuid,
        change: ChangeProfileInput,
    ) -> Result<Profile, StoreError> {
        self.inner.update_profile(id, change).await
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner.delete_profile(id).await
    }

    async fn create_post(&self, input: CreatePostInput) -> Result<Post, StoreError> {
        self.inner.create_post(input).await
    }

    async fn update_post(&self, id: Uuid, change: ChangePostInput) -> Result<Post, StoreError> {
        self.inner.update_post(id, change).await
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        self.inner.delete_post(id).await
    }

    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<User, StoreError> {
        self.inner.subscribe(subscriber_id, author_id).await
    }

    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<(), StoreError> {
        self.inner.unsubscribe(subscriber_id, author_id).await
    }
}
