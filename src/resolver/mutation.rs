//! Command resolvers.
//!
//! Each command is invoked once per request and writes a single record, so
//! all of them go straight to the storage service and bypass the batching
//! layer entirely. They share the same [`StoreHandle`] the loaders fetch
//! through.

use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, Post, Profile, User,
};
use crate::store::StoreHandle;

pub async fn create_user(store: &StoreHandle, dto: CreateUserInput) -> Result<User, StoreError> {
    store.create_user(dto).await
}

pub async fn change_user(
    store: &StoreHandle,
    id: Uuid,
    dto: ChangeUserInput,
) -> Result<User, StoreError> {
    store.update_user(id, dto).await
}

pub async fn delete_user(store: &StoreHandle, id: Uuid) -> Result<(), StoreError> {
    store.delete_user(id).await
}

pub async fn create_profile(
    store: &StoreHandle,
    dto: CreateProfileInput,
) -> Result<Profile, StoreError> {
    store.create_profile(dto).await
}

pub async fn change_profile(
    store: &StoreHandle,
    id: Uuid,
    dto: ChangeProfileInput,
) -> Result<Profile, StoreError> {
    store.update_profile(id, dto).await
}

pub async fn delete_profile(store: &StoreHandle, id: Uuid) -> Result<(), StoreError> {
    store.delete_profile(id).await
}

pub async fn create_post(store: &StoreHandle, dto: CreatePostInput) -> Result<Post, StoreError> {
    store.create_post(dto).await
}

pub async fn change_post(
    store: &StoreHandle,
    id: Uuid,
    dto: ChangePostInput,
) -> Result<Post, StoreError> {
    store.update_post(id, dto).await
}

pub async fn delete_post(store: &StoreHandle, id: Uuid) -> Result<(), StoreError> {
    store.delete_post(id).await
}

/// Subscribes `user_id` to `author_id` and returns the updated subscriber.
pub async fn subscribe_to(
    store: &StoreHandle,
    user_id: Uuid,
    author_id: Uuid,
) -> Result<User, StoreError> {
    store.subscribe(user_id, author_id).await
}

pub async fn unsubscribe_from(
    store: &StoreHandle,
    user_id: Uuid,
    author_id: Uuid,
) -> Result<(), StoreError> {
    store.unsubscribe(user_id, author_id).await
}
