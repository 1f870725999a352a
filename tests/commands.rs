//! Command surface round-trips against the in-memory store. Commands bypass
//! the batching layer and talk to the storage service directly.

use std::sync::Arc;

use graphload::model::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, MemberTypeId,
};
use graphload::resolver::mutation;
use graphload::{MemoryStore, StoreError, StoreHandle};

fn store() -> StoreHandle {
    Arc::new(MemoryStore::new())
}

#[tokio::test]
async fn user_lifecycle() {
    let store = store();

    let user = mutation::create_user(
        &store,
        CreateUserInput { name: "alice".to_owned(), balance: 10.0 },
    )
    .await
    .unwrap();
    assert_eq!(user.name, "alice");

    let user = mutation::change_user(
        &store,
        user.id,
        ChangeUserInput { name: Some("alicia".to_owned()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(user.name, "alicia");
    assert_eq!(user.balance, 10.0);

    mutation::delete_user(&store, user.id).await.unwrap();
    assert_eq!(store.user_by_id(user.id).await.unwrap(), None);
}

#[tokio::test]
async fn profile_and_post_lifecycle() {
    let store = store();
    let user = mutation::create_user(
        &store,
        CreateUserInput { name: "bob".to_owned(), balance: 0.0 },
    )
    .await
    .unwrap();

    let profile = mutation::create_profile(
        &store,
        CreateProfileInput {
            is_male: true,
            year_of_birth: 1985,
            user_id: user.id,
            member_type_id: MemberTypeId::Basic,
        },
    )
    .await
    .unwrap();

    let profile = mutation::change_profile(
        &store,
        profile.id,
        ChangeProfileInput {
            member_type_id: Some(MemberTypeId::Business),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(profile.member_type_id, MemberTypeId::Business);
    assert_eq!(profile.year_of_birth, 1985);

    let post = mutation::create_post(
        &store,
        CreatePostInput {
            title: "hello".to_owned(),
            content: "world".to_owned(),
            author_id: user.id,
        },
    )
    .await
    .unwrap();

    let post = mutation::change_post(
        &store,
        post.id,
        ChangePostInput { title: Some("hello again".to_owned()), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(post.title, "hello again");

    mutation::delete_post(&store, post.id).await.unwrap();
    mutation::delete_profile(&store, profile.id).await.unwrap();
    assert_eq!(store.post_by_id(post.id).await.unwrap(), None);
    assert_eq!(store.profile_by_id(profile.id).await.unwrap(), None);
}

#[tokio::test]
async fn mutating_a_missing_row_is_reported() {
    let store = store();
    let id = uuid::Uuid::new_v4();

    let err = mutation::change_user(&store, id, ChangeUserInput::default()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "user", .. }));

    let err = mutation::delete_post(&store, id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "post", .. }));
}

#[tokio::test]
async fn subscribe_links_two_users() {
    let store = store();
    let reader = mutation::create_user(
        &store,
        CreateUserInput { name: "reader".to_owned(), balance: 0.0 },
    )
    .await
    .unwrap();
    let author = mutation::create_user(
        &store,
        CreateUserInput { name: "author".to_owned(), balance: 0.0 },
    )
    .await
    .unwrap();

    let subscriber = mutation::subscribe_to(&store, reader.id, author.id).await.unwrap();
    assert_eq!(subscriber.id, reader.id);

    mutation::unsubscribe_from(&store, reader.id, author.id).await.unwrap();

    // The link is gone, so a second unsubscribe has nothing to remove.
    let err = mutation::unsubscribe_from(&store, reader.id, author.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "subscription", .. }));
}

#[tokio::test]
async fn creating_a_profile_for_a_missing_user_is_reported() {
    let store = store();

    let err = mutation::create_profile(
        &store,
        CreateProfileInput {
            is_male: false,
            year_of_birth: 2000,
            user_id: uuid::Uuid::new_v4(),
            member_type_id: MemberTypeId::Basic,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "user", .. }));
}
