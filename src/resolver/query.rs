//! Read-side resolvers.
//!
//! Root fields are invoked at most once per request, so they read storage
//! directly and batching would buy nothing. Relation fields on an
//! already-resolved entity must go through the context's loaders instead;
//! that is the load-bearing contract that keeps a list of N parents at one
//! grouped fetch per relation rather than N single-row queries.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::BatchError;
use crate::loaders::ResolutionContext;
use crate::model::{MemberType, MemberTypeId, Post, Profile, User};

pub async fn users(ctx: &ResolutionContext) -> Result<Vec<User>, BatchError> {
    ctx.store().all_users().await.map_err(Arc::new)
}

pub async fn user(ctx: &ResolutionContext, id: Uuid) -> Result<Option<User>, BatchError> {
    ctx.store().user_by_id(id).await.map_err(Arc::new)
}

pub async fn profiles(ctx: &ResolutionContext) -> Result<Vec<Profile>, BatchError> {
    ctx.store().all_profiles().await.map_err(Arc::new)
}

pub async fn profile(ctx: &ResolutionContext, id: Uuid) -> Result<Option<Profile>, BatchError> {
    ctx.store().profile_by_id(id).await.map_err(Arc::new)
}

pub async fn posts(ctx: &ResolutionContext) -> Result<Vec<Post>, BatchError> {
    ctx.store().all_posts().await.map_err(Arc::new)
}

pub async fn post(ctx: &ResolutionContext, id: Uuid) -> Result<Option<Post>, BatchError> {
    ctx.store().post_by_id(id).await.map_err(Arc::new)
}

pub async fn member_types(ctx: &ResolutionContext) -> Result<Vec<MemberType>, BatchError> {
    ctx.store().all_member_types().await.map_err(Arc::new)
}

pub async fn member_type(
    ctx: &ResolutionContext,
    id: MemberTypeId,
) -> Result<Option<MemberType>, BatchError> {
    ctx.store().member_type_by_id(id).await.map_err(Arc::new)
}

/// `User.profile`: at most one row, `None` when the user has no profile.
pub async fn user_profile(
    ctx: &ResolutionContext,
    user: &User,
) -> Result<Option<Profile>, BatchError> {
    ctx.profiles_by_user.load(user.id).await
}

/// `User.posts`: the user's posts in storage order, empty when there are none.
pub async fn user_posts(ctx: &ResolutionContext, user: &User) -> Result<Vec<Post>, BatchError> {
    Ok(ctx.posts_by_author.load(user.id).await?.unwrap_or_default())
}

/// `Profile.memberType`: reference row for the profile's tier.
pub async fn profile_member_type(
    ctx: &ResolutionContext,
    profile: &Profile,
) -> Result<Option<MemberType>, BatchError> {
    ctx.member_types.load(profile.member_type_id).await
}

/// `Post.author`: `None` only if the author row has since been deleted.
pub async fn post_author(ctx: &ResolutionContext, post: &Post) -> Result<Option<User>, BatchError> {
    ctx.users.load(post.author_id).await
}
