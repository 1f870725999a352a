//! Relation loaders and the per-request bundle that owns them.
//!
//! Each submodule binds one relation to a [`BatchFunction`]: the three
//! single-shape lookups answer "the record for this key, if any", and the
//! posts loader answers "every child row for this parent". All four fetch
//! through the shared [`StoreHandle`] with a single grouped query per
//! execution frame.

mod member_type;
mod posts;
mod profile;
mod user;

use uuid::Uuid;

use crate::loader::Loader;
use crate::model::{MemberType, MemberTypeId, Post, Profile, User};
use crate::store::StoreHandle;

pub use member_type::MemberTypeById;
pub use posts::PostsByAuthor;
pub use profile::ProfileByUser;
pub use user::UserById;

/// Per-request bundle of relation loaders.
///
/// One context is constructed for each inbound query and dropped once the
/// response is produced, taking every cache entry with it. Nothing here is
/// shared between requests; only the storage handle inside is process-wide.
///
/// Root fields read through [`ResolutionContext::store`] directly. Relation
/// fields on an already-resolved entity must go through the loaders instead;
/// that is the contract that turns N sibling lookups into one grouped fetch.
pub struct ResolutionContext {
    store: StoreHandle,
    pub users: Loader<Uuid, User>,
    pub profiles_by_user: Loader<Uuid, Profile>,
    pub member_types: Loader<MemberTypeId, MemberType>,
    pub posts_by_author: Loader<Uuid, Vec<Post>>,
}

impl ResolutionContext {
    pub fn new(store: StoreHandle) -> Self {
        Self {
            users: Loader::new(UserById, store.clone()),
            profiles_by_user: Loader::new(ProfileByUser, store.clone()),
            member_types: Loader::new(MemberTypeById, store.clone()),
            posts_by_author: Loader::new(PostsByAuthor, store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }
}
