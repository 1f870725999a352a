use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{
    ChangePostInput, ChangeProfileInput, ChangeUserInput, CreatePostInput, CreateProfileInput,
    CreateUserInput, MemberType, MemberTypeId, Post, Profile, User,
};
use crate::store::Store;

/// In-process [`Store`] backed by hash maps.
///
/// Comes seeded with the two member type rows, since those are reference
/// data with no create command. Safe to share across requests behind an
/// `Arc`; each call takes the table lock for just its own read or write.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    profiles: HashMap<Uuid, Profile>,
    posts: HashMap<Uuid, Post>,
    member_types: HashMap<MemberTypeId, MemberType>,
    /// (subscriber, author) links created by the subscribe command.
    subscriptions: HashSet<(Uuid, Uuid)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let mut tables = Tables::default();
        tables.member_types.insert(
            MemberTypeId::Basic,
            MemberType { id: MemberTypeId::Basic, discount: 1.5, post_limit_per_month: 20 },
        );
        tables.member_types.insert(
            MemberTypeId::Business,
            MemberType { id: MemberTypeId::Business, discount: 5.0, post_limit_per_month: 100 },
        );
        Self { tables: RwLock::new(tables) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(entity: &'static str, id: impl ToString) -> StoreError {
    StoreError::NotFound { entity, id: id.to_string() }
}

#[async_trait]
impl Store for MemoryStore {
    async fn users_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.users.get(id).cloned()).collect())
    }

    async fn profiles_by_user_ids(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .profiles
            .values()
            .filter(|profile| user_ids.contains(&profile.user_id))
            .cloned()
            .collect())
    }

    async fn member_types_by_ids(
        &self,
        ids: &[MemberTypeId],
    ) -> Result<Vec<MemberType>, StoreError> {
        let tables = self.tables.read().await;
        Ok(ids.iter().filter_map(|id| tables.member_types.get(id).cloned()).collect())
    }

    async fn posts_by_author_ids(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|post| author_ids.contains(&post.author_id))
            .cloned()
            .collect())
    }

    async fn all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn all_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self.tables.read().await.profiles.values().cloned().collect())
    }

    async fn all_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.tables.read().await.posts.values().cloned().collect())
    }

    async fn all_member_types(&self) -> Result<Vec<MemberType>, StoreError> {
        Ok(self.tables.read().await.member_types.values().cloned().collect())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn profile_by_id(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.tables.read().await.profiles.get(&id).cloned())
    }

    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn member_type_by_id(
        &self,
        id: MemberTypeId,
    ) -> Result<Option<MemberType>, StoreError> {
        Ok(self.tables.read().await.member_types.get(&id).cloned())
    }

    async fn create_user(&self, input: CreateUserInput) -> Result<User, StoreError> {
        let user = User { id: Uuid::new_v4(), name: input.name, balance: input.balance };
        self.tables.write().await.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, change: ChangeUserInput) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let user = tables.users.get_mut(&id).ok_or_else(|| not_found("user", id))?;
        if let Some(name) = change.name {
            user.name = name;
        }
        if let Some(balance) = change.balance {
            user.balance = balance;
        }
        Ok(user.clone())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.users.remove(&id).ok_or_else(|| not_found("user", id))?;
        tables.profiles.retain(|_, profile| profile.user_id != id);
        tables.posts.retain(|_, post| post.author_id != id);
        tables.subscriptions.retain(|(subscriber, author)| *subscriber != id && *author != id);
        Ok(())
    }

    async fn create_profile(&self, input: CreateProfileInput) -> Result<Profile, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&input.user_id) {
            return Err(not_found("user", input.user_id));
        }
        let profile = Profile {
            id: Uuid::new_v4(),
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            user_id: input.user_id,
            member_type_id: input.member_type_id,
        };
        tables.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update_profile(
        &self,
        id: Uuid,
        change: ChangeProfileInput,
    ) -> Result<Profile, StoreError> {
        let mut tables = self.tables.write().await;
        let profile = tables.profiles.get_mut(&id).ok_or_else(|| not_found("profile", id))?;
        if let Some(is_male) = change.is_male {
            profile.is_male = is_male;
        }
        if let Some(year_of_birth) = change.year_of_birth {
            profile.year_of_birth = year_of_birth;
        }
        if let Some(member_type_id) = change.member_type_id {
            profile.member_type_id = member_type_id;
        }
        Ok(profile.clone())
    }

    async fn delete_profile(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.profiles.remove(&id).ok_or_else(|| not_found("profile", id))?;
        Ok(())
    }

    async fn create_post(&self, input: CreatePostInput) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&input.author_id) {
            return Err(not_found("user", input.author_id));
        }
        let post = Post {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            author_id: input.author_id,
        };
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_post(&self, id: Uuid, change: ChangePostInput) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        let post = tables.posts.get_mut(&id).ok_or_else(|| not_found("post", id))?;
        if let Some(title) = change.title {
            post.title = title;
        }
        if let Some(content) = change.content {
            post.content = content;
        }
        Ok(post.clone())
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        tables.posts.remove(&id).ok_or_else(|| not_found("post", id))?;
        Ok(())
    }

    async fn subscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        let subscriber = tables
            .users
            .get(&subscriber_id)
            .cloned()
            .ok_or_else(|| not_found("user", subscriber_id))?;
        if !tables.users.contains_key(&author_id) {
            return Err(not_found("user", author_id));
        }
        tables.subscriptions.insert((subscriber_id, author_id));
        Ok(subscriber)
    }

    async fn unsubscribe(&self, subscriber_id: Uuid, author_id: Uuid) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.subscriptions.remove(&(subscriber_id, author_id)) {
            return Err(not_found("subscription", format!("{subscriber_id}->{author_id}")));
        }
        Ok(())
    }
}
