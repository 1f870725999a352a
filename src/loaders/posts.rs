use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::batch_function::BatchFunction;
use crate::error::StoreError;
use crate::model::Post;
use crate::store::StoreHandle;

/// All posts for each requested author id. Multi shape: the value is the
/// author's full post group, in storage order.
pub struct PostsByAuthor;

#[async_trait]
impl BatchFunction<Uuid, Vec<Post>> for PostsByAuthor {
    type Context = StoreHandle;

    async fn load(
        keys: &[Uuid],
        store: &StoreHandle,
    ) -> Result<Vec<(Uuid, Vec<Post>)>, StoreError> {
        let posts = store.posts_by_author_ids(keys).await?;

        let mut groups: HashMap<Uuid, Vec<Post>> = HashMap::new();
        for post in posts {
            groups.entry(post.author_id).or_default().push(post);
        }

        // Emit an entry for every requested author, empty when they have no
        // posts, so the zero-row case is cached like any other result.
        Ok(keys.iter().map(|key| (*key, groups.remove(key).unwrap_or_default())).collect())
    }
}
