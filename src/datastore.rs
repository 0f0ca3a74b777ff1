pub mod dates;
pub mod memory;
pub mod structs;

use crate::datastore::structs::{Post, PostEdit, PostId};
use crate::twoface::Fallible;
use async_trait::async_trait;

#[async_trait]
/// The interface for storing post data. A missing id is a normal outcome, not
/// an error, so lookups and mutations return `Ok(None)` when nothing matches.
pub trait PostStore: Clone {
    /// Hand out the id for the next post, advancing the counter.
    async fn next_id(&self) -> Fallible<PostId>;
    /// Add a post to the end of the sequence. The caller has already assigned
    /// its id via `next_id`; nothing is validated here.
    async fn append(&self, post: Post) -> Fallible<()>;
    async fn find_post(&self, id: PostId) -> Fallible<Option<Post>>;
    /// Overwrite the mutable fields of the matching post, keeping its id and
    /// its position in the sequence.
    async fn update_post(&self, id: PostId, edit: PostEdit) -> Fallible<Option<Post>>;
    async fn delete_post(&self, id: PostId) -> Fallible<Option<Post>>;
    async fn list_posts(&self) -> Fallible<Vec<Post>>;
}
