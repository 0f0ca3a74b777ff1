use crate::datastore::structs::{Post, PostEdit, PostId};
use crate::datastore::PostStore;
use crate::twoface::Fallible;
use anyhow::anyhow;
use async_trait::async_trait;
use prometheus::{
    core::{Collector, Desc},
    proto::MetricFamily,
    IntGauge, Opts,
};
use std::sync::{Arc, Mutex, MutexGuard};

/// Every post in creation order, plus the id counter. One lock guards both so
/// each store operation is atomic even when the server runs handlers on
/// several threads.
struct Inner {
    posts: Vec<Post>,
    next_id: PostId,
}

/// An implementation of datastore::PostStore that keeps everything in process
/// memory. Posts survive exactly as long as the process does.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    stored_posts: IntGauge,
    issued_ids: IntGauge,
}

impl MemoryStore {
    pub fn new() -> Result<Self, anyhow::Error> {
        let stored_posts = IntGauge::with_opts(Opts::new(
            "blogling_posts",
            "How many posts are currently stored",
        ))?;
        let issued_ids = IntGauge::with_opts(Opts::new(
            "blogling_post_ids_issued",
            "How many post ids have been handed out since startup",
        ))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                posts: Vec::new(),
                next_id: 1,
            })),
            stored_posts,
            issued_ids,
        })
    }

    /// Take the lock for the duration of one store operation.
    fn locked(&self) -> Fallible<MutexGuard<'_, Inner>> {
        guard!(let Ok(inner) = self.inner.lock() else {
            return Err(anyhow!("post store lock poisoned").into());
        });
        Ok(inner)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn next_id(&self) -> Fallible<PostId> {
        let mut inner = self.locked()?;
        let id = inner.next_id;
        inner.next_id += 1;
        Ok(id)
    }

    async fn append(&self, post: Post) -> Fallible<()> {
        self.locked()?.posts.push(post);
        Ok(())
    }

    async fn find_post(&self, id: PostId) -> Fallible<Option<Post>> {
        let inner = self.locked()?;
        Ok(inner.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn update_post(&self, id: PostId, edit: PostEdit) -> Fallible<Option<Post>> {
        let mut inner = self.locked()?;
        guard!(let Some(post) = inner.posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        });
        *post = post.apply_edit(edit);
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: PostId) -> Fallible<Option<Post>> {
        let mut inner = self.locked()?;
        guard!(let Some(position) = inner.posts.iter().position(|post| post.id == id) else {
            return Ok(None);
        });
        // Vec::remove keeps the relative order of everything after it.
        Ok(Some(inner.posts.remove(position)))
    }

    async fn list_posts(&self) -> Fallible<Vec<Post>> {
        Ok(self.locked()?.posts.clone())
    }
}

impl Collector for MemoryStore {
    fn desc(&self) -> Vec<&Desc> {
        let mut descs = self.stored_posts.desc();
        descs.extend(self.issued_ids.desc());
        descs
    }

    fn collect(&self) -> Vec<MetricFamily> {
        if let Ok(inner) = self.inner.lock() {
            self.stored_posts.set(inner.posts.len() as i64);
            self.issued_ids.set((inner.next_id - 1) as i64);
        }
        let mut metrics = self.stored_posts.collect();
        metrics.extend(self.issued_ids.collect());
        metrics
    }
}
