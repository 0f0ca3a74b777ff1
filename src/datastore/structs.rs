use serde::{Deserialize, Serialize};

/// Posts are numbered from 1 in creation order. An id is never reused, even
/// after its post is deleted.
pub type PostId = u64;

/// One blog entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub content: String,
    /// A human-readable calendar date, e.g. "3/14/1987". Synthesized at
    /// creation; taken verbatim from the submission on edits.
    pub date: String,
}

/// Field values submitted for a new post. Every field is optional because a
/// form submission can leave any of them out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}

/// Replacement values for every mutable field of a post. A field the
/// submission left out blanks the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostEdit {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

impl Post {
    /// Build a brand-new post from a submission. The caller supplies the id
    /// (from `PostStore::next_id`) and the synthetic date. Absent fields
    /// become empty strings, never placeholder text.
    pub fn from_submission(new_post: NewPost, id: PostId, date: String) -> Self {
        Self {
            id,
            title: new_post.title.unwrap_or_default(),
            author: new_post.author.unwrap_or_default(),
            content: new_post.content.unwrap_or_default(),
            date,
        }
    }

    /// The same post with every mutable field replaced by the edit. Edits
    /// never synthesize a new date; whatever the submission carried wins.
    pub fn apply_edit(&self, edit: PostEdit) -> Self {
        Self {
            id: self.id,
            title: edit.title.unwrap_or_default(),
            author: edit.author.unwrap_or_default(),
            content: edit.content.unwrap_or_default(),
            date: edit.date.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod post_tests {
    use super::*;

    #[test]
    fn test_submission_fields_are_copied_verbatim() {
        let new_post = NewPost {
            title: Some("Hello".to_owned()),
            author: Some("Ann".to_owned()),
            content: Some("World".to_owned()),
        };
        let post = Post::from_submission(new_post, 1, "3/14/1987".to_owned());
        assert_eq!(
            post,
            Post {
                id: 1,
                title: "Hello".to_owned(),
                author: "Ann".to_owned(),
                content: "World".to_owned(),
                date: "3/14/1987".to_owned(),
            }
        );
    }

    #[test]
    fn test_absent_submission_fields_become_empty_strings() {
        let new_post = NewPost {
            author: Some("Ann".to_owned()),
            ..Default::default()
        };
        let post = Post::from_submission(new_post, 7, "1/2/1999".to_owned());
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "");
        assert_eq!(post.author, "Ann");
        assert_eq!(post.content, "");
        assert_eq!(post.date, "1/2/1999");
    }

    #[test]
    fn test_edits_overwrite_every_field_but_keep_the_id() {
        let post = Post {
            id: 4,
            title: "Old".to_owned(),
            author: "Ann".to_owned(),
            content: "Old words".to_owned(),
            date: "8/8/1988".to_owned(),
        };
        let edited = post.apply_edit(PostEdit {
            title: Some("New".to_owned()),
            author: Some("Bob".to_owned()),
            content: Some("Updated".to_owned()),
            date: Some("1/1/2020".to_owned()),
        });
        assert_eq!(
            edited,
            Post {
                id: 4,
                title: "New".to_owned(),
                author: "Bob".to_owned(),
                content: "Updated".to_owned(),
                date: "1/1/2020".to_owned(),
            }
        );
    }

    #[test]
    fn test_fields_left_out_of_an_edit_are_blanked() {
        let post = Post {
            id: 4,
            title: "Old".to_owned(),
            author: "Ann".to_owned(),
            content: "Old words".to_owned(),
            date: "8/8/1988".to_owned(),
        };
        let edited = post.apply_edit(PostEdit {
            title: Some("Kept".to_owned()),
            ..Default::default()
        });
        assert_eq!(edited.id, 4);
        assert_eq!(edited.title, "Kept");
        assert_eq!(edited.author, "");
        assert_eq!(edited.content, "");
        assert_eq!(edited.date, "");
    }
}
