//! Comment list reducer: pure transforms from the current list to a new one.
//!
//! Every function borrows the list and returns a fresh `Vec`; entries other
//! than the one matching `id` are cloned unchanged and keep their position.

use crate::models::{Comment, CommentStatus, Member};

/// Apply `f` to the entry whose id matches, clone everything else.
fn map_matching<F>(comments: &[Comment], id: &str, f: F) -> Vec<Comment>
where
    F: Fn(&Comment) -> Comment,
{
    comments
        .iter()
        .map(|c| if c.id == id { f(c) } else { c.clone() })
        .collect()
}

pub fn set_status(comments: &[Comment], id: &str, status: CommentStatus) -> Vec<Comment> {
    map_matching(comments, id, |c| c.with_status(status))
}

pub fn like(comments: &[Comment], id: &str) -> Vec<Comment> {
    map_matching(comments, id, |c| Comment {
        liked: Some(true),
        likes_count: Some(c.likes().saturating_add(1)),
        ..c.clone()
    })
}

pub fn unlike(comments: &[Comment], id: &str) -> Vec<Comment> {
    map_matching(comments, id, |c| Comment {
        liked: Some(false),
        likes_count: Some(c.likes().saturating_sub(1)),
        ..c.clone()
    })
}

/// Swap the entry with the same id for the server's version.
pub fn replace(comments: &[Comment], updated: &Comment) -> Vec<Comment> {
    map_matching(comments, &updated.id, |_| updated.clone())
}

/// Put a freshly created comment in front of the list.
///
/// The add endpoint does not return the member relation, so the viewer's own
/// member is attached here.
pub fn prepend(comments: &[Comment], created: Comment, viewer: Option<&Member>) -> Vec<Comment> {
    let created = Comment {
        member: Some(viewer.cloned()),
        ..created
    };
    std::iter::once(created)
        .chain(comments.iter().cloned())
        .collect()
}

/// Append the next page after the comments already loaded.
pub fn append_page(comments: &[Comment], page: Vec<Comment>) -> Vec<Comment> {
    let mut out = Vec::with_capacity(comments.len() + page.len());
    out.extend_from_slice(comments);
    out.extend(page);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Map};

    fn comment(id: &str, liked: bool, likes_count: u32) -> Comment {
        let mut extra = Map::new();
        extra.insert("html".into(), json!(format!("<p>{}</p>", id)));
        Comment {
            id: id.to_string(),
            status: CommentStatus::Published,
            liked: Some(liked),
            likes_count: Some(likes_count),
            member: None,
            extra,
        }
    }

    #[test]
    fn like_touches_only_the_match() {
        let list = vec![comment("1", false, 3), comment("2", false, 7)];
        let out = like(&list, "1");
        assert!(out[0].is_liked());
        assert_eq!(out[0].likes(), 4);
        assert_eq!(out[1], list[1]);
    }

    #[test]
    fn unlike_decrements_by_one() {
        let list = vec![comment("1", true, 4)];
        let out = unlike(&list, "1");
        assert!(!out[0].is_liked());
        assert_eq!(out[0].likes(), 3);
    }

    #[test]
    fn unlike_never_goes_below_zero() {
        let out = unlike(&[comment("1", true, 0)], "1");
        assert_eq!(out[0].likes(), 0);
    }

    #[test]
    fn like_fills_in_absent_counters() {
        let mut bare = comment("1", false, 0);
        bare.liked = None;
        bare.likes_count = None;
        let out = like(&[bare], "1");
        assert_eq!(out[0].liked, Some(true));
        assert_eq!(out[0].likes_count, Some(1));
    }

    #[test]
    fn missing_id_leaves_list_equal() {
        let list = vec![comment("1", false, 1)];
        assert_eq!(set_status(&list, "nope", CommentStatus::Hidden), list);
    }

    #[test]
    fn prepend_overrides_server_member() {
        let viewer = Member {
            uuid: Some("viewer".into()),
            name: Some("Viewer".into()),
            extra: Map::new(),
        };
        let mut created = comment("new", false, 0);
        created.member = Some(Some(Member {
            uuid: Some("someone-else".into()),
            ..Member::default()
        }));

        let out = prepend(&[comment("old", false, 0)], created, Some(&viewer));
        assert_eq!(out[0].id, "new");
        assert_eq!(out[0].author(), Some(&viewer));
        assert_eq!(out[1].id, "old");
    }

    #[test]
    fn replace_uses_server_version() {
        let list = vec![comment("1", false, 0), comment("2", false, 0)];
        let mut edited = comment("2", false, 0);
        edited.extra.insert("html".into(), json!("<p>edited</p>"));
        let out = replace(&list, &edited);
        assert_eq!(out[0], list[0]);
        assert_eq!(out[1], edited);
    }

    fn list_strategy() -> impl Strategy<Value = Vec<Comment>> {
        prop::collection::vec((any::<bool>(), 0u32..1000), 0..12).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (liked, count))| comment(&i.to_string(), liked, count))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn status_change_preserves_order_and_other_entries(
            list in list_strategy(),
            target in 0usize..12,
        ) {
            let id = target.to_string();
            let out = set_status(&list, &id, CommentStatus::Deleted);
            prop_assert_eq!(out.len(), list.len());
            for (before, after) in list.iter().zip(out.iter()) {
                prop_assert_eq!(&before.id, &after.id);
                if before.id == id {
                    prop_assert_eq!(after.status, CommentStatus::Deleted);
                    prop_assert_eq!(&after.with_status(before.status), before);
                } else {
                    prop_assert_eq!(before, after);
                }
            }
        }

        #[test]
        fn like_then_unlike_restores_count(list in list_strategy(), target in 0usize..12) {
            let id = target.to_string();
            let out = unlike(&like(&list, &id), &id);
            for (before, after) in list.iter().zip(out.iter()) {
                prop_assert_eq!(before.likes(), after.likes());
            }
        }
    }
}
