use dioxus::prelude::*;
use store::{Post, PostStatus};

use crate::icons::{FaEye, FaPenToSquare, FaTrashCan};
use crate::Icon;

const TABLE_CSS: Asset = asset!("/assets/styling/post_table.css");

/// Post rows with view / edit / delete actions. Ids may repeat (the demo
/// service gives every created post the same one), so rows are keyed by position.
#[component]
pub fn PostTable(
    posts: Vec<Post>,
    on_view: EventHandler<Post>,
    on_edit: EventHandler<Post>,
    on_delete: EventHandler<Post>,
) -> Element {
    rsx! {
        document::Stylesheet { href: TABLE_CSS }

        if posts.is_empty() {
            p { class: "post-table-empty", "No posts found" }
        } else {
            table {
                class: "post-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Author" }
                        th { "Date" }
                        th { "Category" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (index, post) in posts.iter().enumerate() {
                        PostRow {
                            key: "{index}-{post.id}",
                            post: post.clone(),
                            on_view,
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostRow(
    post: Post,
    on_view: EventHandler<Post>,
    on_edit: EventHandler<Post>,
    on_delete: EventHandler<Post>,
) -> Element {
    let status = post.status.unwrap_or_default();
    let view_post = post.clone();
    let edit_post = post.clone();
    let delete_post = post.clone();

    rsx! {
        tr {
            td { "{post.id}" }
            td { class: "post-title", "{post.title}" }
            td { "{post.author}" }
            td { "{post.date}" }
            td { {post.category.clone().unwrap_or_default()} }
            td {
                span {
                    class: match status {
                        PostStatus::Published => "status published",
                        PostStatus::Draft => "status draft",
                    },
                    "{status}"
                }
            }
            td {
                class: "post-actions",
                button {
                    title: "View",
                    onclick: move |_| on_view.call(view_post.clone()),
                    Icon { icon: FaEye, width: 14, height: 14 }
                }
                button {
                    title: "Edit",
                    onclick: move |_| on_edit.call(edit_post.clone()),
                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                }
                button {
                    class: "danger",
                    title: "Delete",
                    onclick: move |_| on_delete.call(delete_post.clone()),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use dioxus::core::{ScopeId, VirtualDom};

    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            author: "Ada".into(),
            ..Post::default()
        }
    }

    // Second and later renders add a second post with the id the demo service hands out.
    fn table_after_create() -> Element {
        let renders = use_hook(|| Rc::new(Cell::new(0u32)));
        let pass = renders.get();
        renders.set(pass + 1);

        let posts = match pass {
            0 => vec![post(252), post(1)],
            _ => vec![post(252), post(252), post(1)],
        };
        rsx! {
            PostTable {
                posts,
                on_view: move |_: Post| {},
                on_edit: move |_: Post| {},
                on_delete: move |_: Post| {},
            }
        }
    }

    #[test]
    fn test_rerender_with_repeated_ids() {
        let mut dom = VirtualDom::new(table_after_create);
        dom.rebuild_in_place();

        dom.mark_dirty(ScopeId::APP);
        let mutations = dom.render_immediate_to_vec();
        assert!(!mutations.edits.is_empty());
    }
}
