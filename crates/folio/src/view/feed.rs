use super::editor::draft_fields;
use dioxus::prelude::*;
use dioxus_free_icons::icons::{
    fa_regular_icons::{FaCommentDots, FaHeart, FaShareFromSquare, FaTrashCan},
    fa_solid_icons::FaHeartCircleCheck,
};
use folio_core::{
    Error,
    collection::EditableCollection,
    extension::TomlTableExt,
    media::MediaRegistry,
    model::{FieldValue, Post},
    role::Role,
    state::State,
};
use folio_dioxus::prelude::*;

/// The social feed: a share bar for the owner, the post editor and the posts.
pub fn FeedPanel(props: FeedPanelProps) -> Element {
    let registry = use_context::<MediaRegistry>();
    let excerpt_length = State::shared()
        .get_config("feed")
        .and_then(|config| config.get_usize("excerpt-length"))
        .unwrap_or(80);
    let mut posts = use_signal(EditableCollection::<Post>::new);
    let mut missing = use_signal(Vec::<&'static str>::new);

    let can_edit = props.role.can_edit();
    let user_name = props.user_name;
    let user_image = props.user_image;
    let state = posts.read();
    let editor_visible = state.is_adding();
    let cards = state
        .projected()
        .into_iter()
        .map(|(index, entry)| {
            let post = entry.value();
            let image = post
                .image
                .as_ref()
                .and_then(|handle| registry.display_url(handle));
            let card = PostCard {
                date: post.formatted_date(),
                description: post.description.clone(),
                tags: post.tags.as_slice().to_vec(),
                image,
                liked: post.is_liked(),
            };
            (index, entry.key(), card)
        })
        .collect::<Vec<_>>();
    let missing_fields = missing();
    let form = draft_fields(
        state.draft(),
        &missing_fields,
        &registry,
        move |name: &'static str, value: FieldValue| {
            let mut posts = posts.write();
            if let Err(err) = posts.update_draft_field(name, value) {
                tracing::debug!("ignore a post draft update: {err}");
            }
            let fields = posts.missing_fields();
            missing.write().retain(|field| fields.contains(field));
        },
    );
    drop(state);

    let mut close_editor = move || {
        posts.write().cancel();
        missing.set(Vec::new());
    };
    rsx! {
        section {
            class: "mb-5",
            if can_edit {
                div {
                    class: "box is-flex is-align-items-center",
                    img {
                        class: "avatar mr-3",
                        src: "{user_image}",
                        alt: "avatar",
                    }
                    p {
                        class: "is-flex-grow-1 has-text-grey",
                        "What's in your mind bro?"
                    }
                    Button {
                        color: "link",
                        rounded: true,
                        on_click: move |_| {
                            match posts.write().begin_add() {
                                Ok(()) => missing.set(Vec::new()),
                                Err(err) => tracing::debug!("ignore the share request: {err}"),
                            }
                        },
                        "Share"
                    }
                }
            }
            for (index, key, card) in cards {
                Card {
                    key: "{key}",
                    class: "card mb-4",
                    div {
                        class: "media",
                        figure {
                            class: "media-left",
                            img {
                                class: "avatar",
                                src: "{user_image}",
                                alt: "avatar",
                            }
                        }
                        div {
                            class: "media-content",
                            p {
                                strong { "{user_name}" }
                            }
                            p { class: "is-size-7 has-text-grey", "{card.date}" }
                        }
                        if can_edit {
                            div {
                                class: "media-right",
                                Button {
                                    size: "small",
                                    color: "danger",
                                    outlined: true,
                                    title: "Delete",
                                    on_click: move |_| {
                                        if let Err(err) = posts.write().remove(index) {
                                            tracing::warn!("fail to remove a post: {err}");
                                        }
                                    },
                                    SvgIcon { shape: FaTrashCan }
                                }
                            }
                        }
                    }
                    ReadMore {
                        class: "read-more my-3",
                        text: card.description,
                        limit: excerpt_length,
                    }
                    Tags {
                        color: "info",
                        tags: card.tags,
                    }
                    if let Some(image) = card.image {
                        figure {
                            class: "image my-3",
                            img {
                                src: "{image}",
                                alt: "post image",
                            }
                        }
                    }
                    div {
                        class: "buttons is-centered mt-3",
                        Button {
                            class: "button is-white",
                            on_click: move |_| {
                                match posts.write().update_item(index, Post::toggle_like) {
                                    Ok(()) => tracing::debug!(index, "toggle a like"),
                                    Err(err) => tracing::warn!("fail to like a post: {err}"),
                                }
                            },
                            if card.liked {
                                IconText {
                                    SvgIcon { shape: FaHeartCircleCheck, color: "danger" }
                                    span { class: "has-text-danger", "Liked" }
                                }
                            } else {
                                IconText {
                                    SvgIcon { shape: FaHeart }
                                    span { "Like" }
                                }
                            }
                        }
                        Button {
                            class: "button is-white",
                            IconText {
                                SvgIcon { shape: FaCommentDots }
                                span { "Comment" }
                            }
                        }
                        Button {
                            class: "button is-white",
                            IconText {
                                SvgIcon { shape: FaShareFromSquare }
                                span { "Share" }
                            }
                        }
                    }
                }
            }
        }
        ModalCard {
            visible: editor_visible,
            title: "Create Post",
            on_close: move |_| close_editor(),
            footer: rsx! {
                FormGroup {
                    align: "right",
                    items: vec![
                        rsx! {
                            Button {
                                on_click: move |_| close_editor(),
                                "Cancel"
                            }
                        },
                        rsx! {
                            Button {
                                color: "success",
                                on_click: move |_| {
                                    let result = posts.write().commit();
                                    match result {
                                        Ok(index) => {
                                            missing.set(Vec::new());
                                            tracing::info!(index, "share a post");
                                        }
                                        Err(Error::IncompleteDraft { fields }) => missing.set(fields),
                                        Err(err) => tracing::warn!("fail to save the post: {err}"),
                                    }
                                },
                                "Save"
                            }
                        },
                    ],
                }
            },
            { form }
        }
    }
}

/// The display values of a post card.
struct PostCard {
    date: String,
    description: String,
    tags: Vec<String>,
    image: Option<String>,
    liked: bool,
}

/// The [`FeedPanel`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct FeedPanelProps {
    /// The viewer role.
    pub role: Role,
    /// The display name pushed by the profile header.
    #[props(into)]
    pub user_name: String,
    /// The profile image pushed by the profile header.
    #[props(into)]
    pub user_image: String,
}
