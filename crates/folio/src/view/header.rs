use super::editor::draft_fields;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaXmark};
use folio_core::{
    extension::TomlTableExt,
    media::MediaRegistry,
    profile::{Identity, IdentityPush, ProfileHeader},
    role::Role,
    state::State,
};
use folio_dioxus::prelude::*;

/// Default profile image.
const DEFAULT_IMAGE: &str = "public/profile.svg";

/// The profile header: identity, follower counts, the contact popup and
/// the identity editor.
pub fn ProfileHeaderView(props: ProfileHeaderViewProps) -> Element {
    let registry = use_context::<MediaRegistry>();
    let config = State::shared().get_config("profile");
    let followers = config.and_then(|c| c.get_u32("followers")).unwrap_or(150);
    let following = config.and_then(|c| c.get_u32("following")).unwrap_or(200);
    let mut header = use_signal(|| {
        let identity = config
            .and_then(|c| c.get_table("identity"))
            .map(Identity::with_config)
            .unwrap_or_default();
        let image = config
            .and_then(|c| c.get_str("image"))
            .unwrap_or(DEFAULT_IMAGE)
            .to_owned();
        ProfileHeader::new(identity, image)
    });

    let mut push = use_signal(IdentityPush::new);
    let on_name_change = props.on_identity_name_change;
    let on_image_change = props.on_identity_image_change;
    use_effect(move || {
        let header = header.read();
        let update = push.write().observe(&header.display_name(), header.image());
        if let Some(name) = update.name {
            tracing::debug!(name = name.as_str(), "push the identity name");
            on_name_change.call(name);
        }
        if let Some(image) = update.image {
            on_image_change.call(image);
        }
    });

    let role = props.role;
    let state = header.read().clone();
    let identity = state.identity();
    let follow = state.follow();
    let follow_color = if follow.is_following() { "" } else { "link" };
    let follow_label = follow.label();
    let display_name = state.display_name();
    let location = identity.location();
    let image = state.image().to_owned();
    let dob = identity.dob.map(|dob| dob.to_string()).unwrap_or_default();
    rsx! {
        section {
            class: "box mb-5",
            div {
                class: "is-flex is-align-items-center mb-3",
                img {
                    class: "profile-image",
                    src: "{image}",
                    alt: "profile",
                }
                if role.can_edit() {
                    Button {
                        class: "button ml-4",
                        color: "link",
                        title: "Edit profile",
                        on_click: move |_| {
                            if let Err(err) = header.write().begin_edit() {
                                tracing::debug!("ignore the profile edit: {err}");
                            }
                        },
                        SvgIcon { shape: FaPen }
                    }
                }
            }
            div {
                class: "level has-text-grey",
                div {
                    class: "level-left",
                    div {
                        p {
                            class: "title is-5 has-text-black mb-1",
                            "{display_name}"
                        }
                        p { "{identity.headline}" }
                        p { "{location}" }
                    }
                }
                div {
                    class: "level-right",
                    div {
                        p { "Followers : {followers}" }
                        p { "Following : {following}" }
                    }
                }
            }
            a {
                class: "has-text-link is-underlined",
                onclick: move |_| header.write().show_contact_info(),
                "Contact info."
            }
            if role.is_visitor() {
                div {
                    class: "buttons my-4",
                    Button {
                        color: follow_color,
                        outlined: follow.is_following(),
                        rounded: true,
                        on_click: move |_| {
                            let follow = header.write().toggle_follow();
                            tracing::debug!(following = follow.is_following(), "toggle the follow state");
                        },
                        "{follow_label}"
                    }
                    Button {
                        color: "link",
                        rounded: true,
                        "Message"
                    }
                }
            }
            ModalCard {
                visible: state.is_editing(),
                title: "Edit Profile",
                on_close: move |_| header.write().cancel(),
                footer: rsx! {
                    Button {
                        on_click: move |_| header.write().cancel(),
                        "Cancel"
                    }
                    Button {
                        color: "success",
                        on_click: move |_| {
                            if let Err(err) = header.write().commit() {
                                tracing::warn!("fail to save the profile: {err}");
                            }
                        },
                        "Save"
                    }
                },
                if let Some(draft) = state.draft() {
                    {
                        draft_fields(draft, &[], &registry, move |name, value| {
                            if let Err(err) = header.write().update_draft_field(name, value) {
                                tracing::debug!("ignore a profile field update: {err}");
                            }
                        })
                    }
                }
            }
            ModalCard {
                visible: state.is_contact_info_visible(),
                title: "Contact Information",
                on_close: move |_| header.write().hide_contact_info(),
                p {
                    strong { "Email: " }
                    span { "{identity.email}" }
                }
                p {
                    strong { "DOB: " }
                    span { "{dob}" }
                }
                p {
                    strong { "Phone: " }
                    span { "{identity.phone}" }
                }
                div {
                    class: "is-flex is-justify-content-flex-end mt-4",
                    Button {
                        color: "danger",
                        size: "small",
                        on_click: move |_| header.write().hide_contact_info(),
                        SvgIcon { shape: FaXmark }
                    }
                }
            }
        }
    }
}

/// The [`ProfileHeaderView`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ProfileHeaderViewProps {
    /// The viewer role.
    pub role: Role,
    /// An event handler to be called when the display name changes.
    pub on_identity_name_change: EventHandler<String>,
    /// An event handler to be called when the profile image changes.
    pub on_identity_image_change: EventHandler<String>,
}
