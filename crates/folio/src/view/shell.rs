use super::{detail::DetailPanel, feed::FeedPanel, header::ProfileHeaderView};
use dioxus::prelude::*;
use folio_core::{extension::TomlTableExt, media::MediaRegistry, role::Role, state::State};

/// The page root: decides the role, owns the identity pushed by the header
/// and hands it down to the feed.
pub fn RootShell() -> Element {
    use_context_provider(MediaRegistry::new);

    let role = use_hook(|| {
        let role = State::shared()
            .get_config("profile")
            .and_then(|config| config.get_str("role"))
            .unwrap_or("visitor");
        let role = Role::from(role);
        tracing::info!(role = role.as_str(), "render the profile page");
        role
    });
    let mut user_name = use_signal(String::new);
    let mut user_image = use_signal(String::new);
    rsx! {
        main {
            class: "container is-max-desktop py-5 px-4",
            ProfileHeaderView {
                role: role.clone(),
                on_identity_name_change: move |name: String| user_name.set(name),
                on_identity_image_change: move |image: String| user_image.set(image),
            }
            DetailPanel {
                role: role.clone(),
            }
            FeedPanel {
                role: role,
                user_name: user_name(),
                user_image: user_image(),
            }
        }
    }
}
