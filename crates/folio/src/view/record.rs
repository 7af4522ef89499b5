use dioxus::prelude::*;
use folio_core::{
    media::{MediaHandle, MediaRegistry},
    model::{Achievement, Education, Experience, Record, Skill},
};
use folio_dioxus::prelude::*;

/// A record which can be rendered as an item of a collection panel.
pub trait RecordView: Record {
    /// The panel title.
    const TITLE: &'static str;

    /// Renders the committed record.
    fn render(&self, registry: &MediaRegistry) -> Element;
}

/// Renders an optional image as the left part of a media object.
fn media_figure(registry: &MediaRegistry, handle: Option<&MediaHandle>, alt: &str) -> Element {
    let Some(url) = handle.and_then(|handle| registry.display_url(handle)) else {
        return rsx! {};
    };
    rsx! {
        figure {
            class: "media-left",
            p {
                class: "image is-64x64",
                img {
                    src: "{url}",
                    alt: "{alt}",
                }
            }
        }
    }
}

impl RecordView for Education {
    const TITLE: &'static str = "Education";

    fn render(&self, registry: &MediaRegistry) -> Element {
        let period = self.period();
        rsx! {
            { media_figure(registry, self.logo.as_ref(), "logo") }
            div {
                class: "media-content",
                p {
                    strong { "{self.institution}" }
                }
                p {
                    "{self.degree}"
                    if !self.field_of_study.is_empty() {
                        " ({self.field_of_study})"
                    }
                }
                p { class: "is-size-7", "{period}" }
                p { class: "is-size-7", "{self.marks}" }
            }
        }
    }
}

impl RecordView for Achievement {
    const TITLE: &'static str = "Achievement";

    fn render(&self, registry: &MediaRegistry) -> Element {
        let date = self.date.map(|date| date.to_string()).unwrap_or_default();
        rsx! {
            { media_figure(registry, self.certificate.as_ref(), "certificate") }
            div {
                class: "media-content",
                p {
                    strong { "{self.title}" }
                }
                ReadMore {
                    text: self.description.clone(),
                }
                p { class: "is-size-7", "{date}" }
            }
        }
    }
}

impl RecordView for Experience {
    const TITLE: &'static str = "Experience";

    fn render(&self, registry: &MediaRegistry) -> Element {
        let period = self.period();
        rsx! {
            { media_figure(registry, self.logo.as_ref(), "logo") }
            div {
                class: "media-content",
                p {
                    strong { "{self.company_name}" }
                }
                p { class: "is-size-7", "{self.role}" }
                p { class: "is-size-7", "{period}" }
                if !self.description.is_empty() {
                    ReadMore {
                        text: self.description.clone(),
                    }
                }
            }
        }
    }
}

impl RecordView for Skill {
    const TITLE: &'static str = "Skill";

    fn render(&self, _registry: &MediaRegistry) -> Element {
        rsx! {
            div {
                class: "media-content skill-list",
                Tag {
                    color: "link",
                    size: "medium",
                    "{self.label}"
                }
            }
        }
    }
}
