use crate::class::Class;
use dioxus::prelude::*;
use folio_core::{SharedString, excerpt};

/// A text which is cut to an excerpt with a toggle to reveal the rest.
///
/// Texts within the limit are rendered as is, without a toggle.
pub fn ReadMore(props: ReadMoreProps) -> Element {
    let mut expanded = use_signal(|| false);
    let text = props.text.as_str();
    let Some(short_text) = excerpt(text, props.limit) else {
        return rsx! {
            p {
                class: props.class,
                "{text}"
            }
        };
    };
    rsx! {
        p {
            class: props.class,
            if expanded() {
                "{text}"
            } else {
                "{short_text}..."
            }
            " "
            a {
                class: props.toggle_class,
                onclick: move |_event| {
                    expanded.set(!expanded());
                },
                if expanded() {
                    "{props.less_label}"
                } else {
                    "{props.more_label}"
                }
            }
        }
    }
}

/// The [`ReadMore`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ReadMoreProps {
    /// The class attribute for the component.
    #[props(into, default = "read-more")]
    pub class: Class,
    /// A class to apply to the toggle link.
    #[props(into, default = "has-text-link")]
    pub toggle_class: Class,
    /// The full text.
    pub text: String,
    /// The number of characters shown while collapsed.
    #[props(default = 80)]
    pub limit: usize,
    /// The toggle label while collapsed.
    #[props(into, default = "Read more ▼")]
    pub more_label: SharedString,
    /// The toggle label while expanded.
    #[props(into, default = "Read less ▲")]
    pub less_label: SharedString,
}
