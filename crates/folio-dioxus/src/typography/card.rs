use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;

/// A card with a titled header, optional header actions, and a content section.
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            class: props.class,
            if !props.title.is_empty() || props.actions.is_some() {
                header {
                    class: "card-header",
                    p {
                        class: "card-header-title",
                        { props.title }
                    }
                    if let Some(actions) = props.actions {
                        div {
                            class: "card-header-icon",
                            { actions }
                        }
                    }
                }
            }
            section {
                class: props.content_class,
                { props.children }
            }
            if let Some(footer) = props.footer {
                footer {
                    class: "card-footer",
                    { footer }
                }
            }
        }
    }
}

/// The [`Card`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    /// The class attribute for the component.
    #[props(into, default = "card")]
    pub class: Class,
    /// A class to apply to the content section.
    #[props(into, default = "card-content")]
    pub content_class: Class,
    /// The card title.
    #[props(into, default)]
    pub title: SharedString,
    /// Controls rendered at the right end of the header.
    pub actions: Option<Element>,
    /// The card footer.
    pub footer: Option<Element>,
    /// The card content.
    children: Element,
}
