use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;

/// A classic modal with a header, a body, and a footer.
///
/// Clicking the background or the close button calls `on_close`;
/// the parent owns the visibility.
pub fn ModalCard(props: ModalCardProps) -> Element {
    if !props.visible {
        return rsx! {};
    }
    let on_close = props.on_close;
    rsx! {
        div {
            class: "{props.class} is-active",
            div {
                class: "modal-background",
                onclick: move |_event| {
                    if props.close_on_click {
                        if let Some(handler) = on_close.as_ref() {
                            handler.call(());
                        }
                    }
                },
            }
            div {
                class: props.card_class,
                header {
                    class: "modal-card-head",
                    p {
                        class: "modal-card-title",
                        { props.title }
                    }
                    button {
                        r#type: "button",
                        class: props.close_class,
                        aria_label: "close",
                        onclick: move |_event| {
                            if let Some(handler) = on_close.as_ref() {
                                handler.call(());
                            }
                        },
                    }
                }
                section {
                    class: "modal-card-body",
                    { props.children }
                }
                if let Some(footer) = props.footer {
                    footer {
                        class: "modal-card-foot",
                        { footer }
                    }
                }
            }
        }
    }
}

/// The [`ModalCard`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ModalCardProps {
    /// The class attribute for the component.
    #[props(into, default = "modal")]
    pub class: Class,
    /// A class to apply to the modal card.
    #[props(into, default = "modal-card")]
    pub card_class: Class,
    /// A class to apply to the close button.
    #[props(into, default = "delete")]
    pub close_class: Class,
    /// A flag to determine whether the modal is visible or not.
    #[props(default)]
    pub visible: bool,
    /// A flag to close the modal when the background is clicked.
    #[props(default = true)]
    pub close_on_click: bool,
    /// The modal title.
    #[props(into)]
    pub title: SharedString,
    /// The modal footer.
    pub footer: Option<Element>,
    /// An event handler to be called when the modal is closed.
    pub on_close: Option<EventHandler>,
    /// The modal content.
    children: Element,
}
