use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;

/// A small tag label with an optional delete button.
pub fn Tag(props: TagProps) -> Element {
    rsx! {
        span {
            class: "{props.class}",
            class: if !props.color.is_empty() { "is-{props.color}" },
            class: if !props.size.is_empty() { "is-{props.size}" },
            class: if props.light { "is-light" },
            { props.children }
            if let Some(handler) = props.on_delete {
                button {
                    r#type: "button",
                    class: "delete is-small",
                    onclick: move |event| {
                        event.stop_propagation();
                        handler.call(event);
                    },
                }
            }
        }
    }
}

/// The [`Tag`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct TagProps {
    /// The class attribute for the component.
    #[props(into, default = "tag")]
    pub class: Class,
    /// The color of the tag: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// The size of the tag: `normal` | `medium` | `large`.
    #[props(into, default)]
    pub size: SharedString,
    /// A flag to use the light version of the color.
    #[props(default)]
    pub light: bool,
    /// An event handler to be called when the delete button is clicked.
    pub on_delete: Option<EventHandler<MouseEvent>>,
    /// The children to render within the component.
    children: Element,
}

/// A list of tags.
pub fn Tags(props: TagsProps) -> Element {
    rsx! {
        div {
            class: props.class,
            for tag in props.tags.iter() {
                span {
                    key: "{tag}",
                    class: "{props.tag_class}",
                    class: if !props.color.is_empty() { "is-{props.color}" },
                    "{props.prefix}{tag}"
                }
            }
        }
    }
}

/// The [`Tags`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct TagsProps {
    /// The class attribute for the component.
    #[props(into, default = "tags")]
    pub class: Class,
    /// A class to apply to each tag.
    #[props(into, default = "tag")]
    pub tag_class: Class,
    /// The color of the tags.
    #[props(into, default)]
    pub color: SharedString,
    /// A prefix rendered before each tag.
    #[props(into, default = "#")]
    pub prefix: SharedString,
    /// The tags to render.
    pub tags: Vec<String>,
}
