use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;
use std::mem;

/// The multiline textarea and its variations.
pub fn Textarea(props: TextareaProps) -> Element {
    let mut composing = use_signal(|| false);
    let mut cached_value = use_signal(String::new);
    rsx! {
        textarea {
            class: "{props.class}",
            class: if !props.color.is_empty() { "is-{props.color}" },
            class: if props.fixed_size { "has-fixed-size" },
            rows: if let Some(rows) = props.rows { "{rows}" },
            value: if let Some(value) = props.value { "{value}" },
            placeholder: if !props.placeholder.is_empty() { "{props.placeholder}" },
            oninput: move |event| {
                cached_value.set(event.value());
                if !composing() {
                    if let Some(handler) = props.on_input.as_ref() {
                        handler.call(mem::take(&mut cached_value.write()));
                    }
                }
            },
            oncompositionstart: move |_event| {
                composing.set(true);
            },
            oncompositionend: move |_event| {
                composing.set(false);
                if let Some(handler) = props.on_input.as_ref() {
                    handler.call(mem::take(&mut cached_value.write()));
                }
            },
            ..props.attributes,
        }
    }
}

/// The [`Textarea`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct TextareaProps {
    /// The class attribute for the component.
    #[props(into, default = "textarea")]
    pub class: Class,
    /// The color of the textarea: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// The number of visible text lines.
    pub rows: Option<u32>,
    /// A flag to disable resizing.
    #[props(default)]
    pub fixed_size: bool,
    /// The placeholder text.
    #[props(into, default)]
    pub placeholder: SharedString,
    /// The current value of the textarea.
    pub value: Option<String>,
    /// An event handler to be called when inputing.
    pub on_input: Option<EventHandler<String>>,
    /// Spreading the props of the `textarea` element.
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
}
