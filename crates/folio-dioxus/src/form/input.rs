use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;
use std::mem;

/// The text input and its variations.
///
/// Input events are held back while an IME composition is active and
/// flushed once it ends.
pub fn Input(props: InputProps) -> Element {
    let mut composing = use_signal(|| false);
    let mut cached_value = use_signal(String::new);
    rsx! {
        input {
            class: "{props.class}",
            class: if !props.color.is_empty() { "is-{props.color}" },
            class: if !props.size.is_empty() { "is-{props.size}" },
            r#type: "{props.input_type}",
            value: if let Some(value) = props.value { "{value}" },
            placeholder: if !props.placeholder.is_empty() { "{props.placeholder}" },
            maxlength: if let Some(max_length) = props.max_length { "{max_length}" },
            onmounted: move |event| {
                if props.auto_focus {
                    spawn(async move {
                        if let Err(err) = event.data.set_focus(true).await {
                            tracing::error!("fail to focus on the input: {err}");
                        }
                    });
                }
            },
            oninput: move |event| {
                cached_value.set(event.value());
                if !composing() {
                    if let Some(handler) = props.on_input.as_ref() {
                        handler.call(mem::take(&mut cached_value.write()));
                    }
                }
            },
            onkeydown: move |event| {
                if let Some(handler) = props.on_keydown.as_ref() {
                    event.stop_propagation();
                    if !composing() {
                        handler.call(event);
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

/// The [`Input`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// The class attribute for the component.
    #[props(into, default = "input")]
    pub class: Class,
    /// The color of the input: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// The size of the input: `small` | `normal` | `medium` | `large`.
    #[props(into, default)]
    pub size: SharedString,
    /// The input type: `text` | `number` | `date` | `email`.
    #[props(into, default = "text")]
    pub input_type: SharedString,
    /// The placeholder text.
    #[props(into, default)]
    pub placeholder: SharedString,
    /// The maximum number of characters.
    pub max_length: Option<usize>,
    /// A flag to determine whether the input is focused automatically.
    #[props(default)]
    pub auto_focus: bool,
    /// The current value of the input.
    pub value: Option<String>,
    /// An event handler to be called when inputing.
    pub on_input: Option<EventHandler<String>>,
    /// An event handler to be called when a key is pressed.
    pub on_keydown: Option<EventHandler<KeyboardEvent>>,
    /// Spreading the props of the `input` element.
    #[props(extends = input)]
    attributes: Vec<Attribute>,
}
