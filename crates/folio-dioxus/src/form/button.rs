use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;

/// The classic button in different colors, sizes, and states.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "{props.class}",
            class: if !props.color.is_empty() { "is-{props.color}" },
            class: if !props.size.is_empty() { "is-{props.size}" },
            class: if props.outlined { "is-outlined" },
            class: if props.rounded { "is-rounded" },
            class: if props.fullwidth { "is-fullwidth" },
            r#type: "{props.button_type}",
            title: if !props.title.is_empty() { "{props.title}" },
            disabled: props.disabled,
            onclick: move |event| {
                if let Some(handler) = props.on_click.as_ref() {
                    event.stop_propagation();
                    handler.call(event);
                }
            },
            { props.children }
        }
    }
}

/// The [`Button`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// The class attribute for the component.
    #[props(into, default = "button")]
    pub class: Class,
    /// The color of the button: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// The size of the button: `small` | `normal` | `medium` | `large`.
    #[props(into, default)]
    pub size: SharedString,
    /// The type of the button: `button` | `submit` | `reset`.
    #[props(into, default = "button")]
    pub button_type: SharedString,
    /// An optional tooltip.
    #[props(into, default)]
    pub title: SharedString,
    /// A flag to use the outlined style.
    #[props(default)]
    pub outlined: bool,
    /// A flag to use the rounded style.
    #[props(default)]
    pub rounded: bool,
    /// A flag to take the full width of the parent.
    #[props(default)]
    pub fullwidth: bool,
    /// A flag to disable the button.
    #[props(default)]
    pub disabled: bool,
    /// An event handler to be called when the button is clicked.
    pub on_click: Option<EventHandler<MouseEvent>>,
    /// The children to render within the component.
    children: Element,
}
