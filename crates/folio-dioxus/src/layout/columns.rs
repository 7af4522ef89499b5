use crate::class::Class;
use dioxus::prelude::*;

/// Responsive columns powered by flexbox.
pub fn Columns(props: ColumnsProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            class: if props.multiline { "is-multiline" },
            class: if let Some(gap) = props.gap { "is-variable is-{gap}" },
            { props.children }
        }
    }
}

/// The [`Columns`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ColumnsProps {
    /// The class attribute for the component.
    #[props(into, default = "columns")]
    pub class: Class,
    /// A custom column gap.
    pub gap: Option<u8>,
    /// A flag to add more column elements than would fit in a single row.
    #[props(default)]
    pub multiline: bool,
    /// The columns to render.
    children: Element,
}

/// A single column in the 12 columns system.
pub fn Column(props: ColumnProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            class: if let Some(size) = props.size { "is-{size}" },
            class: if let Some(offset) = props.offset { "is-offset-{offset}" },
            { props.children }
        }
    }
}

/// The [`Column`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct ColumnProps {
    /// The class attribute for the component.
    #[props(into, default = "column")]
    pub class: Class,
    /// A custom size in the 12 columns system.
    pub size: Option<u8>,
    /// A custom column offset.
    pub offset: Option<u8>,
    /// The column content.
    children: Element,
}
