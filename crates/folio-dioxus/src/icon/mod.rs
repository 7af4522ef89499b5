//! SVG icon shapes.

use crate::class::Class;
use dioxus::prelude::*;
use dioxus_free_icons::IconShape;
use folio_core::SharedString;

/// A container for a SVG icon.
pub fn SvgIcon<T: IconShape + Clone + PartialEq + 'static>(props: SvgIconProps<T>) -> Element {
    let width = props.width;
    let height = props.height.unwrap_or(width);
    rsx! {
        span {
            class: "{props.class}",
            class: if !props.color.is_empty() { "has-text-{props.color}" },
            title: if !props.title.is_empty() { "{props.title}" },
            dioxus_free_icons::Icon {
                icon: props.shape,
                width: width,
                height: height,
            }
        }
    }
}

/// The [`SvgIcon`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct SvgIconProps<T: IconShape + Clone + PartialEq + 'static> {
    /// The class attribute for the component.
    #[props(into, default = "icon")]
    pub class: Class,
    /// The icon shape to use.
    pub shape: T,
    /// The width of the `<svg>` element. Defaults to 16.
    #[props(default = 16)]
    pub width: u32,
    /// The height of the `<svg>` element.
    #[props(into)]
    pub height: Option<u32>,
    /// The text color: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// An optional tooltip.
    #[props(into, default)]
    pub title: SharedString,
}

/// A wrapper for combining an icon with text.
pub fn IconText(props: IconTextProps) -> Element {
    rsx! {
        span {
            class: props.class,
            { props.children }
        }
    }
}

/// The [`IconText`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct IconTextProps {
    /// The class attribute for the component.
    #[props(into, default = "icon-text")]
    pub class: Class,
    /// The children to render within the component.
    children: Element,
}
