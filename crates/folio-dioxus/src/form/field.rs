use crate::class::Class;
use dioxus::prelude::*;
use folio_core::SharedString;

/// A container for the form field with a label.
///
/// A required field shows a mark after the label, and a help line once
/// it has been found blank on commit.
pub fn FieldContainer(props: FieldContainerProps) -> Element {
    rsx! {
        div {
            class: props.class,
            label {
                class: props.label_class,
                { props.label }
                if props.required {
                    span {
                        class: props.mark_class,
                        " *"
                    }
                }
            }
            div {
                class: props.control_class,
                { props.children }
            }
            if props.missing {
                p {
                    class: "{props.help_class} is-danger",
                    { props.missing_text }
                }
            }
        }
    }
}

/// The [`FieldContainer`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct FieldContainerProps {
    /// The class attribute for the component.
    #[props(into, default = "field")]
    pub class: Class,
    /// A class to apply to the `label` element.
    #[props(into, default = "label")]
    pub label_class: Class,
    /// A class to apply custom styles.
    #[props(into, default = "control")]
    pub control_class: Class,
    /// A class to apply to the required mark.
    #[props(into, default = "has-text-danger")]
    pub mark_class: Class,
    /// A class to apply to the help text.
    #[props(into, default = "help")]
    pub help_class: Class,
    /// The label content.
    #[props(into)]
    pub label: SharedString,
    /// A flag to render the required mark.
    #[props(default)]
    pub required: bool,
    /// A flag to indicate that a required value is missing.
    #[props(default)]
    pub missing: bool,
    /// The help text for a missing value.
    #[props(into, default = "This field is required")]
    pub missing_text: SharedString,
    /// The children to render within the component.
    children: Element,
}

/// Grouped controls, such as the buttons of a form footer.
pub fn FormGroup(props: FormGroupProps) -> Element {
    rsx! {
        div {
            class: "{props.class}",
            class: if props.align == "center" { "is-grouped-centered" },
            class: if props.align == "right" { "is-grouped-right" },
            for item in props.items.iter() {
                div {
                    class: props.control_class.clone(),
                    { item }
                }
            }
        }
    }
}

/// The [`FormGroup`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct FormGroupProps {
    /// The class attribute for the component.
    #[props(into, default = "field is-grouped")]
    pub class: Class,
    /// A class to apply custom styles.
    #[props(into, default = "control")]
    pub control_class: Class,
    /// The alignment of the group: `left` | `center` | `right`.
    #[props(into, default)]
    pub align: SharedString,
    /// The items to be grouped.
    #[props(into)]
    pub items: Vec<Element>,
}
