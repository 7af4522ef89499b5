use super::Input;
use crate::{class::Class, typography::Tag};
use dioxus::prelude::*;
use folio_core::{
    SharedString,
    model::{TagInput, TagSet},
};

/// A text input which turns the typed text into tags on `Enter` or `,`.
pub fn TagField(props: TagFieldProps) -> Element {
    let mut input = use_signal(TagInput::new);
    let on_change = props.on_change;
    let tags = props.tags.clone();
    rsx! {
        div {
            class: props.class,
            Input {
                size: props.size.clone(),
                placeholder: props.placeholder,
                value: Some(input.read().text().to_owned()),
                on_input: move |text: String| {
                    input.write().set_text(text);
                },
                on_keydown: move |event: KeyboardEvent| {
                    let key = event.key().to_string();
                    if TagInput::is_commit_key(&key) {
                        event.prevent_default();
                        let mut tags = tags.clone();
                        input.write().handle_key(&key, &mut tags);
                        if let Some(handler) = on_change.as_ref() {
                            handler.call(tags);
                        }
                    }
                },
            }
            if !props.tags.is_empty() {
                div {
                    class: "tags mt-2",
                    for tag in props.tags.iter().map(|s| s.to_owned()) {
                        Tag {
                            key: "{tag}",
                            color: props.color.clone(),
                            on_delete: {
                                let tags = props.tags.clone();
                                let tag = tag.clone();
                                move |_event: MouseEvent| {
                                    let mut tags = tags.clone();
                                    tags.remove(&tag);
                                    if let Some(handler) = on_change.as_ref() {
                                        handler.call(tags);
                                    }
                                }
                            },
                            "#{tag}"
                        }
                    }
                }
            }
        }
    }
}

/// The [`TagField`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct TagFieldProps {
    /// The class attribute for the component.
    #[props(into, default = "tag-field")]
    pub class: Class,
    /// The color of the tags: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default = "info")]
    pub color: SharedString,
    /// The size of the input: `small` | `normal` | `medium` | `large`.
    #[props(into, default)]
    pub size: SharedString,
    /// The placeholder text.
    #[props(into, default = "Add tags")]
    pub placeholder: SharedString,
    /// The current tags.
    pub tags: TagSet,
    /// An event handler to be called with the new tag set.
    pub on_change: Option<EventHandler<TagSet>>,
}
