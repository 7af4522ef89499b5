use dioxus::prelude::*;
use folio_core::{
    media::{MediaFile, MediaRegistry},
    model::{Field, FieldKind, FieldValue, Record, TagSet},
};
use folio_dioxus::prelude::*;

/// Renders one form control per schema field of the draft.
///
/// Every change is reported through `on_update` with the field name, and
/// fields listed in `missing` are marked as required but blank.
pub fn draft_fields<T, F>(
    draft: &T,
    missing: &[&'static str],
    registry: &MediaRegistry,
    on_update: F,
) -> Element
where
    T: Record,
    F: FnMut(&'static str, FieldValue) + Clone + 'static,
{
    let fields = T::schema()
        .iter()
        .map(|field| (field.name(), *field))
        .collect::<Vec<_>>();
    rsx! {
        for (name, field) in fields {
            FieldContainer {
                key: "{name}",
                label: field.label(),
                required: field.is_required(),
                missing: missing.contains(&name),
                { draft_control(field, draft.field(name), registry, on_update.clone()) }
            }
        }
    }
}

/// Renders the control for a single field.
fn draft_control<F>(
    field: Field,
    value: Option<FieldValue>,
    registry: &MediaRegistry,
    mut on_update: F,
) -> Element
where
    F: FnMut(&'static str, FieldValue) + Clone + 'static,
{
    let name = field.name();
    let text = value
        .as_ref()
        .and_then(|value| value.as_text())
        .map(|text| text.to_owned());
    match field.kind() {
        FieldKind::LongText => rsx! {
            Textarea {
                rows: Some(4),
                placeholder: field.placeholder(),
                value: text,
                on_input: move |text: String| on_update(name, text.into()),
            }
        },
        FieldKind::Tags => {
            let tags = TagSet::parse(text.as_deref().unwrap_or_default());
            rsx! {
                TagField {
                    tags: tags,
                    placeholder: "Add tags and press Enter",
                    on_change: move |tags: TagSet| on_update(name, tags.join().into()),
                }
            }
        }
        FieldKind::Media => {
            let file_name = value
                .as_ref()
                .and_then(|value| value.as_media())
                .and_then(|handle| registry.file_name(handle));
            let registry = registry.clone();
            rsx! {
                FileUpload {
                    label: "Choose a file…",
                    file_name: file_name,
                    on_change: move |files: Vec<MediaFile>| {
                        if let Some(file) = files.into_iter().next() {
                            let handle = registry.acquire(file);
                            on_update(name, handle.into());
                        }
                    },
                }
            }
        }
        kind => rsx! {
            Input {
                input_type: kind.input_type(),
                placeholder: field.placeholder(),
                max_length: field.length_limit(),
                value: text,
                on_input: move |text: String| on_update(name, text.into()),
            }
        },
    }
}
