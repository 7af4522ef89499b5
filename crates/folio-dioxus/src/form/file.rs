use crate::{class::Class, icon::SvgIcon};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUpload;
use folio_core::{SharedString, media::MediaFile};
use std::path::Path;

/// A custom file upload input which reads the picked files into memory.
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut file_names = use_signal(Vec::new);
    let on_change = props.on_change;
    let current_name = props.file_name.clone().or_else(|| {
        let names = file_names();
        (!names.is_empty()).then(|| names.join(", "))
    });
    let has_name = current_name.is_some();
    rsx! {
        div {
            class: "{props.class}",
            class: if !props.color.is_empty() { "is-{props.color}" },
            class: if !props.size.is_empty() { "is-{props.size}" },
            class: if props.fullwidth { "is-fullwidth" },
            class: if has_name { "has-name" },
            label {
                class: props.label_class.clone(),
                input {
                    class: props.input_class,
                    r#type: "file",
                    accept: "{props.accept}",
                    onchange: move |event| async move {
                        let Some(file_engine) = event.files() else {
                            return;
                        };
                        let mut files = Vec::new();
                        file_names.write().clear();
                        for file in file_engine.files() {
                            let Some(bytes) = file_engine.read_file(&file).await else {
                                tracing::warn!("fail to read the file `{file}`");
                                continue;
                            };
                            let file_name = Path::new(&file)
                                .file_name()
                                .map(|f| f.to_string_lossy().into_owned())
                                .unwrap_or(file);
                            file_names.write().push(file_name.clone());
                            files.push(MediaFile::new(file_name, bytes));
                        }
                        if let Some(handler) = on_change.as_ref() {
                            handler.call(files);
                        }
                    },
                    ..props.attributes,
                }
                span {
                    class: "file-cta",
                    span {
                        class: "file-icon",
                        SvgIcon {
                            shape: FaUpload,
                            width: 14,
                        }
                    }
                    span {
                        class: props.label_class,
                        { props.label }
                    }
                }
                if let Some(name) = current_name {
                    span {
                        class: "file-name",
                        { name }
                    }
                }
            }
        }
    }
}

/// The [`FileUpload`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct FileUploadProps {
    /// The class attribute for the component.
    #[props(into, default = "file")]
    pub class: Class,
    /// A class to apply to the `label` element.
    #[props(into, default = "file-label")]
    pub label_class: Class,
    /// A class to apply to the `input` element.
    #[props(into, default = "file-input")]
    pub input_class: Class,
    /// The color of the button: `primary` | `link` | `info` | `success` | `warning` | `danger`.
    #[props(into, default)]
    pub color: SharedString,
    /// The size of the button: `small` | `normal` | `medium` | `large`.
    #[props(into, default)]
    pub size: SharedString,
    /// A flag to determine whether the control is fullwidth or not.
    #[props(default)]
    pub fullwidth: bool,
    /// Accepted file types.
    #[props(into, default = "image/*")]
    pub accept: SharedString,
    /// The label content.
    #[props(into)]
    pub label: SharedString,
    /// The name of the file already attached.
    pub file_name: Option<String>,
    /// An event handler to be called when the files are read.
    pub on_change: Option<EventHandler<Vec<MediaFile>>>,
    /// Spreading the props of the `input` element.
    #[props(extends = input)]
    attributes: Vec<Attribute>,
}
