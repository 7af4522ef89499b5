use super::{editor::draft_fields, record::RecordView};
use dioxus::prelude::*;
use dioxus_free_icons::icons::{
    fa_regular_icons::FaTrashCan,
    fa_solid_icons::{FaCheck, FaPen, FaPlus},
};
use folio_core::{
    Error,
    collection::EditableCollection,
    media::MediaRegistry,
    model::{Achievement, Education, Experience, FieldValue, Skill},
    role::Role,
};
use folio_dioxus::prelude::*;

/// The properties shared by the collection panels.
#[derive(Clone, PartialEq, Props)]
pub struct PanelProps {
    /// The viewer role.
    pub role: Role,
}

/// The education panel.
pub fn EducationPanel(props: PanelProps) -> Element {
    collection_panel::<Education>(props)
}

/// The achievement panel.
pub fn AchievementPanel(props: PanelProps) -> Element {
    collection_panel::<Achievement>(props)
}

/// The experience panel.
pub fn ExperiencePanel(props: PanelProps) -> Element {
    collection_panel::<Experience>(props)
}

/// The skill panel. Skills can only be added or removed.
pub fn SkillPanel(props: PanelProps) -> Element {
    collection_panel::<Skill>(props)
}

/// Renders a titled list editor for one record type.
///
/// The owner gets an add button and a toggle which unlocks the per-record
/// edit and delete controls. Everyone else gets a read-only list.
fn collection_panel<T: RecordView>(props: PanelProps) -> Element {
    let registry = use_context::<MediaRegistry>();
    let mut collection = use_signal(EditableCollection::<T>::new);
    let mut missing = use_signal(Vec::<&'static str>::new);

    let can_edit = props.role.can_edit();
    let state = collection.read();
    let unlocked = can_edit && state.is_editing_unlocked();
    let editor_visible = !state.mode().is_idle();
    let editor_title = if state.is_adding() {
        format!("Add {}", T::TITLE)
    } else {
        format!("Edit {}", T::TITLE)
    };
    let items = state
        .projected()
        .into_iter()
        .map(|(index, entry)| (index, entry.key(), entry.value().render(&registry)))
        .collect::<Vec<_>>();
    let missing_fields = missing();
    let form = draft_fields(
        state.draft(),
        &missing_fields,
        &registry,
        move |name: &'static str, value: FieldValue| {
            let mut collection = collection.write();
            if let Err(err) = collection.update_draft_field(name, value) {
                tracing::debug!(collection = T::NAME, "ignore a draft update: {err}");
            }
            let fields = collection.missing_fields();
            missing.write().retain(|field| fields.contains(field));
        },
    );
    drop(state);

    let mut close_editor = move || {
        collection.write().cancel();
        missing.set(Vec::new());
    };
    let toggle_title = if unlocked { "Done" } else { "Edit" };
    let actions = can_edit.then(|| {
        rsx! {
            div {
                class: "buttons",
                Button {
                    size: "small",
                    title: "Add",
                    on_click: move |_| {
                        match collection.write().begin_add() {
                            Ok(()) => missing.set(Vec::new()),
                            Err(err) => tracing::debug!("ignore the add request: {err}"),
                        }
                    },
                    SvgIcon { shape: FaPlus }
                }
                Button {
                    size: "small",
                    title: toggle_title,
                    on_click: move |_| {
                        let unlocked = collection.write().toggle_editing_unlocked();
                        tracing::debug!(collection = T::NAME, unlocked, "toggle the record controls");
                    },
                    if unlocked {
                        SvgIcon { shape: FaCheck, color: "success" }
                    } else {
                        SvgIcon { shape: FaPen }
                    }
                }
            }
        }
    });
    rsx! {
        Card {
            class: "card mb-5",
            title: T::TITLE,
            actions: actions,
            if items.is_empty() {
                p {
                    class: "has-text-grey",
                    "No records yet."
                }
            }
            for (index, key, content) in items {
                article {
                    key: "{key}",
                    class: "media",
                    { content }
                    if unlocked {
                        div {
                            class: "media-right buttons",
                            if T::EDITABLE {
                                Button {
                                    size: "small",
                                    title: "Edit",
                                    on_click: move |_| {
                                        match collection.write().begin_edit(index) {
                                            Ok(()) => missing.set(Vec::new()),
                                            Err(err) => tracing::debug!("ignore the edit request: {err}"),
                                        }
                                    },
                                    SvgIcon { shape: FaPen }
                                }
                            }
                            Button {
                                size: "small",
                                color: "danger",
                                outlined: true,
                                title: "Delete",
                                on_click: move |_| {
                                    if let Err(err) = collection.write().remove(index) {
                                        tracing::warn!("fail to remove a record: {err}");
                                    }
                                },
                                SvgIcon { shape: FaTrashCan }
                            }
                        }
                    }
                }
            }
        }
        ModalCard {
            visible: editor_visible,
            title: editor_title,
            on_close: move |_| close_editor(),
            footer: rsx! {
                FormGroup {
                    align: "right",
                    items: vec![
                        rsx! {
                            Button {
                                on_click: move |_| close_editor(),
                                "Cancel"
                            }
                        },
                        rsx! {
                            Button {
                                color: "success",
                                on_click: move |_| {
                                    let result = collection.write().commit();
                                    match result {
                                        Ok(_) => missing.set(Vec::new()),
                                        Err(Error::IncompleteDraft { fields }) => missing.set(fields),
                                        Err(err) => tracing::warn!("fail to save the record: {err}"),
                                    }
                                },
                                "Save"
                            }
                        },
                    ],
                }
            },
            { form }
        }
    }
}
