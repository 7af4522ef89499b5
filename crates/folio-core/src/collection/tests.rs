use super::{EditableCollection, Mode};
use crate::{
    Date, Error,
    media::{MediaFile, MediaRegistry},
    model::{Achievement, Education, Experience, FieldValue, Post, Record, Skill},
    role::Role,
};

fn education(institution: &str, start_year: i32) -> Education {
    Education {
        institution: institution.to_owned(),
        degree: "BSc".to_owned(),
        start_year: Some(start_year),
        marks: "90%".to_owned(),
        ..Education::default()
    }
}

fn add<T: Record>(collection: &mut EditableCollection<T>, record: T) -> usize {
    collection.begin_add().unwrap();
    collection.edit_draft(|draft| *draft = record).unwrap();
    collection.commit().unwrap()
}

fn skills(labels: &[&str]) -> EditableCollection<Skill> {
    let mut collection = EditableCollection::new();
    for label in labels {
        add(&mut collection, Skill::new(*label));
    }
    collection
}

fn labels(collection: &EditableCollection<Skill>) -> Vec<&str> {
    collection.iter().map(|skill| skill.label.as_str()).collect()
}

#[test]
fn it_removes_by_index() {
    let mut collection = skills(&["rust", "go", "zig", "c"]);
    let removed = collection.remove(1).unwrap();
    assert_eq!(removed.label, "go");
    assert_eq!(collection.len(), 3);
    assert_eq!(labels(&collection), ["rust", "zig", "c"]);

    assert!(matches!(
        collection.remove(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3, .. })
    ));
    assert_eq!(collection.len(), 3);
}

#[test]
fn it_cancels_without_touching_records() {
    let mut collection = skills(&["rust"]);
    let before = collection.entries().to_vec();

    collection.begin_add().unwrap();
    collection.update_draft_field("label", "go".into()).unwrap();
    collection.update_draft_field("label", "zig".into()).unwrap();
    collection.cancel();

    assert_eq!(collection.entries(), before.as_slice());
    assert_eq!(collection.mode(), Mode::Idle);
    assert_eq!(collection.draft(), &Skill::default());
}

#[test]
fn it_appends_committed_drafts() {
    let mut collection = EditableCollection::<Education>::new();
    collection.begin_add().unwrap();
    assert!(collection.is_adding());
    collection.update_draft_field("institution", "MIT".into()).unwrap();
    collection.update_draft_field("degree", "BSc".into()).unwrap();
    collection.update_draft_field("start_year", "2015".into()).unwrap();
    collection.update_draft_field("marks", "3.9".into()).unwrap();
    let draft = collection.draft().clone();

    assert_eq!(collection.commit().unwrap(), 0);
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(0), Some(&draft));
    assert_eq!(collection.mode(), Mode::Idle);
    assert_eq!(collection.draft(), &Education::default());
}

#[test]
fn it_rejects_incomplete_drafts() {
    let mut collection = EditableCollection::<Education>::new();
    collection.begin_add().unwrap();
    collection.update_draft_field("institution", "MIT".into()).unwrap();

    let err = collection.commit().unwrap_err();
    assert_eq!(err.missing_fields(), ["degree", "start_year", "marks"]);
    assert!(collection.is_empty());
    assert!(collection.is_adding());
    assert_eq!(collection.draft().institution, "MIT");

    let mut skills = EditableCollection::<Skill>::new();
    skills.begin_add().unwrap();
    skills.update_draft_field("label", "   ".into()).unwrap();
    assert!(skills.commit().unwrap_err().is_incomplete_draft());
}

#[test]
fn it_replaces_edited_records() {
    let mut collection = EditableCollection::new();
    for (name, year) in [("A", 2010), ("B", 2012), ("C", 2014)] {
        add(&mut collection, education(name, year));
    }
    let before = collection.entries().to_vec();

    collection.begin_edit(1).unwrap();
    assert_eq!(collection.editing_index(), Some(1));
    assert_eq!(collection.draft(), before[1].value());
    collection.update_draft_field("degree", "MSc".into()).unwrap();
    assert_eq!(collection.get(1).unwrap().degree, "BSc");

    assert_eq!(collection.commit().unwrap(), 1);
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.get(1).unwrap().degree, "MSc");
    assert_eq!(collection.get(1).unwrap().institution, "B");
    assert_eq!(collection.entries()[0], before[0]);
    assert_eq!(collection.entries()[2], before[2]);
    assert_eq!(collection.entries()[1].key(), before[1].key());
}

#[test]
fn it_projects_education_by_start_year() {
    let mut collection = EditableCollection::new();
    for (name, year) in [("A", 2015), ("B", 2020), ("C", 2018)] {
        add(&mut collection, education(name, year));
    }
    let projected = collection
        .projected()
        .into_iter()
        .map(|(index, entry)| (index, entry.start_year))
        .collect::<Vec<_>>();
    assert_eq!(
        projected,
        [(1, Some(2020)), (2, Some(2018)), (0, Some(2015))]
    );

    let stored = collection
        .iter()
        .map(|record| record.start_year)
        .collect::<Vec<_>>();
    assert_eq!(stored, [Some(2015), Some(2020), Some(2018)]);
}

#[test]
fn it_keeps_ties_and_insertion_order() {
    let mut collection = EditableCollection::new();
    for (name, year) in [("A", 2018), ("B", 2020), ("C", 2018)] {
        add(&mut collection, education(name, year));
    }
    let names = collection
        .projected()
        .into_iter()
        .map(|(_, entry)| entry.institution.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["B", "A", "C"]);

    let skills = skills(&["rust", "go", "c"]);
    let indices = skills
        .projected()
        .into_iter()
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    assert_eq!(indices, [0, 1, 2]);
}

#[test]
fn it_guards_mode_transitions() {
    let mut collection = skills(&["rust"]);
    assert!(matches!(collection.commit(), Err(Error::NoDraft { .. })));
    assert!(matches!(
        collection.update_draft_field("label", "go".into()),
        Err(Error::NoDraft { .. })
    ));
    assert!(matches!(
        collection.begin_edit(0),
        Err(Error::NotEditable { .. })
    ));

    collection.begin_add().unwrap();
    assert!(matches!(collection.begin_add(), Err(Error::DraftActive { .. })));
    assert!(matches!(
        collection.update_draft_field("level", "expert".into()),
        Err(Error::UnknownField { .. })
    ));
    collection.cancel();
    assert_eq!(labels(&collection), ["rust"]);

    let mut educations = EditableCollection::<Education>::new();
    assert!(matches!(
        educations.begin_edit(0),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert_eq!(educations.mode(), Mode::Idle);
}

#[test]
fn it_adjusts_edits_after_removal() {
    let mut collection = EditableCollection::new();
    for (name, year) in [("A", 2010), ("B", 2012), ("C", 2014)] {
        add(&mut collection, education(name, year));
    }

    collection.begin_edit(2).unwrap();
    collection.remove(0).unwrap();
    assert_eq!(collection.editing_index(), Some(1));
    collection.update_draft_field("degree", "PhD".into()).unwrap();
    collection.commit().unwrap();
    assert_eq!(collection.get(1).unwrap().institution, "C");
    assert_eq!(collection.get(1).unwrap().degree, "PhD");
    assert_eq!(collection.get(0).unwrap().degree, "BSc");

    collection.begin_edit(0).unwrap();
    collection.remove(1).unwrap();
    assert_eq!(collection.editing_index(), Some(0));
    collection.cancel();

    collection.begin_edit(0).unwrap();
    collection.remove(0).unwrap();
    assert_eq!(collection.mode(), Mode::Idle);
    assert!(collection.is_empty());
}

#[test]
fn it_ignores_roles_for_operations() {
    let role = Role::from("visitor");
    assert!(!role.can_edit());

    let mut collection = skills(&["rust", "go"]);
    collection.begin_add().unwrap();
    collection.update_draft_field("label", "zig".into()).unwrap();
    collection.commit().unwrap();
    collection.remove(0).unwrap();
    assert_eq!(labels(&collection), ["go", "zig"]);

    let mut educations = EditableCollection::new();
    add(&mut educations, education("A", 2010));
    educations.begin_edit(0).unwrap();
    educations.update_draft_field("degree", "MSc".into()).unwrap();
    educations.commit().unwrap();
    assert_eq!(educations.get(0).unwrap().degree, "MSc");
}

#[test]
fn it_toggles_the_editing_flag_independently() {
    let mut collection = skills(&["rust"]);
    assert!(collection.toggle_editing_unlocked());
    assert_eq!(collection.mode(), Mode::Idle);
    collection.begin_add().unwrap();
    assert!(!collection.toggle_editing_unlocked());
    assert!(collection.is_adding());
}

#[test]
fn it_collects_post_tags_and_likes() {
    let mut feed = EditableCollection::<Post>::new();
    feed.begin_add().unwrap();
    feed.update_draft_field("description", "hello".into()).unwrap();
    feed.edit_draft(|post| {
        post.tags.insert("react");
        post.tags.insert("react");
        post.tags.insert("go");
    })
    .unwrap();
    feed.commit().unwrap();

    let post = feed.get(0).unwrap();
    assert_eq!(post.tags.as_slice(), ["react", "go"]);
    assert!(!post.is_liked());

    let date = post.date();
    feed.update_item(0, |post| post.toggle_like()).unwrap();
    assert!(feed.get(0).unwrap().is_liked());
    assert!(feed.update_item(1, |post| post.toggle_like()).is_err());

    feed.begin_edit(0).unwrap();
    feed.update_draft_field("description", "edited".into()).unwrap();
    feed.commit().unwrap();
    assert_eq!(feed.get(0).unwrap().date(), date);
    assert!(feed.get(0).unwrap().is_liked());
}

#[test]
fn it_releases_media_with_records() {
    let registry = MediaRegistry::new();
    let mut collection = EditableCollection::new();
    let mut record = education("A", 2010);
    record.logo = Some(registry.acquire(MediaFile::new("a.png", vec![1])));
    add(&mut collection, record);
    assert_eq!(registry.live_count(), 1);

    // A cancelled edit keeps the committed logo and drops the picked one.
    collection.begin_edit(0).unwrap();
    let picked = registry.acquire(MediaFile::new("b.png", vec![2]));
    collection
        .update_draft_field("logo", FieldValue::from(picked))
        .unwrap();
    assert_eq!(registry.live_count(), 2);
    collection.cancel();
    assert_eq!(registry.live_count(), 1);

    // A committed edit replaces the logo.
    collection.begin_edit(0).unwrap();
    let picked = registry.acquire(MediaFile::new("c.png", vec![3]));
    collection
        .update_draft_field("logo", FieldValue::from(picked.clone()))
        .unwrap();
    collection.commit().unwrap();
    assert_eq!(registry.live_count(), 1);
    assert!(registry.display_url(&picked).is_some());
    drop(picked);

    collection.remove(0).unwrap();
    assert_eq!(registry.live_count(), 0);
}

fn achievement(title: &str, day: u32) -> Achievement {
    Achievement {
        title: title.to_owned(),
        description: format!("{title} description"),
        date: Date::from_ymd_opt(2023, 5, day),
        ..Achievement::default()
    }
}

fn experience(company_name: &str) -> Experience {
    Experience {
        company_name: company_name.to_owned(),
        role: "Engineer".to_owned(),
        start_date: Date::from_ymd_opt(2021, 3, 1),
        ..Experience::default()
    }
}

#[test]
fn it_edits_achievements() {
    let mut collection = EditableCollection::<Achievement>::new();
    collection.begin_add().unwrap();
    collection.update_draft_field("title", "Hackathon".into()).unwrap();
    collection.update_draft_field("date", "2023-13-01".into()).unwrap();
    assert_eq!(collection.missing_fields(), ["description", "date"]);
    assert!(collection.commit().unwrap_err().is_incomplete_draft());

    collection.update_draft_field("description", "First place".into()).unwrap();
    collection.update_draft_field("date", "2023-05-20".into()).unwrap();
    assert!(collection.missing_fields().is_empty());
    assert_eq!(collection.commit().unwrap(), 0);
    add(&mut collection, achievement("Award", 1));
    add(&mut collection, achievement("Talk", 2));

    collection.begin_edit(1).unwrap();
    collection.update_draft_field("title", "Best Paper".into()).unwrap();
    assert_eq!(collection.commit().unwrap(), 1);
    let titles = collection
        .iter()
        .map(|record| record.title.as_str())
        .collect::<Vec<_>>();
    assert_eq!(titles, ["Hackathon", "Best Paper", "Talk"]);
    assert_eq!(collection.get(0).unwrap().date, Date::from_ymd_opt(2023, 5, 20));

    let removed = collection.remove(0).unwrap();
    assert_eq!(removed.title, "Hackathon");
    assert_eq!(collection.get(0).unwrap().title, "Best Paper");
    assert_eq!(collection.get(1).unwrap().title, "Talk");
    assert!(collection.remove(2).is_err());
}

#[test]
fn it_edits_experiences() {
    let mut collection = EditableCollection::<Experience>::new();
    collection.begin_add().unwrap();
    collection.update_draft_field("company_name", "Acme".into()).unwrap();
    assert_eq!(collection.missing_fields(), ["role", "start_date"]);
    collection.update_draft_field("role", "Intern".into()).unwrap();
    collection.update_draft_field("start_date", "2020-06-01".into()).unwrap();
    assert_eq!(collection.commit().unwrap(), 0);
    assert_eq!(collection.get(0).unwrap().period(), "2020-06-01 - Present");

    add(&mut collection, experience("Globex"));
    add(&mut collection, experience("Initech"));
    let before = collection.entries().to_vec();

    collection.begin_edit(2).unwrap();
    collection.update_draft_field("end_date", "2024-01-31".into()).unwrap();
    collection.remove(1).unwrap();
    assert_eq!(collection.editing_index(), Some(1));
    assert_eq!(collection.commit().unwrap(), 1);

    assert_eq!(collection.len(), 2);
    assert_eq!(collection.entries()[0], before[0]);
    assert_eq!(collection.get(1).unwrap().company_name, "Initech");
    assert_eq!(collection.get(1).unwrap().end_date, Date::from_ymd_opt(2024, 1, 31));
    let indices = collection
        .projected()
        .into_iter()
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    assert_eq!(indices, [0, 1]);
}
