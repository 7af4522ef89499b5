use super::panel::{AchievementPanel, EducationPanel, ExperiencePanel, SkillPanel};
use dioxus::prelude::*;
use folio_core::role::Role;
use folio_dioxus::prelude::*;

/// The detail section of the profile page.
pub fn DetailPanel(props: DetailPanelProps) -> Element {
    let role = props.role;
    rsx! {
        Columns {
            multiline: true,
            Column {
                size: 6,
                EducationPanel { role: role.clone() }
            }
            Column {
                size: 6,
                AchievementPanel { role: role.clone() }
            }
            Column {
                size: 12,
                ExperiencePanel { role: role.clone() }
            }
            Column {
                size: 12,
                SkillPanel { role: role }
            }
        }
    }
}

/// The [`DetailPanel`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DetailPanelProps {
    /// The viewer role.
    pub role: Role,
}
