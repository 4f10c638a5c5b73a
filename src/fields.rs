// src/fields.rs
//
// Mutator builders for the draft update channel. Each returned closure
// replaces exactly one path of the record and leaves every sibling field and
// list order as it was. Out-of-range indices leave the record unchanged.

use crate::image_load::ImageTarget;
use crate::portfolio::{ExperienceEntry, PortfolioRecord, Project, SocialLink};

pub type Mutator = Box<dyn FnOnce(PortfolioRecord) -> PortfolioRecord>;

// ======================================================
// text <-> list helpers
// ======================================================

/// Comma separated tags, each trimmed. Empty segments and duplicates are kept.
pub fn split_tags(text: &str) -> Vec<String> {
    text.split(',').map(|t| t.trim().to_string()).collect()
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// One bullet per line, untrimmed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

fn optional_url(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

// ======================================================
// top-level scalars
// ======================================================

pub fn set_name(value: String) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |r| PortfolioRecord { name: value, ..r }
}

pub fn set_title(value: String) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |r| PortfolioRecord { title: value, ..r }
}

pub fn set_bio(value: String) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |r| PortfolioRecord { bio: value, ..r }
}

pub fn set_avatar_url(value: String) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |r| PortfolioRecord {
        avatar_url: value,
        ..r
    }
}

pub fn set_email(value: String) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |mut r| {
        r.contact.email = value;
        r
    }
}

// ======================================================
// list elements
// ======================================================

fn with_project(
    index: usize,
    f: impl FnOnce(&mut Project),
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |mut r| {
        if let Some(p) = r.projects.get_mut(index) {
            f(p);
        }
        r
    }
}

fn with_experience(
    index: usize,
    f: impl FnOnce(&mut ExperienceEntry),
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |mut r| {
        if let Some(e) = r.experience.get_mut(index) {
            f(e);
        }
        r
    }
}

fn with_social(
    index: usize,
    f: impl FnOnce(&mut SocialLink),
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |mut r| {
        if let Some(s) = r.contact.socials.get_mut(index) {
            f(s);
        }
        r
    }
}

pub fn set_project_title(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_project(index, move |p| p.title = value)
}

pub fn set_project_description(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_project(index, move |p| p.description = value)
}

pub fn set_project_tags_from_text(
    index: usize,
    text: &str,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    let tags = split_tags(text);
    with_project(index, move |p| p.tags = tags)
}

pub fn set_project_image_url(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_project(index, move |p| p.image_url = value)
}

pub fn set_project_live_url(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_project(index, move |p| p.live_url = optional_url(value))
}

pub fn set_project_source_url(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_project(index, move |p| p.source_url = optional_url(value))
}

pub fn set_skill_name(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    move |mut r| {
        if let Some(s) = r.skills.get_mut(index) {
            s.name = value;
        }
        r
    }
}

pub fn set_experience_company(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_experience(index, move |e| e.company = value)
}

pub fn set_experience_title(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_experience(index, move |e| e.title = value)
}

pub fn set_experience_duration(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_experience(index, move |e| e.duration = value)
}

pub fn set_experience_description_from_text(
    index: usize,
    text: &str,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    let lines = split_lines(text);
    with_experience(index, move |e| e.description = lines)
}

pub fn set_social_name(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_social(index, move |s| s.name = value)
}

pub fn set_social_url(
    index: usize,
    value: String,
) -> impl FnOnce(PortfolioRecord) -> PortfolioRecord {
    with_social(index, move |s| s.url = value)
}

/// Writes an encoded image into the field an image request was made for.
pub fn set_image(target: ImageTarget, data_uri: String) -> Mutator {
    match target {
        ImageTarget::Avatar => Box::new(set_avatar_url(data_uri)),
        ImageTarget::ProjectImage(i) => Box::new(set_project_image_url(i, data_uri)),
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Contact, Skill, SkillCategory};

    fn project(title: &str) -> Project {
        Project {
            title: title.into(),
            description: format!("{title} desc"),
            tags: vec!["a".into(), "b".into()],
            image_url: format!("{title}.png"),
            live_url: Some("#".into()),
            source_url: None,
        }
    }

    fn record() -> PortfolioRecord {
        PortfolioRecord {
            name: "A".into(),
            title: "T".into(),
            bio: "B".into(),
            avatar_url: "a.png".into(),
            contact: Contact {
                email: "a@b.c".into(),
                socials: vec![SocialLink {
                    name: "GitHub".into(),
                    url: "https://github.com".into(),
                    icon: "GitHub".into(),
                }],
            },
            projects: vec![project("P0"), project("P1"), project("P2")],
            skills: vec![
                Skill {
                    name: "Rust".into(),
                    category: SkillCategory::Languages,
                },
                Skill {
                    name: "egui".into(),
                    category: SkillCategory::Frontend,
                },
            ],
            experience: vec![ExperienceEntry {
                company: "Acme".into(),
                title: "Dev".into(),
                duration: "2020".into(),
                description: vec!["one".into()],
            }],
            edit_password: Some("x".into()),
        }
    }

    #[test]
    fn split_tags_trims_but_keeps_empties_and_duplicates() {
        assert_eq!(
            split_tags(" Rust,  egui ,,Rust, "),
            vec!["Rust", "egui", "", "Rust", ""]
        );
        assert_eq!(split_tags(""), vec![""]);
    }

    #[test]
    fn join_then_split_tags_is_stable_for_clean_tags() {
        let tags = vec!["React".to_string(), "Next.js".to_string()];
        assert_eq!(split_tags(&join_tags(&tags)), tags);
    }

    #[test]
    fn project_edit_replaces_only_the_indexed_element() {
        let before = record();
        let after = set_project_title(1, "New".into())(before.clone());

        assert_eq!(after.projects[1].title, "New");
        assert_eq!(after.projects[1].description, before.projects[1].description);
        assert_eq!(after.projects[0], before.projects[0]);
        assert_eq!(after.projects[2], before.projects[2]);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.name, before.name);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let before = record();
        let after = set_project_title(9, "X".into())(before.clone());
        assert_eq!(after, before);

        let after = set_experience_title(3, "X".into())(before.clone());
        assert_eq!(after, before);

        let after = set_skill_name(5, "X".into())(before.clone());
        assert_eq!(after, before);
    }

    #[test]
    fn tags_text_is_split_per_keystroke() {
        let after = set_project_tags_from_text(0, "a, b,")(record());
        assert_eq!(after.projects[0].tags, vec!["a", "b", ""]);
    }

    #[test]
    fn empty_optional_url_becomes_none() {
        let after = set_project_live_url(0, String::new())(record());
        assert!(after.projects[0].live_url.is_none());

        let after = set_project_source_url(0, "https://src".into())(after);
        assert_eq!(after.projects[0].source_url.as_deref(), Some("https://src"));
    }

    #[test]
    fn experience_description_is_one_bullet_per_line() {
        let after = set_experience_description_from_text(0, "first\nsecond\n")(record());
        assert_eq!(after.experience[0].description, vec!["first", "second", ""]);
    }

    #[test]
    fn nested_contact_edit_preserves_socials() {
        let before = record();
        let after = set_email("new@b.c".into())(before.clone());
        assert_eq!(after.contact.email, "new@b.c");
        assert_eq!(after.contact.socials, before.contact.socials);
    }

    #[test]
    fn set_image_routes_to_target_field() {
        let after = set_image(ImageTarget::ProjectImage(2), "data:x".into())(record());
        assert_eq!(after.projects[2].image_url, "data:x");
        assert_eq!(after.avatar_url, "a.png");

        let after = set_image(ImageTarget::Avatar, "data:y".into())(after);
        assert_eq!(after.avatar_url, "data:y");
    }
}
