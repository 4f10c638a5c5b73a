// src/store.rs

use crate::error::{AppError, AppResult};
use crate::portfolio::PortfolioRecord;

pub const MAX_PORTFOLIO_BYTES: u64 = 1024 * 1024;

/// Committed record plus its working draft.
///
/// Both are `None` until a load succeeds. The draft is always an owned deep
/// copy of the committed record (or a descendant of one), so nothing written
/// into it can reach the committed side except through `commit_draft`.
#[derive(Debug, Default)]
pub struct ContentStore {
    committed: Option<PortfolioRecord>,
    draft: Option<PortfolioRecord>,
    load_error: Option<String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, raw: &[u8]) -> AppResult<PortfolioRecord> {
        let res = parse_record(raw);

        match &res {
            Ok(rec) => {
                self.committed = Some(rec.clone());
                self.draft = Some(rec.clone());
                self.load_error = None;
            }
            Err(e) => self.fail_load(e),
        }

        res
    }

    /// Marks the store as failed to load; sticky until the next successful load.
    pub fn fail_load(&mut self, err: &AppError) {
        self.committed = None;
        self.draft = None;
        self.load_error = Some(err.to_string());
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.committed.is_some()
    }

    pub fn committed(&self) -> Option<&PortfolioRecord> {
        self.committed.as_ref()
    }

    pub fn draft(&self) -> Option<&PortfolioRecord> {
        self.draft.as_ref()
    }

    pub fn active_view(&self, editing: bool) -> Option<&PortfolioRecord> {
        if editing {
            self.draft.as_ref()
        } else {
            self.committed.as_ref()
        }
    }

    /// Returns false when nothing is loaded (mutation skipped).
    pub fn update_draft<F>(&mut self, mutator: F) -> bool
    where
        F: FnOnce(PortfolioRecord) -> PortfolioRecord,
    {
        let Some(current) = self.draft.take() else {
            return false;
        };

        // editPassword is sourced from the load only
        let password = current.edit_password.clone();
        let mut next = mutator(current);
        next.edit_password = password;

        self.draft = Some(next);
        true
    }

    pub fn commit_draft(&mut self) -> AppResult<()> {
        let draft = self.draft.as_ref().ok_or(AppError::NoRecordLoaded)?;
        self.committed = Some(draft.clone());
        Ok(())
    }

    pub fn reset_draft(&mut self) {
        self.draft = self.committed.clone();
    }
}

fn parse_record(raw: &[u8]) -> AppResult<PortfolioRecord> {
    let bytes = raw.len() as u64;
    if bytes > MAX_PORTFOLIO_BYTES {
        return Err(AppError::LoadTooLarge {
            bytes,
            max: MAX_PORTFOLIO_BYTES,
        });
    }

    serde_json::from_slice(raw).map_err(|e| AppError::LoadInvalidJson(e.to_string()))
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Project, Skill, SkillCategory};

    const DOC: &str = r#"{
        "name": "A",
        "title": "T",
        "bio": "B",
        "avatarUrl": "a.png",
        "contact": { "email": "a@b.c", "socials": [] },
        "projects": [
            { "title": "P", "description": "D", "tags": ["x"], "imageUrl": "p.png" }
        ],
        "skills": [{ "name": "Rust", "category": "Languages" }],
        "experience": [],
        "editPassword": "x"
    }"#;

    fn loaded() -> ContentStore {
        let mut store = ContentStore::new();
        store.load(DOC.as_bytes()).expect("load");
        store
    }

    #[test]
    fn load_populates_committed_and_draft_equally() {
        let store = loaded();
        assert_eq!(store.committed(), store.draft());
        assert!(store.load_error().is_none());
    }

    #[test]
    fn failed_load_clears_both_and_sets_sticky_error() {
        let mut store = loaded();
        let err = store.load(b"{ not json").unwrap_err();
        assert!(matches!(err, AppError::LoadInvalidJson(_)));
        assert!(store.committed().is_none());
        assert!(store.draft().is_none());
        assert!(store.load_error().is_some());

        // stays set across reads
        assert!(store.load_error().is_some());
    }

    #[test]
    fn oversize_payload_is_rejected_before_parsing() {
        let mut store = ContentStore::new();
        let big = vec![b' '; (MAX_PORTFOLIO_BYTES + 1) as usize];
        let err = store.load(&big).unwrap_err();
        assert!(matches!(err, AppError::LoadTooLarge { .. }));
    }

    #[test]
    fn update_draft_is_a_noop_when_nothing_loaded() {
        let mut store = ContentStore::new();
        let applied = store.update_draft(|mut r| {
            r.name = "B".into();
            r
        });
        assert!(!applied);
        assert!(store.draft().is_none());
    }

    #[test]
    fn draft_mutation_never_aliases_committed_nested_lists() {
        let mut store = loaded();
        store.update_draft(|mut r| {
            r.projects[0].tags.push("y".into());
            r.projects.push(Project {
                title: "P2".into(),
                description: String::new(),
                tags: Vec::new(),
                image_url: String::new(),
                live_url: None,
                source_url: None,
            });
            r.skills[0] = Skill {
                name: "Go".into(),
                category: SkillCategory::Backend,
            };
            r
        });

        let committed = store.committed().unwrap();
        assert_eq!(committed.projects.len(), 1);
        assert_eq!(committed.projects[0].tags, vec!["x".to_string()]);
        assert_eq!(committed.skills[0].name, "Rust");
    }

    #[test]
    fn mutators_cannot_change_edit_password() {
        let mut store = loaded();
        store.update_draft(|mut r| {
            r.edit_password = Some("hijack".into());
            r
        });
        assert_eq!(store.draft().unwrap().edit_password.as_deref(), Some("x"));

        store.update_draft(|mut r| {
            r.edit_password = None;
            r
        });
        assert_eq!(store.draft().unwrap().edit_password.as_deref(), Some("x"));
    }

    #[test]
    fn boxed_image_mutator_applies_on_the_calling_thread() {
        use crate::fields::set_image;
        use crate::image_load::ImageTarget;

        let mut store = loaded();
        let mutator = set_image(ImageTarget::ProjectImage(0), "data:image/png;base64,AA".into());
        assert!(store.update_draft(mutator));

        let draft = store.draft().expect("draft");
        assert_eq!(draft.projects[0].image_url, "data:image/png;base64,AA");
        assert_eq!(draft.edit_password.as_deref(), Some("x"));
        assert_eq!(store.committed().expect("committed").projects[0].image_url, "p.png");
    }

    #[test]
    fn active_view_switches_on_editing_flag() {
        let mut store = loaded();
        store.update_draft(|mut r| {
            r.name = "B".into();
            r
        });
        assert_eq!(store.active_view(false).unwrap().name, "A");
        assert_eq!(store.active_view(true).unwrap().name, "B");
    }

    #[test]
    fn reset_and_commit_copy_whole_records() {
        let mut store = loaded();
        store.update_draft(|mut r| {
            r.bio = "changed".into();
            r
        });
        store.reset_draft();
        assert_eq!(store.draft(), store.committed());

        store.update_draft(|mut r| {
            r.bio = "kept".into();
            r
        });
        store.commit_draft().unwrap();
        assert_eq!(store.committed().unwrap().bio, "kept");
        assert_eq!(store.draft(), store.committed());
    }
}
