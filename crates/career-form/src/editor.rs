//! Draft-and-commit editing for the education and work experience lists.
//!
//! A [`CollectionEditor`] keeps one draft entry apart from the committed
//! list. Field edits update the draft and refresh a per-field hint. A commit
//! runs the full validator and, when it passes, either appends the draft
//! under a fresh id or merges it into the entry being edited.

use std::fmt;

use tracing::{debug, warn};

use career_model::{
    ApplicationState, EducationEntry, EducationPatch, Field, FieldErrors, FormSettings,
    WorkExperienceEntry, WorkExperiencePatch,
};
use career_validate::{
    FieldIssue, ValidationContext, education_field_hint, validate_education,
    validate_work_experience, work_experience_field_hint,
};

use crate::action::Action;
use crate::id::EntryIdGenerator;
use crate::store::FormStore;

/// An entry type that lives in one of the state's ordered collections.
pub trait CollectionEntry: Clone + Default + fmt::Debug {
    /// Short name used in logs.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Write one field. Returns `false` for fields this entry does not have.
    fn set_field(&mut self, field: Field, value: String) -> bool;

    /// Full validator, run on commit.
    fn validate(&self, ctx: &ValidationContext) -> FieldErrors;

    /// Advisory check for a single edited field.
    fn field_hint(field: Field, value: &str, ctx: &ValidationContext) -> Option<String>;

    fn entries(state: &ApplicationState) -> &[Self];
    fn id_prefix(settings: &FormSettings) -> &str;

    fn add_action(self) -> Action;
    /// Merge every data field of `self` into the entry with `id`.
    fn update_action(self, id: String) -> Action;
    fn remove_action(id: String) -> Action;
}

impl CollectionEntry for EducationEntry {
    const KIND: &'static str = "education";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_field(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Degree => &mut self.degree,
            Field::Institution => &mut self.institution,
            Field::PassingYear => &mut self.passing_year,
            Field::Grade => &mut self.grade,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn validate(&self, ctx: &ValidationContext) -> FieldErrors {
        validate_education(self, ctx)
    }

    fn field_hint(field: Field, value: &str, ctx: &ValidationContext) -> Option<String> {
        education_field_hint(field, value, ctx)
    }

    fn entries(state: &ApplicationState) -> &[Self] {
        &state.educations
    }

    fn id_prefix(settings: &FormSettings) -> &str {
        &settings.entry_id_prefixes.education
    }

    fn add_action(self) -> Action {
        Action::AddEducation(self)
    }

    fn update_action(self, id: String) -> Action {
        Action::UpdateEducation {
            id,
            patch: EducationPatch::from_entry(self),
        }
    }

    fn remove_action(id: String) -> Action {
        Action::RemoveEducation(id)
    }
}

impl CollectionEntry for WorkExperienceEntry {
    const KIND: &'static str = "work_experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn set_field(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::CompanyName => &mut self.company_name,
            Field::Designation => &mut self.designation,
            Field::DurationMonths => &mut self.duration_months,
            Field::Responsibilities => &mut self.responsibilities,
            _ => return false,
        };
        *slot = value;
        true
    }

    fn validate(&self, _ctx: &ValidationContext) -> FieldErrors {
        validate_work_experience(self)
    }

    fn field_hint(field: Field, value: &str, _ctx: &ValidationContext) -> Option<String> {
        work_experience_field_hint(field, value)
    }

    fn entries(state: &ApplicationState) -> &[Self] {
        &state.work_experiences
    }

    fn id_prefix(settings: &FormSettings) -> &str {
        &settings.entry_id_prefixes.work_experience
    }

    fn add_action(self) -> Action {
        Action::AddWorkExperience(self)
    }

    fn update_action(self, id: String) -> Action {
        Action::UpdateWorkExperience {
            id,
            patch: WorkExperiencePatch::from_entry(self),
        }
    }

    fn remove_action(id: String) -> Action {
        Action::RemoveWorkExperience(id)
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Draft appended under this id.
    Added(String),
    /// Entry with this id overwritten by the draft.
    Updated(String),
    /// The entry being edited no longer exists; nothing changed.
    Discarded(String),
}

impl CommitOutcome {
    pub fn id(&self) -> &str {
        match self {
            CommitOutcome::Added(id) | CommitOutcome::Updated(id) | CommitOutcome::Discarded(id) => {
                id
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionEditor<E> {
    draft: E,
    /// Id of the committed entry loaded into the draft, if editing.
    editing: Option<String>,
    hints: FieldErrors,
}

pub type EducationEditor = CollectionEditor<EducationEntry>;
pub type WorkExperienceEditor = CollectionEditor<WorkExperienceEntry>;

impl<E: CollectionEntry> CollectionEditor<E> {
    pub fn new() -> Self {
        Self {
            draft: E::default(),
            editing: None,
            hints: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &E {
        &self.draft
    }

    /// Errors shown next to the draft: per-field hints while typing, or the
    /// full validator's findings after a rejected commit.
    pub fn hints(&self) -> &FieldErrors {
        &self.hints
    }

    pub fn has_errors(&self) -> bool {
        !self.hints.is_empty()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Update one draft field and refresh its hint.
    ///
    /// Returns `false`, leaving the draft untouched, for a field the entry
    /// does not have.
    pub fn edit_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
        ctx: &ValidationContext,
    ) -> bool {
        let value = value.into();
        match E::field_hint(field, &value, ctx) {
            Some(hint) => self.hints.insert(field, hint),
            None => {
                self.hints.remove(field);
            }
        }
        self.draft.set_field(field, value)
    }

    /// Validate the draft and write it into the store.
    ///
    /// On rejection the findings are kept as the editor's hints and
    /// returned; the store is not touched.
    pub fn commit(
        &mut self,
        store: &mut FormStore,
        ids: &mut EntryIdGenerator,
        ctx: &ValidationContext,
    ) -> Result<CommitOutcome, FieldErrors> {
        let mut errors = self.draft.validate(ctx);
        if self.editing.is_none() && !self.draft.id().is_empty() {
            let id = self.draft.id();
            if E::entries(store.state()).iter().any(|entry| entry.id() == id) {
                let issue = FieldIssue::DuplicateId { id: id.to_string() };
                errors.insert(Field::Id, issue.message(Field::Id));
            }
        }
        if !errors.is_empty() {
            warn!(kind = E::KIND, errors = errors.len(), "draft rejected");
            self.hints = errors.clone();
            return Err(errors);
        }

        let mut draft = std::mem::take(&mut self.draft);
        let outcome = match self.editing.take() {
            Some(id) => {
                let exists = E::entries(store.state()).iter().any(|entry| entry.id() == id);
                if exists {
                    store.dispatch(draft.update_action(id.clone()));
                    CommitOutcome::Updated(id)
                } else {
                    CommitOutcome::Discarded(id)
                }
            }
            None => {
                if draft.id().is_empty() {
                    draft.set_id(ids.next(E::id_prefix(&ctx.settings)));
                }
                let id = draft.id().to_string();
                store.dispatch(draft.add_action());
                CommitOutcome::Added(id)
            }
        };
        self.hints.clear();
        debug!(kind = E::KIND, id = outcome.id(), "draft committed");
        Ok(outcome)
    }

    /// Load a committed entry into the draft for editing.
    ///
    /// Returns `false` if no entry has this id.
    pub fn begin_edit(&mut self, state: &ApplicationState, id: &str) -> bool {
        let Some(entry) = E::entries(state).iter().find(|entry| entry.id() == id) else {
            return false;
        };
        self.draft = entry.clone();
        self.editing = Some(id.to_string());
        self.hints.clear();
        true
    }

    /// Drop the draft and return to add mode.
    pub fn cancel_edit(&mut self) {
        self.draft = E::default();
        self.editing = None;
        self.hints.clear();
    }

    /// Remove a committed entry.
    ///
    /// If it was the entry being edited, the editor returns to add mode with
    /// an empty draft.
    pub fn remove(&mut self, store: &mut FormStore, id: &str) {
        store.dispatch(E::remove_action(id.to_string()));
        if self.editing.as_deref() == Some(id) {
            self.cancel_edit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ValidationContext {
        ValidationContext::default().with_current_year(2026)
    }

    fn fill_education(editor: &mut EducationEditor, degree: &str) {
        let ctx = ctx();
        editor.edit_field(Field::Degree, degree, &ctx);
        editor.edit_field(Field::Institution, "Tribhuvan University", &ctx);
        editor.edit_field(Field::PassingYear, "2018", &ctx);
        editor.edit_field(Field::Grade, "A", &ctx);
    }

    #[test]
    fn add_assigns_prefixed_id_and_resets_draft() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = EducationEditor::new();
        fill_education(&mut editor, "BBA");

        let outcome = editor.commit(&mut store, &mut ids, &ctx()).expect("valid draft");
        let CommitOutcome::Added(id) = outcome else {
            panic!("expected an add, got {outcome:?}");
        };
        assert!(id.starts_with("edu-"));
        assert_eq!(store.state().educations.len(), 1);
        assert_eq!(store.state().educations[0].id, id);
        assert_eq!(editor.draft(), &EducationEntry::default());
        assert!(!editor.has_errors());
    }

    #[test]
    fn invalid_draft_is_not_committed() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = EducationEditor::new();
        editor.edit_field(Field::Degree, "BBA", &ctx());

        let errors = editor.commit(&mut store, &mut ids, &ctx()).unwrap_err();
        assert!(errors.contains(Field::Institution));
        assert!(errors.contains(Field::PassingYear));
        assert!(store.state().educations.is_empty());
        assert_eq!(editor.hints(), &errors);
        assert_eq!(editor.draft().degree, "BBA");
    }

    #[test]
    fn field_hints_follow_keystrokes() {
        let mut editor = WorkExperienceEditor::new();
        let ctx = ctx();
        editor.edit_field(Field::DurationMonths, "0", &ctx);
        assert_eq!(
            editor.hints().get(Field::DurationMonths),
            Some("Duration must be a positive number")
        );
        editor.edit_field(Field::DurationMonths, "18", &ctx);
        assert!(editor.hints().is_empty());
        assert!(!editor.edit_field(Field::Email, "x@y.z", &ctx));
    }

    #[test]
    fn edit_keeps_id_and_position() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = EducationEditor::new();
        fill_education(&mut editor, "SLC");
        editor.commit(&mut store, &mut ids, &ctx()).expect("first");
        fill_education(&mut editor, "BBA");
        editor.commit(&mut store, &mut ids, &ctx()).expect("second");
        let first_id = store.state().educations[0].id.clone();

        assert!(editor.begin_edit(store.state(), &first_id));
        assert_eq!(editor.draft().degree, "SLC");
        editor.edit_field(Field::Grade, "A+", &ctx());
        let outcome = editor.commit(&mut store, &mut ids, &ctx()).expect("update");

        assert_eq!(outcome, CommitOutcome::Updated(first_id.clone()));
        let educations = &store.state().educations;
        assert_eq!(educations.len(), 2);
        assert_eq!(educations[0].id, first_id);
        assert_eq!(educations[0].grade, "A+");
        assert_eq!(educations[1].degree, "BBA");
        assert!(!editor.is_editing());
    }

    #[test]
    fn duplicate_explicit_id_is_rejected() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = EducationEditor::new();
        fill_education(&mut editor, "BBA");
        editor.edit_field(Field::Id, "edu-1", &ctx());
        editor.commit(&mut store, &mut ids, &ctx()).expect("first");

        fill_education(&mut editor, "MBA");
        editor.edit_field(Field::Id, "edu-1", &ctx());
        let errors = editor.commit(&mut store, &mut ids, &ctx()).unwrap_err();
        assert_eq!(errors.get(Field::Id), Some("An entry with id edu-1 already exists"));
        assert_eq!(store.state().educations.len(), 1);
    }

    #[test]
    fn removing_edited_entry_resets_editor() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = EducationEditor::new();
        fill_education(&mut editor, "BBA");
        let outcome = editor.commit(&mut store, &mut ids, &ctx()).expect("add");

        assert!(editor.begin_edit(store.state(), outcome.id()));
        editor.remove(&mut store, outcome.id());
        assert!(store.state().educations.is_empty());
        assert!(!editor.is_editing());
        assert_eq!(editor.draft(), &EducationEntry::default());
    }

    #[test]
    fn removing_other_entry_keeps_edit_mode() {
        let mut store = FormStore::new();
        let mut ids = EntryIdGenerator::new();
        let mut editor = WorkExperienceEditor::new();
        let ctx = ctx();
        for company in ["ABC Company", "XYZ Traders"] {
            editor.edit_field(Field::CompanyName, company, &ctx);
            editor.edit_field(Field::Designation, "Officer", &ctx);
            editor.edit_field(Field::DurationMonths, "12", &ctx);
            editor.commit(&mut store, &mut ids, &ctx).expect("add");
        }
        let first = store.state().work_experiences[0].id.clone();
        let second = store.state().work_experiences[1].id.clone();

        assert!(editor.begin_edit(store.state(), &first));
        editor.remove(&mut store, &second);
        assert_eq!(editor.editing_id(), Some(first.as_str()));
    }
}
