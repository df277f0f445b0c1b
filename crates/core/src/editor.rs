//! Case-study editor state.
//!
//! The editor holds `results` and `tags` as ordered lists of input slots.
//! A list always keeps at least one slot so the form never renders an empty
//! group; blank slots are dropped only when the draft is turned into a
//! payload.

use serde::{Deserialize, Serialize};

use crate::forms::CaseStudyForm;

/// An ordered list of text inputs that never shrinks below one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableList {
    items: Vec<String>,
}

impl Default for EditableList {
    fn default() -> Self {
        Self {
            items: vec![String::new()],
        }
    }
}

impl EditableList {
    /// Start from existing values; an empty input yields one blank slot.
    pub fn from_values(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::default()
        } else {
            Self { items: values }
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a blank slot.
    pub fn add(&mut self) {
        self.items.push(String::new());
    }

    /// Remove the slot at `index`. Returns `false` (and does nothing) when
    /// it is the last remaining slot or the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Replace the value at `index`. Returns `false` for an out-of-range index.
    pub fn update_at(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Values with blank (whitespace-only) slots removed, order preserved.
    pub fn non_blank(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// The fields persisted for a case study, after blank list entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyPayload {
    pub title: String,
    pub description: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub image_url: String,
    pub results: Vec<String>,
    pub tags: Vec<String>,
}

/// Which list input group an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorList {
    Results,
    Tags,
}

/// One edit from the case-study editor.
///
/// ```json
/// { "op": "add", "list": "tags" }
/// { "op": "remove", "list": "results", "index": 1 }
/// { "op": "update", "list": "results", "index": 0, "value": "2x traffic" }
/// { "op": "reset" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditorEdit {
    Add {
        list: EditorList,
    },
    Remove {
        list: EditorList,
        index: usize,
    },
    Update {
        list: EditorList,
        index: usize,
        value: String,
    },
    Reset,
}

/// Working copy of the case-study form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseStudyEditor {
    pub form: CaseStudyFields,
    pub results: EditableList,
    pub tags: EditableList,
}

/// Scalar fields of the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaseStudyFields {
    pub title: String,
    pub description: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub image_url: String,
}

impl CaseStudyEditor {
    /// Load a submitted form into editor state.
    pub fn from_form(form: CaseStudyForm) -> Self {
        Self {
            form: CaseStudyFields {
                title: form.title,
                description: form.description,
                client: form.client,
                industry: form.industry,
                challenge: form.challenge,
                solution: form.solution,
                image_url: form.image_url,
            },
            results: EditableList::from_values(form.results),
            tags: EditableList::from_values(form.tags),
        }
    }

    fn list_mut(&mut self, list: EditorList) -> &mut EditableList {
        match list {
            EditorList::Results => &mut self.results,
            EditorList::Tags => &mut self.tags,
        }
    }

    /// Apply one edit. Returns `false` when it changed nothing: removing
    /// the last slot, or an index past the end.
    pub fn apply(&mut self, edit: EditorEdit) -> bool {
        match edit {
            EditorEdit::Add { list } => {
                self.list_mut(list).add();
                true
            }
            EditorEdit::Remove { list, index } => self.list_mut(list).remove_at(index),
            EditorEdit::Update { list, index, value } => {
                self.list_mut(list).update_at(index, value)
            }
            EditorEdit::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Clear every field back to a fresh editor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the payload to persist, dropping blank results and tags.
    pub fn to_payload(&self) -> CaseStudyPayload {
        CaseStudyPayload {
            title: self.form.title.clone(),
            description: self.form.description.clone(),
            client: self.form.client.clone(),
            industry: self.form.industry.clone(),
            challenge: self.form.challenge.clone(),
            solution: self.form.solution.clone(),
            image_url: self.form.image_url.clone(),
            results: self.results.non_blank(),
            tags: self.tags.non_blank(),
        }
    }
}

/// New value of the `featured` flag after a toggle.
pub fn toggle_featured(featured: bool) -> bool {
    !featured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_one_blank_slot() {
        let list = EditableList::default();
        assert_eq!(list.items(), &[String::new()]);
    }

    #[test]
    fn remove_never_drops_the_last_slot() {
        let mut list = EditableList::default();
        assert!(!list.remove_at(0));
        assert_eq!(list.len(), 1);

        list.add();
        assert!(list.remove_at(1));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_and_update_out_of_range_are_no_ops() {
        let mut list = EditableList::from_values(vec!["a".into(), "b".into()]);
        assert!(!list.remove_at(5));
        assert!(!list.update_at(2, "c"));
        assert_eq!(list.items(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn update_and_remove_keep_order() {
        let mut list = EditableList::default();
        list.update_at(0, "+180% revenue");
        list.add();
        list.update_at(1, "2x traffic");
        list.add();
        list.update_at(2, "50% faster");
        assert!(list.remove_at(1));
        assert_eq!(
            list.items(),
            &["+180% revenue".to_string(), "50% faster".to_string()]
        );
    }

    #[test]
    fn payload_drops_blank_entries() {
        let form = CaseStudyForm {
            title: "Storefront".into(),
            results: vec!["".into(), "3x sales".into(), "   ".into()],
            tags: vec!["E-commerce".into(), "".into()],
            ..Default::default()
        };
        let payload = CaseStudyEditor::from_form(form).to_payload();
        assert_eq!(payload.results, vec!["3x sales".to_string()]);
        assert_eq!(payload.tags, vec!["E-commerce".to_string()]);
    }

    #[test]
    fn reset_restores_blank_editor() {
        let mut editor = CaseStudyEditor::from_form(CaseStudyForm {
            title: "x".into(),
            tags: vec!["a".into(), "b".into()],
            ..Default::default()
        });
        editor.reset();
        assert_eq!(editor, CaseStudyEditor::default());
        assert_eq!(editor.tags.len(), 1);
    }

    #[test]
    fn edits_target_the_named_list() {
        let mut editor = CaseStudyEditor::default();
        assert!(editor.apply(EditorEdit::Add {
            list: EditorList::Tags
        }));
        assert!(editor.apply(EditorEdit::Update {
            list: EditorList::Tags,
            index: 1,
            value: "SEO".into(),
        }));
        assert_eq!(editor.tags.items(), &[String::new(), "SEO".to_string()]);
        assert_eq!(editor.results.len(), 1);

        assert!(!editor.apply(EditorEdit::Remove {
            list: EditorList::Results,
            index: 0,
        }));
        assert!(editor.apply(EditorEdit::Remove {
            list: EditorList::Tags,
            index: 0,
        }));
        assert_eq!(editor.tags.items(), &["SEO".to_string()]);
    }

    #[test]
    fn edits_parse_from_tagged_json() {
        let edit: EditorEdit = serde_json::from_str(
            r#"{"op":"update","list":"results","index":2,"value":"3x sales"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            EditorEdit::Update {
                list: EditorList::Results,
                index: 2,
                value: "3x sales".into(),
            }
        );
        let reset: EditorEdit = serde_json::from_str(r#"{"op":"reset"}"#).unwrap();
        assert_eq!(reset, EditorEdit::Reset);
    }

    #[test]
    fn toggling_featured_twice_is_identity() {
        for start in [true, false] {
            assert_eq!(toggle_featured(toggle_featured(start)), start);
            assert_ne!(toggle_featured(start), start);
        }
    }
}
