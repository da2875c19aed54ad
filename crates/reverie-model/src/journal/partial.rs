use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// What the user typed into the write form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalEntryDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl JournalEntryDraft {
    #[must_use]
    pub fn new(title: Option<String>, content: impl Into<String>) -> Self {
        Self {
            title,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

/// Row handed to the entry store. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewJournalEntry {
    pub user_id: Uuid,
    pub title: Option<String>,
    pub content: String,
    pub mood: Option<String>,
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(JournalEntryDraft::default().word_count(), 0);
        assert_eq!(JournalEntryDraft::new(None, "  \n\t ").word_count(), 0);
        assert_eq!(JournalEntryDraft::new(None, "Today  was\na good\tday ").word_count(), 5);
    }

    #[test]
    fn test_blank() {
        assert!(JournalEntryDraft::new(Some("title".into()), " \n ").is_blank());
        assert!(!JournalEntryDraft::new(None, " x ").is_blank());
    }

    #[test]
    fn test_serialize_new_entry_keeps_nulls() {
        let user_id = Uuid::new_v4();
        let entry = NewJournalEntry {
            user_id,
            title: None,
            content: "hello".into(),
            mood: Some("calm".into()),
            summary: None,
        };
        assert_eq!(
            format!(r#"{{"user_id":"{user_id}","title":null,"content":"hello","mood":"calm","summary":null}}"#),
            serde_json::to_string(&entry).unwrap()
        );
    }
}
