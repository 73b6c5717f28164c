//! Trip note input and checklist handling.

use chrono::NaiveDate;
use travelmate_shared::types::{ChecklistItemId, NoteId};

use super::error::ItineraryError;
use super::types::{ChecklistItem, TripNote};

/// Raw note form input.
///
/// Checklist entries and links are newline-separated.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    /// Day the note refers to. Defaults to today.
    pub date: Option<NaiveDate>,
    /// Note text.
    pub content: String,
    /// One checklist entry per line.
    pub checklist: String,
    /// One link per line.
    pub links: String,
}

impl NoteDraft {
    /// Builds a note with fresh IDs.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::EmptyNote` if the content is blank.
    pub fn into_note(self, today: NaiveDate) -> Result<TripNote, ItineraryError> {
        if self.content.trim().is_empty() {
            return Err(ItineraryError::EmptyNote);
        }

        let checklist = lines(&self.checklist)
            .map(|text| ChecklistItem {
                id: ChecklistItemId::new(),
                text,
                checked: false,
            })
            .collect();

        Ok(TripNote {
            id: NoteId::new(),
            date: self.date.unwrap_or(today),
            content: self.content,
            checklist,
            links: lines(&self.links).collect(),
        })
    }
}

/// Partial update for an existing note. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    /// New date.
    pub date: Option<NaiveDate>,
    /// New content.
    pub content: Option<String>,
    /// Replacement links.
    pub links: Option<Vec<String>>,
}

impl NoteUpdate {
    /// Applies the update in place.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::EmptyNote` if the new content is blank; the
    /// note is unchanged in that case.
    pub fn apply(self, note: &mut TripNote) -> Result<(), ItineraryError> {
        if self
            .content
            .as_deref()
            .is_some_and(|content| content.trim().is_empty())
        {
            return Err(ItineraryError::EmptyNote);
        }

        if let Some(date) = self.date {
            note.date = date;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(links) = self.links {
            note.links = links;
        }
        Ok(())
    }
}

impl TripNote {
    /// Flips a checklist item and returns its new state.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::ChecklistItemNotFound` if no item has that ID.
    pub fn toggle_item(&mut self, item_id: ChecklistItemId) -> Result<bool, ItineraryError> {
        let item = self
            .checklist
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(ItineraryError::ChecklistItemNotFound(item_id))?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    /// Returns (checked, total) checklist counts.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let checked = self.checklist.iter().filter(|item| item.checked).count();
        (checked, self.checklist.len())
    }
}

fn lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
}
