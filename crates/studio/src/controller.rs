//! Create/edit/delete workflow shared by projects and categories.
//!
//! The list shown is always the result of the last full re-fetch; writes
//! never patch it locally. A failed save leaves both the draft and the
//! editor state in place so the operator can retry.

use std::sync::Arc;

use nemitzam_core::editor::EditorState;
use nemitzam_core::error::CoreError;
use nemitzam_core::types::DbId;
use nemitzam_db::{Gateway, GatewayResult};

use crate::entity::ContentEntity;
use crate::error::{StudioError, StudioResult};
use crate::prompt::{Notice, Prompt};

/// What a successful save did.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome<E> {
    Created(E),
    Updated(E),
}

/// What a delete request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator declined; no gateway call was made.
    Cancelled,
    Deleted,
    /// The delete ran but no row had that id.
    Missing,
}

pub struct ContentController<E: ContentEntity> {
    gateway: Arc<dyn Gateway>,
    prompt: Arc<dyn Prompt>,
    items: Vec<E>,
    draft: E::Draft,
    state: EditorState,
}

impl<E: ContentEntity> std::fmt::Debug for ContentController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentController")
            .field("items", &self.items.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<E: ContentEntity> ContentController<E> {
    pub fn new(gateway: Arc<dyn Gateway>, prompt: Arc<dyn Prompt>) -> Self {
        Self {
            gateway,
            prompt,
            items: Vec::new(),
            draft: E::Draft::default(),
            state: EditorState::default(),
        }
    }

    /// Rows from the last successful fetch.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &E::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut E::Draft {
        &mut self.draft
    }

    /// Re-fetch the whole collection. On failure the stale list is kept.
    pub async fn refresh(&mut self) -> GatewayResult<()> {
        match E::list(self.gateway.as_ref()).await {
            Ok(items) => {
                tracing::debug!(entity = E::NAME, count = items.len(), "List loaded");
                self.items = items;
                Ok(())
            }
            Err(err) => {
                tracing::error!(entity = E::NAME, error = %err, "Failed to load list");
                Err(err)
            }
        }
    }

    /// Open an empty form.
    pub fn begin_create(&mut self) {
        self.draft = E::Draft::default();
        self.state.begin_create();
    }

    /// Open the form pre-filled from the listed row `id`.
    pub fn begin_edit(&mut self, id: DbId) -> Result<(), CoreError> {
        let row = self
            .items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(CoreError::NotFound {
                entity: E::NAME,
                id,
            })?;
        self.draft = row.to_draft();
        self.state.begin_edit(id);
        Ok(())
    }

    /// Close the form and discard the draft.
    pub fn cancel(&mut self) {
        self.draft = E::Draft::default();
        self.state.close();
    }

    /// Validate the draft and write it: an update when editing a row, an
    /// insert otherwise.
    pub async fn save(&mut self) -> StudioResult<SaveOutcome<E>> {
        let messages = E::MESSAGES;

        if let Err(err) = E::validate(&self.draft) {
            self.prompt.notify(Notice::warning(messages.missing_fields));
            return Err(err.into());
        }

        let prepared = E::prepare(&self.draft);
        let gateway = self.gateway.as_ref();
        let result = match self.state.edit_target() {
            Some(id) => match E::update(gateway, id, &prepared).await {
                Ok(Some(row)) => Ok(SaveOutcome::Updated(row)),
                Ok(None) => Err(StudioError::Core(CoreError::NotFound {
                    entity: E::NAME,
                    id,
                })),
                Err(err) => Err(err.into()),
            },
            None => E::insert(gateway, &prepared)
                .await
                .map(SaveOutcome::Created)
                .map_err(StudioError::from),
        };

        match result {
            Ok(outcome) => {
                let (message, id) = match &outcome {
                    SaveOutcome::Created(row) => (messages.created, row.id()),
                    SaveOutcome::Updated(row) => (messages.updated, row.id()),
                };
                tracing::info!(entity = E::NAME, id, "Saved");
                self.prompt.notify(Notice::success(message));
                self.draft = E::Draft::default();
                self.state.close();
                // A failed reload is logged; the stale list stays.
                let _ = self.refresh().await;
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(entity = E::NAME, error = %err, "Save failed");
                self.prompt
                    .notify(Notice::failure(messages.save_action, &err));
                Err(err)
            }
        }
    }

    /// Delete row `id` after the operator confirms.
    pub async fn delete(&mut self, id: DbId) -> StudioResult<DeleteOutcome> {
        let messages = E::MESSAGES;

        if !self.prompt.confirm(messages.confirm_delete) {
            tracing::debug!(entity = E::NAME, id, "Delete declined");
            return Ok(DeleteOutcome::Cancelled);
        }

        match E::delete(self.gateway.as_ref(), id).await {
            Ok(existed) => {
                tracing::info!(entity = E::NAME, id, existed, "Deleted");
                self.prompt.notify(Notice::success(messages.deleted));
                let _ = self.refresh().await;
                Ok(if existed {
                    DeleteOutcome::Deleted
                } else {
                    DeleteOutcome::Missing
                })
            }
            Err(err) => {
                tracing::error!(entity = E::NAME, id, error = %err, "Delete failed");
                self.prompt
                    .notify(Notice::failure(messages.delete_action, &err));
                Err(err.into())
            }
        }
    }
}
