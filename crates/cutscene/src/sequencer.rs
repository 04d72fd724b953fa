use tracing::{debug, info};

use crate::document::{CutsceneDocument, SceneRecord};

/// Notifications produced by [`CutsceneSequencer`], drained by the
/// presentation collaborator via [`CutsceneSequencer::drain_events`].
#[derive(Debug, Clone, PartialEq)]
pub enum CutsceneEvent {
    SceneChanged {
        /// 1-based ordinal label, e.g. "Scene 3".
        step_label: String,
        scene: SceneRecord,
    },
    Ended,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Cursor {
    #[default]
    NotStarted,
    At(usize),
    Exhausted,
}

/// Linear playback over one owned document. Synchronous and single-threaded:
/// each operation steps the cursor at most once and queues at most one event.
///
/// `Ended` fires exactly once per document; `advance()` after exhaustion is a
/// no-op. Loading a new document discards the old one and any undrained
/// events.
#[derive(Debug, Default)]
pub struct CutsceneSequencer {
    document: Option<CutsceneDocument>,
    cursor: Cursor,
    pending_events: Vec<CutsceneEvent>,
}

impl CutsceneSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any current document and presents the first scene. An empty
    /// document is not an error: it goes straight to `Ended` without ever
    /// emitting `SceneChanged`.
    pub fn load(&mut self, document: CutsceneDocument) {
        info!(
            name = %document.name,
            scene_count = document.scenes.len(),
            "cutscene_loaded"
        );
        self.document = Some(document);
        self.cursor = Cursor::NotStarted;
        self.pending_events.clear();
        self.advance();
    }

    /// Steps to the next scene, queueing `SceneChanged` while scenes remain
    /// and `Ended` once when the document is exhausted.
    ///
    /// Precondition: a document has been loaded. Calling this beforehand is
    /// a no-op rather than an error.
    pub fn advance(&mut self) {
        let Some(document) = &self.document else {
            debug!("advance_without_document");
            return;
        };

        let next = match self.cursor {
            Cursor::NotStarted => 0,
            Cursor::At(index) => index + 1,
            Cursor::Exhausted => return,
        };

        if let Some(scene) = document.scenes.get(next) {
            let step_label = format!("Scene {}", next + 1);
            debug!(step = %step_label, speaker = %scene.speaker, "scene_changed");
            self.pending_events.push(CutsceneEvent::SceneChanged {
                step_label,
                scene: scene.clone(),
            });
            self.cursor = Cursor::At(next);
        } else {
            info!(name = %document.name, "cutscene_ended");
            self.pending_events.push(CutsceneEvent::Ended);
            self.cursor = Cursor::Exhausted;
        }
    }

    pub fn drain_events(&mut self) -> Vec<CutsceneEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn current_scene(&self) -> Option<&SceneRecord> {
        match self.cursor {
            Cursor::At(index) => self.document.as_ref()?.scenes.get(index),
            Cursor::NotStarted | Cursor::Exhausted => None,
        }
    }

    pub fn document_name(&self) -> Option<&str> {
        self.document.as_ref().map(|document| document.name.as_str())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == Cursor::Exhausted
    }
}
