pub mod autoplay;
pub mod dialog;
pub mod document;
pub mod loader;
pub mod sequencer;

pub use autoplay::AutoAdvance;
pub use dialog::{PortraitSlot, PresentationState};
pub use document::{
    CutsceneDocument, PortraitSize, SceneRecord, DEFAULT_PORTRAIT_SIZE,
};
pub use loader::{load_document, DocumentError};
pub use sequencer::{CutsceneEvent, CutsceneSequencer};
