use crate::document::{PortraitSize, SceneRecord, DEFAULT_PORTRAIT_SIZE};
use crate::sequencer::CutsceneEvent;

/// A portrait ready to display: an opaque asset reference plus the size the
/// record requested (or the default). Resolving the reference to pixels is
/// the front end's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PortraitSlot {
    pub asset_ref: String,
    pub size: PortraitSize,
}

/// The collaborator contract as plain data: what a dialog front end should
/// currently be showing. Front ends mirror this after each drained event
/// instead of interpreting events themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresentationState {
    pub visible: bool,
    pub step_label: String,
    pub speaker: String,
    pub line: String,
    pub portrait: Option<PortraitSlot>,
    /// Sticky: a record with an empty background ref keeps the previous one.
    pub background_ref: Option<String>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &CutsceneEvent) {
        match event {
            CutsceneEvent::SceneChanged { step_label, scene } => {
                self.visible = true;
                self.step_label = step_label.clone();
                self.speaker = scene.speaker.clone();
                self.line = scene.line.clone();
                self.portrait = portrait_slot(scene);
                if let Some(background) = scene.background_ref() {
                    self.background_ref = Some(background.to_string());
                }
            }
            CutsceneEvent::Ended => {
                self.visible = false;
            }
        }
    }
}

fn portrait_slot(scene: &SceneRecord) -> Option<PortraitSlot> {
    scene.portrait_ref().map(|asset_ref| PortraitSlot {
        asset_ref: asset_ref.to_string(),
        size: scene
            .portrait_size_override()
            .unwrap_or(DEFAULT_PORTRAIT_SIZE),
    })
}
