use serde::Deserialize;

/// Portrait display size when a record does not override it.
pub const DEFAULT_PORTRAIT_SIZE: PortraitSize = PortraitSize {
    width: 256.0,
    height: 256.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortraitSize {
    pub width: f32,
    pub height: f32,
}

/// One step of a cutscene. Absent JSON fields take empty/zero defaults;
/// an empty asset reference means "no asset".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneRecord {
    pub speaker: String,
    pub line: String,
    pub portrait_ref: String,
    pub background_ref: String,
    pub portrait_width: f32,
    pub portrait_height: f32,
    pub duration_seconds: f32,
}

impl SceneRecord {
    pub fn portrait_ref(&self) -> Option<&str> {
        non_empty(&self.portrait_ref)
    }

    /// Empty means "keep whatever background is already showing".
    pub fn background_ref(&self) -> Option<&str> {
        non_empty(&self.background_ref)
    }

    /// The size override applies only when both dimensions are positive;
    /// a lone width or height falls back to [`DEFAULT_PORTRAIT_SIZE`].
    pub fn portrait_size_override(&self) -> Option<PortraitSize> {
        if self.portrait_width > 0.0 && self.portrait_height > 0.0 {
            Some(PortraitSize {
                width: self.portrait_width,
                height: self.portrait_height,
            })
        } else {
            None
        }
    }
}

/// A parsed cutscene: a display name plus scene records in playback order.
/// Immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CutsceneDocument {
    pub name: String,
    pub scenes: Vec<SceneRecord>,
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
