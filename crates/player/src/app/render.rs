use std::fmt::Write as _;

use cutscene::PresentationState;

/// Formats one dialog frame as terminal text. A hidden dialog renders as a
/// closing banner, matching the "hide on ended" collaborator contract.
pub(crate) fn frame(state: &PresentationState) -> String {
    if !state.visible {
        return "--- cutscene finished ---\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "--- {} ---", state.step_label);
    if let Some(background) = &state.background_ref {
        let _ = writeln!(out, "[backdrop: {background}]");
    }
    if let Some(portrait) = &state.portrait {
        let _ = writeln!(
            out,
            "[portrait: {} {}x{}]",
            portrait.asset_ref, portrait.size.width, portrait.size.height
        );
    }
    if state.speaker.is_empty() {
        let _ = writeln!(out, "{}", state.line);
    } else {
        let _ = writeln!(out, "{}: {}", state.speaker, state.line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutscene::{CutsceneEvent, SceneRecord};

    fn state_showing(scene: SceneRecord) -> PresentationState {
        let mut state = PresentationState::new();
        state.apply(&CutsceneEvent::SceneChanged {
            step_label: "Scene 1".to_string(),
            scene,
        });
        state
    }

    #[test]
    fn renders_speaker_line_and_assets() {
        let state = state_showing(SceneRecord {
            speaker: "A".to_string(),
            line: "Hi".to_string(),
            portrait_ref: "art/a.png".to_string(),
            background_ref: "art/town.png".to_string(),
            ..SceneRecord::default()
        });

        let text = frame(&state);
        assert!(text.contains("--- Scene 1 ---"));
        assert!(text.contains("[backdrop: art/town.png]"));
        assert!(text.contains("[portrait: art/a.png 256x256]"));
        assert!(text.contains("A: Hi"));
    }

    #[test]
    fn narration_without_speaker_omits_the_colon() {
        let state = state_showing(SceneRecord {
            line: "Night falls.".to_string(),
            ..SceneRecord::default()
        });

        let text = frame(&state);
        assert!(text.contains("Night falls.\n"));
        assert!(!text.contains(':'));
    }

    #[test]
    fn hidden_dialog_renders_the_closing_banner() {
        let mut state = state_showing(SceneRecord::default());
        state.apply(&CutsceneEvent::Ended);
        assert_eq!(frame(&state), "--- cutscene finished ---\n");
    }
}
