use std::io::{self, BufRead, Write as _};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use cutscene::{AutoAdvance, CutsceneEvent, CutsceneSequencer, PresentationState};
use tracing::{error, info};

use super::bootstrap::PlayerOptions;
use super::render;

const AUTOPLAY_TICK_SECONDS: f32 = 0.05;

pub(crate) fn run(options: PlayerOptions) -> ExitCode {
    let document = match cutscene::load_document(&options.document_path) {
        Ok(document) => document,
        Err(err) => {
            error!(error = %err, "document_load_failed");
            return ExitCode::FAILURE;
        }
    };

    let mut sequencer = CutsceneSequencer::new();
    let mut presentation = PresentationState::new();
    let mut timer = AutoAdvance::new();
    sequencer.load(document);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let mut ended = false;
        for event in sequencer.drain_events() {
            if let CutsceneEvent::SceneChanged { scene, .. } = &event {
                timer.arm(scene);
            }
            ended |= matches!(event, CutsceneEvent::Ended);
            presentation.apply(&event);
        }
        print!("{}", render::frame(&presentation));
        let _ = io::stdout().flush();

        if ended {
            info!("playback_complete");
            return ExitCode::SUCCESS;
        }

        if options.autoplay && timer.is_armed() {
            while !timer.tick(AUTOPLAY_TICK_SECONDS) {
                thread::sleep(Duration::from_secs_f32(AUTOPLAY_TICK_SECONDS));
            }
            sequencer.advance();
            continue;
        }

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                info!("stdin_closed");
                return ExitCode::SUCCESS;
            }
            Ok(_) => {
                if line.trim() == "q" {
                    info!("quit_requested");
                    return ExitCode::SUCCESS;
                }
                timer.disarm();
                sequencer.advance();
            }
            Err(err) => {
                error!(error = %err, "stdin_read_failed");
                return ExitCode::FAILURE;
            }
        }
    }
}
