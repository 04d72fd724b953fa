use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

const DEFAULT_DOCUMENT_PATH: &str = "demos/cutscenes/prologue.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayerOptions {
    pub(crate) document_path: PathBuf,
    pub(crate) autoplay: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Play(PlayerOptions),
    Help,
}

pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

pub(crate) fn parse_options(
    args: impl Iterator<Item = String>,
) -> Result<Command, String> {
    let args = args.collect::<Vec<_>>();
    let mut options = PlayerOptions::default();
    let mut index = 0usize;

    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--autoplay" => {
                options.autoplay = true;
                index += 1;
            }
            "--document" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| "missing value for --document".to_string())?;
                options.document_path = PathBuf::from(value);
                index += 2;
            }
            other if other.starts_with('-') => {
                return Err(format!("unknown option '{other}'\n\n{}", usage_text()));
            }
            other => {
                options.document_path = PathBuf::from(other);
                index += 1;
            }
        }
    }

    Ok(Command::Play(options))
}

pub(crate) fn print_usage() {
    println!("{}", usage_text());
}

fn usage_text() -> String {
    format!(
        "usage: player [OPTIONS] [DOCUMENT]\n\
\n\
Plays a cutscene document in the terminal. Press Enter to advance,\n\
'q' then Enter to quit.\n\
\n\
arguments:\n\
  DOCUMENT            path to a cutscene JSON document\n\
                      (default: {DEFAULT_DOCUMENT_PATH})\n\
\n\
options:\n\
  --document <PATH>   same as the positional DOCUMENT argument\n\
  --autoplay          advance automatically using each scene's\n\
                      durationSeconds instead of waiting for Enter\n\
  -h, --help          show this help"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_options(args.iter().map(ToString::to_string))
    }

    #[test]
    fn no_args_plays_the_default_document() {
        assert_eq!(parse(&[]), Ok(Command::Play(PlayerOptions::default())));
    }

    #[test]
    fn positional_and_flag_document_are_equivalent() {
        let expected = Ok(Command::Play(PlayerOptions {
            document_path: PathBuf::from("demos/cutscenes/other.json"),
            autoplay: false,
        }));
        assert_eq!(parse(&["demos/cutscenes/other.json"]), expected);
        assert_eq!(parse(&["--document", "demos/cutscenes/other.json"]), expected);
    }

    #[test]
    fn autoplay_flag_is_recognized() {
        let parsed = parse(&["--autoplay", "doc.json"]);
        assert_eq!(
            parsed,
            Ok(Command::Play(PlayerOptions {
                document_path: PathBuf::from("doc.json"),
                autoplay: true,
            }))
        );
    }

    #[test]
    fn help_wins_over_other_arguments() {
        assert_eq!(parse(&["doc.json", "--help"]), Ok(Command::Help));
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse(&["--frobnicate"]).is_err());
    }

    #[test]
    fn document_flag_requires_a_value() {
        assert_eq!(
            parse(&["--document"]),
            Err("missing value for --document".to_string())
        );
    }
}
