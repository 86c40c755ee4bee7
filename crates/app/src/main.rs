use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuizMode;
use quiz_core::sampler::DEFAULT_SAMPLE_SIZE;
use services::{Clock, QuizLoopService, question_bank_from_location};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_BANK: &str = "Questions.json";
const WINDOW_TITLE: &str = "EXAMEN REGLAS DE JUEGO";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBank { raw: String },
    InvalidLimit { raw: String },
    Core(quiz_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBank { raw } => write!(f, "invalid --bank value: {raw:?}"),
            ArgsError::InvalidLimit { raw } => {
                write!(f, "invalid --limit value: {raw} (expected a positive integer)")
            }
            ArgsError::Core(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<quiz_core::Error> for ArgsError {
    fn from(err: quiz_core::Error) -> Self {
        ArgsError::Core(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    launch_mode: Option<QuizMode>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn launch_mode(&self) -> Option<QuizMode> {
        self.launch_mode
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    bank: String,
    /// Set only when a mode was asked for; otherwise the home screen offers both.
    mode: Option<QuizMode>,
    limit: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path|url>] [--mode <stepped|exam>] [--limit <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank {DEFAULT_BANK}");
    eprintln!("  --limit {DEFAULT_SAMPLE_SIZE}");
    eprintln!("  without --mode the home screen lets you pick one");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK, QUIZ_MODE, QUIZ_LIMIT, RUST_LOG");
}

fn parse_bank(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::InvalidBank { raw });
    }
    Ok(trimmed.to_string())
}

fn parse_mode(raw: &str) -> Result<QuizMode, ArgsError> {
    raw.parse::<QuizMode>()
        .map_err(|err| ArgsError::from(quiz_core::Error::from(err)))
}

fn parse_limit(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ArgsError::InvalidLimit { raw }),
    }
}

impl Args {
    /// Parse flags, falling back to `env` for anything not given on the
    /// command line. Flags win over the environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut bank = env("QUIZ_BANK").map(parse_bank).transpose()?;
        let mut mode = env("QUIZ_MODE").map(|raw| parse_mode(&raw)).transpose()?;
        let mut limit = env("QUIZ_LIMIT").map(parse_limit).transpose()?;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--bank" => bank = Some(parse_bank(require_value(args, "--bank")?)?),
                "--mode" => mode = Some(parse_mode(&require_value(args, "--mode")?)?),
                "--limit" => limit = Some(parse_limit(require_value(args, "--limit")?)?),
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self {
            bank: bank.unwrap_or_else(|| DEFAULT_BANK.to_string()),
            mode,
            limit: limit.unwrap_or(DEFAULT_SAMPLE_SIZE),
        }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Command::Run(parsed)) => parsed,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    let bank = question_bank_from_location(&parsed.bank);
    info!(bank = %bank.describe(), limit = parsed.limit, mode = ?parsed.mode, "starting quiz");
    let quiz_loop =
        Arc::new(QuizLoopService::new(Clock::system(), bank).with_sample_size(parsed.limit));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop,
        launch_mode: parsed.mode,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Command, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        })
    }

    fn run_args(args: &[&str], env: &[(&str, &str)]) -> Args {
        match parse(args, env).expect("parse args") {
            Command::Run(args) => args,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = run_args(&[], &[]);
        assert_eq!(args.bank, "Questions.json");
        assert_eq!(args.mode, None);
        assert_eq!(args.limit, 25);
    }

    #[test]
    fn flags_override_environment() {
        let args = run_args(
            &["--bank", "https://example.com/q.json", "--mode", "exam", "--limit", "10"],
            &[("QUIZ_BANK", "other.json"), ("QUIZ_MODE", "stepped"), ("QUIZ_LIMIT", "5")],
        );
        assert_eq!(args.bank, "https://example.com/q.json");
        assert_eq!(args.mode, Some(QuizMode::Exam));
        assert_eq!(args.limit, 10);
    }

    #[test]
    fn environment_fills_missing_flags() {
        let args = run_args(&["--limit", "3"], &[("QUIZ_MODE", "stepped")]);
        assert_eq!(args.mode, Some(QuizMode::Stepped));
        assert_eq!(args.limit, 3);
    }

    #[test]
    fn zero_or_garbage_limit_is_rejected() {
        assert!(matches!(
            parse(&["--limit", "0"], &[]),
            Err(ArgsError::InvalidLimit { .. })
        ));
        assert!(matches!(
            parse(&[], &[("QUIZ_LIMIT", "many")]),
            Err(ArgsError::InvalidLimit { .. })
        ));
    }

    #[test]
    fn unknown_mode_reports_core_error() {
        let err = parse(&["--mode", "speedrun"], &[]).unwrap_err();
        assert!(matches!(err, ArgsError::Core(quiz_core::Error::Mode(_))));
        assert!(err.to_string().contains("speedrun"));
    }

    #[test]
    fn missing_value_and_unknown_flags() {
        assert!(matches!(
            parse(&["--bank"], &[]),
            Err(ArgsError::MissingValue { flag: "--bank" })
        ));
        assert!(matches!(
            parse(&["--seconds"], &[]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--seconds"
        ));
        assert!(matches!(
            parse(&["--bank", "   "], &[]),
            Err(ArgsError::InvalidBank { .. })
        ));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--limit", "4", "--help"], &[]).unwrap(), Command::Help);
    }
}
