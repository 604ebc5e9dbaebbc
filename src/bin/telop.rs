use std::{
    io::Write as _,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use telop::{
    Evaluator, FrameIndex, FrameRange, KeywordIndex, PresentationConfig, SubtitleEntry,
    load::{self, SourceFormat},
    timeline::{
        adjust::{TimingAdjustment, apply_adjustments},
        split::{DEFAULT_TERMINATOR, split_all},
    },
};

#[derive(Parser, Debug)]
#[command(name = "telop", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one frame and print it as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range, one JSON line per frame.
    Range(RangeArgs),
    /// Split and retime a subtitle file, writing a JSON subtitle document.
    Prepare(PrepareArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Subtitle file (`.srt`, otherwise JSON).
    #[arg(long)]
    subs: PathBuf,

    /// Starting preset.
    #[arg(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,

    /// JSON object merged over the preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keyword dictionary JSON (`{ "category": ["keyword", ...] }`).
    #[arg(long)]
    keywords: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct RangeArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// First frame (inclusive).
    #[arg(long)]
    start: u64,

    /// Last frame (exclusive).
    #[arg(long)]
    end: u64,

    /// Evaluate frames on a rayon pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (default: all cores).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct PrepareArgs {
    /// Subtitle file (`.srt`, otherwise JSON).
    #[arg(long)]
    subs: PathBuf,

    /// JSON array of timing adjustments applied after splitting.
    #[arg(long)]
    adjust: Option<PathBuf>,

    /// Split entries at sentence terminators.
    #[arg(long)]
    split: bool,

    /// Terminator used by `--split`.
    #[arg(long, default_value = DEFAULT_TERMINATOR)]
    terminator: String,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    Default,
    Youtube,
    YoutubeClean,
}

impl Preset {
    fn config(self) -> PresentationConfig {
        match self {
            Self::Default => PresentationConfig::default(),
            Self::Youtube => PresentationConfig::youtube(),
            Self::YoutubeClean => PresentationConfig::youtube_clean(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
        Command::Prepare(args) => cmd_prepare(args),
    }
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn read_subtitles(path: &Path) -> anyhow::Result<Vec<SubtitleEntry>> {
    let text = read_text(path, "subtitles")?;
    let entries = load::parse(&text, SourceFormat::from_path(path))
        .with_context(|| format!("parse subtitles '{}'", path.display()))?;
    Ok(entries)
}

fn build_evaluator(args: &EngineArgs) -> anyhow::Result<Evaluator> {
    let entries = read_subtitles(&args.subs)?;

    let mut config = args.preset.config();
    if let Some(path) = &args.config {
        let overrides: serde_json::Value = serde_json::from_str(&read_text(path, "config")?)
            .with_context(|| format!("parse config JSON '{}'", path.display()))?;
        config = config.merged(overrides)?;
    }

    let keywords = match &args.keywords {
        Some(path) => KeywordIndex::from_json(&read_text(path, "keywords")?)
            .with_context(|| format!("parse keywords '{}'", path.display()))?,
        None => KeywordIndex::empty(),
    };

    Ok(Evaluator::new(entries, config, Arc::new(keywords))?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let evaluator = build_evaluator(&args.engine)?;
    let frame = evaluator.eval_frame(FrameIndex(args.frame));
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let evaluator = build_evaluator(&args.engine)?;
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(args.end))?;
    let frames = if args.parallel {
        evaluator.eval_range_parallel(range, args.threads)?
    } else {
        evaluator.eval_range(range)
    };

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut out, frame)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn cmd_prepare(args: PrepareArgs) -> anyhow::Result<()> {
    let mut entries = read_subtitles(&args.subs)?;
    if args.split {
        entries = split_all(&entries, &args.terminator);
    }
    if let Some(path) = &args.adjust {
        let text = read_text(path, "adjustments")?;
        let adjustments: Vec<TimingAdjustment> = serde_json::from_str(&text)
            .with_context(|| format!("parse adjustments '{}'", path.display()))?;
        entries = apply_adjustments(&entries, &adjustments);
    }

    let doc = load::json::to_document(&entries)?;
    std::fs::write(&args.out, doc)
        .with_context(|| format!("write output '{}'", args.out.display()))?;
    eprintln!("wrote {} entries to {}", entries.len(), args.out.display());
    Ok(())
}
