use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use prompt_fusion::{FusionContext, FusionSettings, StaticEncoder, learned_conditioning, parse};

#[derive(Parser, Debug)]
#[command(name = "prompt-fusion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed expression of a prompt as JSON.
    Parse(ParseArgs),
    /// Print the per-step conditioning schedules of one or more prompts as JSON.
    Schedule(ScheduleArgs),
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Prompt text.
    #[arg(long)]
    prompt: String,
}

#[derive(Parser, Debug)]
struct ScheduleArgs {
    /// Prompt text; repeat for a batch.
    #[arg(long, required = true)]
    prompt: Vec<String>,

    /// Number of sampling steps.
    #[arg(long)]
    steps: usize,

    /// Lookup-table encoder JSON (`filler` plus `prompts` text-to-vector map).
    #[arg(long)]
    vectors: PathBuf,

    /// Fusion settings JSON. Defaults apply when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Negative prompt to rotate spherical blends around.
    #[arg(long)]
    negative: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Parse(args) => cmd_parse(args),
        Command::Schedule(args) => cmd_schedule(args),
    }
}

fn cmd_parse(args: ParseArgs) -> anyhow::Result<()> {
    let expr = parse(&args.prompt)?;
    println!("{}", serde_json::to_string_pretty(&expr)?);
    Ok(())
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let mut encoder: StaticEncoder = serde_json::from_str(&read(&args.vectors)?)
        .with_context(|| format!("parse vectors '{}'", args.vectors.display()))?;
    let settings = match &args.settings {
        Some(path) => FusionSettings::from_json(&read(path)?)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => FusionSettings::default(),
    };

    let mut ctx = FusionContext::new(settings);
    if let Some(negative) = &args.negative {
        let uncond = learned_conditioning(&mut encoder, &[negative], args.steps, &ctx)
            .context("encode negative prompt")?;
        ctx = ctx.with_negative(&uncond);
    }

    let schedules = learned_conditioning(&mut encoder, &args.prompt, args.steps, &ctx)?;
    println!("{}", serde_json::to_string_pretty(&schedules)?);
    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}
