use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use stripsort::{Advance, Algorithm, ConfigOverrides, Outcome, SortConfig, SortRun, Summary};

#[derive(Parser, Debug)]
#[command(name = "stripsort", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every algorithm with its identifier, names and complexity.
    List(ListArgs),
    /// Shuffle a strip permutation and sort it to completion.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Sort config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Algorithm identifier (see `stripsort list`).
    #[arg(long)]
    algorithm: Option<Algorithm>,

    /// Strip count before complexity scaling.
    #[arg(long)]
    slices: Option<usize>,

    /// Seed for the shuffle and for bogo sort.
    #[arg(long)]
    seed: Option<u64>,

    /// Shuffle cap for bogo sort.
    #[arg(long)]
    bogo_limit: Option<u64>,

    /// Sort exactly `--slices` strips regardless of algorithm complexity.
    #[arg(long)]
    no_scale: bool,

    /// Print every step as one JSON line.
    #[arg(long)]
    steps: bool,

    /// Print the final summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List(args) => cmd_list(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let mut out = BufWriter::new(std::io::stdout().lock());
    if args.json {
        let infos: Vec<_> = Algorithm::ALL.iter().map(|a| a.info()).collect();
        serde_json::to_writer_pretty(&mut out, &infos).context("write catalog JSON")?;
        writeln!(out)?;
    } else {
        for a in Algorithm::ALL {
            let info = a.info();
            writeln!(
                out,
                "{:<18} {:<24} {:<12} x{}",
                info.id, info.name, info.time_complexity, info.complexity_multiplier
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        algorithm: args.algorithm,
        slice_count: args.slices,
        seed: args.seed,
        bogo_limit: args.bogo_limit,
        scale_to_complexity: args.no_scale.then_some(false),
    };
    let cfg = SortConfig::load(args.config.as_deref(), &overrides).context("load sort config")?;

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut strips = stripsort::strips::shuffled(cfg.strip_count(), &mut rng)?;
    let original = strips.clone();

    let mut out = BufWriter::new(std::io::stdout().lock());
    let mut run = SortRun::with_options(cfg.algorithm, &mut strips, cfg.run_options());
    let summary = loop {
        match run.advance() {
            Advance::Step(step) => {
                if args.steps {
                    serde_json::to_writer(&mut out, &step).context("write step JSON")?;
                    writeln!(out)?;
                }
            }
            Advance::Done(summary) => break summary,
        }
    };

    if !stripsort::strips::is_permutation_of(&summary.array, &original) {
        anyhow::bail!("{} lost or duplicated strips (bug)", summary.algorithm);
    }

    if args.json {
        serde_json::to_writer(&mut out, &summary).context("write summary JSON")?;
        writeln!(out)?;
    } else {
        write_summary(&mut out, &summary)?;
    }
    out.flush()?;
    Ok(())
}

fn write_summary(out: &mut impl Write, s: &Summary) -> anyhow::Result<()> {
    let outcome = match s.outcome {
        Outcome::Sorted => "sorted".to_string(),
        Outcome::GaveUp { shuffles } => format!("gave up after {shuffles} shuffles"),
    };
    writeln!(out, "algorithm       {} ({})", s.algorithm, s.algorithm.info().name)?;
    writeln!(out, "strips          {}", s.array.len())?;
    writeln!(out, "outcome         {outcome}")?;
    writeln!(out, "steps           {}", s.steps)?;
    writeln!(out, "comparisons     {}", s.stats.comparisons)?;
    writeln!(out, "array accesses  {}", s.stats.array_accesses)?;
    writeln!(out, "swaps           {}", s.stats.swaps)?;
    Ok(())
}
