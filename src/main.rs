/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dsi_progress_logger::prelude::*;
use hybrid_ssc::io::{arc_list, create_output, write_closure, OutputPolicy};
use hybrid_ssc::prelude::*;
use hybrid_ssc::utils::parse_ratio;
use std::io::BufWriter;
use std::path::PathBuf;
use webgraph::prelude::BvGraph;

#[derive(Parser, Debug)]
#[command(name = "hybrid-ssc", version)]
#[command(about = "Computes the union of the transitive closures of the source vertices of a graph")]
struct Cli {
    /// Increase logging verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Overwrite the output file if it already exists.
    #[arg(long, global = true, conflicts_with = "unique")]
    overwrite: bool,

    /// If the output file already exists, find a unique file name.
    #[arg(long, global = true)]
    unique: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reads a graph, computes the closure of its sources and writes it.
    Compute(ComputeArgs),
}

#[derive(Args, Debug)]
struct ComputeArgs {
    /// The file the closure will be written to.
    output: PathBuf,

    #[command(flatten)]
    input: InputArgs,

    /// The small-delta threshold is the number of vertices divided by alpha
    /// (a fraction such as 1/8, or a decimal).
    #[arg(long, value_parser = parse_ratio, default_value = "1/8")]
    alpha: f64,

    /// The big-delta threshold is the number of vertices divided by beta.
    #[arg(long, value_parser = parse_ratio, default_value = "1/128")]
    beta: f64,

    /// Number of workers (default: available parallelism).
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Capacity of the work queue (default: all sources fit).
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// How the closure size enters the small-delta cost.
    #[arg(long, value_enum, default_value_t = FormulaArg::PerFrontierVertex)]
    cost_formula: FormulaArg,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// A text file with one tab-separated arc per line.
    #[arg(long)]
    arcs: Option<PathBuf>,

    /// The basename of a graph in BV format.
    #[arg(long)]
    webgraph: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormulaArg {
    PerFrontierVertex,
    OncePerStep,
}

impl From<FormulaArg> for CostFormula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::PerFrontierVertex => CostFormula::PerFrontierVertex,
            FormulaArg::OncePerStep => CostFormula::OncePerStep,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .verbosity(2 + cli.verbose as usize)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let policy = if cli.overwrite {
        OutputPolicy::Overwrite
    } else if cli.unique {
        OutputPolicy::Unique
    } else {
        OutputPolicy::CreateNew
    };

    match cli.command {
        Command::Compute(args) => {
            let mut pl = progress_logger![display_memory = true];
            match (&args.input.arcs, &args.input.webgraph) {
                (Some(path), _) => {
                    let input = arc_list::load(path, &mut pl)
                        .with_context(|| format!("Cannot load arc list {}", path.display()))?;
                    compute(&input, &path.display().to_string(), &args, policy, &mut pl)
                }
                (None, Some(basename)) => {
                    let graph = BvGraph::with_basename(basename)
                        .load()
                        .with_context(|| format!("Cannot load graph {}", basename))?;
                    let input = GraphInput::from_graph(graph, &mut pl)?;
                    compute(&input, basename, &args, policy, &mut pl)
                }
                (None, None) => anyhow::bail!("No input graph provided"),
            }
        }
    }
}

fn compute<G: Adjacency + Sync>(
    input: &GraphInput<G>,
    input_name: &str,
    args: &ComputeArgs,
    policy: OutputPolicy,
    pl: &mut impl ProgressLog,
) -> Result<()> {
    // Fail on the output before spending time on the computation
    let (file, output) = create_output(&args.output, policy)
        .with_context(|| format!("Cannot create output file {}", args.output.display()))?;

    let threads = args.threads.map_or(Threads::Default, Threads::NumThreads);
    let ssc = Ssc12Builder::new(input)
        .with_alpha(args.alpha)
        .with_beta(args.beta)
        .with_threads(threads)
        .with_queue_capacity(args.queue_capacity)
        .with_cost_formula(args.cost_formula.into())
        .build()?;
    let report = ssc.run(pl)?;

    log::info!(
        "{} closures computed by SSC1, {} by SSC2; {} of {} workers switched",
        report.ssc1_closures(),
        report.ssc2_closures(),
        report.switched_workers(),
        report.workers.len()
    );
    println!("Elapsed time: {} seconds.", report.elapsed.as_secs_f64());
    println!("Closure size: {}", report.len());

    pl.info(format_args!("Writing closure to {}", output.display()));
    write_closure(BufWriter::new(file), input_name, report.elapsed, &report.closure)
        .with_context(|| format!("Cannot write closure to {}", output.display()))?;
    Ok(())
}
