use anyhow::Context as _;
use clap::Parser as _;
use rand::SeedableRng;

mod data;
mod error;
mod executor;
mod merge;
mod partition;
mod pipeline;
mod sorter;

#[cfg(test)]
mod test;

/// Program entry point
fn main() -> anyhow::Result<()> {
    env_logger::init();

    match input::Args::parse().mode {
        input::Mode::File {
            input,
            output,
            options,
        } => run_file(&input, &output, &options.to_options()),
        input::Mode::Bench {
            runs,
            size,
            data,
            seed,
            options,
        } => run_bench(runs, size, data, seed, &options.to_options()),
    }
}

/// Sort a whitespace separated integer file and report the elapsed sort time
fn run_file(
    input: &std::path::Path,
    output: &std::path::Path,
    options: &pipeline::SortOptions,
) -> anyhow::Result<()> {
    let mut values = read_integers(input)?;

    let started = std::time::Instant::now();
    pipeline::sort_in_place(&mut values, options)?;
    let elapsed = started.elapsed();

    write_integers(output, &values)?;

    println!(
        "parsort: n={n} workers={workers} executor={executor} merge={merge} time_s={time:.6}",
        n = values.len(),
        workers = options.workers,
        executor = options.executor,
        merge = options.merge_strategy,
        time = elapsed.as_secs_f64(),
    );

    Ok(())
}

/// Time repeated pipeline runs over generated data
fn run_bench(
    runs: usize,
    size: usize,
    data: input::DataKind,
    seed: Option<u64>,
    options: &pipeline::SortOptions,
) -> anyhow::Result<()> {
    println!(
        "Running measurements for the parallel sort pipeline:\n\
         executor={executor}, merge={merge}, local sort={local} (stable: {stable})",
        executor = options.executor,
        merge = options.merge_strategy,
        local = options.local_sort,
        stable = options.local_sort.is_stable(),
    );
    println!(
        "Runs: {runs}, Slice size: {size}, Workers: {workers}, Data type: {data}",
        workers = options.workers,
    );

    let mut rng = match seed {
        Some(partial_seed) => rand::rngs::StdRng::seed_from_u64(partial_seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let (_samples, stats) = match data {
        input::DataKind::Uniform => {
            perform_experiment::<data::UniformData<i64>>(options, runs, size, &mut rng)?
        }
        input::DataKind::Permutation => {
            perform_experiment::<data::PermutationData<i64>>(options, runs, size, &mut rng)?
        }
        input::DataKind::Zipf => {
            perform_experiment::<data::ZipfData<i64>>(options, runs, size, &mut rng)?
        }
    };

    println!("Stats: {stats:?}");

    Ok(())
}

/// Perform a time sampling experiment on the pipeline
///
/// - runs: The number of samples to measure
/// - size: The size of the sequences to sort
/// - rng: The rng used for sampling the data
fn perform_experiment<D: data::Data<i64>>(
    options: &pipeline::SortOptions,
    runs: usize,
    size: usize,
    rng: &mut rand::rngs::StdRng,
) -> anyhow::Result<(Vec<std::time::Duration>, rolling_stats::Stats<f64>)> {
    let mut samples = Vec::with_capacity(runs);
    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let mut values = D::initialize(size, rng);

        let now = std::time::Instant::now();
        pipeline::sort_in_place(std::hint::black_box(&mut values), options)?;
        let elapsed = now.elapsed();

        debug_assert!(values.is_sorted(), "run {run} was not sorted");

        // Skip the warm up run
        if run != 0 {
            samples.push(elapsed);
            stats.update(elapsed.as_millis() as f64);

            bar.inc(1);
        }
    }

    bar.finish();

    Ok((samples, stats))
}

/// Read whitespace separated integers from `path`
fn read_integers(path: &std::path::Path) -> anyhow::Result<Vec<i64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))?;

    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid integer {token:?} in {}", path.display()))
        })
        .collect()
}

/// Write `values` to `path`, space separated with a trailing newline
fn write_integers(path: &std::path::Path, values: &[i64]) -> anyhow::Result<()> {
    use std::io::Write as _;

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create output {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);

    for (index, value) in values.iter().enumerate() {
        let separator = if index + 1 < values.len() { " " } else { "\n" };
        write!(writer, "{value}{separator}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Command line input handling
mod input {
    use crate::executor::Executor;
    use crate::merge::MergeStrategy;
    use crate::pipeline::SortOptions;
    use crate::sorter::LocalSort;

    /// Command line arguments
    #[derive(clap::Parser)]
    #[command(author, version, about, disable_help_subcommand = true)]
    pub struct Args {
        /// What to run
        #[command(subcommand)]
        pub mode: Mode,
    }

    #[derive(clap::Subcommand)]
    pub enum Mode {
        /// Sort a whitespace separated integer file
        File {
            /// The input file to read integers from
            #[arg(long)]
            input: std::path::PathBuf,
            /// The output file to write the sorted integers to
            #[arg(long)]
            output: std::path::PathBuf,
            #[command(flatten)]
            options: PipelineArgs,
        },
        /// Time repeated runs over generated data
        Bench {
            /// The number of runs to do
            #[arg(long, default_value_t = 1_000)]
            runs: usize,
            /// The size of the sequences to sort
            #[arg(long, default_value_t = 1_000_000)]
            size: usize,
            /// The data type to use for sorting
            #[arg(long, default_value_t = DataKind::Permutation)]
            data: DataKind,
            /// Seed for the rng
            #[arg(long)]
            seed: Option<u64>,
            #[command(flatten)]
            options: PipelineArgs,
        },
    }

    /// Pipeline parameters shared by both modes
    #[derive(clap::Args)]
    pub struct PipelineArgs {
        /// The number of concurrent sort workers
        #[arg(short, long, default_value_t = 1)]
        pub workers: usize,
        /// The concurrency substrate to dispatch sort workers on
        #[arg(long, default_value_t = Executor::Threads)]
        pub executor: Executor,
        /// The strategy merging the sorted partitions
        #[arg(long, default_value_t = MergeStrategy::Heap)]
        pub merge: MergeStrategy,
        /// The comparison sort applied to each partition
        #[arg(long, default_value_t = LocalSort::StdUnstable)]
        pub local_sort: LocalSort,
    }

    impl PipelineArgs {
        /// The pipeline options described by these arguments
        pub fn to_options(&self) -> SortOptions {
            SortOptions {
                workers: self.workers,
                executor: self.executor,
                local_sort: self.local_sort,
                merge_strategy: self.merge,
            }
        }
    }

    /// Available data types for sorting
    #[derive(Debug, Clone, Copy, clap::ValueEnum)]
    pub enum DataKind {
        /// Uniform over the whole value range
        Uniform,
        /// A shuffled permutation of `0..size`
        Permutation,
        /// Duplicate heavy Zipf distributed values
        Zipf,
    }

    impl std::fmt::Display for DataKind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
        }
    }
}
