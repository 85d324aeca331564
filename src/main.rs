use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sort_basics::error::ScenarioError;
use sort_basics::registry;
use sort_basics::scenario::{self, ScenarioConfig};
use sort_basics::stable::bubble;
use sort_basics::stack::Stack;

#[derive(Parser)]
#[command(
    name = "sort_basics",
    version,
    about = "Textbook sorting algorithms and a small harness to time them"
)]
struct Cli {
    /// Without a subcommand, bubble sorts the classroom sequence and prints it.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort a sequence of integers with one algorithm and print it
    Demo {
        /// Short or full sort name, eg. bubble, insertion, quicksort_unstable
        #[arg(short, long, default_value = "bubble")]
        algorithm: String,

        /// Values to sort, the algorithm's classroom input if empty
        #[arg(allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Push values onto a stack, pop the top and print it
    Stack {
        #[arg(default_values_t = [8, 10], allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// List the available sorts
    List,
    /// Time every sort over a grid of input sizes and kinds, write CSV, JSON and charts
    Scenarios {
        /// JSON file with a scenario config, missing fields use the defaults
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        #[arg(long)]
        repetitions: Option<usize>,

        #[arg(long)]
        seed: Option<u64>,

        /// Restrict the run to these sorts
        #[arg(long, value_delimiter = ',')]
        sorts: Option<Vec<String>>,
    },
}

fn main() {
    // Logs go to stderr, stdout only carries results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sort_basics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>) -> Result<(), ScenarioError> {
    match command {
        None => {
            let mut values = [1, 4, 2, 3, 5, 8, 6];
            println!("{}", join_values(bubble::sort_ascending(&mut values)));
        }
        Some(Commands::Demo { algorithm, values }) => {
            let sort = registry::find_sort(&algorithm)?;
            let mut values = if values.is_empty() {
                sort.classroom_input()
            } else {
                values
            };

            tracing::debug!(sort = %sort.name, len = values.len(), "sorting demo input");
            (sort.sort)(&mut values);
            println!("{}", join_values(&values));
        }
        Some(Commands::Stack { values }) => {
            let mut stack = values.into_iter().collect::<Stack<_>>();
            match stack.pop() {
                Some(top) => println!("{top}"),
                None => println!("stack is empty"),
            }
        }
        Some(Commands::List) => {
            for sort in registry::all_sorts() {
                let complexity = if sort.quadratic { "O(N²)" } else { "O(N log N)" };
                println!("{:12} {:22} {complexity}", sort.short_name(), sort.name);
            }
        }
        Some(Commands::Scenarios {
            config,
            output_dir,
            sizes,
            repetitions,
            seed,
            sorts,
        }) => {
            let mut config = match config {
                Some(path) => ScenarioConfig::from_json_file(&path)?,
                None => ScenarioConfig::default(),
            };
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            if let Some(repetitions) = repetitions {
                config.repetitions = repetitions;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(sorts) = sorts {
                config.sorts = sorts;
            }

            let report = scenario::run_scenarios(&config)?;
            let written = report.write_to_dir(&config.output_dir)?;

            print!("{}", report.render_summary());
            println!("Wrote:");
            for path in written {
                println!(" - {}", path.display());
            }
        }
    }

    Ok(())
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
