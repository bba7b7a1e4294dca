use std::process::ExitCode;

use clap::{ArgAction, Parser};
use ordtree::{Order, Tree};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// The classic example tree:
///
/// ```text
///          8
///       /     \
///      3       10
///     / \     /  \
///    1   6   9    14
///       / \      /  \
///      4   7    13   15
///              /
///             11
///               \
///                12
/// ```
const EXAMPLE_VALUES: [i64; 13] = [8, 3, 1, 6, 4, 7, 10, 9, 14, 13, 11, 12, 15];

#[derive(Parser, Debug)]
#[command(name = "ordtree", version)]
#[command(about = "Builds a binary search tree and prints its traversals")]
struct Cli {
    /// Values to insert, in insertion order
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = EXAMPLE_VALUES
    )]
    values: Vec<i64>,

    /// Values to remove once everything is inserted
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    remove: Vec<i64>,

    /// Traversal orders to print: pre, in, post, level
    #[arg(long, value_delimiter = ',', default_values_t = Order::ALL)]
    order: Vec<Order>,

    /// Also print the count, depth and sum of the tree
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut tree: Tree<i64> = cli.values.iter().copied().collect();
    info!(len = tree.len(), depth = tree.depth(), "built tree");

    for value in &cli.remove {
        if !tree.remove(value) {
            warn!(value, "not in the tree, nothing removed");
        }
    }

    for (i, order) in cli.order.iter().enumerate() {
        if i > 0 {
            println!("===");
        }
        debug!(%order, "traversing");
        tree.traverse(*order, |value| println!("{value}"));
    }

    if cli.stats {
        println!("count: {}", tree.len());
        println!("depth: {}", tree.depth());
        match tree.sum() {
            Ok(sum) => println!("sum: {sum}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
