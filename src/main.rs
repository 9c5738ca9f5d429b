use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use pgntree::tree::{GameTreeReport, NodeReport, ROOT_NODE_ID};
use pgntree::view::VariationsTable;
use pgntree::{deviation_history, load_tree, Explorer, ExplorerSettings, GameTree, PgnSource};

/// PGN variation explorer
///
/// Shows the main line of a game with every alternative listed next to the
/// move it replaces. Pick an alternative by move number, color and letter
/// (for example `6 w b`) to make it the displayed main line.
///
/// ## Usage Examples:
/// ```bash
/// # Explore the built-in sample game
/// ./pgntree
///
/// # Explore your own game
/// ./pgntree mygame.pgn
///
/// # Print tree statistics and exit
/// ./pgntree --report mygame.pgn
/// ```
#[derive(Parser)]
#[command(name = "pgntree")]
#[command(about = "Explore the nested variations of a PGN game one line at a time")]
#[command(version = "0.1.0")]
struct Args {
    /// PGN file to explore (the first game is used); defaults to a built-in sample
    #[arg(value_name = "PGN")]
    pgn: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen between tables
    #[arg(long)]
    no_clear: bool,

    /// Print the tree statistics report and exit
    #[arg(long)]
    report: bool,

    /// Print every node of the tree and exit
    #[arg(long)]
    nodes: bool,

    /// Print the main line table once and exit
    #[arg(long)]
    print: bool,
}

fn fatal(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", format!("FATAL ERROR! {message}").bright_red());
    process::exit(1);
}

fn print_once(tree: &GameTree, source: &PgnSource, args: &Args) -> pgntree::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.report {
        write!(out, "{}", GameTreeReport::from_tree(tree))?;
    }
    if args.nodes {
        write!(out, "{}", NodeReport::new(tree))?;
    }
    if args.print {
        let history = deviation_history(tree, ROOT_NODE_ID)?;
        let table = VariationsTable::new(tree).with_color(!args.no_color);
        table.write_header(&mut out, &source.describe(), ROOT_NODE_ID, &history)?;
        table.write(&mut out, &history)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let source = PgnSource::from_arg(args.pgn.clone());
    let tree = match load_tree(&source) {
        Ok(tree) => tree,
        Err(e) => match &source {
            PgnSource::Sample => {
                fatal(format!("{e}\nThe error arose in the built-in sample PGN."))
            }
            PgnSource::File(path) => fatal(format!(
                "{e}\nThe problem arose in the PGN file {}",
                path.display()
            )),
        },
    };

    if args.report || args.nodes || args.print {
        if let Err(e) = print_once(&tree, &source, &args) {
            fatal(e);
        }
        return;
    }

    let settings = ExplorerSettings {
        color: !args.no_color,
        clear_screen: !args.no_clear,
    };
    let stdin = io::stdin();
    let mut explorer = Explorer::new(tree, source.describe(), settings, stdin.lock(), io::stdout());
    if let Err(e) = explorer.run() {
        fatal(e);
    }
}
