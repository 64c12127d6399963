//! Graphlens CLI - graph metrics and DOT export from the command line.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand, ValueEnum};
use graphlens::{
    dot::{default_output_path, graph_to_dot, tree_to_dot},
    error::{self, Error},
    graph::Graph,
    report::Report,
    tree::Tree,
};
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Graphlens: network metrics and Graphviz export for edge lists and trees.
#[derive(Parser)]
#[command(name = "graphlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load an edge list, print its metrics and export it to DOT
    Graph {
        /// Edge list file, one `a,b` pair per line
        file: PathBuf,

        /// Treat edges as directed
        #[arg(short, long)]
        directed: bool,

        /// Name of the DOT graph
        #[arg(short, long, default_value = "G")]
        name: String,

        /// DOT output path (defaults to the input path with a `.dot` or `.out.dot` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// How to print the metrics
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Load parent/child lines, print the pre-order traversal and export it to DOT
    Tree {
        /// Tree file, one `parent,child` pair per line
        file: PathBuf,

        /// Name of the DOT graph
        #[arg(short, long, default_value = "Tree")]
        name: String,

        /// DOT output path (defaults to the input path with a `.dot` or `.out.dot` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write sample graph and tree files, then export two of them to DOT
    Examples {
        /// Directory to write the files into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

const GRAPH1: &[&str] = &[
    "# Graph 1 - small social network",
    "A,B",
    "A,C",
    "B,C",
    "B,D",
    "C,E",
    "D,E",
];

const GRAPH2: &[&str] = &[
    "# Graph 2 - flights between cities",
    "Quito,Guayaquil",
    "Quito,Cuenca",
    "Cuenca,Guayaquil",
    "Quito,Loja",
    "Loja,Cuenca",
];

const TREE1: &[&str] = &["# Tree 1", "Root,A", "Root,B", "A,C", "A,D", "B,E"];

const TREE2: &[&str] = &[
    "# Tree 2 - organisation",
    "CEO,CTO",
    "CEO,CFO",
    "CTO,Dev1",
    "CTO,Dev2",
    "CFO,Acct1",
];

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Graph {
            file,
            directed,
            name,
            output,
            format,
        } => run_graph(&file, directed, &name, output, format),
        Commands::Tree { file, name, output } => run_tree(&file, &name, output),
        Commands::Examples { dir } => run_examples(&dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_graph(
    file: &Path,
    directed: bool,
    name: &str,
    output: Option<PathBuf>,
    format: Format,
) -> error::Result<()> {
    let graph = Graph::from_path(file, directed)?;
    let report = Report::from_graph(&graph);

    match format {
        Format::Text => print!("{report}"),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    let output = output.unwrap_or_else(|| default_output_path(file));
    error::write(&output, &graph_to_dot(&graph, name))?;
    println!(
        "DOT exported to {} (render with: dot -Tpng {} -o graph.png)",
        output.display(),
        output.display()
    );

    Ok(())
}

fn run_tree(file: &Path, name: &str, output: Option<PathBuf>) -> error::Result<()> {
    let tree = Tree::from_path(file)?;

    if tree.root().is_none() {
        return Err(Error::NoRoot {
            path: file.to_path_buf(),
        });
    }

    println!("Pre-order traversal:");
    println!("{}", tree.pre_order().iter().join(" "));

    let output = output.unwrap_or_else(|| default_output_path(file));
    error::write(&output, &tree_to_dot(&tree, name))?;
    println!(
        "DOT exported to {} (render with: dot -Tpng {} -o tree.png)",
        output.display(),
        output.display()
    );

    Ok(())
}

fn run_examples(dir: &Path) -> error::Result<()> {
    let samples = [
        ("graph1.txt", GRAPH1),
        ("graph2.txt", GRAPH2),
        ("tree1.txt", TREE1),
        ("tree2.txt", TREE2),
    ];

    for (file, lines) in samples {
        let mut contents = lines.join("\n");
        contents.push('\n');
        error::write(&dir.join(file), &contents)?;
    }
    println!(
        "Files created: {}",
        samples.iter().map(|(file, _)| file).join(", ")
    );

    let graph = Graph::from_edge_list(GRAPH1, false);
    print!("{graph}");
    error::write(&dir.join("graph1.dot"), &graph_to_dot(&graph, "G1"))?;
    info!("exported graph1.dot");

    let tree = Tree::from_parent_child_lines(TREE1);
    error::write(&dir.join("tree1.dot"), &tree_to_dot(&tree, "T1"))?;
    info!("exported tree1.dot");

    println!("Exported graph1.dot and tree1.dot, render them with Graphviz.");

    Ok(())
}
