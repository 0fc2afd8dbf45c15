use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use linediff::areas::viewer::Viewer;
use linediff::artifacts::core::PagerWriter;
use linediff::artifacts::core::settings::{ColorChoice, DEFAULT_COLUMN_WIDTH, Layout, Settings};
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    about = "Positional line diff viewer",
    long_about = "Pairs the lines of two documents by position and renders them as a \
    split or unified diff, the way the code assistant's diff viewer shows them. \
    Lines are never realigned, so an insertion near the top shows every following \
    line as changed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        help = "Resolve document paths relative to this directory"
    )]
    directory: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Documents {
    #[arg(index = 1, help = "The old document, or - for stdin")]
    old: PathBuf,
    #[arg(index = 2, help = "The new document, or - for stdin")]
    new: PathBuf,
    #[arg(
        short = 'N',
        long,
        help = "Treat a missing document as empty instead of failing"
    )]
    new_file: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Render the diff of two documents",
        long_about = "This command renders every line of both documents exactly once, \
        deleted lines in red and added lines in green."
    )]
    Diff {
        #[command(flatten)]
        documents: Documents,
        #[arg(
            short,
            long,
            value_enum,
            env = "LINEDIFF_LAYOUT",
            default_value_t = Layout::Split,
            help = "Side-by-side columns or a single column"
        )]
        layout: Layout,
        #[arg(
            short = 'U',
            long,
            help = "Only show changed lines with this many lines of context"
        )]
        context: Option<usize>,
        #[arg(
            short,
            long,
            env = "LINEDIFF_WIDTH",
            default_value_t = DEFAULT_COLUMN_WIDTH,
            help = "Column width of the split layout"
        )]
        width: usize,
    },
    #[command(
        name = "stat",
        about = "Show the number of added and deleted lines"
    )]
    Stat {
        #[command(flatten)]
        documents: Documents,
        #[arg(long, help = "Print a one-line summary with the hunk count")]
        summary: bool,
    },
    #[command(
        name = "rows",
        about = "Print the raw diff rows",
        long_about = "This command prints one row per line as kind, old line number, \
        new line number and content separated by tabs, or a JSON array with --json."
    )]
    Rows {
        #[command(flatten)]
        documents: Documents,
        #[arg(long, help = "Print the rows as JSON")]
        json: bool,
    },
    #[command(
        name = "explain",
        about = "Print the explain-diff request payload",
        long_about = "This command prints the JSON payload that is forwarded to the \
        text-generation service: the file path, both raw documents and the line counts."
    )]
    Explain {
        #[command(flatten)]
        documents: Documents,
        #[arg(short, long, help = "File path reported in the payload")]
        path: Option<PathBuf>,
        #[arg(long, help = "Repository id sent with the request")]
        repo_id: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINEDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn use_pager() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    cli.color.apply();

    let settings = match &cli.command {
        Commands::Diff {
            layout,
            context,
            width,
            ..
        } => Settings::new(*layout, *context, *width),
        _ => Settings::default(),
    };

    let directory = match &cli.directory {
        Some(directory) => directory.clone(),
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };

    let pager = matches!(cli.command, Commands::Diff { .. } if use_pager()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let viewer = Viewer::new(&directory, writer, settings)?;

    match &cli.command {
        Commands::Diff { documents, .. } => {
            viewer.diff(&documents.old, &documents.new, documents.new_file)?
        }
        Commands::Stat { documents, summary } => viewer.stat(
            &documents.old,
            &documents.new,
            documents.new_file,
            *summary,
        )?,
        Commands::Rows { documents, json } => {
            viewer.rows(&documents.old, &documents.new, documents.new_file, *json)?
        }
        Commands::Explain {
            documents,
            path,
            repo_id,
        } => viewer.explain(
            &documents.old,
            &documents.new,
            path.as_deref(),
            repo_id.as_deref(),
            documents.new_file,
        )?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
