use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use head_order::engine::log_priorities;
use head_order::priority::{rules, Category, Classifier};
use head_order::report::TerminalSink;
use head_order::source::PageSource;

/// Compare the order of a page's <head> elements with the order they
/// should load in.
#[derive(Parser, Debug)]
#[command(name = "head-order", version)]
struct Args {
    /// URL, HTML file, or `-` for standard input
    #[arg(required_unless_present = "explain")]
    source: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the priority catalog and exit
    #[arg(long)]
    explain: bool,

    /// Log every classified element (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("head-order: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> head_order::Result<()> {
    if args.explain {
        print_catalog();
        return Ok(());
    }

    let Some(arg) = args.source.as_deref() else {
        return Ok(());
    };
    let source = PageSource::from_arg(arg);
    let document = source.load()?;

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut sink = TerminalSink::new(stdout.lock(), color);

    let report = log_priorities(&document, &Classifier::new(), &mut sink)?;
    log::info!(
        "{}: {} of {} head elements out of place",
        source.label(),
        report.displaced(),
        report.actual.len()
    );
    Ok(())
}

fn print_catalog() {
    for rule in rules() {
        println!(
            "{:>2}  {:<18} {}",
            rule.category.priority(),
            rule.category,
            rule.describe()
        );
    }
    println!("{:>2}  {:<18} (anything else)", Category::Other.priority(), Category::Other);
}
