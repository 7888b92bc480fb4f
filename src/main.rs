use std::path::PathBuf;

use clap::Parser;

use estrim::batch::{self, BatchOptions};
use estrim::diag::Reporter;

/// In-place optimizer for ESTree syntax trees.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ESTree JSON files to rewrite in place
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Run every stage but skip writing files back
    #[arg(long)]
    dry_run: bool,

    /// Print each optimized tree as JSON to stdout
    #[arg(long)]
    dump: bool,
}

fn main() {
    let args = Args::parse();

    let opts = BatchOptions {
        write: !args.dry_run,
        dump: args.dump,
    };

    let mut diags = Reporter::new();
    batch::run(&args.files, &opts, &mut diags);

    println!("{}", diags.state());
}
