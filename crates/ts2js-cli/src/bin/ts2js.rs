use anyhow::Result;
use clap::Parser;

use ts2js_cli::args::CliArgs;
use ts2js_cli::manifest::NpmManifest;
use ts2js_cli::reporter::Reporter;
use ts2js_cli::vcs::GitCli;
use ts2js_cli::{driver, tracing_config};

fn main() -> Result<()> {
    // Only when TS2JS_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let color = args.color.enabled();
    colored::control::set_override(color);

    let vcs = GitCli::new(&args.directory);
    let manifest = NpmManifest::new(&args.directory);
    let summary = driver::run(&args, &vcs, &manifest)?;

    let reporter = Reporter::new(color);
    print!("{}", reporter.render(&summary, &args.directory));

    let code = summary.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
