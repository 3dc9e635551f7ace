use pokedex_core::{log_filter, run, CliOptions, Command};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: pokedex-core [--pretty] <command>\n\
         \n\
         Commands:\n\
         \x20 matchup <type> [type]        defensive profile for one or two types\n\
         \x20 forms --input forms.json     resolve form labels from raw records\n\
         \x20 matrix [--output matrix.csv] full defensive matrix as CSV"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut pretty = false;
    let mut args = env::args().skip(1).peekable();

    while let Some(flag) = args.next_if(|arg| arg.starts_with('-')) {
        match flag.as_str() {
            "--pretty" => pretty = true,
            "--help" | "-h" => usage(),
            other => anyhow::bail!("Unknown argument {other}"),
        }
    }

    let command = match args.next().as_deref() {
        Some("matchup") => {
            let types: Vec<String> = args.by_ref().collect();
            if types.is_empty() {
                anyhow::bail!("matchup requires one or two types (e.g. matchup fire flying)");
            }
            Command::Matchup { types }
        }
        Some("forms") => {
            let mut input = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--input" => {
                        input = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--input requires a path (e.g. --input forms.json)")
                        })?);
                    }
                    "--help" | "-h" => usage(),
                    other => anyhow::bail!("Unknown argument {other}"),
                }
            }
            let input = input.ok_or_else(|| anyhow::anyhow!("forms requires --input"))?;
            Command::Forms { input }
        }
        Some("matrix") => {
            let mut output = PathBuf::from("matrix.csv");
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--output" => {
                        output = args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--output requires a path (e.g. --output matrix.csv)")
                        })?;
                    }
                    "--help" | "-h" => usage(),
                    other => anyhow::bail!("Unknown argument {other}"),
                }
            }
            Command::Matrix { output }
        }
        Some(other) => anyhow::bail!("Unknown command {other} (use matchup, forms or matrix)"),
        None => usage(),
    };

    Ok(CliOptions { command, pretty })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV)
                .ok()
                .as_deref(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args()?;
    run(opts)
}
