use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .help("Directory the folders are created in")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(
            Arg::new("tree")
                .short('t')
                .long("tree")
                .help("TOML blueprint to scaffold instead of the built-in backend tree")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Preview the tree without writing anything")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = ossature::ScaffoldOptions {
        base: matches
            .get_one::<PathBuf>("base")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(".")),
        blueprint: matches.get_one::<PathBuf>("tree").cloned(),
        dry_run: matches.get_flag("dry-run"),
    };

    ossature::scaffold(&options)?;

    Ok(())
}
