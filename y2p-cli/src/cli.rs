// Also compiled into build.rs through `include!`, so keep this file free of crate-relative paths.

/// The `y2p` command definition
pub fn cli() -> clap::Command {
    use clap::{Arg, ArgAction, Command, ValueHint};

    Command::new("y2p")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a YAML-like markup subset into Apple PLIST XML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source document")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .short('d')
                .help("Print the parse trace instead of the PLIST document")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout")
                .value_hint(ValueHint::FilePath),
        )
}
