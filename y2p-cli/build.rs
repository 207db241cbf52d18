use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

include!("src/cli.rs");

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = cli();

    generate_to(Bash, &mut cmd, "y2p", &outdir)?;
    generate_to(Zsh, &mut cmd, "y2p", &outdir)?;
    generate_to(Fish, &mut cmd, "y2p", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
