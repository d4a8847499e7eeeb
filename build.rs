//! Build-time generation of the man page and shell completions.
//!
//! The CLI definition is shared with the binary by including `src/cli.rs`
//! directly, so the generated artifacts can never drift from the real
//! argument parser. Artifacts land in `OUT_DIR`; packaging picks them up
//! from there.

include!("src/cli.rs");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::CommandFactory;
    use clap_complete::{generate_to, shells};

    println!("cargo:rerun-if-changed=src/cli.rs");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR")?);

    // Man page
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buf: Vec<u8> = Vec::new();
    man.render(&mut buf)?;
    std::fs::write(out_dir.join("outsmart-setup.1"), buf)?;

    // Shell completions
    let mut cmd = cmd;
    generate_to(shells::Bash, &mut cmd, "outsmart-setup", &out_dir)?;
    generate_to(shells::Zsh, &mut cmd, "outsmart-setup", &out_dir)?;
    generate_to(shells::Fish, &mut cmd, "outsmart-setup", &out_dir)?;

    Ok(())
}
