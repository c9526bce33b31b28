mod cli;
mod trace;

use anyhow::Result;
use clap::Parser;
use faceplot::draw::rerun::{save_session, start_session};
use faceplot::style::bind_styles;
use faceplot::{plot_faces, read_faces};

fn main() -> Result<()> {
    let args = cli::CliArguments::parse();
    trace::init_tracing(args.verbosity);

    let config = args.plot_config()?;
    let file = read_faces(&args.input)?;

    // Fail before a viewer is opened
    bind_styles(&file.faces, config.style_tokens(&file))?;

    let session = match &args.save {
        Some(path) => save_session(&config, path)?,
        None => start_session(&config)?,
    };
    plot_faces(&session, &file, &config)?;

    Ok(())
}
