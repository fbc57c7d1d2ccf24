//! # Glosspipe
//!
//! Glosspipe is the pipeline that turns field-linguistics elicitation
//! transcripts (speaker-annotated, interlinear-glossed documents) into
//! structured records for a searchable corpus website.
//!
//! This project can be used both as a tool to generate corpora,
//! or as a lib to integrate transcript processing into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! glosspipe 1.0.0
//! interlinear gloss corpus generation tool.
//!
//! USAGE:
//!     glosspipe <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check       Parse transcripts and report diagnostics without writing output
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run pipeline
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use glosspipe::error;
use glosspipe::pipelines::{GlossCorpus, Pipeline};

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Glosspipe::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Glosspipe::Pipeline(p) => {
            let p = GlossCorpus::new(p.src, p.dst);
            p.run()?;
        }
        cli::Glosspipe::Check(c) => {
            let report = GlossCorpus::check(&c.src)?;
            info!(
                "checked {} documents: {} ok, {} skipped ({} units ok, {} units skipped)",
                report.documents,
                report.documents - report.documents_skipped,
                report.documents_skipped,
                report.units,
                report.units_skipped
            );
        }
    };
    Ok(())
}
