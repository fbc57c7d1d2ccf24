//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "glosspipe", about = "interlinear gloss corpus generation tool.")]
/// Holds every command that is callable by the `glosspipe` command.
pub enum Glosspipe {
    #[structopt(about = "Run pipeline")]
    Pipeline(Pipeline),
    #[structopt(about = "Parse transcripts and report diagnostics without writing output")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// glosspipe-pipeline 1.0.0
/// Run pipeline
///
/// USAGE:
///     glosspipe pipeline <src> <dst>
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// ARGS:
///     <src>    source folder (contains transcript .txt files)
///     <dst>    pipeline result destination
/// ```
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "source folder (contains transcript .txt files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "source folder (contains transcript .txt files)")]
    pub src: PathBuf,
}
