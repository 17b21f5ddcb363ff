use clap::{Parser, ValueEnum, ValueHint};
use rio_bidi::BaseDirection;
use std::path::PathBuf;

#[derive(Parser, Default, Debug)]
#[clap(author, about, version)]
pub struct Cli {
    /// Line to reorder. Lines are read from standard input when absent.
    pub text: Option<String>,

    /// Paragraph direction, overrides the configuration file.
    #[clap(short, long, value_enum)]
    pub direction: Option<Direction>,

    /// Print the runs in logical order instead of visual order.
    #[clap(long)]
    pub logical: bool,

    /// Writes the config to a given path or the default location.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub write_config: Option<Option<PathBuf>>,

    /// Writes the logs to the given file as well.
    #[clap(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Auto,
    Ltr,
    Rtl,
}

impl From<Direction> for BaseDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Auto => BaseDirection::Auto,
            Direction::Ltr => BaseDirection::LeftToRight,
            Direction::Rtl => BaseDirection::RightToLeft,
        }
    }
}
