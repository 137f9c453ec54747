use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dyinfo")]
#[command(author, version, about = "Print metadata for Douyin share links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the share page and print the full metadata record as JSON
    Info {
        /// Print single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Share text containing a v.douyin.com link (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Print the play-address token of a video post
    Id {
        /// Share text containing a v.douyin.com link (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Print the direct play URL of a video post
    Url {
        /// Share text containing a v.douyin.com link (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Print the short link found in the text, without any network access
    Link {
        /// Share text containing a v.douyin.com link (read from stdin when omitted)
        text: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
