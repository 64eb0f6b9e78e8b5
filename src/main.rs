use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use emoji_picker::{
    CacheService, Config, EmojiPicker, Outcome, Theme, config, default_data_dir, logging,
};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "em",
    version,
    about = "Search emoji by keyword and copy one to the clipboard",
    long_about = None
)]
struct Cli {
    /// Emoji per grid row
    #[arg(long, default_value_t = config::DEFAULT_GRID_COLUMNS)]
    columns: usize,

    /// Grid rows shown at once
    #[arg(long, default_value_t = config::DEFAULT_GRID_ROWS)]
    rows: usize,

    /// Emoji per page
    #[arg(long, default_value_t = config::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Cache directory (default: $XDG_DATA_HOME/emoji-picker or ~/.local/share/emoji-picker)
    #[arg(long, env = "EMOJI_PICKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Also print the chosen emoji to stdout
    #[arg(long)]
    print: bool,

    /// Write logs to this file
    #[arg(long, env = "EMOJI_PICKER_LOG")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "em", &mut io::stdout());
        return Ok(());
    }

    logging::init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    let config = Config::new(cli.columns, cli.rows, cli.max_results)?;
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    info!("Using cache directory {}", data_dir.display());

    let theme = if std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    };

    let mut picker = EmojiPicker::new(config, CacheService::new(data_dir), theme);
    match picker.run()? {
        Outcome::Selected(emoji) => {
            if cli.print {
                println!("{emoji}");
            }
        }
        Outcome::Cancelled => {}
        Outcome::Failed(message) => {
            eprintln!("{} {message}", "Error:".red().bold());
            std::process::exit(1);
        }
    }

    Ok(())
}
