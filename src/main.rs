//! Szózat - CLI
//!
//! Hungarian Wordle with a TUI, a line-based mode and a few helper commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use szozat::{
    commands::{
        Session, check_guess, collect_stats, daily_info, run_simple, validate_lists,
        validation_progress_bar,
    },
    config::{Config, DEFAULT_ORIGIN, WordListSource, default_data_dir, now_ms},
    output::{print_check_result, print_daily_info, print_stats_report, print_validation_report},
    puzzle::{CustomPuzzle, Difficulty, LinkParams, create_puzzle_link},
    share::{ShareOutcome, ShareTarget, deliver},
    wordlists::{ALL, PUZZLES},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "szozat",
    about = "Szózat: Hungarian Wordle with digraph-aware letters and daily puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length in letter units (3-9)
    #[arg(short, long, global = true, default_value = "5")]
    difficulty: Difficulty,

    /// Daily puzzle list: 'embedded' (default) or path to a TXT/JSON file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Directory for saved games and statistics (default: ~/.szozat)
    #[arg(long, global = true, env = "SZOZAT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Site address used in share text and puzzle links
    #[arg(long, global = true, env = "SZOZAT_ORIGIN", default_value = DEFAULT_ORIGIN)]
    origin: String,

    /// Play a custom puzzle from a link or its fragment (its difficulty wins)
    #[arg(short, long, global = true)]
    link: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Evaluate one guess against a secret word
    Check {
        /// The secret word
        secret: String,
        /// The guess to evaluate
        guess: String,
    },

    /// Show the daily puzzle number and time until the next one
    Daily {
        /// Days from today (negative for earlier puzzles)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        day: i64,
    },

    /// Show saved statistics
    Stats,

    /// Create a link to a custom puzzle
    Link {
        /// Solution word, as many letter units as the difficulty
        word: String,

        /// Name shown to the players
        #[arg(short, long)]
        creator: Option<String>,
    },

    /// Print or save the share text of the saved game
    Share {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every embedded word list
    Validate,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let link = cli
        .link
        .as_deref()
        .map(LinkParams::parse)
        .transpose()
        .context("Failed to read the puzzle link")?;

    let config = Config {
        difficulty: link
            .as_ref()
            .and_then(|params| params.difficulty)
            .unwrap_or(cli.difficulty),
        wordlist: WordListSource::parse(&cli.wordlist),
        data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
        origin: cli.origin,
        ..Config::default()
    };
    let custom = link.as_ref().and_then(LinkParams::custom);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, custom),
        Commands::Simple => run_simple_command(config, custom),
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Daily { day } => run_daily_command(&config, day),
        Commands::Stats => run_stats_command(&config),
        Commands::Link { word, creator } => run_link_command(&config, &word, creator.as_deref()),
        Commands::Share { output } => run_share_command(config, custom, output),
        Commands::Validate => {
            run_validate_command();
            Ok(())
        }
    }
}

fn open_session(config: Config, custom: Option<CustomPuzzle>) -> Result<Session> {
    let lists = config
        .word_lists()
        .context("Failed to load the word lists")?;
    Session::open(config, lists, custom).context("Failed to read the saved game")
}

fn run_play_command(config: Config, custom: Option<CustomPuzzle>) -> Result<()> {
    use szozat::interactive::{App, run_tui};

    let app = App::new(open_session(config, custom)?);
    run_tui(app)
}

fn run_simple_command(config: Config, custom: Option<CustomPuzzle>) -> Result<()> {
    let mut session = open_session(config, custom)?;
    run_simple(&mut session)
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("Cannot compare the words")?;
    print_check_result(&result);
    Ok(())
}

fn run_daily_command(config: &Config, day: i64) -> Result<()> {
    let lists = config
        .word_lists()
        .context("Failed to load the word lists")?;
    let info = daily_info(
        config.difficulty,
        lists.puzzles(config.difficulty).len(),
        day,
        now_ms(),
        config.epoch_ms(),
        config.epoch,
    )
    .with_context(|| {
        format!(
            "No daily puzzle for difficulty {} at day offset {day}",
            config.difficulty
        )
    })?;

    print_daily_info(&info);
    Ok(())
}

fn run_stats_command(config: &Config) -> Result<()> {
    let store = config.store();
    let report = collect_stats(&store).context("Failed to read the statistics")?;
    let id = store.player_id().context("Failed to read the player id")?;

    println!("Játékos: {id}");
    print_stats_report(&report);
    Ok(())
}

fn run_link_command(config: &Config, word: &str, creator: Option<&str>) -> Result<()> {
    let link = create_puzzle_link(&config.origin, word, creator, config.difficulty)
        .with_context(|| format!("Cannot create a {}-letter puzzle", config.difficulty))?;
    println!("{link}");
    Ok(())
}

fn run_share_command(
    config: Config,
    custom: Option<CustomPuzzle>,
    output: Option<PathBuf>,
) -> Result<()> {
    let session = open_session(config, custom)?;
    if !session.game().is_over() {
        anyhow::bail!("A játéknak még nincs vége, nincs mit megosztani");
    }

    let target = output.map_or(ShareTarget::Stdout, ShareTarget::File);
    match deliver(&session.share_text(), &target)? {
        ShareOutcome::Printed => {}
        ShareOutcome::Saved(path) => eprintln!("Mentve: {}", path.display()),
    }
    Ok(())
}

fn run_validate_command() {
    let total: usize = PUZZLES.iter().chain(&ALL).map(|list| list.len()).sum();
    println!("🎯 Validating {total} words...");

    let pb = validation_progress_bar(total);
    let report = validate_lists(&PUZZLES, &ALL, &pb);
    print_validation_report(&report);
}
