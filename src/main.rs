use skyward::assets::{AssetSource, BuiltinAssets, SpriteDir};
use skyward::build_info;
use skyward::core::constants::CONFIG_FILE;
use skyward::core::{Flappy, GameConfig, HighScoreStore};
use skyward::input::CrosstermEvents;
use skyward::ui::TerminalScreen;
use skyward::utils::{logging, persistence};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

const USAGE: &str = "\
Skyward - flap through the pipes in your terminal

Usage: skyward [options]

Options:
  --data-dir <path>     Keep the high score, config and log in <path>
  --high-score          Print the stored high score and exit
  --reset-high-score    Reset the stored high score to 0 and exit
  --version             Show version information
  --help                Show this help message

Controls: Space/Up/Enter/W or left click to flap, Esc or Q to quit.";

enum Command {
    Play,
    ShowHighScore,
    ResetHighScore,
}

fn main() -> io::Result<()> {
    let mut args = std::env::args().skip(1);
    let mut data_dir: Option<PathBuf> = None;
    let mut command = Command::Play;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            "--high-score" => command = Command::ShowHighScore,
            "--reset-high-score" => command = Command::ResetHighScore,
            "--data-dir" => match args.next() {
                Some(path) => data_dir = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--data-dir needs a path");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let (data_dir, store) = match data_dir {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            let store = HighScoreStore::in_dir(&dir);
            (dir, store)
        }
        None => (persistence::data_dir()?, HighScoreStore::new()?),
    };

    match command {
        Command::ShowHighScore => {
            println!("{}", store.load());
            return Ok(());
        }
        Command::ResetHighScore => {
            if let Err(e) = store.try_save(0) {
                eprintln!("Could not reset high score: {}", e);
                std::process::exit(1);
            }
            println!("High score reset.");
            return Ok(());
        }
        Command::Play => {}
    }

    if let Err(e) = logging::init(&data_dir.join(logging::LOG_FILE)) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(version = %build_info::version_line(), data_dir = %data_dir.display(), "starting");

    let config = GameConfig::load(&data_dir.join(CONFIG_FILE));
    let builtin = Box::new(BuiltinAssets::new(&config));
    let assets: Box<dyn AssetSource> = match &config.asset_dir {
        Some(dir) if dir.is_dir() => Box::new(SpriteDir::new(dir).with_fallback(builtin)),
        Some(dir) => {
            warn!(asset_dir = %dir.display(), "sprite directory not found, using built-in art");
            builtin
        }
        None => builtin,
    };

    let result = {
        let screen = TerminalScreen::new()?;
        let mut game = Flappy::new(
            config,
            assets,
            store.clone(),
            CrosstermEvents::new(),
            screen,
            rand::thread_rng(),
        );
        game.start()
        // Terminal is restored when the screen drops here.
    };

    if let Err(e) = &result {
        error!(error = %e, "game stopped on an I/O error");
    }
    result?;

    println!("High score: {}", store.load());
    Ok(())
}
