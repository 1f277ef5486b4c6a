use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;

use gomoku_sounds::audio_system::{FilePlayer, SoundBoard};
use gomoku_sounds::config::{Config, SoundStrategy};
use gomoku_sounds::error::AppResult;
use gomoku_sounds::messaging::{GameEvent, InteractionBus, InteractionEvent};
use gomoku_sounds::{logging, sounds};

const LOG_TARGET_STARTUP: &str = "gomoku_sounds::startup";

/// Active sound implementation for the session
enum Session {
    Synthesized,
    Files(Box<dyn SoundBoard>),
}

fn main() -> AppResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut cfg = match args.iter().position(|a| a == "--config") {
        Some(index) => {
            let path = args
                .get(index + 1)
                .map(PathBuf::from)
                .context("--config needs a path")?;
            Config::load_from(&path)
                .with_context(|| format!("loading config from {}", path.display()))?
        }
        None => Config::load().context("loading config")?,
    };
    if args.iter().any(|a| a == "--files") {
        cfg.strategy = SoundStrategy::Files;
    }
    if args.iter().any(|a| a == "--gesture") {
        cfg.require_user_gesture = true;
    }
    if args.iter().any(|a| a == "--enhanced") {
        cfg.enhanced_stone = true;
    }

    logging::init_tracing(&cfg);
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting gomoku-sounds v{} ({:?})",
        env!("CARGO_PKG_VERSION"),
        cfg.strategy
    );

    println!("===========================================");
    println!("  Gomoku Sounds - Sound Effect Console");
    println!("===========================================\n");

    let bus = InteractionBus::new();
    let session = match cfg.strategy {
        SoundStrategy::Synthesized => {
            if sounds::init_sound_system(&cfg, &bus) {
                println!("✓ Audio context ready");
            } else {
                println!("✗ No audio output, running in silent mode");
            }
            if cfg.require_user_gesture {
                println!("  Audio is suspended until you type 'click' or 'touch'");
            }
            Session::Synthesized
        }
        SoundStrategy::Files => {
            let board: Box<dyn SoundBoard> = match FilePlayer::try_default() {
                Ok(mut player) => {
                    player.init_sounds(&PathBuf::from(&cfg.sounds_dir), &cfg.volumes);
                    println!(
                        "✓ Loaded {} sound files from {}",
                        player.loaded_count(),
                        cfg.sounds_dir
                    );
                    Box::new(player)
                }
                Err(e) => {
                    tracing::warn!("File playback unavailable: {}", e);
                    println!("✗ No audio output, running in silent mode");
                    Box::new(SilentBoard)
                }
            };
            Session::Files(board)
        }
    };

    println!("\nCommands: stone | enhanced | win | draw | error | click | touch | quit\n");
    run_console(&session, &bus)
}

fn run_console(session: &Session, bus: &InteractionBus) -> AppResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "click" => bus.publish(InteractionEvent::PointerDown),
            "touch" => bus.publish(InteractionEvent::TouchStart),
            "enhanced" => match session {
                Session::Synthesized => sounds::play_enhanced_stone_sound(),
                Session::Files(board) => board.on_game_event(GameEvent::StonePlaced),
            },
            command => match parse_game_event(command) {
                Some(event) => dispatch(session, event),
                None => println!("Unknown command: {}", command),
            },
        }

        if let Session::Synthesized = session {
            sounds::poll_unlock();
        }
    }

    println!("\nBye!");
    Ok(())
}

fn parse_game_event(command: &str) -> Option<GameEvent> {
    match command {
        "stone" => Some(GameEvent::StonePlaced),
        "win" => Some(GameEvent::GameWon),
        "draw" => Some(GameEvent::GameDrawn),
        "error" => Some(GameEvent::InvalidMove),
        _ => None,
    }
}

fn dispatch(session: &Session, event: GameEvent) {
    match session {
        Session::Synthesized => sounds::on_game_event(event),
        Session::Files(board) => board.on_game_event(event),
    }
}

/// Stand-in when no output device could be opened
struct SilentBoard;

impl SoundBoard for SilentBoard {
    fn on_game_event(&self, event: GameEvent) {
        tracing::debug!("{:?} sound (silent mode)", event);
    }
}
