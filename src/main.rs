use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::assets::Assets;
use flappy::audio::{play_events, Muted, SoundPlayer, TerminalBell};
use flappy::cli::{parse_args, CliOptions, Command, USAGE};
use flappy::core::{Game, GameAction};
use flappy::input::map_key;
use flappy::{build_info, logging, ui, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{error, info};

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let options = match command {
        Command::Help => {
            println!("{}", USAGE);
            return;
        }
        Command::Version => {
            println!("{}", build_info::version_line());
            return;
        }
        Command::Play(options) => options,
    };

    if let Err(e) = play(options) {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn play(options: CliOptions) -> flappy::Result<()> {
    let log_path = match options.log.clone() {
        Some(path) => Ok(path),
        None => logging::default_log_path(),
    };
    match log_path.and_then(|path| logging::init_logging(&path)) {
        Ok(()) => info!(version = %build_info::version_line(), "starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    let config = GameConfig::resolve(options.config.as_deref())?;
    let assets = Assets::load(&config.assets_dir);

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sound: Box<dyn SoundPlayer> = if options.mute || !config.sound_enabled {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::new(io::stdout()))
    };

    let mut game = Game::new(config, &mut rng);

    let mut terminal = enter_terminal()?;
    let result = run(&mut terminal, &mut game, &assets, sound.as_mut(), &mut rng);

    // Always try to restore the terminal, even after an error.
    let restored = leave_terminal(&mut terminal);
    result?;
    restored?;

    info!(best = game.best_score(), "goodbye");
    println!("Best score: {}", game.best_score());
    Ok(())
}

fn enter_terminal() -> flappy::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn leave_terminal(terminal: &mut Tui) -> flappy::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Fixed-rate loop: input, update, render, then wait out the rest of the tick.
fn run(
    terminal: &mut Tui,
    game: &mut Game,
    assets: &Assets,
    sound: &mut dyn SoundPlayer,
    rng: &mut StdRng,
) -> flappy::Result<()> {
    let tick = Duration::from_millis(game.config().tick_ms);

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(GameAction::Quit) => return Ok(()),
                    Some(action) => {
                        let events = game.handle_action(action, rng);
                        play_events(sound, &events);
                    }
                    None => {}
                }
            }
        }

        let events = game.tick(rng);
        play_events(sound, &events);

        terminal.draw(|frame| ui::draw(frame, game, assets))?;

        if let Some(rest) = tick.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}
