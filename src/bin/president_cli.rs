// src/bin/president_cli.rs

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use president_engine::api::{
    build_game_view, ApiError, Command, CommandResponse, GameSession, GameViewDto, Query, QueryResponse,
};
use president_engine::domain::{Card, GameConfig, SeatIndex, HUMAN_SEAT};
use president_engine::engine::{Move, PlayerAction};

/// Терминальная партия в President: вы (место 1) против трёх автоматов.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed для воспроизводимой раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// Пауза перед показом хода автомата, в миллисекундах.
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,

    /// Все четыре места играет автомат.
    #[arg(long)]
    autoplay: bool,

    /// Подробный лог (debug) в терминал.
    #[arg(short, long)]
    verbose: bool,

    /// Дополнительно писать debug-лог в файл.
    #[arg(long)]
    log_file: Option<String>,

    /// В конце вывести итоговое состояние партии в JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    let config = if args.autoplay {
        GameConfig::autoplay(args.seed)
    } else {
        GameConfig {
            human_seat: Some(HUMAN_SEAT),
            seed: args.seed,
        }
    };

    let mut session = match GameSession::new(config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("[CLI] не удалось начать партию: {err}");
            std::process::exit(1);
        }
    };

    println!("President: сбросьте все карты первым.");
    println!("Команды: номера карт (через пробел) — выбрать/снять, play, pass, clear, quit.");

    let delay = Duration::from_millis(args.delay_ms);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let view = current_view(&session);
        render(&view);

        if let Some(winner) = view.winner {
            announce_winner(winner, session.engine().config().is_human(winner));
            break;
        }

        if view.pending_automated_seat.is_some() {
            std::thread::sleep(delay);
            match session.handle(Command::RunAutomatedTurn) {
                Ok(CommandResponse::AutomatedMoves { actions, .. }) => {
                    actions.iter().for_each(print_action);
                }
                Ok(_) => {}
                Err(err) => {
                    eprintln!("[CLI] BUG: {err}");
                    break;
                }
            }
            continue;
        }

        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match handle_input(&mut session, line.trim()) {
            Ok(InputOutcome::Continue) => {}
            Ok(InputOutcome::Quit) => break,
            Err(err) if err.is_recoverable() => println!("{}", err.to_string().yellow()),
            Err(err) => {
                eprintln!("[CLI] BUG: {err}");
                break;
            }
        }
    }

    if args.json {
        let view = build_game_view(session.engine(), None, Vec::new());
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("[CLI] не удалось сериализовать состояние: {err}"),
        }
    }
}

enum InputOutcome {
    Continue,
    Quit,
}

fn handle_input(session: &mut GameSession, input: &str) -> Result<InputOutcome, ApiError> {
    let seat = session.engine().config().human_seat.ok_or(ApiError::NoHumanSeat)?;

    match input {
        "" => {}
        "quit" | "exit" => return Ok(InputOutcome::Quit),
        "play" => {
            session.handle(Command::PlaySelection)?;
        }
        "pass" => {
            session.handle(Command::Pass { seat })?;
            println!("Вы пасуете.");
        }
        "clear" => {
            session.handle(Command::ClearSelection)?;
        }
        other => {
            // Номера карт в выводе начинаются с 1.
            for token in other.split_whitespace() {
                let index = token
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .ok_or_else(|| ApiError::BadRequest(format!("unknown command: {token}")))?;
                session.handle(Command::ToggleSelection { index })?;
            }
        }
    }

    Ok(InputOutcome::Continue)
}

fn current_view(session: &GameSession) -> GameViewDto {
    let viewer = session.engine().config().human_seat;
    match session.query(Query::GetGame { viewer }) {
        QueryResponse::Game(view) => view,
        _ => build_game_view(session.engine(), viewer, session.selection().indices()),
    }
}

fn render(view: &GameViewDto) {
    println!();
    for seat in &view.seats {
        let marker = if seat.is_active { "→" } else { " " };
        let title = seat_title(seat.seat, seat.is_human);
        match &seat.cards {
            Some(cards) if seat.is_human => {
                let shown: Vec<String> = cards
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        let text = format!("{}:{}", i + 1, paint(c));
                        if view.selected.contains(&i) {
                            format!("[{text}]")
                        } else {
                            text
                        }
                    })
                    .collect();
                println!("{marker} {title}: {}", shown.join(" "));
            }
            Some(cards) => {
                let shown: Vec<String> = cards.iter().map(paint).collect();
                println!("{marker} {title} ({}): {}", cards.len(), shown.join(" "));
            }
            None => println!("{marker} {title}: {}", "🂠".repeat(seat.card_count)),
        }
    }

    if view.last_played.is_empty() {
        println!("  На столе: пусто (ход с чистого стола)");
    } else {
        let shown: Vec<String> = view.last_played.iter().map(paint).collect();
        println!("  На столе: {}  (пасов подряд: {})", shown.join(" "), view.consecutive_passes);
    }
}

fn print_action(action: &PlayerAction) {
    let who = format!("Игрок {}", action.seat + 1);
    match &action.kind {
        Move::Play(cards) => {
            let shown: Vec<String> = cards.iter().map(paint).collect();
            println!("{who} кладёт {}", shown.join(" "));
        }
        Move::Pass => println!("{who} пасует"),
    }
}

fn announce_winner(winner: SeatIndex, is_human: bool) {
    if is_human {
        println!("{}", "Вы выиграли!".green().bold());
    } else {
        println!("{}", format!("Игрок {} выиграл!", winner + 1).bold());
    }
}

fn seat_title(seat: SeatIndex, is_human: bool) -> String {
    if is_human {
        "Вы".to_string()
    } else {
        format!("Игрок {}", seat + 1)
    }
}

fn paint(card: &Card) -> String {
    if card.is_red() {
        card.to_string().red().to_string()
    } else {
        card.to_string()
    }
}

/// Лог в терминал (warn, с `-v` — debug) и, если задан файл, debug-лог в файл.
fn init_logging(args: &Args) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();

    let term_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![simplelog::TermLogger::new(
        term_level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if let Some(path) = &args.log_file {
        match std::fs::File::create(path) {
            Ok(file) => loggers.push(simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file)),
            Err(err) => eprintln!("[CLI] не удалось открыть лог-файл {path}: {err}"),
        }
    }

    if let Err(err) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("[CLI] логгер уже инициализирован: {err}");
    }
}
