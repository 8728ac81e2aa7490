use clap::Parser;
use judge::{play_competition, Config, ConsoleInput, Player, PlayerKind, Summary};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Type of the first player: 1 (random), 2 (heuristic), 3 (smart) or 4 (human)
    player_1: PlayerKind,

    /// Type of the second player, like the first one
    player_2: PlayerKind,

    /// How many rounds to play
    num_rounds: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Narrate every round, even if no human is playing
    #[arg(short, long, default_value_t = false)]
    display_messages: bool,

    /// Also print the results as a line of JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let players = [
        Player::new(1, args.player_1),
        Player::new(2, args.player_2),
    ];
    let display_messages = args.display_messages || players.iter().any(|p| p.kind.is_human());
    let mut config = Config::new(seed, display_messages);

    let mut input = ConsoleInput::new(std::io::stdin().lock(), std::io::stdout());
    let match_score = play_competition(
        &players,
        args.num_rounds,
        &mut config,
        &mut input,
        &mut std::io::stdout(),
    )?;
    info!(
        player_1 = match_score.wins[0],
        player_2 = match_score.wins[1],
        "Competition finished"
    );

    println!(
        "The results are {}:{}",
        match_score.wins[0], match_score.wins[1]
    );
    if args.json {
        println!(
            "{}",
            serde_json::to_string(&Summary::new(&players, &match_score))?
        );
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    // Stdout belongs to the game, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
