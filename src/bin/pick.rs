//! Command-line front end: parse a 4-card hand, simulate every variant,
//! report the equity table and the best pick.

use clap::Parser;
use colored::Colorize;
use gamepick::Equity;
use gamepick::ITERATIONS;
use gamepick::cards::Pocket;
use gamepick::simulation::Selection;
use gamepick::simulation::Selector;
use gamepick::simulation::Settings;
use gamepick::variants::Variant;

#[derive(Parser)]
#[command(author, version, about = "Pick the best mixed-game variant for a 4-card hand", long_about = None)]
struct Args {
    /// Four cards such as "As Kd 2h 3c" or "As,Kd,2h,3c"
    #[arg(required = true, num_args = 1..)]
    hand: Vec<String>,
    /// Monte-Carlo iterations per variant
    #[arg(short = 'n', long, default_value_t = ITERATIONS)]
    iterations: usize,
    /// Master seed for a repeatable run
    #[arg(short, long)]
    seed: Option<u64>,
    /// Parallel shards per variant, defaults to the number of CPUs
    #[arg(short, long)]
    workers: Option<usize>,
    /// Only simulate these variants, by name, in the given order
    #[arg(short = 'g', long = "game")]
    games: Vec<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        anyhow::ensure!(self.iterations > 0, "iterations must be positive");
        let settings = Settings::default().with_iterations(self.iterations);
        let settings = match self.seed {
            Some(seed) => settings.with_seed(seed),
            None => settings,
        };
        let settings = match self.workers {
            Some(workers) => settings.with_workers(workers),
            None => settings,
        };
        Ok(settings)
    }
    fn variants(&self) -> anyhow::Result<Vec<Variant>> {
        match self.games.is_empty() {
            true => Ok(Variant::all().to_vec()),
            false => self
                .games
                .iter()
                .map(|g| Variant::try_from(g.as_str()).map_err(anyhow::Error::msg))
                .collect(),
        }
    }
}

#[derive(serde::Serialize)]
struct Row {
    variant: Variant,
    equity: Equity,
}

#[derive(serde::Serialize)]
struct Report {
    hand: String,
    equities: Vec<Row>,
    best: Variant,
    millis: u128,
}

impl Report {
    fn new(pocket: Pocket, selection: &Selection, elapsed: std::time::Duration) -> Self {
        Self {
            hand: pocket.to_string(),
            equities: selection
                .table()
                .iter()
                .map(|&(variant, equity)| Row { variant, equity })
                .collect(),
            best: selection.best(),
            millis: elapsed.as_millis(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "hand: {}", self.hand.bold())?;
        writeln!(f, "{}", "-".repeat(28))?;
        for row in &self.equities {
            let line = format!("{:<20} {:>7.3}", row.variant.name(), row.equity);
            match row.variant == self.best {
                true => writeln!(f, "{}", line.green().bold())?,
                false => writeln!(f, "{}", line)?,
            }
        }
        writeln!(f, "{}", "-".repeat(28))?;
        writeln!(f, "best: {}", self.best.name().green().bold())?;
        write!(f, "time: {} ms", self.millis)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gamepick::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    let pocket = Pocket::try_from(args.hand.join(" ").as_str())
        .map_err(|e| anyhow::anyhow!("invalid hand {:?}: {}", args.hand.join(" "), e))?;
    let selector = Selector::from(args.settings()?).with_variants(args.variants()?);
    let start = std::time::Instant::now();
    let selection = selector.select(pocket);
    let report = Report::new(pocket, &selection, start.elapsed());
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => println!("{}", report),
    }
    Ok(())
}
