use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tinyrand::{Seeded, Wyrand};
use tracing::{debug, info};

use scoreline::random::RandomSource;
use scoreline::timed::Timed;
use scoreline_soccer::data::Dataset;
use scoreline_soccer::print;
use scoreline_soccer::session::{Bounds, Config, Controls, Fixture, Selection, DEFAULT_TRIALS};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file to source the historical fixtures from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// home team (picked at random if omitted)
    #[clap(long)]
    home: Option<String>,

    /// away team (picked at random if omitted)
    #[clap(long)]
    away: Option<String>,

    /// number of simulated matches
    #[clap(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// expected goals of the home team, replacing its historical average
    #[clap(long, allow_negative_numbers = true)]
    home_rate: Option<f64>,

    /// expected goals of the away team, replacing its historical average
    #[clap(long, allow_negative_numbers = true)]
    away_rate: Option<f64>,

    /// seed the random source for a reproducible run
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// list the selectable teams and exit
    #[clap(short = 'l', long = "list")]
    list_teams: bool,

    /// allow a team to play itself
    #[clap(long)]
    allow_same_team: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file
            .as_ref()
            .ok_or(anyhow!("the -f flag must be specified"))?;
        if self.list_teams && (self.home.is_some() || self.away.is_some()) {
            bail!("--list cannot be combined with a team selection");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let file = args.file.as_ref().ok_or(anyhow!("missing file"))?;
    let dataset = Timed::try_measure(|| Dataset::open(file))?;
    info!(
        "loaded {} fixtures from {} in {:?}",
        dataset.value.len(),
        file.display(),
        dataset.elapsed
    );
    let dataset = dataset.value;
    let teams = dataset.teams();
    if args.list_teams {
        println!("{}", Console::default().render(&print::tabulate_teams(&teams)));
        return Ok(());
    }

    let seed = RandomSource::from(args.seed).seed();
    info!("seed: {seed}");
    let mut rand = Wyrand::seed(seed);

    let selection = Selection::complete(args.home.clone(), args.away.clone(), &teams, &mut rand)?;
    let bounds = Bounds::try_from(Config {
        allow_same_team: args.allow_same_team,
        ..Config::default()
    })?;
    let controls = Controls::default()
        .with_trials(args.trials)
        .with_home_rate(args.home_rate)
        .with_away_rate(args.away_rate);
    let fixture = Fixture::prepare(&dataset, &selection, &controls, &bounds)?;
    info!("fixture: {} vs {}", selection.home, selection.away);
    println!(
        "Scoring rates:\n{}",
        Console::default().render(&print::tabulate_rates(&fixture))
    );

    let result = Timed::try_measure(|| fixture.simulate(&mut rand))?;
    info!("simulated {} matches in {:?}", fixture.trials, result.elapsed);
    let result = result.value;
    let exact = fixture.exact_probs()?;
    println!(
        "After {} simulations:\n{}",
        fixture.trials,
        Console::default().render(&print::tabulate_outcomes(&selection, &result, &exact))
    );
    println!(
        "Distribution of simulated goals:\n{}",
        Console::default().render(&print::tabulate_goal_distribution(
            &selection,
            &result.aligned_goal_distributions()
        ))
    );
    Ok(())
}
