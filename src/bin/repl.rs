use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use target_dice::common::Int;
use target_dice::parse::{parse_command, Command};
use target_dice::roll::Roller;
use target_dice::stringifiers::{MarkdownStringifier, SimpleStringifier};
use target_dice::{DieCount, Mode, RollReport, RollSession, SessionConfig, TargetBound};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "target-dice")]
#[command(about = "Roll six-sided dice that add up to at most a chosen number")]
struct Args {
    /// Starting target (0 selects the default of 6)
    #[arg(short, long, default_value_t = 6, allow_negative_numbers = true)]
    bound: Int,

    /// How outcomes are sampled
    #[arg(short, long, value_enum, default_value_t = Mode::Exact)]
    mode: Mode,

    /// Free rolls tried in ceiling mode before building an outcome
    #[arg(long, default_value_t = 100)]
    max_attempts: usize,

    /// How long the dice roll before the result is shown, in milliseconds
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,

    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Print results as markdown
    #[arg(long)]
    markdown: bool,

    /// Log every sampled outcome
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "\
commands:
  roll, r, <enter>   roll the dice
  bound <n>, <n>     set the target (no number: 6)
  mode exact|ceiling choose how outcomes are sampled
  help, ?            show this text
  quit, q            leave";

fn show(report: &RollReport, markdown: bool) {
    let text = if markdown {
        report.result::<MarkdownStringifier>()
    } else {
        report.result::<SimpleStringifier>()
    };
    println!("{}", text);
    for (i, orientation) in report.orientations().enumerate() {
        debug!(die = i + 1, %orientation, "final position");
    }
}

fn dice_word(dice: DieCount) -> &'static str {
    if dice.get() == 1 {
        "die"
    } else {
        "dice"
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn run<R: Roller>(mut session: RollSession<R>, markdown: bool) -> io::Result<()> {
    println!(
        "Target {} ({} {}), {} mode. Type 'help' for commands.",
        session.bound(),
        session.dice(),
        dice_word(session.dice()),
        session.mode()
    );
    prompt()?;
    for line in io::stdin().lock().lines() {
        match parse_command(&line?) {
            Ok(Command::Roll) => {
                if !session.delay().is_zero() {
                    println!("Rolling...");
                }
                if let Some(report) = session.roll_blocking() {
                    show(&report, markdown);
                }
            }
            Ok(Command::SetBound(value)) => match TargetBound::from_input(value) {
                Ok(bound) => {
                    let dice = session.set_bound(bound);
                    println!("Target {}: rolling {} {}", bound, dice, dice_word(dice));
                }
                Err(why) => eprintln!("Error: {}", why),
            },
            Ok(Command::SetMode(mode)) => {
                session.set_mode(mode);
                println!("Mode: {}", mode);
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(why) => eprintln!("Error: {}", why),
        }
        prompt()?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = SessionConfig {
        bound: TargetBound::from_input(Some(args.bound))?,
        mode: args.mode,
        max_attempts: args.max_attempts,
        delay: Duration::from_millis(args.delay_ms),
    };
    let roller = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    run(RollSession::new(config, roller), args.markdown)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_word() {
        assert_eq!(dice_word(DieCount::ONE), "die");
        assert_eq!(dice_word(DieCount::new(2).unwrap()), "dice");
        assert_eq!(dice_word(DieCount::new(1000).unwrap()), "dice");
    }
}
