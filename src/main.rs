use std::env;
use std::error::Error;
use std::io;
use std::process;

use clap::{App, Arg};
use log::debug;

use sokoban::config::{CharPolicy, Config};
use sokoban::game::{self, LevelReport};
use sokoban::report;
use sokoban::script::{self, ScriptFrontend};
use sokoban::terminal::Terminal;
use sokoban::LoadLevels;

fn main() {
    env_logger::init();

    let matches = App::new("sokoban")
        .author("martin-t")
        .version("0.1")
        .about("Push all the boxes onto the docks")
        .arg(
            Arg::with_name("level")
                .short("l")
                .long("level")
                .takes_value(true)
                .value_name("N")
                .help("start at level N (1-based)"),
        ).arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .takes_value(true)
                .value_name("SCRIPT")
                .help("play non-interactively: LURD moves, - undo, = reset, > skip, q quit"),
        ).arg(
            Arg::with_name("strict")
                .long("strict")
                .help("reject levels with unknown characters instead of skipping them"),
        ).arg(
            Arg::with_name("file")
                .required(true)
                .help("level collection, levels are separated by lines starting with ';'"),
        ).get_matches();

    let mut config = Config::new(matches.value_of("file").unwrap());
    if let Some(level) = matches.value_of("level") {
        config.first_level = level.parse().unwrap_or_else(|_| {
            eprintln!("Invalid level number: {}", level);
            process::exit(1);
        });
    }
    config.script = matches.value_of("moves").map(String::from);
    if matches.is_present("strict") {
        config.char_policy = CharPolicy::Reject;
    }
    debug!("{:?}", config);

    if let Err(err) = run(&config) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let levels = config.levels_path.load_levels().map_err(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        format!(
            "Can't read file {} in {}: {}",
            config.levels_path.display(),
            current_dir.display(),
            err
        )
    })?;

    let reports = match config.script {
        Some(ref script) => {
            let inputs = script::parse_script(script)?;
            let mut frontend = ScriptFrontend::new(inputs, io::stdout());
            game::play(&mut frontend, &levels, config)?
        }
        None => {
            let mut terminal = Terminal::new()?;
            let reports = game::play(&mut terminal, &levels, config)?;
            terminal.cleanup()?;
            reports
        }
    };

    print_summary(&reports);
    Ok(())
}

fn print_summary(reports: &[LevelReport]) {
    if reports.is_empty() {
        println!("No levels played");
        return;
    }
    print!("{}", report::summary_table(reports));
    println!("{}", report::totals(reports));
}
