extern crate clap;
extern crate conservation;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate rayon;
use clap::{App, Arg, ArgMatches};
use conservation::{Config, StatisticKind};
use std::path::PathBuf;

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> conservation::Result<T> {
    let value = matches.value_of(name).unwrap_or("");
    value
        .parse()
        .map_err(|_| conservation::Error::Config(format!("invalid {}: \"{}\"", name, value)))
}

fn to_config(matches: &ArgMatches) -> conservation::Result<Config> {
    let input = matches.value_of("input").unwrap_or("");
    let mut config = Config::new(input);
    if let Some(output) = matches.value_of("output") {
        config.output = PathBuf::from(output);
    }
    config.score_matrix_dir = matches
        .value_of("score_matrix_path")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("SCORE_MAT_PATH").map(PathBuf::from));
    if let Some(matrix) = matches.value_of("matrix") {
        config.score_matrix_file = matrix.to_string();
    }
    config.statistic = parse_arg::<StatisticKind>(matches, "statistic")?;
    config.max_sequences = parse_arg(matches, "nb_seq")?;
    config.verbose = matches.occurrences_of("verbose") > 0;
    config.global = matches.is_present("global");
    config.basic = matches.is_present("basic");
    config.json = matches.is_present("json");
    config.threshold = parse_arg(matches, "threshold")?;
    config.trident_factors = (
        parse_arg(matches, "trident_a")?,
        parse_arg(matches, "trident_b")?,
        parse_arg(matches, "trident_c")?,
    );
    config.window = parse_arg(matches, "window")?;
    config.threads = parse_arg(matches, "threads")?;
    if config.statistic.needs_matrix() {
        // Fail before reading the alignment.
        config.score_matrix()?;
    }
    Ok(config)
}

fn main() {
    let statistics: Vec<_> = StatisticKind::ALL.iter().map(|k| k.name()).collect();
    let matches = App::new("mstatx")
        .version("0.1")
        .author("Bansho Masutani")
        .about("Conservation statistics of a multiple sequence alignment.")
        .arg(
            Arg::with_name("input")
                .required(true)
                .short("i")
                .long("input")
                .value_name("ALIGNMENT")
                .help("Multiple alignment<FASTA>")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUT")
                .help("Output file [default: <input up to the first '.'>.stat]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("matrix")
                .short("m")
                .long("matrix")
                .value_name("MATRIX")
                .help("Score matrix file name<AAindex>")
                .default_value(conservation::config::DEFAULT_MATRIX)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("score_matrix_path")
                .short("p")
                .long("score_matrix_path")
                .value_name("DIR")
                .help("Directory of the score matrices [default: $SCORE_MAT_PATH]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("statistic")
                .short("s")
                .long("statistic")
                .value_name("STATISTIC")
                .help("Statistic to compute")
                .possible_values(&statistics)
                .default_value(&"wentropy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("nb_seq")
                .short("n")
                .long("nb_seq")
                .value_name("NUM")
                .help("Maximum number of sequences read")
                .default_value(&"500")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("global")
                .short("g")
                .long("global")
                .help("Output only the global score of the alignment"),
        )
        .arg(
            Arg::with_name("basic")
                .long("basic")
                .help("Also output the residue counts of each column"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Output the result in JSON"),
        )
        .arg(
            Arg::with_name("threshold")
                .short("t")
                .long("threshold")
                .value_name("THRESHOLD")
                .help("Report correlations above this value (mlc)")
                .default_value(&"0.8")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trident_a")
                .short("a")
                .long("trident_a")
                .value_name("A")
                .help("Exponent of the entropy term (trident)")
                .default_value(&"1.0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trident_b")
                .short("b")
                .long("trident_b")
                .value_name("B")
                .help("Exponent of the stereochemical term (trident)")
                .default_value(&"0.5")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("trident_c")
                .short("c")
                .long("trident_c")
                .value_name("C")
                .help("Exponent of the gap term (trident)")
                .default_value(&"3.0")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("window")
                .short("w")
                .long("window")
                .value_name("WINDOW")
                .help("Number of side columns on each side (jensen)")
                .default_value(&"3")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("threads")
                .long("threads")
                .value_name("THREADS")
                .help("Number of Threads")
                .default_value(&"1")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Output debug to the standard error."),
        )
        .get_matches();
    let level = match matches.occurrences_of("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let start = std::time::Instant::now();
    let config = match to_config(&matches) {
        Ok(config) => config,
        Err(why) => {
            error!("{}", why);
            std::process::exit(1);
        }
    };
    debug!("Config:\n{}", config);
    if let Err(why) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()
    {
        warn!("Could not set the number of threads:{}", why);
    }
    match conservation::run(&config) {
        Ok(_) => info!(
            "mstatx computed in {:.3} seconds. The results are in {}",
            start.elapsed().as_secs_f64(),
            config.output.display()
        ),
        Err(why) => {
            error!("{}", why);
            error!("This program did not work successfully.");
            std::process::exit(1);
        }
    }
}
