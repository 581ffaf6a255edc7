use classful_subnet_plan::input::{read_address, read_hosts, CommandLine};
use classful_subnet_plan::models::parse_address;
use classful_subnet_plan::output::{print_banner, print_report, render_json};
use classful_subnet_plan::{compute_plan, Config};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = CommandLine::parse_args();
    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("{} {e}", "error:".on_red());
        std::process::exit(2);
    }
}

fn run(args: CommandLine) -> Result<(), Box<dyn Error>> {
    let config = Config::from_env().with_max_rows(args.max_rows);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = std::io::stderr();
    if args.address.is_none() || args.hosts.is_none() {
        print_banner();
    }
    let address = match &args.address {
        Some(address) => parse_address(address)?,
        None => read_address(&mut input, &mut prompt_out)?,
    };
    let required_hosts = match args.hosts {
        Some(hosts) => hosts,
        None => read_hosts(&mut input, &mut prompt_out)?,
    };

    let plan = compute_plan(address, required_hosts)?;
    if args.json {
        println!("{}", render_json(&plan, config.max_rows)?);
    } else {
        print_report(&plan, config.max_rows);
    }
    Ok(())
}

fn init_logging() {
    // log4rs.yml is optional; without it warnings still reach stderr.
    if log4rs::init_file("log4rs.yml", Default::default()).is_err() {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
            .build();
        let config = log4rs::config::Config::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
            .expect("Error building log4rs config");
        log4rs::init_config(config).expect("Error initializing log4rs");
    }
}
