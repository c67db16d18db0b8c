use ipv4_toolkit::commands;
use ipv4_toolkit::config::Config;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match commands::run(&args, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
