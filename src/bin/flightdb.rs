use flightdb::error::{Error, Result};
use flightdb::flight::Flight;
use flightdb::storage::{Bst, Store};
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::{history::DefaultHistory, Editor};
use serde_derive::Deserialize;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        return Err(Error::Config("Usage: flightdb [config_file_path]".to_string()));
    }
    let config = Config::new(args.get(1).map(String::as_str))?;
    init_logging(&config.log_level)?;

    let store: Box<dyn Store> = match config.storage.as_str() {
        "bst" => Box::new(Bst::new()),
        name => return Err(Error::Config(format!("Unknown storage engine {}", name))),
    };
    info!("Using storage engine {}", store);

    let mut repl = FlightRepl::new(store)?;
    if config.demo_data {
        repl.load_demo_data();
    }
    repl.run()
}

/// Initializes env_logger at the configured level. RUST_LOG can still raise
/// the level for individual modules.
fn init_logging(level: &str) -> Result<()> {
    let level: log::LevelFilter = level.parse()?;
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("rustyline", log::LevelFilter::Warn);
    builder.try_init()?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct Config {
    log_level: String,
    storage: String,
    demo_data: bool,
}

impl Config {
    fn new(file: Option<&str>) -> Result<Self> {
        let mut c = config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("storage", "bst")?
            .set_default("demo_data", false)?;
        if let Some(file) = file {
            c = c.add_source(config::File::with_name(file));
        }
        c = c.add_source(config::Environment::with_prefix("FLIGHTDB"));
        Ok(c.build()?.try_deserialize()?)
    }
}

/// The interactive flight tracker menu, as a REPL.
struct FlightRepl {
    store: Box<dyn Store>,
    editor: Editor<(), DefaultHistory>,
}

impl FlightRepl {
    /// Creates a new flight tracker REPL over the given store.
    fn new(store: Box<dyn Store>) -> Result<Self> {
        Ok(Self { store, editor: Editor::new()? })
    }

    /// Seeds the store with a few demo flights.
    fn load_demo_data(&mut self) {
        for flight in [
            Flight::new(101, "New York", "08:00 AM"),
            Flight::new(202, "Los Angeles", "10:30 AM"),
            Flight::new(303, "Chicago", "12:45 PM"),
        ] {
            self.store.insert(flight);
        }
        info!("Loaded demo flights");
    }

    /// Runs the REPL.
    fn run(&mut self) -> Result<()> {
        println!("Welcome to FlightDB. Enter help for instructions.");

        while let Some(input) = self.prompt("flightdb> ")? {
            if input.is_empty() {
                continue;
            }
            if matches!(input.as_str(), "exit" | "quit") {
                break;
            }
            match self.execute(&input) {
                Ok(()) => {}
                err @ Err(Error::Internal(_)) => return err,
                Err(err) => println!("  Error: {}", err),
            }
        }

        Ok(())
    }

    /// Prompts the user for a line of input, returning None on end-of-input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(input) => {
                self.editor.add_history_entry(&input)?;
                Ok(Some(input.trim().to_string()))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Executes a menu command.
    fn execute(&mut self, input: &str) -> Result<()> {
        let mut input = input.split_ascii_whitespace();
        let command = input.next().ok_or_else(|| Error::Parse("Expected command".to_string()))?;

        let getargs = |n| {
            let args: Vec<&str> = input.collect();
            if args.len() != n {
                Err(Error::Parse(format!("{}: expected {} args, got {}", command, n, args.len())))
            } else {
                Ok(args)
            }
        };

        match command {
            "add" => {
                getargs(0)?;
                self.add()
            }

            "search" => {
                let number = getargs(1)?[0].parse::<i64>()?;
                match self.store.get(number) {
                    Some(flight) => Self::print_flight(&flight),
                    None => println!("  Flight {} not found", number),
                }
                Ok(())
            }

            "min" => {
                getargs(0)?;
                match self.store.first() {
                    Some(flight) => {
                        println!("  Minimum flight:");
                        Self::print_flight(&flight);
                    }
                    None => println!("  No flights found"),
                }
                Ok(())
            }

            "max" => {
                getargs(0)?;
                match self.store.last() {
                    Some(flight) => {
                        println!("  Maximum flight:");
                        Self::print_flight(&flight);
                    }
                    None => println!("  No flights found"),
                }
                Ok(())
            }

            "list" => {
                getargs(0)?;
                for flight in self.store.scan() {
                    println!("  {}", flight);
                }
                println!("  {} flights total", self.store.len());
                Ok(())
            }

            "help" => {
                println!(
                    r#"
The following commands are available:

    add              Add a new flight (prompts for each field)
    search <number>  Look up a flight by flight number
    min              Show the flight with the lowest number
    max              Show the flight with the highest number
    list             List all flights in ascending number order
    help             This help message
    exit             Exit the program
"#
                );
                Ok(())
            }

            c => Err(Error::Parse(format!("Unknown command {}", c))),
        }
    }

    /// Prompts for the fields of a new flight and inserts it.
    fn add(&mut self) -> Result<()> {
        let number = self.prompt_field("Flight number: ")?.parse::<i64>()?;
        let destination = self.prompt_field("Destination: ")?;
        let departure = self.prompt_field("Departure time: ")?;

        let flight = Flight::new(number, destination, departure);
        debug!("Inserting {:?}", flight);
        self.store.insert(flight);
        println!("  Added flight {}", number);
        Ok(())
    }

    /// Prompts for a single field, treating end-of-input as an abort.
    fn prompt_field(&mut self, prompt: &str) -> Result<String> {
        match self.prompt(prompt)? {
            Some(input) => Ok(input),
            None => Err(Error::Abort),
        }
    }

    /// Displays a flight's fields, one per line.
    fn print_flight(flight: &Flight) {
        println!("  Flight number: {}", flight.number);
        println!("  Destination: {}", flight.destination);
        println!("  Departure time: {}", flight.departure);
    }
}
