//! TallyKV CLI Client
//!
//! Command-line interface for interacting with TallyKV.

use clap::{Parser, Subcommand};
use tallykv::network::Client;
use tallykv::protocol::{parse_key, Response, KEY_PARAM, OPERATION_PARAM, VALUE_PARAM};
use tallykv::Key;

/// TallyKV CLI
#[derive(Parser, Debug)]
#[command(name = "tallykv-cli")]
#[command(about = "CLI for the TallyKV numeric store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "http://127.0.0.1:3000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a value (0 if the key has no entry)
    Read {
        /// The key (UUID)
        key: String,
    },

    /// Create an entry; fails if it already exists
    Create {
        /// The key (UUID)
        key: String,

        /// The initial value
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Add one to an existing entry
    Incr {
        /// The key (UUID)
        key: String,
    },

    /// Subtract one from an existing entry
    Decr {
        /// The key (UUID)
        key: String,
    },

    /// Send an arbitrary operation name, unvalidated
    Raw {
        operation: String,
        key: String,
        #[arg(default_value = "0", allow_hyphen_values = true)]
        value: String,
    },

    /// Print a fresh random key
    NewKey,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new(&args.server);

    match run(&client, args.command).await {
        Ok(Some(response)) => print_response(&response),
        Ok(None) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

async fn run(client: &Client, command: Commands) -> tallykv::Result<Option<Response>> {
    let response = match command {
        Commands::Read { key } => client.read(parse_key(&key)?).await?,
        Commands::Create { key, value } => client.create(parse_key(&key)?, value).await?,
        Commands::Incr { key } => client.increment(parse_key(&key)?).await?,
        Commands::Decr { key } => client.decrement(parse_key(&key)?).await?,
        Commands::Raw {
            operation,
            key,
            value,
        } => {
            client
                .send_raw(&[
                    (OPERATION_PARAM, operation.as_str()),
                    (KEY_PARAM, key.as_str()),
                    (VALUE_PARAM, value.as_str()),
                ])
                .await?
        }
        Commands::NewKey => {
            println!("{}", Key::new_v4());
            return Ok(None);
        }
    };
    Ok(Some(response))
}

fn print_response(response: &Response) {
    if response.is_success() {
        println!("{}", response.value);
    } else {
        eprintln!("({}) {}", response.code, response.error);
        std::process::exit(1);
    }
}
