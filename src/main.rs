use clap::Parser;
use connvault::cli::{Cli, Commands};

fn main() {
    let mut cli = Cli::parse();

    // Move the passphrase out of the parsed arguments so the command
    // can sink it into a zeroize-on-drop buffer.
    let secret_key = cli.secret_key.take();

    let result = match cli.command {
        Commands::Encrypt {
            ref config,
            ref plaintext,
        } => connvault::cli::commands::encrypt::execute(secret_key, config, plaintext),
        Commands::Decrypt { ref config } => {
            connvault::cli::commands::decrypt::execute(secret_key, config)
        }
    };

    if let Err(e) = result {
        connvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
