use bank_account::{Account, replay, run_demo, write_summary};
use std::env;
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            if let Err(e) = run_demo(&mut io::stdout()) {
                eprintln!("Error writing output: {}", e);
                process::exit(1);
            }
        }
        4 => {
            let initial_balance: f64 = match args[2].parse() {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("Invalid initial balance '{}': {}", args[2], e);
                    process::exit(1);
                }
            };
            let mut account = Account::new(args[1].as_str(), initial_balance);

            if let Err(e) = replay(&args[3], &mut account)
                .and_then(|_| write_summary(&account, io::stdout()))
            {
                eprintln!("Error processing file: {}", e);
                process::exit(1);
            }
        }
        _ => {
            eprintln!(
                "Usage: {} [<owner> <initial_balance> <operations.csv>]",
                args[0]
            );
            process::exit(1);
        }
    }
}
