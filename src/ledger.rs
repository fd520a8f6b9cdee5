use crate::{Account, Operation, Outcome};
use csv::{ReaderBuilder, Writer};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Write};

const WITHDRAWAL_OK: &str = "Withdrawal successful!";
const WITHDRAWAL_INSUFFICIENT: &str = "Insufficient balance for withdrawal!";

/// Message printed after a withdrawal attempt
pub fn withdrawal_message(success: bool) -> &'static str {
    if success {
        WITHDRAWAL_OK
    } else {
        WITHDRAWAL_INSUFFICIENT
    }
}

/// "John's current balance: $1300"
pub fn balance_line(account: &Account) -> String {
    format!(
        "{}'s current balance: ${}",
        account.first_name(),
        account.balance()
    )
}

/// Fixed demonstration: open John Doe's account with 1000, deposit 500,
/// withdraw 200, then report the withdrawal outcome and the final balance.
pub fn run_demo<W: Write>(out: &mut W) -> Result<Account, Box<dyn Error>> {
    let mut account = Account::new("John Doe", 1000.0);

    account.deposit(500.0);
    let success = account.withdraw(200.0);

    writeln!(out, "{}", withdrawal_message(success))?;
    writeln!(out, "{}", balance_line(&account))?;
    out.flush()?;

    Ok(account)
}

/// Apply every operation of a `type,amount` CSV file to `account`, in file order.
/// Returns the number of rows read. Insufficient withdrawals are skipped and
/// reported on stderr, as are negative amounts (which are still applied).
pub fn replay(path: &str, account: &mut Account) -> Result<usize, Box<dyn Error>> {
    let file = File::open(path)?;
    let buf_reader = BufReader::new(file);

    let mut csv_reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buf_reader);

    let mut rows = 0;
    let mut skipped = 0;

    for result in csv_reader.deserialize() {
        let operation: Operation = result?;
        rows += 1;

        if operation.is_negative() {
            eprintln!(
                "Row {}: negative {:?} amount {} applied as given",
                rows, operation.op_type, operation.amount
            );
        }

        if account.apply(&operation) == Outcome::Insufficient {
            skipped += 1;
            eprintln!(
                "Row {}: {} (requested {}, balance {})",
                rows,
                withdrawal_message(false),
                operation.amount,
                account.balance()
            );
        }
    }

    //keeps stdout free for the summary
    eprintln!(
        "Replayed {} operations for {} ({} skipped)",
        rows,
        account.owner(),
        skipped
    );
    Ok(rows)
}

/// Write the account as a CSV row with header
pub fn write_summary<W: Write>(account: &Account, out: W) -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::from_writer(out);
    writer.serialize(account)?;
    writer.flush()?;
    Ok(())
}
