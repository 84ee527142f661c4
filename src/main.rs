use std::io;
use std::process;

use roundoff::report::write_report;

fn main() {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = write_report(&mut out) {
        eprintln!("roundoff: {}", err);
        process::exit(1);
    }
}
