//! rTimeAudit main entrypoint.

use rtimeaudit::run;
use rtimeaudit::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
