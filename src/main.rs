//! clubevents main entrypoint.

use clubevents::run;
use clubevents::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
