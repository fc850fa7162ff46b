//! geotimelog main entrypoint.

use geotimelog::run;
use geotimelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
