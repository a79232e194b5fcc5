use std::sync::atomic::{AtomicBool, Ordering};

use turl::context::Environment;
use turl::signals;
use turl::status::ExitStatus;

/// Entry point - catches Ctrl+C and calls core::run()
fn main() -> ExitStatus {
    // Only set a flag so destructors run and the terminal is restored
    ctrlc::set_handler(move || {
        signals::set_interrupted();

        // On second Ctrl+C, force exit
        static SECOND_CTRL_C: AtomicBool = AtomicBool::new(false);
        if SECOND_CTRL_C.swap(true, Ordering::SeqCst) {
            std::process::exit(ExitStatus::Interrupted as i32);
        }
    })
    .ok();

    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    let status = turl::core::run(args, env);

    if signals::was_interrupted() {
        return ExitStatus::Interrupted;
    }

    status
}
