use resviz::cli::run;
use resviz::error::VizError;

fn main() {
    if let Err(e) = run() {
        // Domain failures (bad input files, empty directories) are user
        // errors; anything else is internal.
        if e.downcast_ref::<VizError>().is_some() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        eprintln!("Internal error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }
        std::process::exit(2);
    }
}
