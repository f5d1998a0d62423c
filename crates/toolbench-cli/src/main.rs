fn main() {
    if let Err(err) = toolbench_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
