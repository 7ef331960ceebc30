fn main() {
    if let Err(e) = memberscope_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
