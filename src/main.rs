fn main() {
    if let Err(e) = pairbench::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
