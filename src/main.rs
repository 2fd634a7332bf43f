use etherfield::Backdrop;

fn main() {
    env_logger::init();

    if let Err(e) = Backdrop::new().with_title("ether field").run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
