// nbclean/src/main.rs
//! nbclean entry point.

fn main() {
    std::process::exit(nbclean::run(std::env::args_os()));
}
