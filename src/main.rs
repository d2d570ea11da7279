fn main() {
    scaffolint::app::cli::run();
}
