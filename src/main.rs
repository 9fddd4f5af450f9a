fn main() {
    zj::app::cli::run();
}
