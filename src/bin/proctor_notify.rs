fn main() {
    proctor_jobs::app::cli::notify::run();
}
