fn main() {
    proctor_jobs::app::cli::publish::run();
}
