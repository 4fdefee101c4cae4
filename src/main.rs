fn main() {
    n8n_provision::app::cli::run();
}
