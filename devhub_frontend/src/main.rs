fn main() -> anyhow::Result<()> {
    env_logger::init();
    devhub_frontend::run_frontend()
}
