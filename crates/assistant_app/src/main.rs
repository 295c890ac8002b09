mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
