mod app;
mod command;
mod config;
mod effects;
mod i18n;
mod logging;
mod persistence;
mod render;

fn main() -> anyhow::Result<()> {
    app::run()
}
