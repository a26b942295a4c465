use anyhow::Result;
use listdiff::{logger, run, Config};

fn main() -> Result<()> {
    listdiff::args::parsed();
    logger::init();
    run(&Config::from_env())?;
    Ok(())
}
