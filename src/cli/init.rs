//! Init command handler.

use color_eyre::Result;

use crate::context::Context;

use super::App;

impl App {
    /// Open (creating if needed) the data file and report collection sizes.
    pub fn run_init(&self) -> Result<()> {
        let config = self.config()?;
        let ctx = Context::open(&config)?;

        println!("Data file: {}", ctx.store.path().display());
        for (collection, count) in ctx.store.counts() {
            println!("  {:<16} {}", collection.name(), count);
        }

        Ok(())
    }
}
