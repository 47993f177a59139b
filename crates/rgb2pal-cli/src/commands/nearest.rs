//! Nearest color lookup command

use crate::Cli;
use anyhow::Result;
use rgb2pal_color::{find_nearest, find_nearest_par};
use tracing::{debug, info};

pub fn run(args: Cli) -> Result<()> {
    if !args.extra.is_empty() {
        debug!("ignoring {} extra argument(s)", args.extra.len());
    }

    let query = super::parse_color(&args.rgb)?;
    let palette = super::load_palette(&args.palette)?;
    debug!("query #{query:06x} against {} entries", palette.len());

    let found = if args.parallel {
        find_nearest_par(query, &palette)?
    } else {
        find_nearest(query, &palette)?
    };

    info!(
        "nearest to #{query:06x}: index {} at position {}, distance {:.4}",
        found.entry.index, found.position, found.distance
    );
    println!("{}", found.entry);

    Ok(())
}
