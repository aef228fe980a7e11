pub mod background_crossfade;
pub mod nav_glass;
pub mod parallax_footer;
pub mod scroll_reveal;
pub mod snap_scroll;
pub mod staggered_cards;
pub mod staggered_lines;
pub mod text_scramble;

use std::rc::Rc;

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::{Clipboard, Host};

pub use text_scramble::SharedRng;

/// Installs every behavior the page has elements for. Behaviors are
/// independent, so a missing element only skips its own behavior.
///
/// Returns how many behaviors were installed.
pub fn install_all<H: Host>(
    host: &Rc<H>,
    config: &EffectsConfig,
    clipboard: Rc<dyn Clipboard>,
    rng: SharedRng,
) -> usize {
    let results: [(&str, Result<(), EffectsError>); 8] = [
        ("scroll reveal", scroll_reveal::install(host)),
        ("snap scroll", snap_scroll::install(host, config)),
        ("text scramble", text_scramble::install(host, config, clipboard, rng)),
        ("parallax footer", parallax_footer::install(host)),
        ("nav glass", nav_glass::install(host, config)),
        ("background crossfade", background_crossfade::install(host)),
        ("service cards", staggered_cards::install(host, config)),
        ("problem lines", staggered_lines::install(host, config)),
    ];

    let mut installed = 0;
    for (name, result) in results {
        match result {
            Ok(()) => installed += 1,
            Err(e) => log::debug!("Skipping {}: {}", name, e),
        }
    }
    log::info!("Installed {} of 8 page effects", installed);
    installed
}
