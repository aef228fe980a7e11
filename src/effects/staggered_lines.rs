use std::rc::Rc;

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::{Host, Node, ObserverOptions};
use crate::latch::OneShot;

const PROBLEM_SECTION: &str = ".red-section";
const APPROACHES: &str = ".approach";

const OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.3,
    bottom_margin_px: -100,
};

/// Draws the vertical connector, then each horizontal branch in turn.
pub fn install<H: Host>(host: &Rc<H>, config: &EffectsConfig) -> Result<(), EffectsError> {
    let section = host
        .query(PROBLEM_SECTION)
        .ok_or(EffectsError::MissingElement(PROBLEM_SECTION))?;
    let approaches = Rc::new(host.query_all(APPROACHES));
    if approaches.is_empty() {
        return Err(EffectsError::MissingElement(APPROACHES));
    }
    let delay_ms = config.line_delay_ms;
    let stagger_ms = config.line_stagger_ms;

    let latch = OneShot::new();
    latch.arm();
    let page = Rc::clone(host);
    let target = section.clone();
    host.observe(
        &section,
        OPTIONS,
        Box::new(move |is_intersecting| {
            if !latch.fire(is_intersecting) {
                return;
            }
            target.add_class("animate-vertical-line");

            let inner = Rc::clone(&page);
            let approaches = Rc::clone(&approaches);
            page.set_timeout(
                delay_ms,
                Box::new(move || {
                    for (index, approach) in approaches.iter().enumerate() {
                        let approach = approach.clone();
                        inner.set_timeout(
                            stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
                            Box::new(move || approach.add_class("animate-line")),
                        );
                    }
                }),
            );
        }),
    );
    Ok(())
}
