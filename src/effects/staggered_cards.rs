use std::rc::Rc;

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::{Host, Node, ObserverOptions};
use crate::latch::OneShot;

const SERVICES_SECTION: &str = "#services";
const SERVICE_CARDS: &str = ".service-card";

const OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.2,
    bottom_margin_px: -100,
};

pub fn install<H: Host>(host: &Rc<H>, config: &EffectsConfig) -> Result<(), EffectsError> {
    let section = host
        .query(SERVICES_SECTION)
        .ok_or(EffectsError::MissingElement(SERVICES_SECTION))?;
    let cards = host.query_all(SERVICE_CARDS);
    if cards.is_empty() {
        return Err(EffectsError::MissingElement(SERVICE_CARDS));
    }
    let stagger_ms = config.card_stagger_ms;

    let latch = OneShot::new();
    latch.arm();
    let page = Rc::clone(host);
    host.observe(
        &section,
        OPTIONS,
        Box::new(move |is_intersecting| {
            if !latch.fire(is_intersecting) {
                return;
            }
            for (index, card) in cards.iter().enumerate() {
                let card = card.clone();
                page.set_timeout(
                    stagger_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX)),
                    Box::new(move || card.add_class("visible")),
                );
            }
        }),
    );
    Ok(())
}
