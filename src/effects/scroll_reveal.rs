use std::rc::Rc;

use crate::error::EffectsError;
use crate::host::{Host, Node, ObserverOptions};
use crate::latch::OneShot;

const SECTIONS: &str = "section";
const HERO: &str = ".hero";

const OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    bottom_margin_px: -50,
};

fn show<N: Node>(node: &N) {
    node.set_style("opacity", "1");
    node.set_style("transform", "translateY(0)");
}

/// Hides every section below the hero and slides it in on first sight.
pub fn install<H: Host>(host: &Rc<H>) -> Result<(), EffectsError> {
    let sections = host.query_all(SECTIONS);
    let hero = host.query(HERO);
    if sections.is_empty() && hero.is_none() {
        return Err(EffectsError::MissingElement(SECTIONS));
    }

    for section in sections {
        // above the fold, must not flash
        if section.has_class("hero") {
            continue;
        }
        section.set_style("opacity", "0");
        section.set_style("transform", "translateY(30px)");
        section.set_style("transition", "all 0.8s ease-out");

        let latch = OneShot::new();
        latch.arm();
        let target = section.clone();
        host.observe(
            &section,
            OPTIONS,
            Box::new(move |is_intersecting| {
                if latch.fire(is_intersecting) {
                    show(&target);
                }
            }),
        );
    }

    if let Some(hero) = hero {
        show(&hero);
    }
    Ok(())
}
