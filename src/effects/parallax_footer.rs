use std::rc::Rc;

use crate::error::EffectsError;
use crate::geometry::{parallax_frame, ParallaxFrame};
use crate::host::{Host, Node};

const FOOTER_LOGO: &str = ".contact-footer-logo";
const CONTACT_SECTION: &str = ".contact-section";

fn apply<N: Node>(logo: &N, frame: ParallaxFrame) {
    match frame {
        ParallaxFrame::Tracking {
            offset,
            opacity,
            visible,
        } => {
            logo.set_style("transform", &format!("translateY({}px)", offset));
            logo.set_style("opacity", &opacity.to_string());
            logo.toggle_class("visible", visible);
        }
        ParallaxFrame::Below => {
            logo.set_style("transform", "translateY(200px)");
            logo.set_style("opacity", "0");
            logo.remove_class("visible");
        }
        ParallaxFrame::Above => {}
    }
}

pub fn install<H: Host>(host: &Rc<H>) -> Result<(), EffectsError> {
    let logo = host
        .query(FOOTER_LOGO)
        .ok_or(EffectsError::MissingElement(FOOTER_LOGO))?;
    let section = host
        .query(CONTACT_SECTION)
        .ok_or(EffectsError::MissingElement(CONTACT_SECTION))?;

    let page = Rc::clone(host);
    let update = move || apply(&logo, parallax_frame(section.rect(), page.viewport_height()));
    update();
    host.on_scroll(Box::new(update));
    Ok(())
}
