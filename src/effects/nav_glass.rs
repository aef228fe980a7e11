use std::rc::Rc;

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::geometry::{nav_glass_frame, NavGlass};
use crate::host::{Host, Node};

const NAV: &str = "nav";
const HEADER_SECTION: &str = ".header-section";
const RESTING_BACKGROUND: &str = "linear-gradient(to bottom, var(--black) 0%, transparent 100%)";

fn apply<N: Node>(nav: &N, frame: NavGlass, scrolled_class: Option<&str>) {
    match frame {
        NavGlass::Scrolled { blur, alpha } => {
            let filter = format!("blur({}px)", blur);
            nav.set_style("backdrop-filter", &filter);
            nav.set_style("-webkit-backdrop-filter", &filter);
            nav.set_style("background", &format!("rgba(10, 10, 10, {})", alpha));
        }
        NavGlass::Resting => {
            nav.set_style("backdrop-filter", "none");
            nav.set_style("-webkit-backdrop-filter", "none");
            nav.set_style("background", RESTING_BACKGROUND);
        }
    }
    if let Some(class) = scrolled_class {
        nav.toggle_class(class, matches!(frame, NavGlass::Scrolled { .. }));
    }
}

pub fn install<H: Host>(host: &Rc<H>, config: &EffectsConfig) -> Result<(), EffectsError> {
    let nav = host.query(NAV).ok_or(EffectsError::MissingElement(NAV))?;
    let header = host
        .query(HEADER_SECTION)
        .ok_or(EffectsError::MissingElement(HEADER_SECTION))?;
    let scrolled_class = config.nav_scrolled_class.clone();

    let page = Rc::clone(host);
    let update = move || {
        let frame = nav_glass_frame(header.rect().bottom, page.viewport_height());
        apply(&nav, frame, scrolled_class.as_deref());
    };
    update();
    host.on_scroll(Box::new(update));
    Ok(())
}
