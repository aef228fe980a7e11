use std::rc::Rc;

use crate::error::EffectsError;
use crate::geometry::crossfade_progress;
use crate::host::{Host, Node};

const PROBLEM_SECTION: &str = ".red-section";
const SERVICES_SECTION: &str = "#services";
pub const STYLE_ID: &str = "problem-bg-transition-style";
const TRANSITIONING: &str = "bg-transitioning";

/// The `::before` layer has no inline style, so its opacity lives in a
/// dedicated rule that is rewritten in place.
pub fn layer_rule(progress: f64) -> String {
    format!(
        "{}::before {{ opacity: {} !important; }}",
        PROBLEM_SECTION, progress
    )
}

pub fn install<H: Host>(host: &Rc<H>) -> Result<(), EffectsError> {
    let section = host
        .query(PROBLEM_SECTION)
        .ok_or(EffectsError::MissingElement(PROBLEM_SECTION))?;
    host.query(SERVICES_SECTION)
        .ok_or(EffectsError::MissingElement(SERVICES_SECTION))?;
    let rule = host.style_rule(STYLE_ID)?;

    let page = Rc::clone(host);
    let update = move || {
        let progress = crossfade_progress(section.rect(), page.viewport_height());
        rule.set_text(&layer_rule(progress));
        section.toggle_class(TRANSITIONING, progress > 0.0);
    };
    update();
    host.on_scroll(Box::new(update));
    Ok(())
}
