use std::cell::Cell;
use std::rc::Rc;

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::{Host, Node};

/// Page-wide class the stylesheet uses to disable snapping back up.
pub const NO_SNAP_UP: &str = "no-snap-up";

struct SnapState {
    last_scroll_top: Cell<f64>,
    is_scrolling: Cell<bool>,
}

pub fn install<H: Host>(host: &Rc<H>, config: &EffectsConfig) -> Result<(), EffectsError> {
    let root = host
        .root()
        .ok_or(EffectsError::MissingElement("documentElement"))?;
    let state = Rc::new(SnapState {
        last_scroll_top: Cell::new(0.0),
        is_scrolling: Cell::new(false),
    });
    let debounce_ms = config.snap_debounce_ms;

    let page = Rc::clone(host);
    host.on_scroll(Box::new(move || {
        if state.is_scrolling.get() {
            return;
        }
        state.is_scrolling.set(true);

        let scroll_top = page.scroll_top();
        // moving down re-enables snapping
        root.toggle_class(NO_SNAP_UP, scroll_top <= state.last_scroll_top.get());
        state.last_scroll_top.set(scroll_top);

        let state = Rc::clone(&state);
        page.set_timeout(debounce_ms, Box::new(move || state.is_scrolling.set(false)));
    }));
    Ok(())
}
