//! The seam between the effects and whatever page they run against.
//!
//! Behaviors never touch `web_sys` directly. They subscribe to events and
//! write styles through [`Host`], which the browser binding implements with
//! real DOM calls and the tests implement with a virtual clock.

use crate::error::EffectsError;

/// Snapshot of `getBoundingClientRect()`, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    /// Negative values shrink the viewport from the bottom.
    pub bottom_margin_px: i32,
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

/// A page-owned element handle. Cloning clones the handle, not the element.
pub trait Node: Clone + 'static {
    fn set_style(&self, property: &str, value: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn rect(&self) -> Rect;
    /// First descendant matching `selector`.
    fn find(&self, selector: &str) -> Option<Self>;
    /// Forces a synchronous layout so a removed-then-added class restarts its transition.
    fn reflow(&self);

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

pub type Callback = Box<dyn FnOnce()>;
pub type Handler = Box<dyn FnMut()>;
pub type IntersectionHandler = Box<dyn FnMut(bool)>;

pub trait Host: 'static {
    type Node: Node;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// The document element, home of page-wide classes.
    fn root(&self) -> Option<Self::Node>;
    fn viewport_height(&self) -> f64;
    fn scroll_top(&self) -> f64;

    fn create_child(
        &self,
        parent: &Self::Node,
        tag: &str,
        class: &str,
    ) -> Result<Self::Node, EffectsError>;
    /// Finds the `<style id=..>` element in the head, creating it on first use.
    fn style_rule(&self, id: &str) -> Result<Self::Node, EffectsError>;

    fn set_timeout(&self, delay_ms: u32, callback: Callback);
    /// Passive scroll subscription.
    fn on_scroll(&self, handler: Handler);
    /// Handler receives `isIntersecting` for every entry reported for `target`.
    fn observe(&self, target: &Self::Node, options: ObserverOptions, handler: IntersectionHandler);
    fn on_pointer_enter(&self, target: &Self::Node, handler: Handler);
    /// Default navigation is prevented and propagation stopped before `handler` runs.
    fn on_click(&self, target: &Self::Node, handler: Handler);
}

pub type CopyDone = Box<dyn FnOnce(Result<(), EffectsError>)>;

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard {
    /// Starts a write; `done` runs once, possibly after the call returns.
    fn write_text(&self, text: &str, done: CopyDone);
}
