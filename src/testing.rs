//! In-memory page with a virtual clock for driving the effects in tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::EffectsError;
use crate::host::{Callback, Handler, Host, IntersectionHandler, Node, ObserverOptions, Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum ClassOp {
    Add(String),
    Remove(String),
}

#[derive(Default)]
struct NodeState {
    tag: String,
    classes: RefCell<BTreeSet<String>>,
    class_log: RefCell<Vec<ClassOp>>,
    styles: RefCell<HashMap<String, String>>,
    style_writes: Cell<usize>,
    text: RefCell<String>,
    text_log: RefCell<Vec<String>>,
    rect: Cell<Rect>,
    children: RefCell<Vec<FakeNode>>,
    reflows: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakeNode(Rc<NodeState>);

impl FakeNode {
    pub fn new(tag: &str, classes: &[&str]) -> Self {
        let node = FakeNode(Rc::new(NodeState {
            tag: tag.to_string(),
            ..NodeState::default()
        }));
        for class in classes.iter().filter(|c| !c.is_empty()) {
            node.0.classes.borrow_mut().insert(class.to_string());
        }
        node
    }

    pub fn with_text(self, text: &str) -> Self {
        *self.0.text.borrow_mut() = text.to_string();
        self
    }

    pub fn tag(&self) -> String {
        self.0.tag.clone()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    pub fn style_writes(&self) -> usize {
        self.0.style_writes.get()
    }

    pub fn class_log(&self) -> Vec<ClassOp> {
        self.0.class_log.borrow().clone()
    }

    pub fn text_log(&self) -> Vec<String> {
        self.0.text_log.borrow().clone()
    }

    pub fn children(&self) -> Vec<FakeNode> {
        self.0.children.borrow().clone()
    }

    pub fn reflows(&self) -> usize {
        self.0.reflows.get()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.0.rect.set(rect);
    }

    pub fn is(&self, other: &FakeNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn matches(&self, selector: &str) -> bool {
        match selector.strip_prefix('.') {
            Some(class) => self.has_class(class),
            None => self.0.tag == selector,
        }
    }
}

impl Node for FakeNode {
    fn set_style(&self, property: &str, value: &str) {
        self.0.style_writes.set(self.0.style_writes.get() + 1);
        self.0
            .styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn add_class(&self, class: &str) {
        self.0.class_log.borrow_mut().push(ClassOp::Add(class.to_string()));
        self.0.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.class_log.borrow_mut().push(ClassOp::Remove(class.to_string()));
        self.0.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        self.0.text_log.borrow_mut().push(text.to_string());
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn rect(&self) -> Rect {
        self.0.rect.get()
    }

    fn find(&self, selector: &str) -> Option<Self> {
        for child in self.0.children.borrow().iter() {
            if child.matches(selector) {
                return Some(child.clone());
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    fn reflow(&self) {
        self.0.reflows.set(self.0.reflows.get() + 1);
    }
}

struct Timer {
    due: u64,
    seq: u64,
    callback: Callback,
}

struct Observation {
    target: FakeNode,
    options: ObserverOptions,
    handler: IntersectionHandler,
}

pub struct FakeHost {
    elements: RefCell<Vec<(String, FakeNode)>>,
    root: FakeNode,
    head: FakeNode,
    viewport: Cell<f64>,
    scroll_top: Cell<f64>,
    now: Cell<u64>,
    seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    scroll_handlers: RefCell<Vec<Handler>>,
    observations: RefCell<Vec<Observation>>,
    pointer_handlers: RefCell<Vec<(FakeNode, Handler)>>,
    click_handlers: RefCell<Vec<(FakeNode, Handler)>>,
}

impl FakeHost {
    pub fn new(viewport_height: f64) -> Rc<Self> {
        Rc::new(Self {
            elements: RefCell::new(Vec::new()),
            root: FakeNode::new("html", &[]),
            head: FakeNode::new("head", &[]),
            viewport: Cell::new(viewport_height),
            scroll_top: Cell::new(0.0),
            now: Cell::new(0),
            seq: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            scroll_handlers: RefCell::new(Vec::new()),
            observations: RefCell::new(Vec::new()),
            pointer_handlers: RefCell::new(Vec::new()),
            click_handlers: RefCell::new(Vec::new()),
        })
    }

    /// Registers `node` as a match for `selector`, in document order.
    pub fn add(&self, selector: &str, node: FakeNode) -> FakeNode {
        self.elements
            .borrow_mut()
            .push((selector.to_string(), node.clone()));
        node
    }

    pub fn root_node(&self) -> FakeNode {
        self.root.clone()
    }

    pub fn head_node(&self) -> FakeNode {
        self.head.clone()
    }

    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn observation_options(&self, target: &FakeNode) -> Option<ObserverOptions> {
        self.observations
            .borrow()
            .iter()
            .find(|o| o.target.is(target))
            .map(|o| o.options)
    }

    pub fn observed_count(&self) -> usize {
        self.observations.borrow().len()
    }

    pub fn scroll_to(&self, offset: f64) {
        self.scroll_top.set(offset);
        let mut handlers = std::mem::take(&mut *self.scroll_handlers.borrow_mut());
        for handler in handlers.iter_mut() {
            handler();
        }
        let mut current = self.scroll_handlers.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    pub fn intersect(&self, target: &FakeNode, is_intersecting: bool) {
        let mut observations = std::mem::take(&mut *self.observations.borrow_mut());
        for observation in observations.iter_mut().filter(|o| o.target.is(target)) {
            (observation.handler)(is_intersecting);
        }
        let mut current = self.observations.borrow_mut();
        observations.append(&mut current);
        *current = observations;
    }

    pub fn hover(&self, target: &FakeNode) {
        Self::dispatch(&self.pointer_handlers, target);
    }

    pub fn click(&self, target: &FakeNode) {
        Self::dispatch(&self.click_handlers, target);
    }

    fn dispatch(registry: &RefCell<Vec<(FakeNode, Handler)>>, target: &FakeNode) {
        let mut handlers = std::mem::take(&mut *registry.borrow_mut());
        for (node, handler) in handlers.iter_mut() {
            if node.is(target) {
                handler();
            }
        }
        let mut current = registry.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    /// Moves the clock forward, running due timers in (due, scheduling) order.
    pub fn advance(&self, ms: u64) {
        let until = self.now.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let index = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= until)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                index.map(|i| timers.remove(i))
            };
            match next {
                Some(timer) => {
                    self.now.set(timer.due);
                    (timer.callback)();
                }
                None => break,
            }
        }
        self.now.set(until);
    }
}

impl Host for FakeHost {
    type Node = FakeNode;

    fn query(&self, selector: &str) -> Option<FakeNode> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.elements
            .borrow()
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, n)| n.clone())
            .collect()
    }

    fn root(&self) -> Option<FakeNode> {
        Some(self.root.clone())
    }

    fn viewport_height(&self) -> f64 {
        self.viewport.get()
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top.get()
    }

    fn create_child(&self, parent: &FakeNode, tag: &str, class: &str) -> Result<FakeNode, EffectsError> {
        let child = FakeNode::new(tag, &[class]);
        parent.0.children.borrow_mut().push(child.clone());
        Ok(child)
    }

    fn style_rule(&self, id: &str) -> Result<FakeNode, EffectsError> {
        let wanted = format!("#{id}");
        if let Some((_, node)) = self.elements.borrow().iter().find(|(s, _)| *s == wanted) {
            return Ok(node.clone());
        }
        let node = self.create_child(&self.head, "style", "")?;
        self.add(&wanted, node.clone());
        Ok(node)
    }

    fn set_timeout(&self, delay_ms: u32, callback: Callback) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            due: self.now.get() + u64::from(delay_ms),
            seq,
            callback,
        });
    }

    fn on_scroll(&self, handler: Handler) {
        self.scroll_handlers.borrow_mut().push(handler);
    }

    fn observe(&self, target: &FakeNode, options: ObserverOptions, handler: IntersectionHandler) {
        self.observations.borrow_mut().push(Observation {
            target: target.clone(),
            options,
            handler,
        });
    }

    fn on_pointer_enter(&self, target: &FakeNode, handler: Handler) {
        self.pointer_handlers
            .borrow_mut()
            .push((target.clone(), handler));
    }

    fn on_click(&self, target: &FakeNode, handler: Handler) {
        self.click_handlers.borrow_mut().push((target.clone(), handler));
    }
}
