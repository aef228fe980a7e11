//! Hover scramble on the call-to-action buttons and the copy-email toast.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::{Rng, RngCore};

use crate::config::EffectsConfig;
use crate::error::EffectsError;
use crate::host::{Clipboard, Host, Node};

pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
pub const STEPS: u32 = 20;

const BUTTONS: &str = ".btn-primary";
const CONTACT_EMAIL: &str = ".contact-email";
const TOAST: &str = ".copy-toast";
const TOAST_TEXT: &str = "EMAIL COPIED";
const TOAST_SHOW: &str = "show";

pub type SharedRng = Rc<RefCell<dyn RngCore>>;

/// Text for `step` of the run: a true prefix of `floor(len * step / STEPS)`
/// characters, then noise with spaces kept in place.
pub fn scramble_frame<R: Rng + ?Sized>(original: &str, step: u32, rng: &mut R) -> String {
    let len = original.chars().count();
    let revealed = len * step as usize / STEPS as usize;
    original
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < revealed || c == ' ' {
                c
            } else {
                ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
            }
        })
        .collect()
}

fn run_step<H: Host>(
    host: Rc<H>,
    node: H::Node,
    original: Rc<str>,
    rng: SharedRng,
    step: u32,
    interval_ms: u32,
) {
    if step >= STEPS {
        node.set_text(&original);
        return;
    }
    let frame = scramble_frame(&original, step, &mut *rng.borrow_mut());
    node.set_text(&frame);

    let next = Rc::clone(&host);
    host.set_timeout(
        interval_ms,
        Box::new(move || run_step(next, node, original, rng, step + 1, interval_ms)),
    );
}

/// Runs one full scramble of `node` back to `original` over `duration_ms`.
pub fn scramble<H: Host>(
    host: &Rc<H>,
    node: &H::Node,
    original: Rc<str>,
    duration_ms: u32,
    rng: SharedRng,
) {
    run_step(
        Rc::clone(host),
        node.clone(),
        original,
        rng,
        0,
        duration_ms / STEPS,
    );
}

fn install_hover<H: Host>(
    host: &Rc<H>,
    config: &EffectsConfig,
    rng: &SharedRng,
) -> Result<usize, EffectsError> {
    let buttons = host.query_all(BUTTONS);
    if buttons.is_empty() {
        return Err(EffectsError::MissingElement(BUTTONS));
    }
    let duration_ms = config.scramble_duration_ms;

    for button in &buttons {
        let original: Rc<str> = Rc::from(button.text());
        let is_animating = Rc::new(Cell::new(false));
        let page = Rc::clone(host);
        let target = button.clone();
        let rng = Rc::clone(rng);

        host.on_pointer_enter(
            button,
            Box::new(move || {
                if is_animating.get() {
                    return;
                }
                is_animating.set(true);
                scramble(&page, &target, Rc::clone(&original), duration_ms, Rc::clone(&rng));

                let is_animating = Rc::clone(&is_animating);
                page.set_timeout(duration_ms, Box::new(move || is_animating.set(false)));
            }),
        );
    }
    Ok(buttons.len())
}

/// Shows the "copied" toast inside `button`, restarting its transition if
/// it is already on screen.
pub fn show_copy_toast<H: Host>(
    host: &Rc<H>,
    button: &H::Node,
    visible_ms: u32,
) -> Result<(), EffectsError> {
    let toast = match button.find(TOAST) {
        Some(toast) => toast,
        None => {
            let toast = host.create_child(button, "div", "copy-toast")?;
            toast.set_text(TOAST_TEXT);
            toast
        }
    };

    toast.remove_class(TOAST_SHOW);
    toast.reflow();
    toast.add_class(TOAST_SHOW);

    host.set_timeout(visible_ms, Box::new(move || toast.remove_class(TOAST_SHOW)));
    Ok(())
}

fn install_copy_email<H: Host>(
    host: &Rc<H>,
    config: &EffectsConfig,
    clipboard: Rc<dyn Clipboard>,
) -> Result<(), EffectsError> {
    let button = host
        .query(CONTACT_EMAIL)
        .ok_or(EffectsError::MissingElement(CONTACT_EMAIL))?;
    let email = config.contact_email.clone();
    let visible_ms = config.toast_visible_ms;

    let page = Rc::clone(host);
    let target = button.clone();
    host.on_click(
        &button,
        Box::new(move || {
            let page = Rc::clone(&page);
            let target = target.clone();
            clipboard.write_text(
                &email,
                Box::new(move |result| {
                    let shown = result.and_then(|_| show_copy_toast(&page, &target, visible_ms));
                    if let Err(e) = shown {
                        log::error!("Failed to copy: {}", e);
                    }
                }),
            );
        }),
    );
    Ok(())
}

/// Wires the scramble hover and the copy-email click. Fails only when the
/// page has neither.
pub fn install<H: Host>(
    host: &Rc<H>,
    config: &EffectsConfig,
    clipboard: Rc<dyn Clipboard>,
    rng: SharedRng,
) -> Result<(), EffectsError> {
    let hover = install_hover(host, config, &rng);
    let copy = install_copy_email(host, config, clipboard);
    match (hover, copy) {
        (Err(e), Err(_)) => Err(e),
        (hover, copy) => {
            if let Err(e) = hover {
                log::debug!("Scramble hover skipped: {}", e);
            }
            if let Err(e) = copy {
                log::debug!("Copy email skipped: {}", e);
            }
            Ok(())
        }
    }
}
