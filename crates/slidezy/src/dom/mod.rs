//! Imperative slider mounted on an existing container element.
//!
//! # Design
//! - Shared widget state sits in `Rc<RefCell<_>>`; listeners and timers hold
//!   `Weak` handles so they never keep a disposed widget alive.
//! - Every visual change goes through [`Render`] values produced by
//!   [`Slider`]; this module only applies them.
//! - A fired settle timeout is left in place and replaced by the next move,
//!   so callbacks never drop the closure they are running in.

pub mod bindings;

use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::EventListener;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::classes;
use crate::logic::autoplay::AutoplayTimer;
use crate::logic::config::SlidezyOptions;
use crate::logic::error::SlidezyError;
use crate::logic::layout::PanelSource;
use crate::logic::machine::{MoveOutcome, Render, Slider};
use crate::logic::render::flex_basis_css;

type Shared = Rc<RefCell<Widget>>;

/// Slider bound to a container in the live document.
pub struct Slidezy {
    inner: Shared,
}

struct Widget {
    slider: Slider,
    step: isize,
    autoplay_timeout: u32,
    track: HtmlElement,
    dots: Vec<Element>,
    autoplay: AutoplayTimer<Interval>,
    settle: Option<Timeout>,
    listeners: Vec<EventListener>,
    disposed: bool,
}

impl Slidezy {
    /// Build the slider inside the element matching `selector`.
    ///
    /// Failures are logged to the browser console before being returned.
    ///
    /// # Errors
    /// Returns [`SlidezyError::ContainerNotFound`] when nothing matches
    /// `selector`, [`SlidezyError::ControlNotFound`] when an external control
    /// selector matches nothing, [`SlidezyError::InvalidItems`] for invalid
    /// options and [`SlidezyError::Dom`] when the browser rejects a DOM call.
    pub fn mount(selector: &str, options: &SlidezyOptions) -> Result<Self, SlidezyError> {
        let mounted = build(selector, options);
        match &mounted {
            Ok(_) => console::debug!("slidezy mounted", selector),
            Err(err) => console::error!("slidezy:", err.to_string()),
        }
        mounted.map(|inner| Self { inner })
    }

    /// Move by `step` panels. Ignored while a move is still animating.
    pub fn move_slide(&self, step: isize) {
        move_slide(&self.inner, step);
    }

    /// Current index into the padded track.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.inner.borrow().slider.current_index()
    }

    /// Whether a move is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().slider.is_animating()
    }

    /// Stop autoplay, cancel a pending settle and detach every listener.
    ///
    /// The built DOM stays in place. Calling this twice is harmless.
    pub fn dispose(&self) {
        let released = {
            let mut widget = self.inner.borrow_mut();
            if widget.disposed {
                return;
            }
            widget.disposed = true;
            widget.slider.dispose();
            (
                mem::take(&mut widget.listeners),
                widget.settle.take(),
                widget.autoplay.stop(),
            )
        };
        drop(released);
        console::debug!("slidezy disposed");
    }
}

impl Widget {
    fn apply(&self, render: Render) {
        let style = self.track.style();
        let frame = render.frame;
        if let Err(err) = style
            .set_property("transition", &frame.transition_css())
            .and_then(|()| style.set_property("transform", &frame.transform_css()))
        {
            console::error!("slidezy: track style update failed", err);
        }
        if let Some(page) = render.active_page {
            for (idx, dot) in self.dots.iter().enumerate() {
                if let Err(err) = dot.class_list().toggle_with_force(classes::ACTIVE, idx == page) {
                    console::error!("slidezy: dot update failed", err);
                }
            }
        }
    }
}

fn build(selector: &str, options: &SlidezyOptions) -> Result<Shared, SlidezyError> {
    options.validate()?;
    let document = gloo::utils::document();
    let container =
        query(&document, selector)?.ok_or_else(|| SlidezyError::ContainerNotFound {
            selector: selector.to_string(),
        })?;
    // external controls resolve before the container is touched
    let [prev_selector, next_selector] = options.external_controls();
    let mut external = [
        resolve_control(&document, prev_selector)?,
        resolve_control(&document, next_selector)?,
    ];
    let originals = children(&container);
    let slider = Slider::new(originals.len(), options);

    add_class(&container, classes::WRAPPER)?;
    let content = create(&document, "div", classes::CONTENT)?;
    append(&container, &content)?;

    let track = create(&document, "div", classes::TRACK)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| dom_error("track cast", &JsValue::NULL))?;
    let basis = flex_basis_css(slider.layout().items());
    for source in slider.layout().panels() {
        let panel = panel_for(&originals, source)?;
        add_class(&panel, classes::SLIDE)?;
        if let Some(html) = panel.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("flex-basis", &basis)
                .map_err(|err| dom_error("panel flex-basis", &err))?;
        }
        append(&track, &panel)?;
    }
    append(&content, &track)?;

    let controls = if options.controls {
        let [prev_label, next_label] = &options.control_text;
        Some((
            control(
                &document,
                &content,
                external[0].take(),
                prev_label,
                classes::PREV,
            )?,
            control(
                &document,
                &content,
                external[1].take(),
                next_label,
                classes::NEXT,
            )?,
        ))
    } else {
        None
    };

    let nav = create(&document, "div", classes::NAV)?;
    let mut dots = Vec::with_capacity(slider.layout().page_count());
    for page in 0..slider.layout().page_count() {
        let dot = create(&document, "button", classes::DOT)?;
        if page == 0 {
            add_class(&dot, classes::ACTIVE)?;
        }
        append(&nav, &dot)?;
        dots.push(dot);
    }
    append(&container, &nav)?;

    let step = options.step();
    let shared = Rc::new(RefCell::new(Widget {
        slider,
        step,
        autoplay_timeout: options.auto_play_timeout,
        track,
        dots: dots.clone(),
        autoplay: AutoplayTimer::new(options.auto_play_hover_pause),
        settle: None,
        listeners: Vec::new(),
        disposed: false,
    }));

    let mut listeners = Vec::new();
    if let Some((prev, next)) = &controls {
        let back = step.saturating_neg();
        listeners.push(listen(prev, "click", &shared, move |shared| {
            move_slide(shared, back);
        }));
        listeners.push(listen(next, "click", &shared, move |shared| {
            move_slide(shared, step);
        }));
    }
    for (page, dot) in dots.iter().enumerate() {
        listeners.push(listen(dot, "click", &shared, move |shared| {
            jump_to_page(shared, page);
        }));
    }
    if options.auto_play {
        start_autoplay(&shared);
        if options.auto_play_hover_pause {
            listeners.push(listen(&container, "mouseenter", &shared, pause_autoplay));
            listeners.push(listen(&container, "mouseleave", &shared, resume_autoplay));
        }
    }

    {
        let mut widget = shared.borrow_mut();
        widget.listeners = listeners;
        let render = widget.slider.initial_render();
        widget.apply(render);
    }
    Ok(shared)
}

fn move_slide(shared: &Shared, step: isize) {
    let weak = Rc::downgrade(shared);
    let mut widget = shared.borrow_mut();
    if widget.disposed {
        return;
    }
    let MoveOutcome::Started(render) = widget.slider.move_slide(step) else {
        return;
    };
    widget.apply(render);
    let delay = widget.slider.speed();
    widget.settle = Some(Timeout::new(delay, move || {
        if let Some(shared) = weak.upgrade() {
            settle(&shared);
        }
    }));
}

fn settle(shared: &Shared) {
    let mut widget = shared.borrow_mut();
    if let Some(render) = widget.slider.settle() {
        widget.apply(render);
    }
}

fn jump_to_page(shared: &Shared, page: usize) {
    let mut widget = shared.borrow_mut();
    if widget.disposed {
        return;
    }
    if let Some(render) = widget.slider.jump_to_page(page) {
        widget.apply(render);
    }
}

fn start_autoplay(shared: &Shared) {
    let arm = autoplay_arm(shared);
    let mut widget = shared.borrow_mut();
    if !widget.disposed {
        widget.autoplay.start(arm);
    }
}

fn pause_autoplay(shared: &Shared) {
    let stopped = shared.borrow_mut().autoplay.pointer_enter();
    drop(stopped);
}

fn resume_autoplay(shared: &Shared) {
    let arm = autoplay_arm(shared);
    let mut widget = shared.borrow_mut();
    if !widget.disposed {
        widget.autoplay.pointer_leave(arm);
    }
}

fn autoplay_arm(shared: &Shared) -> impl FnOnce() -> Interval + 'static {
    let weak = Rc::downgrade(shared);
    let (timeout, step) = {
        let widget = shared.borrow();
        (widget.autoplay_timeout, widget.step)
    };
    move || {
        Interval::new(timeout, move || {
            if let Some(shared) = weak.upgrade() {
                move_slide(&shared, step);
            }
        })
    }
}

fn listen(
    target: &Element,
    event: &'static str,
    shared: &Shared,
    action: impl Fn(&Shared) + 'static,
) -> EventListener {
    let weak: Weak<RefCell<Widget>> = Rc::downgrade(shared);
    EventListener::new(target, event, move |_event| {
        if let Some(shared) = weak.upgrade() {
            action(&shared);
        }
    })
}

fn resolve_control(
    document: &Document,
    selector: Option<&str>,
) -> Result<Option<Element>, SlidezyError> {
    let Some(selector) = selector else {
        return Ok(None);
    };
    query(document, selector)?
        .map(Some)
        .ok_or_else(|| SlidezyError::ControlNotFound {
            selector: selector.to_string(),
        })
}

fn control(
    document: &Document,
    content: &Element,
    external: Option<Element>,
    label: &str,
    class: &str,
) -> Result<Element, SlidezyError> {
    if let Some(element) = external {
        return Ok(element);
    }
    let button = create(document, "button", class)?;
    button.set_text_content(Some(label));
    append(content, &button)?;
    Ok(button)
}

fn panel_for(originals: &[Element], source: PanelSource) -> Result<Element, SlidezyError> {
    let original = originals
        .get(source.source())
        .ok_or_else(|| dom_error("panel lookup", &JsValue::NULL))?;
    match source {
        PanelSource::Real(_) => Ok(original.clone()),
        PanelSource::Clone(_) => original
            .clone_node_with_deep(true)
            .map_err(|err| dom_error("clone panel", &err))?
            .dyn_into::<Element>()
            .map_err(|_| dom_error("clone cast", &JsValue::NULL)),
    }
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, SlidezyError> {
    document
        .query_selector(selector)
        .map_err(|_| SlidezyError::InvalidSelector {
            selector: selector.to_string(),
        })
}

fn children(container: &Element) -> Vec<Element> {
    let collection = container.children();
    (0..collection.length())
        .filter_map(|idx| collection.item(idx))
        .collect()
}

fn create(document: &Document, tag: &str, class: &str) -> Result<Element, SlidezyError> {
    let element = document
        .create_element(tag)
        .map_err(|err| dom_error("create element", &err))?;
    element.set_class_name(class);
    Ok(element)
}

fn add_class(element: &Element, class: &str) -> Result<(), SlidezyError> {
    element
        .class_list()
        .add_1(class)
        .map_err(|err| dom_error("add class", &err))
}

fn append(parent: &Element, child: &Element) -> Result<(), SlidezyError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|err| dom_error("append child", &err))
}

fn dom_error(operation: &'static str, err: &JsValue) -> SlidezyError {
    SlidezyError::Dom {
        operation,
        detail: format!("{err:?}"),
    }
}
