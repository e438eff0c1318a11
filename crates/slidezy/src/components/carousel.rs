// `function_component` expands to an undocumented struct.
#![allow(missing_docs)]

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::classes;
use crate::logic::autoplay::AutoplayTimer;
use crate::logic::config::SlidezyOptions;
use crate::logic::layout::PanelSource;
use crate::logic::machine::{MoveOutcome, Slider};
use crate::logic::render::flex_basis_css;

/// Props for [`SlidezyCarousel`].
///
/// Options and the panel count are read when the component mounts; give it a
/// new `key` to rebuild with different ones.
#[derive(Properties, PartialEq)]
pub struct SlidezyCarouselProps {
    /// Slider options.
    #[prop_or_default]
    pub options: SlidezyOptions,
    /// Panels, in order.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes for the wrapper.
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Clone, PartialEq)]
struct CarouselState {
    slider: Slider,
    active: usize,
    moves: u64,
}

enum CarouselAction {
    Move(isize),
    Settle,
    Jump(usize),
}

impl CarouselState {
    fn new(mut slider: Slider) -> Self {
        let active = slider.initial_render().active_page.unwrap_or(0);
        Self {
            slider,
            active,
            moves: 0,
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let render = match action {
            CarouselAction::Move(step) => match next.slider.move_slide(step) {
                MoveOutcome::Started(render) => {
                    next.moves += 1;
                    Some(render)
                }
                MoveOutcome::Ignored => return self,
            },
            CarouselAction::Settle => next.slider.settle(),
            CarouselAction::Jump(page) => next.slider.jump_to_page(page),
        };
        if let Some(page) = render.and_then(|render| render.active_page) {
            next.active = page;
        }
        Rc::new(next)
    }
}

/// Carousel rendering its children as panels, with the same class names as
/// the imperative widget. Each child is wrapped in a `slidezy-slide` div.
#[function_component(SlidezyCarousel)]
pub fn slidezy_carousel(props: &SlidezyCarouselProps) -> Html {
    let options = &props.options;
    let panels: Vec<Html> = props.children.iter().collect();
    let state = use_reducer({
        let real = panels.len();
        let options = options.clone();
        move || CarouselState::new(Slider::new(real, &options))
    });
    let autoplay = use_mut_ref(|| AutoplayTimer::<Interval>::new(options.auto_play_hover_pause));
    let step = options.step();

    {
        let dispatcher = state.dispatcher();
        let speed = state.slider.speed();
        use_effect_with_deps(
            move |(_, animating)| {
                let pending = animating.then(|| {
                    Timeout::new(speed, move || dispatcher.dispatch(CarouselAction::Settle))
                });
                move || drop(pending)
            },
            (state.moves, state.slider.is_animating()),
        );
    }

    let arm = {
        let dispatcher = state.dispatcher();
        let timeout = options.auto_play_timeout;
        Rc::new(move || {
            let dispatcher = dispatcher.clone();
            Interval::new(timeout, move || {
                dispatcher.dispatch(CarouselAction::Move(step));
            })
        })
    };

    {
        let autoplay = autoplay.clone();
        let arm = arm.clone();
        let enabled = options.auto_play;
        use_effect_with_deps(
            move |_| {
                if enabled {
                    autoplay.borrow_mut().start(|| arm());
                }
                move || drop(autoplay.borrow_mut().stop())
            },
            (),
        );
    }

    let onmouseenter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            let stopped = autoplay.borrow_mut().pointer_enter();
            drop(stopped);
        })
    };
    let onmouseleave = {
        let enabled = options.auto_play;
        Callback::from(move |_: MouseEvent| {
            if enabled {
                autoplay.borrow_mut().pointer_leave(|| arm());
            }
        })
    };

    let frame = state.slider.last_frame();
    let track_style = format!(
        "transition: {}; transform: {};",
        frame.transition_css(),
        frame.transform_css()
    );
    let slide_style = format!("flex-basis: {};", flex_basis_css(options.items));

    let controls = options.controls.then(|| {
        let prev = {
            let dispatcher = state.dispatcher();
            let back = step.saturating_neg();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Move(back)))
        };
        let next = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Move(step)))
        };
        html! {
            <>
                <button class={classes::PREV} onclick={prev}>{ options.control_text[0].clone() }</button>
                <button class={classes::NEXT} onclick={next}>{ options.control_text[1].clone() }</button>
            </>
        }
    });

    let dots = (0..state.slider.layout().page_count()).map(|page| {
        let dispatcher = state.dispatcher();
        let onclick =
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Jump(page)));
        html! {
            <button
                class={classes!(classes::DOT, (page == state.active).then_some(classes::ACTIVE))}
                {onclick}
            ></button>
        }
    });

    html! {
        <div
            class={classes!(classes::WRAPPER, props.class.clone())}
            {onmouseenter}
            {onmouseleave}
        >
            <div class={classes::CONTENT}>
                <div class={classes::TRACK} style={track_style}>
                    { for state.slider.layout().panels().map(|source| render_panel(&panels, source, &slide_style)) }
                </div>
                { for controls }
            </div>
            <div class={classes::NAV}>
                { for dots }
            </div>
        </div>
    }
}

fn render_panel(panels: &[Html], source: PanelSource, style: &str) -> Html {
    let content = panels.get(source.source()).cloned().unwrap_or_default();
    html! {
        <div class={classes::SLIDE} style={style.to_string()}>{ content }</div>
    }
}
