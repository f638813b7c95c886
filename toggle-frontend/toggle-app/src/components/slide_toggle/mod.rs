mod presence;
mod state;

pub use presence::{Phase, Presence, PresenceChange, PresenceEntry, ThumbMotion, TransitionSpec};
pub use state::{flip, Edge, LabelSlot, ToggleLabels, ToggleSide, ToggleStore, VisualVariant};

use cfg_if::cfg_if;
use leptos::callback::{Callable, Callback};
#[cfg(feature = "csr")]
use leptos::leptos_dom::helpers::{request_animation_frame, set_timeout};
use leptos::prelude::*;

use crate::global_state::toggle::use_toggle_state;

const TAP_SCALE: f32 = 0.95;
const THUMB_SIZE: &str = "19px";
const THUMB_SIZE_PRESSED: &str = "25px";

/// Two-state switch bound to the app's [`ToggleState`](crate::global_state::toggle::ToggleState).
///
/// Labels are only rendered when both `on_label` and `off_label` are given.
#[component]
pub fn SlideToggle(
    /// Called with the new value after every flip.
    #[prop(optional, into)]
    on_toggle: Option<Callback<bool>>,
    #[prop(optional, into)] on_label: Option<String>,
    #[prop(optional, into)] off_label: Option<String>,
) -> impl IntoView {
    let toggle = use_toggle_state();
    let initial = ToggleSide::from(toggle.is_toggled());
    let labels = ToggleLabels::new(on_label, off_label);

    let overlays = RwSignal::new(Presence::new(initial));
    let label_presence = RwSignal::new(Presence::new(initial));
    let thumb = RwSignal::new(ThumbMotion::resting_at(initial));
    let (pressed, set_pressed) = signal(false);

    Effect::new(move |_| {
        let side = ToggleSide::from(toggle.get());
        if let Some(change) = overlays.try_update(|presence| presence.show(side)) {
            drive_presence(overlays, change, TransitionSpec::OVERLAY);
        }
        if let Some(change) = label_presence.try_update(|presence| presence.show(side)) {
            drive_presence(label_presence, change, TransitionSpec::LABEL_EXIT);
        }
        if let Some(Some(generation)) = thumb.try_update(|thumb| thumb.move_to(side)) {
            drive_thumb(thumb, generation);
        }
    });

    let on_click = move |_| {
        handle_click(&toggle, on_toggle);
    };

    let label_view = labels.map(|labels| {
        let reserved = labels.reserved_chars();
        let [on_text, off_text] = labels.spacer().map(str::to_string);
        view! {
            <For
                each=move || label_presence.with(|presence| presence.mounted())
                key=|side| *side
                children=move |side| {
                    let slot = labels.slot(side).clone();
                    let class = slot.class();
                    let text_class = slot.text_class();
                    let text = slot.text.clone();
                    let hidden = {
                        let slot = slot.clone();
                        move || (!slot.is_visible(toggle.get())).to_string()
                    };
                    view! {
                        <div
                            class=class
                            aria-hidden=hidden
                            style=move || {
                                label_style(&slot, label_presence.with(|presence| presence.phase_of(side)))
                            }
                        >
                            <span class=text_class>{text}</span>
                        </div>
                    }
                }
            />
            <div
                class="pointer-events-none select-none p-2 pr-[25px] opacity-0"
                style=format!("min-width: {reserved}ch;")
                aria-hidden="true"
            >
                <span class="text-nowrap">{on_text}</span>
                <br />
                <span class="text-nowrap text-transparent">{off_text}</span>
            </div>
        }
    });

    view! {
        <button
            type="button"
            role="switch"
            aria-checked=move || toggle.get().to_string()
            aria-busy=move || {
                let overlays_busy = !overlays.with(|presence| presence.is_settled());
                let thumb_busy = thumb.with(|thumb| thumb.resting_edge().is_none());
                (overlays_busy || thumb_busy).to_string()
            }
            data-state=move || ToggleSide::from(toggle.get()).as_str()
            class="relative flex h-[25px] min-w-[45px] cursor-pointer items-center overflow-hidden rounded-full bg-gray-600/50 outline-offset-2 duration-200 focus-within:outline-red-500/70"
            style=move || button_style(toggle.get(), pressed.get())
            on:click=on_click
            on:pointerdown=move |_| set_pressed.set(true)
            on:pointerup=move |_| set_pressed.set(false)
            on:pointerleave=move |_| set_pressed.set(false)
        >
            <For
                each=move || overlays.with(|presence| presence.mounted())
                key=|side| *side
                children=move |side| {
                    view! {
                        <span
                            class="absolute left-0 flex w-full items-center justify-center rounded-full"
                            style=move || {
                                overlay_style(side, overlays.with(|presence| presence.phase_of(side)))
                            }
                        ></span>
                    }
                }
            />
            <span
                class="absolute z-10 m-[3px] h-[calc(100%-6px)] rounded-full bg-white shadow-lg"
                data-moving=move || thumb.with(|thumb| thumb.resting_edge().is_none()).to_string()
                data-edge=move || thumb.with(|thumb| thumb.target().as_str())
                style=move || thumb_style(thumb.get(), pressed.get())
            ></span>
            {label_view}
        </button>
    }
}

/// Flips the shared flag once and hands the new value to `on_toggle`.
fn handle_click<S>(toggle: &S, on_toggle: Option<Callback<bool>>) -> bool
where
    S: ToggleStore + ?Sized,
{
    let next = flip(toggle, |next| {
        if let Some(on_toggle) = on_toggle {
            on_toggle.run(next);
        }
    });
    log::debug!("slide toggle flipped to {next}");
    next
}

fn drive_presence<K>(presence: RwSignal<Presence<K>>, change: PresenceChange<K>, exit: TransitionSpec)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    cfg_if! {
        if #[cfg(feature = "csr")] {
            if let Some((key, generation)) = change.entered {
                // the entering style has to be painted once before it is replaced
                request_animation_frame(move || {
                    request_animation_frame(move || {
                        presence.update(|presence| {
                            presence.settle(key, generation);
                        });
                    });
                });
            }
            for (key, generation) in change.exited {
                set_timeout(
                    move || {
                        presence.update(|presence| {
                            presence.remove_exited(key, generation);
                        });
                    },
                    exit.total(),
                );
            }
        } else {
            let _ = (change, exit);
            presence.update(Presence::finish_all);
        }
    }
}

fn drive_thumb(thumb: RwSignal<ThumbMotion>, generation: u64) {
    cfg_if! {
        if #[cfg(feature = "csr")] {
            set_timeout(
                move || {
                    thumb.update(|thumb| {
                        thumb.arrive(generation);
                    });
                },
                TransitionSpec::THUMB.total(),
            );
        } else {
            thumb.update(|thumb| {
                thumb.arrive(generation);
            });
        }
    }
}

fn button_style(toggled: bool, pressed: bool) -> String {
    let scale = if pressed { TAP_SCALE } else { 1.0 };
    format!(
        "justify-content: {}; transform: scale({scale});",
        VisualVariant::for_state(toggled).justify
    )
}

fn overlay_style(side: ToggleSide, phase: Option<Phase>) -> String {
    let (offset, height) = match phase {
        Some(Phase::Steady) => ("0%", "300%"),
        _ => ("-100%", "200%"),
    };
    format!(
        "background-color: {}; transform: translateX({offset}); height: {height}; transition: {};",
        VisualVariant::for_side(side).fill,
        TransitionSpec::OVERLAY.css(&["transform", "height"])
    )
}

fn label_style(slot: &LabelSlot, phase: Option<Phase>) -> String {
    let (offset, opacity, transition) = match phase {
        Some(Phase::Steady) => (0, 1, TransitionSpec::LABEL_ENTER),
        Some(Phase::Entering) => (slot.offset_px(), 0, TransitionSpec::LABEL_ENTER),
        Some(Phase::Exiting) | None => (slot.offset_px(), 0, TransitionSpec::LABEL_EXIT),
    };
    format!(
        "transform: translateX({offset}px); opacity: {opacity}; transition: {};",
        transition.css(&["transform", "opacity"])
    )
}

fn thumb_style(thumb: ThumbMotion, pressed: bool) -> String {
    let width = if pressed { THUMB_SIZE_PRESSED } else { THUMB_SIZE };
    let left = match thumb.target() {
        Edge::Left => "0px".to_string(),
        Edge::Right => format!("calc(100% - {width} - 6px)"),
    };
    format!(
        "left: {left}; width: {width}; transition: {};",
        TransitionSpec::THUMB.css(&["left", "width"])
    )
}
