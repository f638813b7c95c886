use cfg_if::cfg_if;
use icondata as i;
#[cfg(feature = "csr")]
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::global_state::toasts::{use_toast, Toast, ToastLevel, ToasterPosition, Toasts};

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "bg-white border-black/10 text-gray-800",
        ToastLevel::Success => "bg-green-500/10 border-green-500/20 text-green-600",
        ToastLevel::Warning => "bg-yellow-500/10 border-yellow-500/20 text-yellow-600",
        ToastLevel::Error => "bg-red-500/10 border-red-500/20 text-red-600",
    }
}

#[component]
pub fn ToastItem(toast: Toast, toasts: Toasts, position: ToasterPosition) -> impl IntoView {
    let (is_exiting, set_is_exiting) = signal(false);

    let base_class = format!(
        "flex items-center gap-3 w-full max-w-sm p-4 rounded-lg shadow-lg border text-sm animate-in {} fade-in duration-300",
        position.enter_class()
    );
    let color_class = level_class(toast.level);

    let icon = match toast.level {
        ToastLevel::Info => i::BsInfoCircle,
        ToastLevel::Success => i::BsCheckCircle,
        ToastLevel::Warning => i::BsExclamationTriangle,
        ToastLevel::Error => i::BsExclamationCircle,
    };

    let exit_class = move || {
        if is_exiting.get() {
            "animate-out fade-out duration-300"
        } else {
            ""
        }
    };

    let message = toast.message.clone();
    let id = toast.id;

    view! {
        <div
            class=move || format!("{} {} {}", base_class, color_class, exit_class())
            role="alert"
        >
            <Icon icon width="1.2em" height="1.2em" />
            <div class="flex-1">{message}</div>
            <button
                class="opacity-70 hover:opacity-100 transition-opacity"
                aria-label="Close"
                on:click=move |_| {
                    set_is_exiting.set(true);
                    cfg_if! {
                        if #[cfg(feature = "csr")] {
                            set_timeout(move || {
                                toasts.remove(id);
                            }, std::time::Duration::from_millis(300));
                        } else {
                            toasts.remove(id);
                        }
                    }
                }
            >
                <Icon icon=i::BsX width="1.2em" height="1.2em" />
            </button>
        </div>
    }
}

/// Renders every live toast at the position the toaster was configured with.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast()
        .inspect_err(|e| log::warn!("toaster mounted without toasts: {e}"))
        .ok();

    toasts.map(|toasts| {
        let position = toasts.options.position;
        view! {
            <div class=format!(
                "fixed z-[100] flex flex-col gap-2 p-4 sm:p-6 pointer-events-none {}",
                position.container_class(),
            )>
                <div class="flex flex-col gap-2 pointer-events-auto">
                    <For
                        each=move || toasts.visible()
                        key=|toast| toast.id
                        children=move |toast| view! { <ToastItem toast toasts position /> }
                    />
                </div>
            </div>
        }
    })
}
