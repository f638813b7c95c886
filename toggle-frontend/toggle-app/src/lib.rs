pub mod components;
pub mod error;
pub mod global_state;

use leptos::prelude::*;

use crate::components::slide_toggle::SlideToggle;
use crate::components::toast::ToastContainer;
use crate::global_state::query_client::{provide_query_client, QueryClient, QueryKey};
use crate::global_state::toasts::{provide_toast_context, ToasterOptions, Toasts};
use crate::global_state::toggle::{provide_toggle_state, ToggleState};

/// Everything the shell provides to the rest of the view tree.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    pub query_client: QueryClient,
    pub toasts: Toasts,
    pub toggle: ToggleState,
}

pub fn provide_app_context() -> AppContext {
    AppContext {
        query_client: provide_query_client(QueryClient::new()),
        toasts: provide_toast_context(ToasterOptions::default()),
        toggle: provide_toggle_state(false),
    }
}

pub fn toggle_preference_key() -> QueryKey {
    QueryKey::from(["preferences", "slide-toggle"])
}

/// Stores the choice in the query cache and tells the user about it.
pub fn record_toggle(context: &AppContext, toggled: bool) {
    match context
        .query_client
        .set_query_data(toggle_preference_key(), &toggled)
    {
        Ok(()) if toggled => {
            context.toasts.success("Switched on");
        }
        Ok(()) => {
            context.toasts.info("Switched off");
        }
        Err(e) => {
            log::error!("failed to cache toggle preference: {e}");
            context.toasts.error(e.to_string());
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let context = provide_app_context();

    view! {
        <ToastContainer />
        <main class="flex min-h-screen items-center justify-center bg-neutral-100">
            <div class="flex flex-col items-center gap-6">
                <SlideToggle
                    on_label="On"
                    off_label="Off"
                    on_toggle=move |toggled: bool| record_toggle(&context, toggled)
                />
                <SlideToggle />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::slide_toggle::{flip, ToggleStore};
    use crate::global_state::toasts::ToastLevel;
    use crate::global_state::toggle::use_toggle_state;
    use leptos::reactive::owner::Owner;

    #[test]
    fn shell_provides_every_collaborator() {
        let owner = Owner::new();
        owner.with(|| {
            let context = provide_app_context();
            assert!(!use_toggle_state().is_toggled());
            assert!(context.query_client.is_empty());
            assert!(context.toasts.visible().is_empty());
        });
    }

    #[test]
    fn flipping_records_and_notifies() {
        let owner = Owner::new();
        owner.with(|| {
            let context = provide_app_context();
            flip(&context.toggle, |toggled| record_toggle(&context, toggled));

            assert_eq!(
                context
                    .query_client
                    .get_query_data::<bool>(toggle_preference_key())
                    .unwrap(),
                Some(true)
            );
            let shown = context.toasts.visible();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].level, ToastLevel::Success);

            flip(&context.toggle, |toggled| record_toggle(&context, toggled));
            assert_eq!(
                context
                    .query_client
                    .get_query_data::<bool>(toggle_preference_key())
                    .unwrap(),
                Some(false)
            );
            assert_eq!(context.toasts.visible()[0].message, "Switched off");
        });
    }
}
