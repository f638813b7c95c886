use cfg_if::cfg_if;
#[cfg(feature = "csr")]
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub duration: Option<u64>,
}

/// Where the toaster sits on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToasterPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToasterPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToasterPosition::TopLeft => "top-left",
            ToasterPosition::TopCenter => "top-center",
            ToasterPosition::TopRight => "top-right",
            ToasterPosition::BottomLeft => "bottom-left",
            ToasterPosition::BottomCenter => "bottom-center",
            ToasterPosition::BottomRight => "bottom-right",
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(
            self,
            ToasterPosition::TopLeft | ToasterPosition::TopCenter | ToasterPosition::TopRight
        )
    }

    pub fn container_class(&self) -> &'static str {
        match self {
            ToasterPosition::TopLeft => "top-0 left-0 items-start",
            ToasterPosition::TopCenter => "top-0 inset-x-0 items-center",
            ToasterPosition::TopRight => "top-0 right-0 items-end",
            ToasterPosition::BottomLeft => "bottom-0 left-0 items-start",
            ToasterPosition::BottomCenter => "bottom-0 inset-x-0 items-center",
            ToasterPosition::BottomRight => "bottom-0 right-0 items-end",
        }
    }

    /// Enter animation direction for toasts at this position.
    pub fn enter_class(&self) -> &'static str {
        if self.is_top() {
            "slide-in-from-top-2"
        } else {
            "slide-in-from-bottom-2"
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToasterOptions {
    pub position: ToasterPosition,
    /// Show the oldest toast first instead of the newest.
    pub reverse_order: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct Toasts {
    toasts: RwSignal<Vec<Toast>>,
    pub options: ToasterOptions,
}

pub fn provide_toast_context(options: ToasterOptions) -> Toasts {
    if let Some(existing) = use_context::<Toasts>() {
        return existing;
    }
    let toasts = Toasts {
        toasts: RwSignal::new(Vec::new()),
        options,
    };
    provide_context(toasts);
    toasts
}

pub fn use_toast() -> AppResult<Toasts> {
    use_context::<Toasts>().ok_or(AppError::MissingContext("Toasts"))
}

impl Toasts {
    /// Shows a toast. With a `duration` it is dismissed after that many
    /// milliseconds; without the `csr` feature no timers run, so it stays
    /// until [`Toasts::remove`] is called.
    pub fn add(&self, message: impl Into<String>, level: ToastLevel, duration: Option<u64>) -> Uuid {
        let id = Uuid::new_v4();
        let toast = Toast {
            id,
            message: message.into(),
            level,
            duration,
        };
        log::debug!("toast {level:?}: {}", toast.message);
        self.toasts.update(|toasts| toasts.push(toast));

        cfg_if! {
            if #[cfg(feature = "csr")] {
                if let Some(duration) = duration {
                    let toasts = *self;
                    set_timeout(
                        move || {
                            toasts.remove(id);
                        },
                        std::time::Duration::from_millis(duration),
                    );
                }
            }
        }
        id
    }

    pub fn remove(&self, id: Uuid) {
        self.toasts.update(|toasts| {
            if let Some(index) = toasts.iter().position(|t| t.id == id) {
                toasts.remove(index);
            }
        });
    }

    /// Toasts in display order, newest first unless `reverse_order` is set.
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.with(|toasts| {
            if self.options.reverse_order {
                toasts.clone()
            } else {
                toasts.iter().rev().cloned().collect()
            }
        })
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Info, Some(3000))
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Success, Some(3000))
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Warning, Some(5000))
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.add(message, ToastLevel::Error, Some(5000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[cfg(not(feature = "csr"))]
    #[test]
    fn timed_toast_stays_without_timers() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = provide_toast_context(ToasterOptions::default());
            let id = toasts.success("saved");
            assert_eq!(toasts.visible()[0].duration, Some(3000));
            assert_eq!(toasts.visible().len(), 1);
            toasts.remove(id);
            assert!(toasts.visible().is_empty());
        });
    }

    #[test]
    fn default_toaster_is_top_center() {
        let options = ToasterOptions::default();
        assert_eq!(options.position.as_str(), "top-center");
        assert!(!options.reverse_order);
        assert!(options.position.is_top());
    }

    #[test]
    fn newest_toast_is_shown_first() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = provide_toast_context(ToasterOptions::default());
            toasts.info("first");
            toasts.warning("second");
            let messages: Vec<_> = toasts.visible().into_iter().map(|t| t.message).collect();
            assert_eq!(messages, vec!["second", "first"]);
        });
    }

    #[test]
    fn reverse_order_keeps_insertion_order() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = provide_toast_context(ToasterOptions {
                position: ToasterPosition::BottomRight,
                reverse_order: true,
            });
            toasts.success("first");
            toasts.error("second");
            let levels: Vec<_> = toasts.visible().into_iter().map(|t| t.level).collect();
            assert_eq!(levels, vec![ToastLevel::Success, ToastLevel::Error]);
        });
    }

    #[test]
    fn remove_drops_only_that_toast() {
        let owner = Owner::new();
        owner.with(|| {
            let toasts = provide_toast_context(ToasterOptions::default());
            let keep = toasts.info("keep");
            let drop = toasts.info("drop");
            toasts.remove(drop);
            let ids: Vec<_> = toasts.visible().into_iter().map(|t| t.id).collect();
            assert_eq!(ids, vec![keep]);
        });
    }

    #[test]
    fn use_toast_without_provider_is_an_error() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_toast().unwrap_err(), AppError::MissingContext("Toasts"));
        });
    }
}
