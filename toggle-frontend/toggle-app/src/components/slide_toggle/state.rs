//! The deterministic part of the slide toggle: which side is current, how the
//! switch looks on each side and which label belongs where. Everything here is
//! a pure function of the toggled flag.

/// Read/write access to the externally owned toggled flag.
pub trait ToggleStore {
    fn is_toggled(&self) -> bool;
    fn set_is_toggled(&self, next: bool);
}

/// Requests a single flip of `store` and reports the new value to `on_toggle`.
pub fn flip<S, F>(store: &S, on_toggle: F) -> bool
where
    S: ToggleStore + ?Sized,
    F: FnOnce(bool),
{
    let next = !store.is_toggled();
    store.set_is_toggled(next);
    on_toggle(next);
    next
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleSide {
    Off,
    On,
}

impl ToggleSide {
    pub fn is_on(self) -> bool {
        matches!(self, ToggleSide::On)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToggleSide::Off => "off",
            ToggleSide::On => "on",
        }
    }
}

impl From<bool> for ToggleSide {
    fn from(toggled: bool) -> Self {
        if toggled {
            ToggleSide::On
        } else {
            ToggleSide::Off
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// How the switch is drawn for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualVariant {
    pub fill: &'static str,
    pub thumb_edge: Edge,
    pub justify: &'static str,
}

impl VisualVariant {
    pub fn for_state(toggled: bool) -> Self {
        Self::for_side(toggled.into())
    }

    pub fn for_side(side: ToggleSide) -> Self {
        match side {
            ToggleSide::On => VisualVariant {
                fill: "#905abc",
                thumb_edge: Edge::Right,
                justify: "end",
            },
            ToggleSide::Off => VisualVariant {
                fill: "#ff6b65",
                thumb_edge: Edge::Left,
                justify: "start",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSlot {
    pub side: ToggleSide,
    pub text: String,
}

impl LabelSlot {
    pub fn is_visible(&self, toggled: bool) -> bool {
        self.side.is_on() == toggled
    }

    /// The edge the label slides in from and back out to.
    pub fn origin_edge(&self) -> Edge {
        match self.side {
            ToggleSide::On => Edge::Left,
            ToggleSide::Off => Edge::Right,
        }
    }

    /// Horizontal offset of the label while hidden.
    pub fn offset_px(&self) -> i32 {
        match self.origin_edge() {
            Edge::Left => -20,
            Edge::Right => 20,
        }
    }

    pub fn class(&self) -> &'static str {
        match self.side {
            ToggleSide::On => "absolute left-0 z-10 p-2 pr-[25px]",
            ToggleSide::Off => "absolute right-0 p-2 pl-[25px]",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self.side {
            ToggleSide::On => "text-nowrap text-xs font-medium tracking-tight text-white",
            ToggleSide::Off => {
                "text-nowrap text-xs font-medium tracking-tight fill-black/40 text-black/40"
            }
        }
    }
}

/// Both labels of a switch. Only exists when both strings were supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    on: LabelSlot,
    off: LabelSlot,
}

impl ToggleLabels {
    pub fn new(on_label: Option<String>, off_label: Option<String>) -> Option<Self> {
        match (on_label, off_label) {
            (Some(on), Some(off)) => Some(ToggleLabels {
                on: LabelSlot {
                    side: ToggleSide::On,
                    text: on,
                },
                off: LabelSlot {
                    side: ToggleSide::Off,
                    text: off,
                },
            }),
            _ => None,
        }
    }

    pub fn slot(&self, side: ToggleSide) -> &LabelSlot {
        match side {
            ToggleSide::On => &self.on,
            ToggleSide::Off => &self.off,
        }
    }

    /// Off first so the on label stacks above it.
    pub fn slots(&self) -> [&LabelSlot; 2] {
        [&self.off, &self.on]
    }

    /// Text of the invisible block that keeps the switch as wide as its widest label.
    pub fn spacer(&self) -> [&str; 2] {
        [&self.on.text, &self.off.text]
    }

    /// Width of the widest label, in characters.
    pub fn reserved_chars(&self) -> usize {
        self.spacer()
            .iter()
            .map(|text| text.chars().count())
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingStore {
        value: Cell<bool>,
        writes: RefCell<Vec<bool>>,
    }

    impl RecordingStore {
        fn starting_at(value: bool) -> Self {
            Self {
                value: Cell::new(value),
                writes: RefCell::default(),
            }
        }
    }

    impl ToggleStore for RecordingStore {
        fn is_toggled(&self) -> bool {
            self.value.get()
        }

        fn set_is_toggled(&self, next: bool) {
            self.writes.borrow_mut().push(next);
            self.value.set(next);
        }
    }

    #[test]
    fn flip_writes_once_and_notifies_once() {
        let store = RecordingStore::starting_at(false);
        let mut notified = Vec::new();

        let next = flip(&store, |toggled| notified.push(toggled));
        assert!(next);
        assert_eq!(*store.writes.borrow(), vec![true]);
        assert_eq!(notified, vec![true]);

        let next = flip(&store, |toggled| notified.push(toggled));
        assert!(!next);
        assert_eq!(*store.writes.borrow(), vec![true, false]);
        assert_eq!(notified, vec![true, false]);
    }

    #[test]
    fn flip_without_observer_still_writes() {
        let store = RecordingStore::starting_at(true);
        flip(&store, |_| {});
        assert_eq!(*store.writes.borrow(), vec![false]);
        assert!(!store.is_toggled());
    }

    #[test]
    fn observer_sees_the_store_already_updated() {
        let store = RecordingStore::starting_at(false);
        flip(&store, |toggled| assert_eq!(store.is_toggled(), toggled));
    }

    proptest! {
        #[test]
        fn flip_parity(initial in any::<bool>(), flips in 0usize..64) {
            let store = RecordingStore::starting_at(initial);
            for _ in 0..flips {
                flip(&store, |_| {});
            }
            prop_assert_eq!(store.is_toggled(), initial ^ (flips % 2 == 1));
            prop_assert_eq!(store.writes.borrow().len(), flips);
        }
    }

    #[test]
    fn labels_need_both_strings() {
        assert!(ToggleLabels::new(None, None).is_none());
        assert!(ToggleLabels::new(Some("On".into()), None).is_none());
        assert!(ToggleLabels::new(None, Some("Off".into())).is_none());
        assert!(ToggleLabels::new(Some("On".into()), Some("Off".into())).is_some());
    }

    #[test]
    fn exactly_one_label_is_visible() {
        let labels = ToggleLabels::new(Some("On".into()), Some("Off".into())).unwrap();
        for toggled in [false, true] {
            let visible: Vec<_> = labels
                .slots()
                .into_iter()
                .filter(|slot| slot.is_visible(toggled))
                .collect();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0].side, ToggleSide::from(toggled));
        }
        assert!(labels.slot(ToggleSide::On).is_visible(true));
        assert!(labels.slot(ToggleSide::Off).is_visible(false));
    }

    #[test]
    fn labels_slide_from_their_own_edge() {
        let labels = ToggleLabels::new(Some("On".into()), Some("Off".into())).unwrap();
        let on = labels.slot(ToggleSide::On);
        let off = labels.slot(ToggleSide::Off);
        assert_eq!(on.origin_edge(), Edge::Left);
        assert_eq!(on.offset_px(), -20);
        assert_eq!(off.origin_edge(), Edge::Right);
        assert_eq!(off.offset_px(), 20);
    }

    #[test]
    fn spacer_reserves_the_wider_label() {
        let labels =
            ToggleLabels::new(Some("Enabled".into()), Some("Off".into())).unwrap();
        assert_eq!(labels.spacer(), ["Enabled", "Off"]);
        assert_eq!(labels.reserved_chars(), 7);
    }

    #[test]
    fn variant_follows_the_flag() {
        let on = VisualVariant::for_state(true);
        let off = VisualVariant::for_state(false);
        assert_eq!(on.thumb_edge, Edge::Right);
        assert_eq!(off.thumb_edge, Edge::Left);
        assert_ne!(on.fill, off.fill);
        assert_eq!(VisualVariant::for_side(ToggleSide::On), on);
    }

    #[test]
    fn sides_round_trip_through_bool() {
        assert_eq!(ToggleSide::from(true), ToggleSide::On);
        assert!(!ToggleSide::from(false).is_on());
        assert_eq!(ToggleSide::On.as_str(), "on");
        assert_eq!(Edge::Left.as_str(), "left");
    }
}
