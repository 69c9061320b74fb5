//! Auto-advancing image carousel attached to annotated assistant messages.
//!
//! The state machine here is pure; the Dioxus component in `views::chat` owns
//! the wall-clock timer and feeds `tick` into it. Each mounted carousel gets
//! its own state and its own timer.

use crate::types::SideContentKind;
use std::time::Duration;

/// Wall-clock interval between automatic advances.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselItem {
    pub source: &'static str,
    pub caption: &'static str,
}

const SERVICE_DECK: &[CarouselItem] = &[
    CarouselItem {
        source: "/assets/carousel/service_assistant.png",
        caption: "Chat assistant embedded on your site",
    },
    CarouselItem {
        source: "/assets/carousel/service_automation.png",
        caption: "Workflow automation for routine requests",
    },
    CarouselItem {
        source: "/assets/carousel/service_handoff.png",
        caption: "Seamless handoff to a human operator",
    },
    CarouselItem {
        source: "/assets/carousel/service_insights.png",
        caption: "Conversation insights dashboard",
    },
];

const CASE_DECK: &[CarouselItem] = &[
    CarouselItem {
        source: "/assets/carousel/case_retail.png",
        caption: "Retail: 40% of inquiries resolved automatically",
    },
    CarouselItem {
        source: "/assets/carousel/case_realestate.png",
        caption: "Real estate: viewing bookings around the clock",
    },
    CarouselItem {
        source: "/assets/carousel/case_restaurant.png",
        caption: "Restaurants: reservations handled in chat",
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    items: &'static [CarouselItem],
    active_index: usize,
}

impl CarouselState {
    /// Fresh state over the fixed deck for the given side-content kind.
    pub fn for_kind(kind: SideContentKind) -> Self {
        let items = match kind {
            SideContentKind::Service => SERVICE_DECK,
            SideContentKind::Case => CASE_DECK,
        };
        Self {
            items,
            active_index: 0,
        }
    }

    pub fn items(&self) -> &'static [CarouselItem] {
        self.items
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_item(&self) -> &CarouselItem {
        &self.items[self.active_index]
    }

    /// Advance to the next item, wrapping at the end of the deck.
    pub fn tick(&mut self) {
        self.active_index = (self.active_index + 1) % self.items.len();
    }

    /// Explicit jump. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.active_index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decks_are_non_empty() {
        assert!(!CarouselState::for_kind(SideContentKind::Service)
            .items()
            .is_empty());
        assert!(!CarouselState::for_kind(SideContentKind::Case)
            .items()
            .is_empty());
    }

    #[test]
    fn test_tick_wraps_after_full_cycle() {
        for kind in [SideContentKind::Service, SideContentKind::Case] {
            let mut state = CarouselState::for_kind(kind);
            let start = state.active_index();
            for _ in 0..state.items().len() {
                state.tick();
            }
            assert_eq!(state.active_index(), start);
        }
    }

    #[test]
    fn test_tick_advances_by_one() {
        let mut state = CarouselState::for_kind(SideContentKind::Service);
        state.tick();
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_select_jumps_and_is_idempotent() {
        let mut state = CarouselState::for_kind(SideContentKind::Service);
        state.select(2);
        assert_eq!(state.active_index(), 2);
        state.select(2);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = CarouselState::for_kind(SideContentKind::Case);
        state.select(1);
        state.select(99);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_active_item_tracks_index() {
        let mut state = CarouselState::for_kind(SideContentKind::Case);
        state.tick();
        assert_eq!(*state.active_item(), state.items()[1]);
    }
}
