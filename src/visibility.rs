//! Size-aware visibility resolution for the widget preview
//!
//! Each widget size admits a limited number of data components:
//! S at most 2, M 3, L 4, XL 5. Countable components are admitted greedily in
//! a fixed priority order: progress, next milestone, contact, last update.
//! The open button is tied to size alone and never counts toward the limit.
//!
//! Resolution is a pure projection of (configuration, size); it is recomputed
//! on every frame and holds no state.

use crate::config::WidgetConfig;

/// Widget size classes selectable in the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl WidgetSize {
    pub const ALL: [WidgetSize; 4] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::ExtraLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }

    /// Parse a user-supplied size name; `None` for unrecognized input
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "s" | "small" => Some(Self::Small),
            "m" | "medium" => Some(Self::Medium),
            "l" | "large" => Some(Self::Large),
            "xl" | "extra large" | "extra-large" => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    /// Maximum number of countable data components this size may display
    pub fn max_components(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large => 4,
            Self::ExtraLarge => 5,
        }
    }

    /// Fixed pixel footprint (width, height) of the widget card
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            Self::Small => (170.0, 170.0),
            Self::Medium => (360.0, 170.0),
            Self::Large => (360.0, 360.0),
            Self::ExtraLarge => (720.0, 360.0),
        }
    }
}

/// Which sub-views the preview card may instantiate
///
/// Derived output only; never stored or mutated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleComponents {
    pub progress: bool,
    pub next_milestone: bool,
    pub contact: bool,
    pub last_update: bool,
    pub open_button: bool,
}

/// Decide which data components are eligible to render for the given
/// configuration and size.
///
/// Admission is greedy and order-sensitive: the highest-priority eligible
/// components that still fit are admitted first-come-first-served, with no
/// attempt to maximize the count.
pub fn resolve_visibility(config: &WidgetConfig, size: WidgetSize) -> VisibleComponents {
    let max_components = size.max_components();
    let data = &config.visible_data;

    let mut visible = VisibleComponents {
        progress: false,
        next_milestone: false,
        contact: false,
        last_update: false,
        // Tied to size alone; never counts toward the limit
        open_button: matches!(size, WidgetSize::Large | WidgetSize::ExtraLarge),
    };

    let mut count = 0;

    // Priority 1: progress, only for templates that feature the meter
    if config.template.features_progress() && data.progress && count < max_components {
        visible.progress = true;
        count += 1;
    }

    // Priority 2: next milestone
    if data.next_milestone && count < max_components {
        visible.next_milestone = true;
        count += 1;
    }

    // Priority 3: contact
    if data.contact && count < max_components {
        visible.contact = true;
        count += 1;
    }

    // Priority 4: last update
    if data.last_update && count < max_components {
        visible.last_update = true;
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{VisibleData, WidgetTemplate};

    // Helper to build a config with the fields the resolver reads
    fn config_with(template: WidgetTemplate, visible_data: VisibleData) -> WidgetConfig {
        WidgetConfig {
            template,
            visible_data,
            ..WidgetConfig::default()
        }
    }

    fn all_countable() -> VisibleData {
        VisibleData {
            progress: true,
            next_milestone: true,
            contact: true,
            last_update: true,
            ..VisibleData::NONE
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        for template in WidgetTemplate::ALL {
            let config = config_with(template, all_countable());
            for size in WidgetSize::ALL {
                let first = resolve_visibility(&config, size);
                let second = resolve_visibility(&config, size);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_capacity_bound_never_exceeded() {
        // All eight flags on, every template and size
        let mut visible_data = all_countable();
        visible_data.chart = true;
        visible_data.gantt = true;
        visible_data.list = true;
        visible_data.gallery = true;

        for template in WidgetTemplate::ALL {
            let config = config_with(template, visible_data);
            for size in WidgetSize::ALL {
                let visible = resolve_visibility(&config, size);
                let shown = [
                    visible.progress,
                    visible.next_milestone,
                    visible.contact,
                    visible.last_update,
                ]
                .iter()
                .filter(|&&on| on)
                .count();
                assert!(
                    shown <= size.max_components(),
                    "size {} shows {} components, limit {}",
                    size.label(),
                    shown,
                    size.max_components()
                );
            }
        }
    }

    #[test]
    fn test_small_admits_top_two_by_priority() {
        let config = config_with(WidgetTemplate::Dashboard, all_countable());

        let visible = resolve_visibility(&config, WidgetSize::Small);

        // Capacity 2: progress and milestone win, contact and last update lose
        assert!(visible.progress);
        assert!(visible.next_milestone);
        assert!(!visible.contact);
        assert!(!visible.last_update);
        assert!(!visible.open_button);
    }

    #[test]
    fn test_medium_exhausts_capacity_in_priority_order() {
        let config = config_with(WidgetTemplate::Dashboard, all_countable());

        let visible = resolve_visibility(&config, WidgetSize::Medium);

        // Capacity 3, exhausted after the first three in priority order
        assert!(visible.progress);
        assert!(visible.next_milestone);
        assert!(visible.contact);
        assert!(!visible.last_update);
        assert!(!visible.open_button);
    }

    #[test]
    fn test_xl_with_progress_not_featured() {
        // Client View never features the progress meter, so the flag being
        // set does not make it eligible
        let config = config_with(WidgetTemplate::ClientView, all_countable());

        let visible = resolve_visibility(&config, WidgetSize::ExtraLarge);

        assert!(!visible.progress);
        assert!(visible.next_milestone);
        assert!(visible.contact);
        assert!(visible.last_update);
        assert!(visible.open_button);
    }

    #[test]
    fn test_progress_gate_per_template() {
        let visible_data = VisibleData {
            progress: true,
            ..VisibleData::NONE
        };

        for template in WidgetTemplate::ALL {
            let config = config_with(template, visible_data);
            let visible = resolve_visibility(&config, WidgetSize::Large);
            assert_eq!(visible.progress, template.features_progress());
        }
    }

    #[test]
    fn test_open_button_tracks_size_only() {
        // No data fields enabled at all
        let empty = config_with(WidgetTemplate::Dashboard, VisibleData::NONE);
        assert!(!resolve_visibility(&empty, WidgetSize::Small).open_button);
        assert!(!resolve_visibility(&empty, WidgetSize::Medium).open_button);
        assert!(resolve_visibility(&empty, WidgetSize::Large).open_button);
        assert!(resolve_visibility(&empty, WidgetSize::ExtraLarge).open_button);

        // All fields enabled: the open button does not consume capacity, so
        // Large still shows all four countable components alongside it
        let full = config_with(WidgetTemplate::Dashboard, all_countable());
        let visible = resolve_visibility(&full, WidgetSize::Large);
        assert!(visible.progress);
        assert!(visible.next_milestone);
        assert!(visible.contact);
        assert!(visible.last_update);
        assert!(visible.open_button);
    }

    #[test]
    fn test_fewer_eligible_than_capacity() {
        // Minimal preset enables progress only; Large has room for four
        let config = config_with(WidgetTemplate::Minimal, WidgetTemplate::Minimal.preset());

        let visible = resolve_visibility(&config, WidgetSize::Large);

        assert!(visible.progress);
        assert!(!visible.next_milestone);
        assert!(!visible.contact);
        assert!(!visible.last_update);
    }

    #[test]
    fn test_inert_fields_never_surface() {
        let visible_data = VisibleData {
            chart: true,
            gantt: true,
            list: true,
            gallery: true,
            ..VisibleData::NONE
        };
        let config = config_with(WidgetTemplate::Dashboard, visible_data);

        for size in WidgetSize::ALL {
            let visible = resolve_visibility(&config, size);
            assert!(!visible.progress);
            assert!(!visible.next_milestone);
            assert!(!visible.contact);
            assert!(!visible.last_update);
        }
    }

    #[test]
    fn test_capacity_and_footprint_tables() {
        assert_eq!(WidgetSize::Small.max_components(), 2);
        assert_eq!(WidgetSize::Medium.max_components(), 3);
        assert_eq!(WidgetSize::Large.max_components(), 4);
        assert_eq!(WidgetSize::ExtraLarge.max_components(), 5);

        assert_eq!(WidgetSize::Small.dimensions(), (170.0, 170.0));
        assert_eq!(WidgetSize::Medium.dimensions(), (360.0, 170.0));
        assert_eq!(WidgetSize::Large.dimensions(), (360.0, 360.0));
        assert_eq!(WidgetSize::ExtraLarge.dimensions(), (720.0, 360.0));
    }

    #[test]
    fn test_size_from_name() {
        assert_eq!(WidgetSize::from_name("XL"), Some(WidgetSize::ExtraLarge));
        assert_eq!(WidgetSize::from_name("medium"), Some(WidgetSize::Medium));
        assert_eq!(WidgetSize::from_name("gigantic"), None);
        // Callers fall back to the default on None
        assert_eq!(WidgetSize::default(), WidgetSize::Small);
    }
}
