//! Widget configuration model
//!
//! The configuration is owned by the builder window and mutated through three
//! operations: a shallow field merge, an atomic template application, and a
//! single-field visibility toggle. No operation can fail and none touches
//! anything outside the value itself.

use crate::constants::defaults;

/// Content preset selecting which data fields a fresh widget shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetTemplate {
    Dashboard,
    ClientView,
    Timeline,
    Minimal,
}

impl WidgetTemplate {
    pub const ALL: [WidgetTemplate; 4] = [
        Self::Dashboard,
        Self::ClientView,
        Self::Timeline,
        Self::Minimal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::ClientView => "Client View",
            Self::Timeline => "Timeline",
            Self::Minimal => "Minimal",
        }
    }

    /// Parse a user-supplied template name; `None` for unrecognized input
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dashboard" => Some(Self::Dashboard),
            "client view" | "client-view" | "clientview" => Some(Self::ClientView),
            "timeline" => Some(Self::Timeline),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Visible-data preset applied when this template is selected
    pub fn preset(self) -> VisibleData {
        match self {
            Self::Dashboard => VisibleData {
                progress: true,
                next_milestone: true,
                last_update: true,
                ..VisibleData::NONE
            },
            Self::ClientView => VisibleData {
                progress: true,
                next_milestone: true,
                contact: true,
                ..VisibleData::NONE
            },
            Self::Timeline => VisibleData {
                progress: true,
                next_milestone: true,
                last_update: true,
                ..VisibleData::NONE
            },
            Self::Minimal => VisibleData {
                progress: true,
                ..VisibleData::NONE
            },
        }
    }

    /// Whether this template's layout features the progress meter.
    /// Client View leads with milestone and contact instead, so the meter is
    /// never admitted for it even when the progress flag is set.
    pub fn features_progress(self) -> bool {
        !matches!(self, Self::ClientView)
    }
}

/// Color theme of the widget card; cosmetic only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetTheme {
    #[default]
    Cream,
    CoolOcean,
    Sandstorm,
    Midnight,
    Forest,
    Sunset,
}

impl WidgetTheme {
    pub const ALL: [WidgetTheme; 6] = [
        Self::Cream,
        Self::CoolOcean,
        Self::Sandstorm,
        Self::Midnight,
        Self::Forest,
        Self::Sunset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cream => "Cream",
            Self::CoolOcean => "Cool Ocean",
            Self::Sandstorm => "Sandstorm",
            Self::Midnight => "Midnight",
            Self::Forest => "Forest",
            Self::Sunset => "Sunset",
        }
    }

    /// Parse a user-supplied theme name; `None` for unrecognized input
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "cream" => Some(Self::Cream),
            "cool ocean" | "cool-ocean" | "coolocean" => Some(Self::CoolOcean),
            "sandstorm" => Some(Self::Sandstorm),
            "midnight" => Some(Self::Midnight),
            "forest" => Some(Self::Forest),
            "sunset" => Some(Self::Sunset),
            _ => None,
        }
    }
}

/// Addressable key of one visible-data field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataField {
    Progress,
    NextMilestone,
    LastUpdate,
    Chart,
    Gantt,
    List,
    Contact,
    Gallery,
}

impl DataField {
    /// The four fields that compete for display capacity, in priority order
    pub const COUNTABLE: [DataField; 4] = [
        Self::Progress,
        Self::NextMilestone,
        Self::Contact,
        Self::LastUpdate,
    ];

    /// Fields carried by the configuration but never rendered by the status
    /// card layout
    pub const PLACEHOLDER: [DataField; 4] = [Self::Chart, Self::Gantt, Self::List, Self::Gallery];

    pub fn label(self) -> &'static str {
        match self {
            Self::Progress => "Progress",
            Self::NextMilestone => "Next Milestone",
            Self::LastUpdate => "Last Update",
            Self::Chart => "Chart",
            Self::Gantt => "Gantt",
            Self::List => "List",
            Self::Contact => "Contact",
            Self::Gallery => "Gallery",
        }
    }
}

/// Per-field visibility flags
///
/// A fixed-shape record: every recognized field is a named member, so
/// unrecognized keys are unrepresentable. Chart, gantt, list and gallery are
/// carried by the presets but never admitted by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleData {
    pub progress: bool,
    pub next_milestone: bool,
    pub last_update: bool,
    pub chart: bool,
    pub gantt: bool,
    pub list: bool,
    pub contact: bool,
    pub gallery: bool,
}

impl VisibleData {
    pub const NONE: VisibleData = VisibleData {
        progress: false,
        next_milestone: false,
        last_update: false,
        chart: false,
        gantt: false,
        list: false,
        contact: false,
        gallery: false,
    };

    pub fn is_enabled(self, field: DataField) -> bool {
        match field {
            DataField::Progress => self.progress,
            DataField::NextMilestone => self.next_milestone,
            DataField::LastUpdate => self.last_update,
            DataField::Chart => self.chart,
            DataField::Gantt => self.gantt,
            DataField::List => self.list,
            DataField::Contact => self.contact,
            DataField::Gallery => self.gallery,
        }
    }

    pub fn toggle(&mut self, field: DataField) {
        match field {
            DataField::Progress => self.progress = !self.progress,
            DataField::NextMilestone => self.next_milestone = !self.next_milestone,
            DataField::LastUpdate => self.last_update = !self.last_update,
            DataField::Chart => self.chart = !self.chart,
            DataField::Gantt => self.gantt = !self.gantt,
            DataField::List => self.list = !self.list,
            DataField::Contact => self.contact = !self.contact,
            DataField::Gallery => self.gallery = !self.gallery,
        }
    }

    /// Number of enabled countable fields (for the n/4 counter in the panel)
    pub fn countable_enabled(self) -> usize {
        DataField::COUNTABLE
            .iter()
            .filter(|&&field| self.is_enabled(field))
            .count()
    }
}

/// Partial update merged over the current configuration
///
/// `Some` fields replace the corresponding configuration field, `None` fields
/// are preserved. Merging a template this way does not touch `visible_data`;
/// use [`WidgetConfig::set_template`] for the preset swap.
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    pub project_name: Option<String>,
    pub client_name: Option<String>,
    pub template: Option<WidgetTemplate>,
    pub theme: Option<WidgetTheme>,
    pub visible_data: Option<VisibleData>,
}

/// Complete widget configuration as edited in the builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub project_name: String,
    pub client_name: String,
    pub template: WidgetTemplate,
    pub theme: WidgetTheme,
    pub visible_data: VisibleData,
}

impl WidgetConfig {
    /// Shallow-merge the given fields into the configuration
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(project_name) = update.project_name {
            self.project_name = project_name;
        }
        if let Some(client_name) = update.client_name {
            self.client_name = client_name;
        }
        if let Some(template) = update.template {
            self.template = template;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(visible_data) = update.visible_data {
            self.visible_data = visible_data;
        }
    }

    /// Select a template and replace `visible_data` with its preset wholesale,
    /// discarding any individually toggled flags
    pub fn set_template(&mut self, template: WidgetTemplate) {
        self.template = template;
        self.visible_data = template.preset();
    }

    /// Flip exactly one visibility flag; every other field is untouched.
    /// No capacity check happens here: the store may hold more enabled
    /// countable fields than the current size admits, and the resolver trims
    /// the overflow at render time.
    pub fn toggle_visible_data(&mut self, field: DataField) {
        self.visible_data.toggle(field);
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            project_name: defaults::PROJECT_NAME.to_string(),
            client_name: String::new(),
            template: WidgetTemplate::ClientView,
            theme: WidgetTheme::Cream,
            visible_data: WidgetTemplate::ClientView.preset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_client_view_preset() {
        let config = WidgetConfig::default();

        assert_eq!(config.project_name, "Portfolio Website");
        assert_eq!(config.client_name, "");
        assert_eq!(config.template, WidgetTemplate::ClientView);
        assert_eq!(config.theme, WidgetTheme::Cream);
        assert_eq!(config.visible_data, WidgetTemplate::ClientView.preset());
    }

    #[test]
    fn test_apply_merges_only_given_fields() {
        let mut config = WidgetConfig::default();

        config.apply(ConfigUpdate {
            client_name: Some("Acme Corp".to_string()),
            theme: Some(WidgetTheme::Midnight),
            ..ConfigUpdate::default()
        });

        assert_eq!(config.client_name, "Acme Corp");
        assert_eq!(config.theme, WidgetTheme::Midnight);
        // Unspecified fields keep their previous values
        assert_eq!(config.project_name, "Portfolio Website");
        assert_eq!(config.template, WidgetTemplate::ClientView);
        assert_eq!(config.visible_data, WidgetTemplate::ClientView.preset());
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let mut config = WidgetConfig::default();
        let before = config.clone();

        config.apply(ConfigUpdate::default());

        assert_eq!(config, before);
    }

    #[test]
    fn test_apply_replaces_visible_data_record() {
        let mut config = WidgetConfig::default();

        config.apply(ConfigUpdate {
            visible_data: Some(VisibleData::NONE),
            ..ConfigUpdate::default()
        });

        assert_eq!(config.visible_data, VisibleData::NONE);
        assert_eq!(config.template, WidgetTemplate::ClientView);
    }

    #[test]
    fn test_apply_template_alone_keeps_visible_data() {
        let mut config = WidgetConfig::default();

        config.apply(ConfigUpdate {
            template: Some(WidgetTemplate::Minimal),
            ..ConfigUpdate::default()
        });

        // A plain merge changes only the discriminator; the preset swap is
        // reserved for set_template
        assert_eq!(config.template, WidgetTemplate::Minimal);
        assert_eq!(config.visible_data, WidgetTemplate::ClientView.preset());
    }

    #[test]
    fn test_set_template_replaces_visible_data_wholesale() {
        // Default is Client View, which has contact enabled
        let mut config = WidgetConfig::default();
        assert!(config.visible_data.contact);

        config.set_template(WidgetTemplate::Minimal);

        // Exactly the Minimal preset, no merging of the prior contact flag
        assert_eq!(config.template, WidgetTemplate::Minimal);
        assert_eq!(
            config.visible_data,
            VisibleData {
                progress: true,
                ..VisibleData::NONE
            }
        );
    }

    #[test]
    fn test_set_template_overrides_toggled_flags() {
        let mut config = WidgetConfig::default();
        config.toggle_visible_data(DataField::Gallery);
        config.toggle_visible_data(DataField::LastUpdate);

        config.set_template(WidgetTemplate::Dashboard);

        assert_eq!(config.visible_data, WidgetTemplate::Dashboard.preset());
        assert!(!config.visible_data.gallery);
    }

    #[test]
    fn test_toggle_changes_only_addressed_field() {
        let mut config = WidgetConfig::default();
        let before = config.clone();

        config.toggle_visible_data(DataField::Contact);

        assert_eq!(config.visible_data.contact, !before.visible_data.contact);
        assert_eq!(config.project_name, before.project_name);
        assert_eq!(config.client_name, before.client_name);
        assert_eq!(config.template, before.template);
        assert_eq!(config.theme, before.theme);
        assert_eq!(
            config.visible_data.next_milestone,
            before.visible_data.next_milestone
        );
        assert_eq!(config.visible_data.progress, before.visible_data.progress);
        assert_eq!(
            config.visible_data.last_update,
            before.visible_data.last_update
        );
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut config = WidgetConfig::default();
        let before = config.clone();

        config.toggle_visible_data(DataField::NextMilestone);
        config.toggle_visible_data(DataField::NextMilestone);

        assert_eq!(config, before);
    }

    #[test]
    fn test_preset_table() {
        let dashboard = WidgetTemplate::Dashboard.preset();
        assert!(dashboard.progress && dashboard.next_milestone && dashboard.last_update);
        assert!(!dashboard.contact && !dashboard.chart && !dashboard.gallery);

        let client_view = WidgetTemplate::ClientView.preset();
        assert!(client_view.progress && client_view.next_milestone && client_view.contact);
        assert!(!client_view.last_update);

        let minimal = WidgetTemplate::Minimal.preset();
        assert!(minimal.progress);
        assert_eq!(minimal.countable_enabled(), 1);
    }

    #[test]
    fn test_countable_counter_ignores_inert_fields() {
        let mut data = VisibleData::NONE;
        data.toggle(DataField::Chart);
        data.toggle(DataField::Gantt);
        data.toggle(DataField::Progress);

        assert_eq!(data.countable_enabled(), 1);
    }

    #[test]
    fn test_template_from_name() {
        assert_eq!(
            WidgetTemplate::from_name("Client View"),
            Some(WidgetTemplate::ClientView)
        );
        assert_eq!(
            WidgetTemplate::from_name("client-view"),
            Some(WidgetTemplate::ClientView)
        );
        assert_eq!(
            WidgetTemplate::from_name("  minimal "),
            Some(WidgetTemplate::Minimal)
        );
        assert_eq!(WidgetTemplate::from_name("holographic"), None);
    }

    #[test]
    fn test_theme_from_name() {
        assert_eq!(
            WidgetTheme::from_name("cool ocean"),
            Some(WidgetTheme::CoolOcean)
        );
        assert_eq!(WidgetTheme::from_name("SUNSET"), Some(WidgetTheme::Sunset));
        assert_eq!(WidgetTheme::from_name("lavender"), None);
        // Callers fall back to the default on None
        assert_eq!(WidgetTheme::default(), WidgetTheme::Cream);
    }
}
