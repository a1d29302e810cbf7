//! Application-wide constants
//!
//! Sample card content and default values shared between the configuration
//! model and the preview, providing a single source of truth.

/// Sample data rendered on the preview card
pub mod sample {
    /// Progress shown by the meter, in percent
    pub const PROGRESS_PERCENT: u8 = 75;

    /// Status pill text in the card header
    pub const STATUS_LABEL: &str = "In Progress";

    /// Upcoming milestone name
    pub const NEXT_MILESTONE_TITLE: &str = "Usability Testing";

    /// Upcoming milestone due date
    pub const NEXT_MILESTONE_DATE: &str = "Oct 31, 2025";

    /// Relative age shown in the last-update footer
    pub const LAST_UPDATE_AGE: &str = "2 hours ago";

    /// Caption of the open button shown in large sizes
    pub const OPEN_BUTTON_LABEL: &str = "Open Notion";
}

/// Configuration defaults
pub mod defaults {
    /// Project name a fresh configuration starts with
    pub const PROJECT_NAME: &str = "Portfolio Website";
}

/// Demo content for decorative affordances
pub mod projects {
    /// Projects offered by the Select Project dropdown
    pub const DEMO_PROJECTS: [&str; 3] = [
        "Portfolio Website",
        "Q3 Marketing Campaign",
        "Mobile App Redesign",
    ];
}
