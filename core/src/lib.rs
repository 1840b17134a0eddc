pub mod contact;
pub mod content;
pub mod counter;
pub mod nav;
pub mod scroll;
pub mod spring;
pub mod theme;
pub mod typing;

pub use contact::{
    contact_endpoint, deliver, normalize_backend_base, ContactError, ContactField, ContactFields,
    ContactForm, ContactRequest, ContactTransport, SubmissionStatus, GENERIC_ERROR_MESSAGE,
    JSON_CONTENT_TYPE, SUCCESS_MESSAGE,
};
pub use counter::{ease_out_cubic, CounterFrame, EasedCounter, COUNTER_DURATION_MS};
pub use nav::{NavItem, CONTACT_SECTION, HERO_SECTION, NAV_ITEMS};
pub use scroll::{ScrollFrame, ScrollMetrics, ScrollTracker, BACK_TO_TOP_THRESHOLD};
pub use spring::{Spring, SpringConfig};
pub use theme::{initial_theme, PreferenceStore, ThemePreference, ThemeRoot, ThemeStore, THEME_KEY};
pub use typing::{Typewriter, TypingPhase, DELETE_DELAY_MS, TYPE_DELAY_MS};
