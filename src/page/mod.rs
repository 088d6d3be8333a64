pub mod menu;
pub mod registration;
pub mod reveal;
pub mod scroll;
pub mod sponsors;
pub mod theme;
pub mod timeline;

pub use menu::wire_mobile_menu;
pub use registration::RegistrationForm;
pub use reveal::wire_reveal_on_scroll;
pub use scroll::wire_scroll_tracking;
pub use sponsors::SponsorCarousel;
pub use theme::wire_theme_toggle;
pub use timeline::apply_timeline_status;
