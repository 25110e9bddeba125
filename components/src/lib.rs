mod loading_modal;
mod spinner;
mod stat_card;
mod status_alert;

pub use loading_modal::LoadingModal;
pub use spinner::Spinner;
pub use stat_card::StatCard;
pub use status_alert::StatusAlert;
