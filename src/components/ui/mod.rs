mod alert;
mod button;
mod spinner;
mod stat_card;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::Spinner;
pub(crate) use stat_card::StatCard;
