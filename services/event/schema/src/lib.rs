pub mod event_registrations;
pub mod events;
pub mod family_members;
pub mod households;
pub mod mission_completions;
pub mod missions;
