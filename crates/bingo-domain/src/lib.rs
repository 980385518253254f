//! Shared domain vocabulary for the family bingo event: member roles and the
//! profile attributes derived from them, mission kinds, and the fixed codes
//! the registration and completion flows agree on.

pub mod member;
pub mod mission;
