//! `SeaORM` entity definitions.

pub mod sectors;
pub mod submissions;
