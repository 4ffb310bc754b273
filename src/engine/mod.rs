mod util;

pub mod mana;
pub mod type_line;
pub mod roles;
pub mod card;
pub mod spec;
pub mod pool;
pub mod deck;
pub mod scoring;
pub mod land_base;
pub mod builder;

pub mod prelude;
