pub use crate::engine::{
    mana::*,
    type_line::*,
    roles::*,
    card::*,
    spec::*,
    pool::*,
    deck::*,
    scoring::*,
    land_base::*,
    builder::*,
    util::id::*,
};
