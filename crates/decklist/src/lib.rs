//! Decklist text parsing.
//!
//! Accepts the common export formats ("4 Lightning Bolt", "3x Mountain",
//! Manabox-style "Lightning Bolt (LEA) 161" suffixes) and expands them into
//! an ordered card-name sequence with multiplicity preserved.

mod parser;

pub use parser::{LineEntry, ParsedDecklist, parse_decklist};
