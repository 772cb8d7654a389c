//! Route handlers called from `handle_request`.

pub mod domino;
pub mod util;
