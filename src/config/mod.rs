mod r#impl;
mod structs;

pub use r#impl::database_url_from_parts;
pub use structs::*;
