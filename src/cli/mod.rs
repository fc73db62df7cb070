mod routes;
mod send;

pub use routes::print_routes;
pub use send::{Kind, SendArgs, send};
