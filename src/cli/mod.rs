pub mod mailto;
pub mod server;
