mod error;
mod handlers;
mod server;

pub mod dto;
pub mod state;


pub use server::{router, start_server};
