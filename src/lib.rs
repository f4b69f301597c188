#[macro_use]
extern crate lazy_static;

pub mod client;
pub mod consts;
pub mod errors;
pub mod models;
pub mod routes;
pub mod validate;

pub use postman::{File, HttpTransport, Request, RequestBody, Transport};

pub use crate::{client::Client, errors::Error};
