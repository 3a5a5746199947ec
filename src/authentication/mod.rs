mod client;

pub use client::{AccessToken, AuthClient, AuthError, Credentials};
