mod integration;
mod session;
