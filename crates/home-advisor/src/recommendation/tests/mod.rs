mod common;
mod explanation;
mod filter;
