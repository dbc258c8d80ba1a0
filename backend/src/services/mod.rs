pub mod admin;
pub mod public;
pub mod store;

#[cfg(test)]
mod tests;
