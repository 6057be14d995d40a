pub mod api;
pub mod ui;
pub mod whatsapp;

#[cfg(test)]
pub(crate) mod testing;
