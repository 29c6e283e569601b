//! tabnav library exports: the navigation core and the terminal host.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
