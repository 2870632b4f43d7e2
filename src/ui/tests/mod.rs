//! UI layer tests
//!
//! Only the Controller is covered here: it carries all the logic the
//! widgets delegate to, and it runs against the in-memory store without
//! a display server.

#[cfg(test)]
mod controller_tests;
