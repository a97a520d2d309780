//! Desktop GUI for Liahona.
//!
//! A macroquad window showing the particle field and the orb. Pointer input
//! becomes session events; the effects the session returns are applied to a
//! [`host::HostView`] that the screens draw from.

pub mod app;
pub mod host;
pub mod input;
pub mod screen;
pub mod theme;
pub mod widget;
