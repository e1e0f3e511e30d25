mod all;
mod auth_form;
mod footer;
mod log;
mod main;

use self::log::log;
use super::*;
use footer::footer;
use main::main;

pub use all::all as render;
