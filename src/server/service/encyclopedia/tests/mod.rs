mod battle_types;

use drydock_test_utils::prelude::*;

use crate::server::{error::Error, service::encyclopedia::EncyclopediaService};
