
use drydock_test_utils::prelude::*;

use crate::server::{error::profile::ResolutionError, service::profile::ProfileService};
