mod test_utils;

pub use test_utils::TestContextExt;
