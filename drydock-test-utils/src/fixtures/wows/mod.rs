use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn wows<'a>(&'a mut self) -> WowsFixtures<'a> {
        WowsFixtures { setup: self }
    }
}

pub struct WowsFixtures<'a> {
    pub setup: &'a mut TestContext,
}
