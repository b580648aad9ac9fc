#[derive(Debug, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    payload: Vec<u8>,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup) -> Self {
        Self { name, group, payload: payload(group.payload_len()) }
    }

    pub fn small(name: &'static str) -> Self {
        Self::new(name, TestGroup::Small)
    }

    pub fn normal(name: &'static str) -> Self {
        Self::new(name, TestGroup::Normal)
    }

    pub fn large(name: &'static str) -> Self {
        Self::new(name, TestGroup::Large)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload in its encoded form.
    pub fn encoded(&self) -> String {
        base_uwu::encode(&self.payload).expect("bench payload should encode")
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub fn payload_len(self) -> usize {
        match self {
            TestGroup::Small => 64,
            TestGroup::Normal => 4 * 1024,
            TestGroup::Large => 1024 * 1024,
        }
    }
}

/// Deterministic bytes covering every value, so both tokens show up.
#[allow(clippy::cast_possible_truncation, reason = "values are reduced modulo 251")]
fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(31) % 251) as u8).collect()
}
