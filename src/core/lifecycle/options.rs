/// User-toggled flags. The view stores and exposes them; what they mean is
/// up to the caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    pub continuous: bool,
    pub post_render: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            continuous: true,
            post_render: false,
        }
    }
}
