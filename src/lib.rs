mod printer;
pub use printer::{print, print_stdout};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Options {
    /// written after every element, including the last one
    pub separator: char,
    /// written once, after all of the elements
    pub terminator: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            separator: ' ',
            terminator: '\n',
        }
    }
}
