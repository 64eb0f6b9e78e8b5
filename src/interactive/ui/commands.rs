#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    CopyToClipboard(String),
    /// Run each command in order
    Batch(Vec<Command>),
}
